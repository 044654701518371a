/*!
# Index

Bidirectional mapping between arbitrary objects and dense node ids.

The object stored at position `i` of the index has id `i`. Lookups in both
directions are *O(1)*: `id -> object` is a plain slice access and `object -> id`
uses a hash map. Adding an object is *O(1)* amortized; removing one is *O(n)*
since every larger id shifts down by one and the reverse mapping of the shifted
objects is updated.
*/

use std::{borrow::Borrow, hash::Hash, ops::Range};

use fxhash::FxHashMap;
use tracing::trace;

use crate::node::*;

/// Bijection between objects of type `T` and the dense ids `0..n`.
///
/// # Example
/// ```
/// use relgraph::Index;
///
/// let mut index = Index::new();
/// assert_eq!(index.add_object("a"), Some(0));
/// assert_eq!(index.add_object("b"), Some(1));
/// assert_eq!(index.add_object("a"), None);
///
/// assert_eq!(index.remove_object(&"a"), Some(0));
/// assert_eq!(index.object_to_idx(&"b"), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Index<T> {
    objects: Vec<T>,
    ids: FxHashMap<T, Node>,
}

impl<T> Default for Index<T> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            ids: FxHashMap::default(),
        }
    }
}

impl<T> Index<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index with space for `capacity` objects
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            objects: Vec::with_capacity(capacity),
            ids: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Reserves space for at least `additional` more objects
    pub fn reserve(&mut self, additional: usize) {
        self.objects.reserve(additional);
        self.ids.reserve(additional);
    }

    /// Returns *true* if the object has an id
    pub fn contains_object<Q>(&self, obj: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids.contains_key(obj)
    }

    /// Returns the number of indexed objects
    pub fn num_objects(&self) -> NumNodes {
        self.objects.len() as NumNodes
    }

    /// Returns *true* if no object is indexed
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Assigns the next free id to `obj` and returns it.
    /// Returns `None` if the object was already indexed.
    pub fn add_object(&mut self, obj: T) -> Option<Node> {
        if self.ids.contains_key(&obj) {
            return None;
        }

        let id = self.num_objects();
        self.ids.insert(obj.clone(), id);
        self.objects.push(obj);
        Some(id)
    }

    /// Removes `obj` and returns the id it had.
    /// Every object with a larger id moves down by one.
    /// Returns `None` if the object was not indexed.
    pub fn remove_object<Q>(&mut self, obj: &Q) -> Option<Node>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let id = self.ids.remove(obj)?;
        self.objects.remove(id as usize);

        for (shifted, new_id) in self.objects[id as usize..].iter().zip(id..) {
            if let Some(slot) = self.ids.get_mut::<T>(shifted) {
                *slot = new_id;
            }
        }

        trace!(
            id,
            shifted = self.objects.len() - id as usize,
            "removed object from index"
        );
        Some(id)
    }

    /// Returns the id of `obj` if indexed
    pub fn object_to_idx<Q>(&self, obj: &Q) -> Option<Node>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids.get(obj).copied()
    }

    /// Returns the object with id `id` if `id < n`
    pub fn idx_to_object(&self, id: Node) -> Option<&T> {
        self.objects.get(id as usize)
    }

    /// Returns the range of all valid ids
    pub fn all_ids(&self) -> Range<Node> {
        0..self.num_objects()
    }

    /// Returns an iterator over all objects in id order
    pub fn objects(&self) -> std::slice::Iter<'_, T> {
        self.objects.iter()
    }

    /// Returns all objects as a slice in id order
    pub fn as_slice(&self) -> &[T] {
        &self.objects
    }
}

/// Duplicates are skipped, so ids follow the order of first occurrence
impl<T> FromIterator<T> for Index<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut index = Self::with_capacity(iter.size_hint().0);
        for obj in iter {
            index.add_object(obj);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn add_and_lookup() {
        let mut index = Index::new();
        for (i, name) in ["x", "y", "z"].into_iter().enumerate() {
            assert_eq!(index.add_object(name.to_string()), Some(i as Node));
        }

        assert_eq!(index.add_object("y".to_string()), None);
        assert_eq!(index.num_objects(), 3);
        assert!(index.contains_object("z"));
        assert!(!index.contains_object("w"));
        assert_eq!(index.object_to_idx("y"), Some(1));
        assert_eq!(index.idx_to_object(2).map(String::as_str), Some("z"));
        assert_eq!(index.idx_to_object(3), None);
        assert_eq!(index.all_ids(), 0..3);
    }

    #[test]
    fn removal_shifts_larger_ids() {
        let mut index: Index<char> = "abcde".chars().collect();

        assert_eq!(index.remove_object(&'b'), Some(1));
        assert_eq!(index.remove_object(&'b'), None);

        assert_eq!(index.objects().copied().collect_vec(), vec!['a', 'c', 'd', 'e']);
        for (id, obj) in index.objects().enumerate() {
            assert_eq!(index.object_to_idx(obj), Some(id as Node));
        }

        assert_eq!(index.add_object('b'), Some(4));
    }

    #[test]
    fn random_bijection() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for _ in 0..20 {
            let mut index = Index::new();
            let mut reference: Vec<u64> = Vec::new();

            for _ in 0..200 {
                let obj = rng.random_range(0..100u64);
                if rng.random_bool(0.7) {
                    let added = index.add_object(obj);
                    if reference.contains(&obj) {
                        assert_eq!(added, None);
                    } else {
                        assert_eq!(added, Some(reference.len() as Node));
                        reference.push(obj);
                    }
                } else {
                    let removed = index.remove_object(&obj);
                    let expected = reference.iter().position(|&x| x == obj);
                    assert_eq!(removed, expected.map(|p| p as Node));
                    if let Some(p) = expected {
                        reference.remove(p);
                    }
                }

                assert_eq!(index.as_slice(), reference.as_slice());
                for id in index.all_ids() {
                    let obj = index.idx_to_object(id).unwrap();
                    assert_eq!(index.object_to_idx(obj), Some(id));
                }
            }
        }
    }
}
