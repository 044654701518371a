use std::{fmt::Debug, marker::PhantomData, slice::Iter};

use super::*;

/// One sorted row of a [`Relation`]: the ids related to a single node,
/// optionally with one value per entry.
///
/// Implementations must keep `ids()` strictly ascending; all mutating methods
/// receive positions obtained from [`Adjacency::search`] to guarantee this.
pub trait Adjacency: Clone + Default {
    /// Value attached to an entry
    type Value: Clone;

    /// *true* if entries carry their own value; otherwise reads fall back to the
    /// default value of the owning relation
    const STORES_VALUES: bool;

    /// Returns the sorted ids of this row
    fn ids(&self) -> &[Node];

    /// Returns the number of entries
    fn len(&self) -> usize {
        self.ids().len()
    }

    /// Returns *true* if the row has no entries
    fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }

    /// Binary search for `id`
    fn search(&self, id: Node) -> SearchResult {
        self.ids().binary_search(&id).into()
    }

    /// Returns the value stored at `pos` or `None` if entries carry no values
    /// ** Panics if `pos >= len` for storing implementations **
    fn value_at(&self, pos: usize) -> Option<&Self::Value>;

    /// Mutable version of [`Adjacency::value_at`]
    fn value_at_mut(&mut self, pos: usize) -> Option<&mut Self::Value>;

    /// Inserts an entry at `pos`.
    /// ** Panics if `pos > len` **
    fn insert_at(&mut self, pos: usize, id: Node, value: Self::Value);

    /// Removes the entry at `pos` and returns its value (if stored).
    /// ** Panics if `pos >= len` **
    fn remove_at(&mut self, pos: usize) -> Option<Self::Value>;

    /// Drops the entry of `removed` (if present) and decrements every larger id by one.
    /// Since the shift is monotone, the row stays sorted.
    fn compact(&mut self, removed: Node);

    /// Returns an iterator over `(id, value)` using `default` for rows without values
    fn entries<'a>(&'a self, default: &'a Self::Value) -> Entries<'a, Self::Value>;

    /// Removes all entries
    fn clear(&mut self);
}

/// Row storing a value per entry in a parallel array
#[derive(Debug, Clone)]
pub struct WeightedAdjacency<V> {
    ids: Vec<Node>,
    values: Vec<V>,
}

impl<V> Default for WeightedAdjacency<V> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<V: Clone> Adjacency for WeightedAdjacency<V> {
    type Value = V;

    const STORES_VALUES: bool = true;

    fn ids(&self) -> &[Node] {
        &self.ids
    }

    fn value_at(&self, pos: usize) -> Option<&V> {
        Some(&self.values[pos])
    }

    fn value_at_mut(&mut self, pos: usize) -> Option<&mut V> {
        Some(&mut self.values[pos])
    }

    fn insert_at(&mut self, pos: usize, id: Node, value: V) {
        self.ids.insert(pos, id);
        self.values.insert(pos, value);
    }

    fn remove_at(&mut self, pos: usize) -> Option<V> {
        self.ids.remove(pos);
        Some(self.values.remove(pos))
    }

    fn compact(&mut self, removed: Node) {
        let start = match self.search(removed) {
            SearchResult::Found(pos) => {
                self.remove_at(pos);
                pos
            }
            SearchResult::Vacant(pos) => pos,
        };
        self.ids[start..].iter_mut().for_each(|id| *id -= 1);
    }

    fn entries<'a>(&'a self, default: &'a V) -> Entries<'a, V> {
        Entries {
            ids: self.ids.iter(),
            values: Some(self.values.iter()),
            default,
        }
    }

    fn clear(&mut self) {
        self.ids.clear();
        self.values.clear();
    }
}

/// Row tracking structural membership only.
/// Values are synthesized from the default of the owning relation.
pub struct UnweightedAdjacency<V> {
    ids: Vec<Node>,
    _value: PhantomData<fn() -> V>,
}

impl<V> Default for UnweightedAdjacency<V> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            _value: PhantomData,
        }
    }
}

impl<V> Clone for UnweightedAdjacency<V> {
    fn clone(&self) -> Self {
        Self {
            ids: self.ids.clone(),
            _value: PhantomData,
        }
    }
}

impl<V> Debug for UnweightedAdjacency<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("UnweightedAdjacency").field(&self.ids).finish()
    }
}

impl<V: Clone> Adjacency for UnweightedAdjacency<V> {
    type Value = V;

    const STORES_VALUES: bool = false;

    fn ids(&self) -> &[Node] {
        &self.ids
    }

    fn value_at(&self, _pos: usize) -> Option<&V> {
        None
    }

    fn value_at_mut(&mut self, _pos: usize) -> Option<&mut V> {
        None
    }

    fn insert_at(&mut self, pos: usize, id: Node, _value: V) {
        self.ids.insert(pos, id);
    }

    fn remove_at(&mut self, pos: usize) -> Option<V> {
        self.ids.remove(pos);
        None
    }

    fn compact(&mut self, removed: Node) {
        let start = match self.search(removed) {
            SearchResult::Found(pos) => {
                self.ids.remove(pos);
                pos
            }
            SearchResult::Vacant(pos) => pos,
        };
        self.ids[start..].iter_mut().for_each(|id| *id -= 1);
    }

    fn entries<'a>(&'a self, default: &'a V) -> Entries<'a, V> {
        Entries {
            ids: self.ids.iter(),
            values: None,
            default,
        }
    }

    fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Read-only view over the `(id, value)` entries of a row in ascending id order.
///
/// The view borrows the relation, so the relation cannot be mutated while it is consumed.
/// Clones continue from the current position.
#[derive(Debug, Clone)]
pub struct Entries<'a, V> {
    ids: Iter<'a, Node>,
    values: Option<Iter<'a, V>>,
    default: &'a V,
}

impl<'a, V> Entries<'a, V> {
    /// A view without entries
    pub fn empty(default: &'a V) -> Self {
        Self {
            ids: Default::default(),
            values: None,
            default,
        }
    }
}

impl<V: Clone> Iterator for Entries<'_, V> {
    type Item = (Node, V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = *self.ids.next()?;
        let value = match &mut self.values {
            Some(values) => values.next()?.clone(),
            None => self.default.clone(),
        };
        Some((id, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<V: Clone> ExactSizeIterator for Entries<'_, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn fill<A: Adjacency>(row: &mut A, ids: &[Node], value: A::Value) {
        for &id in ids {
            let SearchResult::Vacant(pos) = row.search(id) else {
                panic!("duplicate id {id}");
            };
            row.insert_at(pos, id, value.clone());
        }
    }

    #[test]
    fn weighted_row_stays_sorted() {
        let mut row = WeightedAdjacency::default();
        fill(&mut row, &[5, 1, 3, 9, 0], 2.0);

        assert_eq!(row.ids(), &[0, 1, 3, 5, 9]);
        assert_eq!(row.search(3), SearchResult::Found(2));
        assert_eq!(row.search(4), SearchResult::Vacant(3));

        *row.value_at_mut(2).unwrap() = 7.0;
        assert_eq!(
            row.entries(&0.0).collect_vec(),
            vec![(0, 2.0), (1, 2.0), (3, 7.0), (5, 2.0), (9, 2.0)]
        );
    }

    #[test]
    fn unweighted_row_synthesizes_default() {
        let mut row = UnweightedAdjacency::default();
        fill(&mut row, &[4, 2], 10.0);

        assert_eq!(row.value_at(0), None);
        assert_eq!(row.entries(&1.0).collect_vec(), vec![(2, 1.0), (4, 1.0)]);
    }

    #[test]
    fn compact_renumbers() {
        let mut row = WeightedAdjacency::default();
        fill(&mut row, &[0, 2, 3, 7], 1);

        row.compact(3);
        assert_eq!(row.ids(), &[0, 2, 6]);
        assert_eq!(row.len(), 3);

        row.compact(1);
        assert_eq!(row.ids(), &[0, 1, 5]);

        let mut row = UnweightedAdjacency::<()>::default();
        fill(&mut row, &[1, 4], ());
        row.compact(0);
        assert_eq!(row.ids(), &[0, 3]);
    }
}
