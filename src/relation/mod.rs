/*!
# Sorted Relations

A [`Relation`] is a sparse bipartite relation between a *first* id space and a
*second* id space. Every pair `(first, second)` is stored twice:

- in `seconds[first]`, the ascending row of second ids related to `first`, and
- in `firsts[second]`, the ascending row of first ids related to `second`.

Both rows are kept sorted, so membership tests are a binary search in *O(log d)*
and insertions/removals shift at most `d` entries, where `d` is the length of the
row involved.

How a row stores its entries is decided by the [`Adjacency`] implementation:
- [`WeightedAdjacency`] stores a value per entry,
- [`UnweightedAdjacency`] only tracks membership and reads report the default
  value of the relation.

[`AutoRelation`] is the special case in which both id spaces coincide (a relation of
one node set with itself) and additionally supports removing a node with compaction
of all larger ids.
*/

mod adjacency;
mod auto;

pub use adjacency::*;
pub use auto::*;

use crate::node::*;

/// Outcome of a binary search in a sorted row.
///
/// Replaces the `Result<usize, usize>` returned by `slice::binary_search` with
/// named variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    /// The id is stored at this position
    Found(usize),
    /// The id is absent and would have to be inserted at this position
    Vacant(usize),
}

impl SearchResult {
    /// Returns the position of a hit or the insertion point of a miss
    pub fn position(self) -> usize {
        match self {
            Self::Found(pos) | Self::Vacant(pos) => pos,
        }
    }

    /// Returns the position if the id was found
    pub fn found(self) -> Option<usize> {
        match self {
            Self::Found(pos) => Some(pos),
            Self::Vacant(_) => None,
        }
    }

    /// Returns *true* if the id was found
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Result<usize, usize>> for SearchResult {
    fn from(value: Result<usize, usize>) -> Self {
        match value {
            Ok(pos) => Self::Found(pos),
            Err(pos) => Self::Vacant(pos),
        }
    }
}

/// Sparse sorted bipartite relation between two id spaces.
///
/// Slots for ids are created one at a time through [`Relation::add_first_item`] and
/// [`Relation::add_second_item`]; the id of a new slot must equal the current number
/// of slots on that axis.
///
/// # Example
/// ```
/// use relgraph::relation::{Relation, WeightedAdjacency};
///
/// let mut rel: Relation<WeightedAdjacency<f64>> = Relation::new(f64::NAN);
/// for id in 0..3 {
///     assert!(rel.add_first_item(id));
///     assert!(rel.add_second_item(id));
/// }
///
/// assert!(rel.add_relation(0, 2, 0.5));
/// assert!(rel.add_relation(0, 1, 1.5));
/// assert!(!rel.add_relation(0, 1, 9.0));
///
/// assert_eq!(rel.seconds_of(0), &[1, 2]);
/// assert_eq!(rel.firsts_of(2), &[0]);
/// assert_eq!(rel.value(0, 2), Some(0.5));
/// assert_eq!(rel.value(2, 0), None);
/// ```
pub struct Relation<A: Adjacency> {
    /// `firsts[second]`: ascending first ids related to `second`
    firsts: Vec<A>,
    /// `seconds[first]`: ascending second ids related to `first`
    seconds: Vec<A>,
    num_pairs: usize,
    default: A::Value,
}

impl<A: Adjacency> Clone for Relation<A> {
    fn clone(&self) -> Self {
        Self {
            firsts: self.firsts.clone(),
            seconds: self.seconds.clone(),
            num_pairs: self.num_pairs,
            default: self.default.clone(),
        }
    }
}

impl<A: Adjacency> Relation<A> {
    /// Creates an empty relation whose rows report `default` if they store no values
    pub fn new(default: A::Value) -> Self {
        Self::with_capacity(0, 0, default)
    }

    /// Creates an empty relation with space for the given number of first/second slots
    pub fn with_capacity(firsts: usize, seconds: usize, default: A::Value) -> Self {
        Self {
            firsts: Vec::with_capacity(seconds),
            seconds: Vec::with_capacity(firsts),
            num_pairs: 0,
            default,
        }
    }

    /// Returns the value reported by rows without stored values
    pub fn default_value(&self) -> &A::Value {
        &self.default
    }

    /// Returns the number of ids in the first id space
    pub fn num_firsts(&self) -> NumNodes {
        self.seconds.len() as NumNodes
    }

    /// Returns the number of ids in the second id space
    pub fn num_seconds(&self) -> NumNodes {
        self.firsts.len() as NumNodes
    }

    /// Returns the number of related pairs
    pub fn num_pairs(&self) -> usize {
        self.num_pairs
    }

    /// Registers `id` in the first id space.
    /// Fails if `id` is not the next sequential id.
    pub fn add_first_item(&mut self, id: Node) -> bool {
        if id as usize != self.seconds.len() {
            return false;
        }
        self.seconds.push(A::default());
        true
    }

    /// Registers `id` in the second id space.
    /// Fails if `id` is not the next sequential id.
    pub fn add_second_item(&mut self, id: Node) -> bool {
        if id as usize != self.firsts.len() {
            return false;
        }
        self.firsts.push(A::default());
        true
    }

    #[inline]
    fn in_bounds(&self, first: Node, second: Node) -> bool {
        (first as usize) < self.seconds.len() && (second as usize) < self.firsts.len()
    }

    /// Relates `first` to `second` with `value`.
    /// Fails if either id is out of bounds or the pair already exists.
    pub fn add_relation(&mut self, first: Node, second: Node, value: A::Value) -> bool {
        if !self.in_bounds(first, second) {
            return false;
        }

        let SearchResult::Vacant(pos) = self.seconds[first as usize].search(second) else {
            return false;
        };
        let back = self.firsts[second as usize].search(first).position();

        self.seconds[first as usize].insert_at(pos, second, value.clone());
        self.firsts[second as usize].insert_at(back, first, value);
        self.num_pairs += 1;
        true
    }

    /// Returns *true* if the pair exists
    pub fn contains_pair(&self, first: Node, second: Node) -> bool {
        self.seconds
            .get(first as usize)
            .is_some_and(|row| row.search(second).is_found())
    }

    /// Returns a reference to the value of the pair or `None` if the pair does not exist
    pub fn value_ref(&self, first: Node, second: Node) -> Option<&A::Value> {
        let row = self.seconds.get(first as usize)?;
        let pos = row.search(second).found()?;
        Some(row.value_at(pos).unwrap_or(&self.default))
    }

    /// Returns the value of the pair or `None` if the pair does not exist
    pub fn value(&self, first: Node, second: Node) -> Option<A::Value> {
        self.value_ref(first, second).cloned()
    }

    /// Replaces the value of an existing pair.
    /// If the pair is missing it is created if `create_if_missing` is set; otherwise nothing happens.
    /// Returns *true* if the pair exists afterwards.
    ///
    /// For rows without stored values this only checks (or establishes) membership.
    pub fn update_pair(
        &mut self,
        first: Node,
        second: Node,
        value: A::Value,
        create_if_missing: bool,
    ) -> bool {
        if !self.in_bounds(first, second) {
            return false;
        }

        match self.seconds[first as usize].search(second) {
            SearchResult::Found(_) => {
                self.modify_pair(first, second, |slot| *slot = value.clone());
                true
            }
            SearchResult::Vacant(_) if create_if_missing => {
                self.add_relation(first, second, value)
            }
            SearchResult::Vacant(_) => false,
        }
    }

    /// Applies `f` to both stored copies of the value of an existing pair.
    /// Returns *false* if the pair does not exist. For rows without stored values
    /// `f` is never called.
    pub fn modify_pair<F>(&mut self, first: Node, second: Node, mut f: F) -> bool
    where
        F: FnMut(&mut A::Value),
    {
        if !self.in_bounds(first, second) {
            return false;
        }

        let row = &mut self.seconds[first as usize];
        let Some(pos) = row.search(second).found() else {
            return false;
        };
        if let Some(slot) = row.value_at_mut(pos) {
            f(slot);
        }

        let back = &mut self.firsts[second as usize];
        if let Some(pos) = back.search(first).found() {
            if let Some(slot) = back.value_at_mut(pos) {
                f(slot);
            }
        }
        true
    }

    /// Removes the pair and returns its value (the default for rows without values).
    /// Returns `None` if the pair does not exist.
    pub fn take_pair(&mut self, first: Node, second: Node) -> Option<A::Value> {
        if !self.in_bounds(first, second) {
            return None;
        }

        let pos = self.seconds[first as usize].search(second).found()?;
        let value = self.seconds[first as usize].remove_at(pos);

        let back = &mut self.firsts[second as usize];
        if let Some(pos) = back.search(first).found() {
            back.remove_at(pos);
        }

        self.num_pairs -= 1;
        Some(value.unwrap_or_else(|| self.default.clone()))
    }

    /// Removes the pair. Returns *false* if it did not exist.
    pub fn remove_pair(&mut self, first: Node, second: Node) -> bool {
        self.take_pair(first, second).is_some()
    }

    /// Returns the ascending second ids related to `first` (empty if out of bounds)
    pub fn seconds_of(&self, first: Node) -> &[Node] {
        self.seconds.get(first as usize).map(|row| row.ids()).unwrap_or_default()
    }

    /// Returns the ascending first ids related to `second` (empty if out of bounds)
    pub fn firsts_of(&self, second: Node) -> &[Node] {
        self.firsts.get(second as usize).map(|row| row.ids()).unwrap_or_default()
    }

    /// Returns the `(second, value)` entries of `first` in ascending order
    pub fn second_entries(&self, first: Node) -> Entries<'_, A::Value> {
        match self.seconds.get(first as usize) {
            Some(row) => row.entries(&self.default),
            None => Entries::empty(&self.default),
        }
    }

    /// Returns the `(first, value)` entries of `second` in ascending order
    pub fn first_entries(&self, second: Node) -> Entries<'_, A::Value> {
        match self.firsts.get(second as usize) {
            Some(row) => row.entries(&self.default),
            None => Entries::empty(&self.default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn relation<A: Adjacency>(n: Node, m: Node, default: A::Value) -> Relation<A> {
        let mut rel = Relation::new(default);
        (0..n).for_each(|id| assert!(rel.add_first_item(id)));
        (0..m).for_each(|id| assert!(rel.add_second_item(id)));
        rel
    }

    #[test]
    fn slots_are_sequential() {
        let mut rel: Relation<UnweightedAdjacency<()>> = Relation::new(());
        assert!(!rel.add_first_item(1));
        assert!(rel.add_first_item(0));
        assert!(!rel.add_first_item(0));
        assert!(rel.add_second_item(0));
        assert!(rel.add_second_item(1));
        assert_eq!(rel.num_firsts(), 1);
        assert_eq!(rel.num_seconds(), 2);
    }

    #[test]
    fn bipartite_pairs() {
        let mut rel: Relation<WeightedAdjacency<f64>> = relation(2, 4, f64::NAN);

        assert!(rel.add_relation(1, 3, 1.0));
        assert!(rel.add_relation(1, 0, 2.0));
        assert!(rel.add_relation(0, 3, 3.0));
        assert!(!rel.add_relation(2, 0, 1.0));
        assert!(!rel.add_relation(0, 4, 1.0));
        assert!(!rel.add_relation(1, 3, 5.0));

        assert_eq!(rel.num_pairs(), 3);
        assert_eq!(rel.seconds_of(1), &[0, 3]);
        assert_eq!(rel.firsts_of(3), &[0, 1]);
        assert_eq!(rel.first_entries(3).collect_vec(), vec![(0, 3.0), (1, 1.0)]);
        assert!(rel.seconds_of(7).is_empty());

        assert!(rel.update_pair(1, 3, 8.0, false));
        assert_eq!(rel.value(1, 3), Some(8.0));
        assert_eq!(rel.first_entries(3).collect_vec(), vec![(0, 3.0), (1, 8.0)]);

        assert!(!rel.update_pair(0, 0, 4.0, false));
        assert!(rel.update_pair(0, 0, 4.0, true));
        assert_eq!(rel.num_pairs(), 4);

        assert_eq!(rel.take_pair(1, 0), Some(2.0));
        assert!(!rel.remove_pair(1, 0));
        assert_eq!(rel.firsts_of(0), &[0]);
        assert_eq!(rel.num_pairs(), 3);
    }

    #[test]
    fn unweighted_reads_default() {
        let mut rel: Relation<UnweightedAdjacency<f64>> = relation(3, 3, 1.0);
        assert!(rel.add_relation(2, 1, 7.0));

        assert_eq!(rel.value(2, 1), Some(1.0));
        assert_eq!(rel.value(1, 2), None);
        assert!(rel.update_pair(2, 1, 3.0, false));
        assert_eq!(rel.value(2, 1), Some(1.0));
        assert_eq!(rel.take_pair(2, 1), Some(1.0));
    }
}
