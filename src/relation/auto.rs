use tracing::trace;

use super::*;

/// A [`Relation`] of one node set with itself.
///
/// A pair `(u, v)` reads as an edge from `u` to `v`: `v` is *adjacent* to `u` and
/// `u` is *incident* to `v`. Both id spaces grow together through
/// [`AutoRelation::add_user`] and shrink together through [`AutoRelation::remove`].
///
/// # Example
/// ```
/// use relgraph::relation::{AutoRelation, UnweightedAdjacency};
///
/// let mut rel: AutoRelation<UnweightedAdjacency<f64>> = AutoRelation::with_nodes(4, 1.0);
/// rel.add(0, 3, 1.0);
/// rel.add(3, 1, 1.0);
///
/// assert!(rel.remove(1));
/// assert_eq!(rel.number_of_nodes(), 3);
/// assert_eq!(rel.adjacent(0), &[2]);
/// assert!(rel.adjacent(2).is_empty());
/// ```
pub struct AutoRelation<A: Adjacency> {
    relation: Relation<A>,
}

impl<A: Adjacency> Clone for AutoRelation<A> {
    fn clone(&self) -> Self {
        Self {
            relation: self.relation.clone(),
        }
    }
}

impl<A: Adjacency> AutoRelation<A> {
    /// Creates an empty relation without nodes
    pub fn new(default: A::Value) -> Self {
        Self {
            relation: Relation::new(default),
        }
    }

    /// Creates a relation with nodes `0..n` and no pairs
    pub fn with_nodes(n: NumNodes, default: A::Value) -> Self {
        let mut rel = Self {
            relation: Relation::with_capacity(n as usize, n as usize, default),
        };
        for u in 0..n {
            rel.add_user(u);
        }
        rel
    }

    /// Read access to the underlying relation
    pub fn as_relation(&self) -> &Relation<A> {
        &self.relation
    }

    /// Returns the number of nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.relation.num_firsts()
    }

    /// Returns the number of stored pairs (a self-loop counts once)
    pub fn num_pairs(&self) -> usize {
        self.relation.num_pairs()
    }

    /// Registers node `id` on both axes.
    /// Fails if `id` is not the next sequential id.
    pub fn add_user(&mut self, id: Node) -> bool {
        if id != self.number_of_nodes() {
            return false;
        }
        self.relation.add_first_item(id) && self.relation.add_second_item(id)
    }

    /// Adds the pair `(u, v)`; see [`Relation::add_relation`]
    pub fn add(&mut self, u: Node, v: Node, value: A::Value) -> bool {
        self.relation.add_relation(u, v, value)
    }

    /// See [`Relation::contains_pair`]
    pub fn contains(&self, u: Node, v: Node) -> bool {
        self.relation.contains_pair(u, v)
    }

    /// See [`Relation::value`]
    pub fn value(&self, u: Node, v: Node) -> Option<A::Value> {
        self.relation.value(u, v)
    }

    /// See [`Relation::value_ref`]
    pub fn value_ref(&self, u: Node, v: Node) -> Option<&A::Value> {
        self.relation.value_ref(u, v)
    }

    /// See [`Relation::update_pair`]
    pub fn update(&mut self, u: Node, v: Node, value: A::Value, create_if_missing: bool) -> bool {
        self.relation.update_pair(u, v, value, create_if_missing)
    }

    /// See [`Relation::modify_pair`]
    pub fn modify<F>(&mut self, u: Node, v: Node, f: F) -> bool
    where
        F: FnMut(&mut A::Value),
    {
        self.relation.modify_pair(u, v, f)
    }

    /// See [`Relation::take_pair`]
    pub fn take(&mut self, u: Node, v: Node) -> Option<A::Value> {
        self.relation.take_pair(u, v)
    }

    /// See [`Relation::remove_pair`]
    pub fn remove_pair(&mut self, u: Node, v: Node) -> bool {
        self.relation.remove_pair(u, v)
    }

    /// Returns the ascending nodes `v` with a pair `(v, u)`
    pub fn incident(&self, u: Node) -> &[Node] {
        self.relation.firsts_of(u)
    }

    /// Returns the ascending nodes `v` with a pair `(u, v)`
    pub fn adjacent(&self, u: Node) -> &[Node] {
        self.relation.seconds_of(u)
    }

    /// Returns the `(v, value)` entries of pairs `(v, u)`
    pub fn incident_entries(&self, u: Node) -> Entries<'_, A::Value> {
        self.relation.first_entries(u)
    }

    /// Returns the `(v, value)` entries of pairs `(u, v)`
    pub fn adjacent_entries(&self, u: Node) -> Entries<'_, A::Value> {
        self.relation.second_entries(u)
    }

    /// Removes node `id` with all its pairs and moves every larger id down by one.
    /// Returns *false* if `id` is out of bounds.
    ///
    /// Must be mirrored by the owner of the ids (e.g. an [`Index`](crate::Index)),
    /// otherwise ids and objects drift apart.
    pub fn remove(&mut self, id: Node) -> bool {
        let rel = &mut self.relation;
        if id as usize >= rel.seconds.len() {
            return false;
        }

        let outgoing = rel.seconds.remove(id as usize);
        let incoming = rel.firsts.remove(id as usize);
        let self_loop = outgoing.search(id).is_found() as usize;
        rel.num_pairs -= outgoing.len() + incoming.len() - self_loop;

        for row in rel.seconds.iter_mut().chain(rel.firsts.iter_mut()) {
            row.compact(id);
        }

        trace!(
            id,
            outgoing = outgoing.len(),
            incoming = incoming.len(),
            "compacted relation"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn add_user_is_sequential() {
        let mut rel: AutoRelation<UnweightedAdjacency<()>> = AutoRelation::new(());
        assert!(rel.add_user(0));
        assert!(!rel.add_user(0));
        assert!(!rel.add_user(2));
        assert!(rel.add_user(1));
        assert_eq!(rel.number_of_nodes(), 2);
    }

    #[test]
    fn remove_renumbers_both_axes() {
        let mut rel: AutoRelation<WeightedAdjacency<f64>> = AutoRelation::with_nodes(5, f64::NAN);
        for (u, v, w) in [(0, 1, 1.0), (0, 3, 2.0), (1, 3, 3.0), (2, 0, 4.0), (2, 4, 5.0), (4, 4, 6.0)] {
            assert!(rel.add(u, v, w));
        }

        assert!(rel.remove(1));
        assert_eq!(rel.number_of_nodes(), 4);
        assert_eq!(rel.num_pairs(), 4);

        // old ids 2, 3, 4 became 1, 2, 3
        assert_eq!(rel.adjacent_entries(0).collect_vec(), vec![(2, 2.0)]);
        assert_eq!(rel.adjacent_entries(1).collect_vec(), vec![(0, 4.0), (3, 5.0)]);
        assert_eq!(rel.incident(2), &[0]);
        assert_eq!(rel.incident(0), &[1]);
        assert_eq!(rel.value(3, 3), Some(6.0));

        assert!(rel.remove(3));
        assert_eq!(rel.num_pairs(), 2);
        assert_eq!(rel.adjacent(1), &[0]);
        assert!(!rel.remove(3));
    }

    #[test]
    fn remove_self_loop_counts_once() {
        let mut rel: AutoRelation<UnweightedAdjacency<()>> = AutoRelation::with_nodes(2, ());
        rel.add(0, 0, ());
        rel.add(0, 1, ());
        rel.add(1, 0, ());

        assert!(rel.remove(0));
        assert_eq!(rel.num_pairs(), 0);
        assert!(rel.adjacent(0).is_empty());
        assert!(rel.incident(0).is_empty());
    }
}
