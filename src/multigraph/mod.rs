/*!
# Multigraphs

A [`Multigraph`] pairs an [`Index`] with a [`MultiEdges`] store, which keeps an ordered
list of `(weight, type)` per ordered pair of nodes instead of a single edge.

Neighbourhood queries report distinct neighbours; the parallel edges are available
through [`Multigraph::neighbourhood_edges`] and the per-pair accessors. Operations that
presume a single weight per pair ([`GraphOps::update_edge_weight`] and
[`GraphOps::complement`]) fail with [`GraphError::Unsupported`].
*/

mod edges;

pub use edges::*;

use std::{borrow::Borrow, hash::Hash};

use crate::{edges::NodeIter, error::Result, ops::GraphOps, *};

const VARIANT: &str = "Multigraph";

/// Graph over objects of type `T` permitting parallel edges.
///
/// # Example
/// ```
/// use relgraph::prelude::*;
///
/// let mut g = Multigraph::new(true);
/// g.add_edge(&'a', &'b', 1.0, DEFAULT_TYPE, true);
/// g.add_edge(&'a', &'b', 1.0, DEFAULT_TYPE, true);
///
/// assert_eq!(g.number_of_edges(), 2);
/// assert_eq!(g.num_parallel_edges(&'a', &'b'), 2);
/// assert_eq!(g.edge_weights(&'a', &'b'), vec![1.0, 1.0]);
/// assert!(g.complement().is_err());
/// ```
#[derive(Clone)]
pub struct Multigraph<T> {
    index: Index<T>,
    edges: MultiEdges,
}

impl<T> Multigraph<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates an empty multigraph
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0)
    }

    /// Creates an empty multigraph with space for `capacity` nodes in the index
    pub fn with_capacity(directed: bool, capacity: usize) -> Self {
        Self {
            index: Index::with_capacity(capacity),
            edges: MultiEdges::new(directed, 0),
        }
    }

    /// Returns the edge store; its ids are those of [`GraphOps::index`]
    pub fn edge_store(&self) -> &MultiEdges {
        &self.edges
    }

    /// Returns the number of edges from `origin` to `destination`
    pub fn num_parallel_edges<Q>(&self, origin: &Q, destination: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids(origin, destination)
            .map_or(0, |(u, v)| self.edges.num_parallel_edges(u, v))
    }

    /// Returns the weights of all edges from `origin` to `destination` in insertion order
    pub fn edge_weights<Q>(&self, origin: &Q, destination: &Q) -> Vec<Weight>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids(origin, destination)
            .map(|(u, v)| self.edges.edge_weights(u, v))
            .unwrap_or_default()
    }

    /// Returns the types of all edges from `origin` to `destination` in insertion order
    pub fn edge_types<Q>(&self, origin: &Q, destination: &Q) -> Vec<EdgeType>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids(origin, destination)
            .map(|(u, v)| self.edges.edge_types(u, v))
            .unwrap_or_default()
    }

    /// Removes all edges from `origin` to `destination` and returns how many there were
    pub fn remove_all_edges<Q>(&mut self, origin: &Q, destination: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids(origin, destination)
            .map_or(0, |(u, v)| self.edges.remove_all_edges(u, v))
    }

    /// Returns every neighbour of `obj` with the parallel edges connecting them,
    /// see [`MultiEdges::neighbourhood_edges`]
    pub fn neighbourhood_edges<Q>(
        &self,
        obj: &Q,
        orientation: EdgeOrientation,
    ) -> Vec<(&T, ParallelEdges)>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let Some(u) = self.index.object_to_idx(obj) else {
            return Vec::new();
        };
        self.edges
            .neighbourhood_edges(u, orientation)
            .into_iter()
            .filter_map(|(v, cell)| Some((self.index.idx_to_object(v)?, cell)))
            .collect()
    }

    fn ids<Q>(&self, origin: &Q, destination: &Q) -> Option<(Node, Node)>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        Some((
            self.index.object_to_idx(origin)?,
            self.index.object_to_idx(destination)?,
        ))
    }

    fn insert_node(&mut self, obj: T) -> Option<Node> {
        let id = self.index.add_object(obj)?;
        let added = self.edges.add_user(id);
        debug_assert!(added, "index and edge store out of sync");
        Some(id)
    }
}

impl<T> GraphOps<T> for Multigraph<T>
where
    T: Eq + Hash + Clone,
{
    fn index(&self) -> &Index<T> {
        &self.index
    }

    fn number_of_edges(&self) -> NumEdges {
        self.edges.number_of_edges()
    }

    fn is_directed(&self) -> bool {
        self.edges.is_directed()
    }

    fn is_weighted(&self) -> bool {
        true
    }

    fn add_node(&mut self, obj: T) -> bool {
        self.insert_node(obj).is_some()
    }

    fn remove_node<Q>(&mut self, obj: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index
            .remove_object(obj)
            .is_some_and(|id| self.edges.remove_node(id))
    }

    fn add_edge(
        &mut self,
        origin: &T,
        destination: &T,
        weight: Weight,
        edge_type: EdgeType,
        insert_missing_nodes: bool,
    ) -> bool {
        if !insert_missing_nodes
            && !(self.index.contains_object(origin) && self.index.contains_object(destination))
        {
            return false;
        }

        let ids = (
            self.index
                .object_to_idx(origin)
                .or_else(|| self.insert_node(origin.clone())),
            self.index
                .object_to_idx(destination)
                .or_else(|| self.insert_node(destination.clone())),
        );
        match ids {
            (Some(u), Some(v)) => self.edges.add_edge(u, v, weight, edge_type),
            _ => false,
        }
    }

    /// Removes the most recently added edge from `origin` to `destination`
    fn remove_edge<Q>(&mut self, origin: &Q, destination: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids(origin, destination)
            .is_some_and(|(u, v)| self.edges.remove_edge(u, v))
    }

    fn contains_edge<Q>(&self, origin: &Q, destination: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids(origin, destination)
            .is_some_and(|(u, v)| self.edges.contains_edge(u, v))
    }

    fn update_edge_weight<Q>(&mut self, _origin: &Q, _destination: &Q, _weight: Weight) -> Result<bool>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        Err(GraphError::unsupported("update_edge_weight", VARIANT))
    }

    fn complement(&self) -> Result<Self> {
        Err(GraphError::unsupported("complement", VARIANT))
    }

    fn neighbour_ids(&self, u: Node, orientation: EdgeOrientation) -> NodeIter<'_> {
        self.edges.neighbourhood(u, orientation)
    }

    fn degree_of(&self, u: Node, orientation: EdgeOrientation) -> NumNodes {
        self.edges.degree(u, orientation)
    }

    fn edge_counts_of(&self, u: Node, orientation: EdgeOrientation) -> Vec<(Node, NumEdges)> {
        self.edges.edge_counts_of(u, orientation)
    }

    fn edges<'a>(&'a self) -> impl Iterator<Item = (&'a T, &'a T, Weight, EdgeType)> + 'a
    where
        T: 'a,
    {
        self.edges.edges().filter_map(move |(Edge(u, v), w, t)| {
            Some((
                self.index.idx_to_object(u)?,
                self.index.idx_to_object(v)?,
                w,
                t,
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use ndarray::array;

    #[test]
    fn object_level_parallel_edges() {
        let mut g: Multigraph<String> = Multigraph::new(true);
        let (a, b) = ("a".to_string(), "b".to_string());

        assert!(!g.add_edge(&a, &b, 1.0, 0, false));
        assert!(g.add_edge(&a, &b, 1.0, 0, true));
        assert!(g.add_edge(&a, &b, 2.0, 5, false));
        assert!(g.add_edge(&b, &a, 4.0, 6, false));

        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.num_parallel_edges("a", "b"), 2);
        assert_eq!(g.edge_types("a", "b"), vec![0, 5]);
        assert_eq!(g.edge_weights("b", "a"), vec![4.0]);
        assert!(g.edge_weights("a", "zzz").is_empty());
        assert_eq!(g.neighbourhood("a", EdgeOrientation::Mutual).collect_vec(), vec!["b"]);
        assert_eq!(g.degree("a", EdgeOrientation::Und), 1);

        let edges = g.neighbourhood_edges("a", EdgeOrientation::Und);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].1.as_slice(), &[(4.0, 6), (1.0, 0), (2.0, 5)]);

        assert!(g.remove_edge("a", "b"));
        assert_eq!(g.edge_weights("a", "b"), vec![1.0]);
        assert_eq!(g.remove_all_edges("a", "b"), 1);
        assert!(!g.contains_edge("a", "b"));
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn unsupported_capabilities() {
        let mut g: Multigraph<u8> = Multigraph::new(false);
        g.add_default_edge(&1, &2);

        let err = g.update_edge_weight(&1, &2, 3.0).unwrap_err();
        assert!(err.is_unsupported());
        assert!(matches!(
            g.complement(),
            Err(GraphError::Unsupported { operation: "complement", .. })
        ));
    }

    #[test]
    fn matrices_count_parallel_edges() {
        let mut g: Multigraph<u8> = Multigraph::new(false);
        for (u, v) in [(0, 1), (0, 1), (1, 1), (1, 2), (0, 1)] {
            g.add_default_edge(&u, &v);
        }

        assert_eq!(
            g.adjacency_matrix::<i32>(EdgeOrientation::Und),
            array![[0, 3, 0], [3, 1, 1], [0, 1, 0]]
        );
        let sparse = g.sparse_adjacency_matrix::<u64>(EdgeOrientation::Out);
        assert_eq!(sparse.get(1, 0), Some(&3));
        assert_eq!(sparse.number_of_entries(), 5);

        assert!(g.remove_node(&1));
        assert_eq!(g.number_of_edges(), 0);
        assert_eq!(g.number_of_nodes(), 2);
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn directed_self_loops_fill_one_cell() {
        let mut g: Multigraph<u8> = Multigraph::new(true);
        g.add_default_edge(&0, &0);
        assert_eq!(g.number_of_edges(), 1);
        for o in EdgeOrientation::ALL {
            assert_eq!(g.adjacency_matrix::<i32>(o), array![[1]]);
        }

        g.add_default_edge(&0, &0);
        g.add_default_edge(&1, &0);
        assert_eq!(
            g.adjacency_matrix::<i32>(EdgeOrientation::Und),
            array![[2, 1], [1, 0]]
        );
        assert_eq!(
            g.sparse_adjacency_matrix::<u64>(EdgeOrientation::Mutual).get(0, 0),
            Some(&2)
        );
    }
}
