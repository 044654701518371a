/*!
# Graph Facade

A [`Graph`] owns an [`Index`] mapping objects to dense ids and an edge store
implementing [`Edges`]. Every object-level call is translated into an id-level call on
the store; ids never leave this layer except through [`Graph::index`] and
[`Graph::edge_store`].

Most operations are provided by [`GraphOps`]; this module adds those that only make
sense with a single weight and type per edge.
*/

use std::{borrow::Borrow, hash::Hash};

use stream_bitset::prelude::*;
use tracing::debug;

use crate::{
    edges::*,
    error::Result,
    ops::GraphOps,
    *,
};

/// Simple graph over objects of type `T` with edges kept in `E`.
///
/// # Example
/// ```
/// use relgraph::prelude::*;
///
/// let mut g: WeightedDirectedGraph<&str> = Graph::new();
/// g.add_edge(&"a", &"b", 2.0, 7, true);
/// g.add_edge(&"b", &"a", 3.0, 7, true);
///
/// assert_eq!(g.number_of_nodes(), 2);
/// assert_eq!(g.edge_weight(&"a", &"b"), 2.0);
/// assert_eq!(
///     g.neighbourhood_weights(&"a", EdgeOrientation::Und).collect::<Vec<_>>(),
///     vec![(&"b", 5.0)]
/// );
/// ```
#[derive(Clone)]
pub struct Graph<T, E> {
    index: Index<T>,
    edges: E,
}

/// Directed graph without edge weights
pub type DirectedGraph<T> = Graph<T, DirectedUnweightedEdges>;

/// Undirected graph without edge weights
pub type UndirectedGraph<T> = Graph<T, UndirectedUnweightedEdges>;

/// Directed graph with a weight per edge
pub type WeightedDirectedGraph<T> = Graph<T, DirectedWeightedEdges>;

/// Undirected graph with a weight per edge
pub type WeightedUndirectedGraph<T> = Graph<T, UndirectedWeightedEdges>;

/// Graph whose store variant is chosen at runtime, see [`GraphBuilder`](crate::config::GraphBuilder)
pub type DynGraph<T> = Graph<T, AnyEdges>;

impl<T, E> Default for Graph<T, E>
where
    T: Eq + Hash + Clone,
    E: Edges + Default,
{
    fn default() -> Self {
        Self::with_store(E::default())
    }
}

impl<T, E> Graph<T, E>
where
    T: Eq + Hash + Clone,
    E: Edges + Default,
{
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with space for `capacity` nodes in the index
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: Index::with_capacity(capacity),
            edges: E::default(),
        }
    }
}

impl<T, E> Graph<T, E>
where
    T: Eq + Hash + Clone,
    E: Edges,
{
    /// Creates an empty graph with the variant of `edges`.
    /// Nodes and edges already in `edges` are not taken over.
    pub fn with_store(edges: E) -> Self {
        Self {
            index: Index::new(),
            edges: edges.empty_like(0),
        }
    }

    /// Reserves index space for at least `additional` more nodes
    pub fn reserve(&mut self, additional: usize) {
        self.index.reserve(additional);
    }

    /// Returns the edge store; its ids are those of [`Graph::index`]
    pub fn edge_store(&self) -> &E {
        &self.edges
    }

    /// Returns the weight of the edge or [`MISSING_WEIGHT`] if there is none
    pub fn edge_weight<Q>(&self, origin: &Q, destination: &Q) -> Weight
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids(origin, destination)
            .map_or(MISSING_WEIGHT, |(u, v)| self.edges.edge_weight(u, v))
    }

    /// Returns the type of the edge or [`MISSING_TYPE`] if there is none
    pub fn edge_type<Q>(&self, origin: &Q, destination: &Q) -> EdgeType
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids(origin, destination)
            .map_or(MISSING_TYPE, |(u, v)| self.edges.edge_type(u, v))
    }

    /// Replaces the type of an existing edge. Returns *false* if there is none.
    pub fn update_edge_type<Q>(&mut self, origin: &Q, destination: &Q, edge_type: EdgeType) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids(origin, destination)
            .is_some_and(|(u, v)| self.edges.update_edge_type(u, v, edge_type))
    }

    /// Returns `(neighbour, weight)` for all neighbours of `obj`, ordered by id.
    /// See [`Edges::neighbour_weights`] for how weights of merged views combine.
    pub fn neighbourhood_weights<Q>(
        &self,
        obj: &Q,
        orientation: EdgeOrientation,
    ) -> impl Iterator<Item = (&T, Weight)> + '_
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let u = self.index.object_to_idx(obj);
        u.into_iter()
            .flat_map(move |u| self.edges.neighbourhood_weights(u, orientation))
            .filter_map(move |(v, w)| Some((self.index.idx_to_object(v)?, w)))
    }

    /// Returns `(neighbour, type)` for all neighbours of `obj`, ordered by id
    pub fn neighbourhood_types<Q>(
        &self,
        obj: &Q,
        orientation: EdgeOrientation,
    ) -> impl Iterator<Item = (&T, EdgeType)> + '_
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let u = self.index.object_to_idx(obj);
        u.into_iter()
            .flat_map(move |u| self.edges.neighbourhood_types(u, orientation))
            .filter_map(move |(v, t)| Some((self.index.idx_to_object(v)?, t)))
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

impl<T, E> GraphOps<T> for Graph<T, E>
where
    T: Eq + Hash + Clone,
    E: Edges,
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
        self.edges.is_weighted()
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
        let (u, v) = match self.ids(origin, destination) {
            Some(ids) => ids,
            None if insert_missing_nodes => {
                let u = self
                    .index
                    .object_to_idx(origin)
                    .or_else(|| self.insert_node(origin.clone()));
                let v = self
                    .index
                    .object_to_idx(destination)
                    .or_else(|| self.insert_node(destination.clone()));
                match (u, v) {
                    (Some(u), Some(v)) => (u, v),
                    _ => return false,
                }
            }
            None => return false,
        };
        self.edges.add_edge(u, v, weight, edge_type)
    }

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

    fn update_edge_weight<Q>(&mut self, origin: &Q, destination: &Q, weight: Weight) -> Result<bool>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        Ok(self
            .ids(origin, destination)
            .is_some_and(|(u, v)| self.edges.update_edge_weight(u, v, weight)))
    }

    fn complement(&self) -> Result<Self> {
        let n = self.edges.number_of_nodes();
        let directed = self.edges.is_directed();
        let mut edges = self.edges.empty_like(n);

        for u in 0..n {
            let present = NodeBitSet::new_with_bits_set(n, self.edges.adjacent_nodes(u));
            let first = if directed { 0 } else { u + 1 };
            for v in first..n {
                if v != u && !present.get_bit(v) {
                    edges.add_edge(u, v, DEFAULT_WEIGHT, DEFAULT_TYPE);
                }
            }
        }

        debug!(
            nodes = n,
            edges = edges.number_of_edges(),
            "built complement graph"
        );
        Ok(Self {
            index: self.index.clone(),
            edges,
        })
    }

    fn neighbour_ids(&self, u: Node, orientation: EdgeOrientation) -> NodeIter<'_> {
        self.edges.neighbourhood(u, orientation)
    }

    fn degree_of(&self, u: Node, orientation: EdgeOrientation) -> NumNodes {
        self.edges.degree(u, orientation)
    }

    fn edge_counts_of(&self, u: Node, orientation: EdgeOrientation) -> Vec<(Node, NumEdges)> {
        self.edges.neighbourhood(u, orientation).map(|v| (v, 1)).collect()
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

    fn names(nodes: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
        nodes.collect()
    }

    #[test]
    fn objects_map_to_edges() {
        let mut g: DirectedGraph<String> = Graph::new();
        assert!(g.add_node("a".to_string()));
        assert!(!g.add_node("a".to_string()));

        assert!(!g.add_edge(&"a".to_string(), &"b".to_string(), 1.0, 0, false));
        assert_eq!(g.number_of_nodes(), 1);
        assert!(g.add_edge(&"a".to_string(), &"b".to_string(), 1.0, 0, true));
        assert!(g.add_default_edge(&"c".to_string(), &"a".to_string()));
        assert!(!g.add_default_edge(&"c".to_string(), &"a".to_string()));

        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.number_of_edges(), 2);
        assert!(g.contains_vertex("c"));
        assert!(g.contains_edge("a", "b"));
        assert!(!g.contains_edge("b", "a"));
        assert!(!g.contains_edge("a", "zzz"));

        assert_eq!(g.neighbourhood("a", EdgeOrientation::Und).collect_vec(), vec!["b", "c"]);
        assert_eq!(g.neighbourhood("a", EdgeOrientation::In).collect_vec(), vec!["c"]);
        assert_eq!(g.degree("a", EdgeOrientation::Out), 1);
        assert_eq!(g.degree("zzz", EdgeOrientation::Out), 0);
        assert!(g.neighbourhood("zzz", EdgeOrientation::Und).next().is_none());

        assert_eq!(g.edge_weight("a", "b"), DEFAULT_WEIGHT);
        assert!(g.edge_weight("b", "a").is_nan());
        assert_eq!(g.edge_type("c", "a"), DEFAULT_TYPE);
        assert_eq!(g.edge_type("zzz", "a"), MISSING_TYPE);
        assert!(g.update_edge_type("c", "a", 4));
        assert_eq!(g.edge_type("c", "a"), 4);
        assert_eq!(g.update_edge_weight("a", "b", 3.0), Ok(true));
        assert_eq!(g.update_edge_weight("b", "a", 3.0), Ok(false));
    }

    #[test]
    fn node_removal_keeps_objects_aligned() {
        let mut g: WeightedUndirectedGraph<&'static str> = Graph::new();
        for (u, v, w) in [("x", "y", 1.0), ("y", "z", 2.0), ("z", "x", 3.0), ("z", "z", 4.0)] {
            assert!(g.add_edge(&u, &v, w, 0, true));
        }
        assert_eq!(g.number_of_edges(), 4);

        assert!(g.remove_node(&"y"));
        assert!(!g.remove_node(&"y"));
        assert_eq!(g.number_of_nodes(), 2);
        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(names(g.vertices().copied()), vec!["x", "z"]);
        assert_eq!(g.index().object_to_idx(&"z"), Some(1));
        assert_eq!(
            g.neighbourhood_weights(&"z", EdgeOrientation::Out).collect_vec(),
            vec![(&"x", 3.0), (&"z", 4.0)]
        );
        assert_eq!(
            g.edges().collect_vec(),
            vec![(&"x", &"z", 3.0, 0), (&"z", &"z", 4.0, 0)]
        );
    }

    #[test]
    fn complement_and_matrices() {
        let mut g: DirectedGraph<u32> = Graph::new();
        for (u, v) in [(0, 1), (1, 2), (2, 2)] {
            g.add_default_edge(&u, &v);
        }

        assert_eq!(
            g.adjacency_matrix::<i32>(EdgeOrientation::Out),
            array![[0, 1, 0], [0, 0, 1], [0, 0, 1]]
        );
        assert_eq!(
            g.adjacency_matrix::<i32>(EdgeOrientation::Und),
            array![[0, 1, 0], [1, 0, 1], [0, 1, 1]]
        );
        let sparse = g.sparse_adjacency_matrix::<f64>(EdgeOrientation::In);
        assert_eq!(sparse.number_of_entries(), 3);
        assert_eq!(sparse.get(2, 1), Some(&1.0));
        assert_eq!(sparse.to_dense(), g.adjacency_matrix::<f64>(EdgeOrientation::In));

        let c = g.complement().unwrap();
        assert_eq!(c.number_of_nodes(), 3);
        assert_eq!(c.number_of_edges(), 4);
        for (u, v) in [(0, 2), (1, 0), (2, 0), (2, 1)] {
            assert!(c.contains_edge(&u, &v));
        }
        assert!(!c.contains_edge(&2, &2));

        let mut h: UndirectedGraph<u32> = Graph::new();
        for (u, v) in [(0, 1), (1, 2), (2, 3)] {
            h.add_default_edge(&u, &v);
        }
        let c = h.complement().unwrap();
        assert_eq!(c.number_of_edges(), 3);
        assert!(c.contains_edge(&2, &0) && c.contains_edge(&3, &1) && c.contains_edge(&0, &3));
    }

    #[test]
    fn degree_statistics() {
        let mut g: UndirectedGraph<u32> = Graph::new();
        for (u, v) in [(0, 1), (0, 2), (0, 3), (1, 2)] {
            g.add_default_edge(&u, &v);
        }
        g.add_node(4);

        assert_eq!(g.degrees(EdgeOrientation::Und).collect_vec(), vec![3, 2, 2, 1, 0]);
        assert_eq!(g.max_degree(EdgeOrientation::Und), 3);
        assert_eq!(
            g.degree_distribution(EdgeOrientation::Und),
            vec![(0, 1), (1, 1), (2, 2), (3, 1)]
        );
        assert_eq!(g.average_degree(EdgeOrientation::Und), 8.0 / 5.0);
        assert_eq!(Graph::<u32, UndirectedUnweightedEdges>::new().average_degree(EdgeOrientation::Out), 0.0);
    }

    #[test]
    fn store_only_selects_variant() {
        let g: DynGraph<u32> = Graph::new();
        assert!(g.is_directed() && !g.is_weighted());

        let mut filled = AnyEdges::new(false, true, 3);
        filled.add_edge(0, 1, 2.0, 0);
        let mut g: DynGraph<u32> = Graph::with_store(filled);
        assert!(!g.is_directed() && g.is_weighted());
        assert_eq!(g.number_of_nodes(), 0);
        assert_eq!(g.number_of_edges(), 0);

        assert!(g.add_edge(&7, &8, 2.5, 1, true));
        assert_eq!(g.index().object_to_idx(&7), Some(0));
        assert_eq!(g.edge_weight(&8, &7), 2.5);
    }

    fn listed<G: GraphOps<String>>(g: &G) -> Vec<(&str, &str, Weight)> {
        g.edges().map(|(u, v, w, _)| (u.as_str(), v.as_str(), w)).collect()
    }

    #[test]
    fn edges_borrow_objects() {
        let mut g: WeightedUndirectedGraph<String> = Graph::new();
        g.add_edge(&"b".to_string(), &"a".to_string(), 3.0, 0, true);
        g.add_edge(&"b".to_string(), &"c".to_string(), 1.5, 0, true);
        assert_eq!(listed(&g), vec![("b", "a", 3.0), ("b", "c", 1.5)]);
    }
}
