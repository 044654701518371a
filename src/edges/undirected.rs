use tracing::debug;

use super::{macros::impl_common_edges, *};
use crate::testing::test_edges_ops;

/// Undirected edge store.
///
/// An edge `{u, v}` with `u != v` is kept as the two pairs `(u, v)` and `(v, u)` in
/// each relation; a self-loop `{u, u}` is kept once. Hence incident, adjacent,
/// neighbour and mutual rows of a node are the same row and no merging is needed.
///
/// # Type parameters
/// - `A`: row type of the weight relation, see [`WeightAxis`].
#[derive(Clone)]
pub struct UndirectedEdges<A: WeightAxis> {
    weights: AutoRelation<A>,
    types: AutoRelation<WeightedAdjacency<EdgeType>>,
    num_edges: NumEdges,
}

/// Undirected store with a weight per edge
pub type UndirectedWeightedEdges = UndirectedEdges<WeightedAdjacency<Weight>>;

/// Undirected store reporting [`DEFAULT_WEIGHT`] for every edge
pub type UndirectedUnweightedEdges = UndirectedEdges<UnweightedAdjacency<Weight>>;

impl<A: WeightAxis> UndirectedEdges<A> {
    /// Creates a store with nodes `0..n` and no edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            weights: AutoRelation::with_nodes(n, DEFAULT_WEIGHT),
            types: AutoRelation::with_nodes(n, MISSING_TYPE),
            num_edges: 0,
        }
    }
}

impl<A: WeightAxis> Default for UndirectedEdges<A> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<A: WeightAxis> Edges for UndirectedEdges<A> {
    impl_common_edges!(self);

    fn is_directed(&self) -> bool {
        false
    }

    fn remove_node(&mut self, id: Node) -> bool {
        if id >= self.number_of_nodes() {
            return false;
        }

        // every edge at `id` appears exactly once in its row, a self-loop included
        let removed = self.adjacent_degree(id);
        self.num_edges -= removed;

        self.weights.remove(id);
        self.types.remove(id);

        debug!(id, removed, "removed node from undirected edges");
        true
    }

    fn add_edge(
        &mut self,
        origin: Node,
        destination: Node,
        weight: Weight,
        edge_type: EdgeType,
    ) -> bool {
        // both relations are symmetric, so the first insertion decides for all four
        if !self.weights.add(origin, destination, weight) {
            return false;
        }
        self.types.add(origin, destination, edge_type);
        if !Edge(origin, destination).is_loop() {
            self.weights.add(destination, origin, weight);
            self.types.add(destination, origin, edge_type);
        }

        self.num_edges += 1;
        true
    }

    fn remove_edge(&mut self, origin: Node, destination: Node) -> bool {
        if !self.weights.remove_pair(origin, destination) {
            return false;
        }
        self.types.remove_pair(origin, destination);
        if !Edge(origin, destination).is_loop() {
            self.weights.remove_pair(destination, origin);
            self.types.remove_pair(destination, origin);
        }

        self.num_edges -= 1;
        true
    }

    fn update_edge_weight(&mut self, origin: Node, destination: Node, weight: Weight) -> bool {
        let found = self.weights.update(origin, destination, weight, false);
        if found && !Edge(origin, destination).is_loop() {
            self.weights.update(destination, origin, weight, false);
        }
        found
    }

    fn update_edge_type(
        &mut self,
        origin: Node,
        destination: Node,
        edge_type: EdgeType,
    ) -> bool {
        let found = self.types.update(origin, destination, edge_type, false);
        if found && !Edge(origin, destination).is_loop() {
            self.types.update(destination, origin, edge_type, false);
        }
        found
    }

    fn incident_nodes(&self, u: Node) -> NodeIter<'_> {
        self.weights.adjacent(u).into()
    }

    fn adjacent_nodes(&self, u: Node) -> NodeIter<'_> {
        self.weights.adjacent(u).into()
    }

    fn neighbour_nodes(&self, u: Node) -> NodeIter<'_> {
        self.weights.adjacent(u).into()
    }

    fn mutual_nodes(&self, u: Node) -> NodeIter<'_> {
        self.weights.adjacent(u).into()
    }

    fn incident_weights(&self, u: Node) -> EntryIter<'_, Weight> {
        self.weights.adjacent_entries(u).into()
    }

    fn adjacent_weights(&self, u: Node) -> EntryIter<'_, Weight> {
        self.weights.adjacent_entries(u).into()
    }

    fn neighbour_weights(&self, u: Node) -> EntryIter<'_, Weight> {
        self.weights.adjacent_entries(u).into()
    }

    fn mutual_weights(&self, u: Node) -> EntryIter<'_, Weight> {
        self.weights.adjacent_entries(u).into()
    }

    fn incident_types(&self, u: Node) -> EntryIter<'_, EdgeType> {
        self.types.adjacent_entries(u).into()
    }

    fn adjacent_types(&self, u: Node) -> EntryIter<'_, EdgeType> {
        self.types.adjacent_entries(u).into()
    }

    fn neighbour_types(&self, u: Node) -> EntryIter<'_, EdgeType> {
        self.types.adjacent_entries(u).into()
    }

    fn mutual_types(&self, u: Node) -> EntryIter<'_, EdgeType> {
        self.types.adjacent_entries(u).into()
    }

    fn neighbour_degree(&self, u: Node) -> NumNodes {
        self.adjacent_degree(u)
    }

    fn mutual_degree(&self, u: Node) -> NumNodes {
        self.adjacent_degree(u)
    }
}

test_edges_ops!(test_undirected_weighted, UndirectedWeightedEdges, true, true);
test_edges_ops!(test_undirected_unweighted, UndirectedUnweightedEdges, true, false);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn insertion_is_symmetric() {
        let mut edges = UndirectedWeightedEdges::new(4);
        assert!(edges.add_edge(2, 0, 1.5, 3));
        assert!(!edges.add_edge(0, 2, 9.0, 0));

        assert!(edges.contains_edge(0, 2) && edges.contains_edge(2, 0));
        assert_eq!(edges.number_of_edges(), 1);
        assert_eq!(edges.edge_weight(0, 2), 1.5);
        assert_eq!(edges.edge_type(0, 2), 3);

        assert!(edges.update_edge_weight(0, 2, 2.5));
        assert_eq!(edges.edge_weight(2, 0), 2.5);
        assert!(edges.update_edge_type(2, 0, 4));
        assert_eq!(edges.edge_type(0, 2), 4);

        for o in EdgeOrientation::ALL {
            assert_eq!(edges.neighbourhood(0, o).collect_vec(), vec![2]);
            assert_eq!(edges.degree(2, o), 1);
        }

        assert!(edges.remove_edge(0, 2));
        assert!(!edges.contains_edge(2, 0));
        assert_eq!(edges.number_of_edges(), 0);
    }

    #[test]
    fn self_loop_stored_once() {
        let mut edges = UndirectedWeightedEdges::new(2);
        assert!(edges.add_edge(0, 0, 4.0, 0));
        assert!(edges.add_edge(0, 1, 1.0, 0));

        assert!(edges.contains_edge(0, 0));
        assert_eq!(edges.neighbour_weights(0).collect_vec(), vec![(0, 4.0), (1, 1.0)]);
        assert_eq!(edges.number_of_edges(), 2);

        assert!(edges.remove_node(1));
        assert_eq!(edges.number_of_edges(), 1);
        assert!(edges.remove_node(0));
        assert_eq!(edges.number_of_edges(), 0);
        assert_eq!(edges.number_of_nodes(), 0);
    }

    #[test]
    fn edges_are_reported_once() {
        let mut edges = UndirectedUnweightedEdges::new(3);
        edges.add_edge(2, 1, 1.0, 5);
        edges.add_edge(0, 0, 1.0, 6);
        edges.add_edge(1, 0, 1.0, 7);

        assert_eq!(
            edges.edges().collect_vec(),
            vec![
                (Edge(0, 0), 1.0, 6),
                (Edge(0, 1), 1.0, 7),
                (Edge(1, 2), 1.0, 5)
            ]
        );
    }
}
