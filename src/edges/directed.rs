use tracing::debug;

use super::{macros::impl_common_edges, merge, *};
use crate::testing::test_edges_ops;

/// Directed edge store.
///
/// Every edge `(u, v)` is kept once in each relation. Incoming and outgoing rows of
/// a node are distinct rows of the same relation, so the neighbour and mutual views
/// are computed by merging them.
///
/// # Type parameters
/// - `A`: row type of the weight relation, see [`WeightAxis`].
#[derive(Clone)]
pub struct DirectedEdges<A: WeightAxis> {
    weights: AutoRelation<A>,
    types: AutoRelation<WeightedAdjacency<EdgeType>>,
    num_edges: NumEdges,
}

/// Directed store with a weight per edge
pub type DirectedWeightedEdges = DirectedEdges<WeightedAdjacency<Weight>>;

/// Directed store reporting [`DEFAULT_WEIGHT`] for every edge
pub type DirectedUnweightedEdges = DirectedEdges<UnweightedAdjacency<Weight>>;

impl<A: WeightAxis> DirectedEdges<A> {
    /// Creates a store with nodes `0..n` and no edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            weights: AutoRelation::with_nodes(n, DEFAULT_WEIGHT),
            types: AutoRelation::with_nodes(n, MISSING_TYPE),
            num_edges: 0,
        }
    }
}

impl<A: WeightAxis> Default for DirectedEdges<A> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<A: WeightAxis> Edges for DirectedEdges<A> {
    impl_common_edges!(self);

    fn is_directed(&self) -> bool {
        true
    }

    fn remove_node(&mut self, id: Node) -> bool {
        if id >= self.number_of_nodes() {
            return false;
        }

        let removed = self.incident_degree(id) + self.adjacent_degree(id)
            - self.weights.contains(id, id) as NumNodes;
        self.num_edges -= removed;

        self.weights.remove(id);
        self.types.remove(id);

        debug!(id, removed, "removed node from directed edges");
        true
    }

    fn add_edge(
        &mut self,
        origin: Node,
        destination: Node,
        weight: Weight,
        edge_type: EdgeType,
    ) -> bool {
        if !self.weights.add(origin, destination, weight) {
            return false;
        }
        if !self.types.add(origin, destination, edge_type) {
            self.weights.remove_pair(origin, destination);
            return false;
        }

        self.num_edges += 1;
        true
    }

    fn remove_edge(&mut self, origin: Node, destination: Node) -> bool {
        if !self.weights.remove_pair(origin, destination) {
            return false;
        }
        self.types.remove_pair(origin, destination);

        self.num_edges -= 1;
        true
    }

    fn update_edge_weight(&mut self, origin: Node, destination: Node, weight: Weight) -> bool {
        self.weights.update(origin, destination, weight, false)
    }

    fn update_edge_type(
        &mut self,
        origin: Node,
        destination: Node,
        edge_type: EdgeType,
    ) -> bool {
        self.types.update(origin, destination, edge_type, false)
    }

    fn incident_nodes(&self, u: Node) -> NodeIter<'_> {
        self.weights.incident(u).into()
    }

    fn adjacent_nodes(&self, u: Node) -> NodeIter<'_> {
        self.weights.adjacent(u).into()
    }

    fn neighbour_nodes(&self, u: Node) -> NodeIter<'_> {
        merge::union_nodes(self.weights.incident(u), self.weights.adjacent(u)).into()
    }

    fn mutual_nodes(&self, u: Node) -> NodeIter<'_> {
        merge::intersect_nodes(self.weights.incident(u), self.weights.adjacent(u)).into()
    }

    fn incident_weights(&self, u: Node) -> EntryIter<'_, Weight> {
        self.weights.incident_entries(u).into()
    }

    fn adjacent_weights(&self, u: Node) -> EntryIter<'_, Weight> {
        self.weights.adjacent_entries(u).into()
    }

    fn neighbour_weights(&self, u: Node) -> EntryIter<'_, Weight> {
        merge::union_entries(
            self.weights.incident_entries(u),
            self.weights.adjacent_entries(u),
            A::combine,
        )
        .into()
    }

    fn mutual_weights(&self, u: Node) -> EntryIter<'_, Weight> {
        merge::intersect_entries(
            self.weights.incident_entries(u),
            self.weights.adjacent_entries(u),
            A::combine,
        )
        .into()
    }

    fn incident_types(&self, u: Node) -> EntryIter<'_, EdgeType> {
        self.types.incident_entries(u).into()
    }

    fn adjacent_types(&self, u: Node) -> EntryIter<'_, EdgeType> {
        self.types.adjacent_entries(u).into()
    }

    fn neighbour_types(&self, u: Node) -> EntryIter<'_, EdgeType> {
        merge::union_entries(
            self.types.incident_entries(u),
            self.types.adjacent_entries(u),
            |_, outgoing| outgoing,
        )
        .into()
    }

    fn mutual_types(&self, u: Node) -> EntryIter<'_, EdgeType> {
        merge::intersect_entries(
            self.types.incident_entries(u),
            self.types.adjacent_entries(u),
            |_, outgoing| outgoing,
        )
        .into()
    }

    fn neighbour_degree(&self, u: Node) -> NumNodes {
        self.incident_degree(u) + self.adjacent_degree(u) - self.mutual_degree(u)
    }

    fn mutual_degree(&self, u: Node) -> NumNodes {
        merge::count_common(self.weights.incident(u), self.weights.adjacent(u)) as NumNodes
    }
}

test_edges_ops!(test_directed_weighted, DirectedWeightedEdges, false, true);
test_edges_ops!(test_directed_unweighted, DirectedUnweightedEdges, false, false);
