use super::*;

/// An edge store whose variant is chosen at runtime, e.g. from a
/// [`GraphKind`](crate::config::GraphKind).
///
/// Every call is forwarded to the wrapped store.
#[derive(Clone)]
pub enum AnyEdges {
    DirectedWeighted(DirectedWeightedEdges),
    DirectedUnweighted(DirectedUnweightedEdges),
    UndirectedWeighted(UndirectedWeightedEdges),
    UndirectedUnweighted(UndirectedUnweightedEdges),
}

impl AnyEdges {
    /// Creates an empty store with nodes `0..n`
    pub fn new(directed: bool, weighted: bool, n: NumNodes) -> Self {
        match (directed, weighted) {
            (true, true) => Self::DirectedWeighted(DirectedEdges::new(n)),
            (true, false) => Self::DirectedUnweighted(DirectedEdges::new(n)),
            (false, true) => Self::UndirectedWeighted(UndirectedEdges::new(n)),
            (false, false) => Self::UndirectedUnweighted(UndirectedEdges::new(n)),
        }
    }
}

impl Default for AnyEdges {
    /// An empty directed unweighted store
    fn default() -> Self {
        Self::new(true, false, 0)
    }
}

macro_rules! dispatch {
    ($self:expr, $edges:ident => $body:expr) => {
        match $self {
            AnyEdges::DirectedWeighted($edges) => $body,
            AnyEdges::DirectedUnweighted($edges) => $body,
            AnyEdges::UndirectedWeighted($edges) => $body,
            AnyEdges::UndirectedUnweighted($edges) => $body,
        }
    };
}

impl Edges for AnyEdges {
    fn is_directed(&self) -> bool {
        dispatch!(self, e => e.is_directed())
    }

    fn is_weighted(&self) -> bool {
        dispatch!(self, e => e.is_weighted())
    }

    fn number_of_nodes(&self) -> NumNodes {
        dispatch!(self, e => e.number_of_nodes())
    }

    fn number_of_edges(&self) -> NumEdges {
        dispatch!(self, e => e.number_of_edges())
    }

    fn empty_like(&self, n: NumNodes) -> Self {
        Self::new(self.is_directed(), self.is_weighted(), n)
    }

    fn add_user(&mut self, id: Node) -> bool {
        dispatch!(self, e => e.add_user(id))
    }

    fn remove_node(&mut self, id: Node) -> bool {
        dispatch!(self, e => e.remove_node(id))
    }

    fn add_edge(
        &mut self,
        origin: Node,
        destination: Node,
        weight: Weight,
        edge_type: EdgeType,
    ) -> bool {
        dispatch!(self, e => e.add_edge(origin, destination, weight, edge_type))
    }

    fn remove_edge(&mut self, origin: Node, destination: Node) -> bool {
        dispatch!(self, e => e.remove_edge(origin, destination))
    }

    fn update_edge_weight(&mut self, origin: Node, destination: Node, weight: Weight) -> bool {
        dispatch!(self, e => e.update_edge_weight(origin, destination, weight))
    }

    fn update_edge_type(
        &mut self,
        origin: Node,
        destination: Node,
        edge_type: EdgeType,
    ) -> bool {
        dispatch!(self, e => e.update_edge_type(origin, destination, edge_type))
    }

    fn contains_edge(&self, origin: Node, destination: Node) -> bool {
        dispatch!(self, e => e.contains_edge(origin, destination))
    }

    fn edge_weight(&self, origin: Node, destination: Node) -> Weight {
        dispatch!(self, e => e.edge_weight(origin, destination))
    }

    fn edge_type(&self, origin: Node, destination: Node) -> EdgeType {
        dispatch!(self, e => e.edge_type(origin, destination))
    }

    fn incident_nodes(&self, u: Node) -> NodeIter<'_> {
        dispatch!(self, e => e.incident_nodes(u))
    }

    fn adjacent_nodes(&self, u: Node) -> NodeIter<'_> {
        dispatch!(self, e => e.adjacent_nodes(u))
    }

    fn neighbour_nodes(&self, u: Node) -> NodeIter<'_> {
        dispatch!(self, e => e.neighbour_nodes(u))
    }

    fn mutual_nodes(&self, u: Node) -> NodeIter<'_> {
        dispatch!(self, e => e.mutual_nodes(u))
    }

    fn incident_weights(&self, u: Node) -> EntryIter<'_, Weight> {
        dispatch!(self, e => e.incident_weights(u))
    }

    fn adjacent_weights(&self, u: Node) -> EntryIter<'_, Weight> {
        dispatch!(self, e => e.adjacent_weights(u))
    }

    fn neighbour_weights(&self, u: Node) -> EntryIter<'_, Weight> {
        dispatch!(self, e => e.neighbour_weights(u))
    }

    fn mutual_weights(&self, u: Node) -> EntryIter<'_, Weight> {
        dispatch!(self, e => e.mutual_weights(u))
    }

    fn incident_types(&self, u: Node) -> EntryIter<'_, EdgeType> {
        dispatch!(self, e => e.incident_types(u))
    }

    fn adjacent_types(&self, u: Node) -> EntryIter<'_, EdgeType> {
        dispatch!(self, e => e.adjacent_types(u))
    }

    fn neighbour_types(&self, u: Node) -> EntryIter<'_, EdgeType> {
        dispatch!(self, e => e.neighbour_types(u))
    }

    fn mutual_types(&self, u: Node) -> EntryIter<'_, EdgeType> {
        dispatch!(self, e => e.mutual_types(u))
    }

    fn incident_degree(&self, u: Node) -> NumNodes {
        dispatch!(self, e => e.incident_degree(u))
    }

    fn adjacent_degree(&self, u: Node) -> NumNodes {
        dispatch!(self, e => e.adjacent_degree(u))
    }

    fn neighbour_degree(&self, u: Node) -> NumNodes {
        dispatch!(self, e => e.neighbour_degree(u))
    }

    fn mutual_degree(&self, u: Node) -> NumNodes {
        dispatch!(self, e => e.mutual_degree(u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn variants_follow_flags() {
        for directed in [false, true] {
            for weighted in [false, true] {
                let mut edges = AnyEdges::new(directed, weighted, 3);
                assert_eq!(edges.is_directed(), directed);
                assert_eq!(edges.is_weighted(), weighted);

                assert!(edges.add_edge(0, 1, 2.0, 1));
                assert!(edges.add_edge(2, 1, 3.0, 1));
                assert_eq!(edges.contains_edge(1, 0), !directed);
                assert_eq!(edges.edge_weight(0, 1), if weighted { 2.0 } else { 1.0 });
                assert_eq!(edges.neighbour_nodes(1).collect_vec(), vec![0, 2]);

                let empty = edges.empty_like(2);
                assert_eq!(empty.is_directed(), directed);
                assert_eq!(empty.is_weighted(), weighted);
                assert_eq!(empty.number_of_nodes(), 2);
                assert_eq!(empty.number_of_edges(), 0);
            }
        }
    }

    #[test]
    fn default_is_directed_unweighted() {
        let edges = AnyEdges::default();
        assert!(matches!(edges, AnyEdges::DirectedUnweighted(_)));
        assert_eq!(edges.number_of_nodes(), 0);
    }
}
