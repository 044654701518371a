use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::{
    edge::*,
    edges::{merge, NodeIter},
    node::*,
    orientation::EdgeOrientation,
    relation::*,
};

/// Parallel edges between one ordered pair of nodes as `(weight, type)` in insertion order
pub type ParallelEdges = SmallVec<[(Weight, EdgeType); 2]>;

/// Edge store permitting parallel edges.
///
/// Each ordered pair of nodes owns one cell of [`ParallelEdges`]; a pair without edges has
/// no cell. Undirected stores mirror every cell like [`UndirectedEdges`](crate::edges::UndirectedEdges)
/// does, and a self-loop cell is kept once.
#[derive(Clone)]
pub struct MultiEdges {
    cells: AutoRelation<WeightedAdjacency<ParallelEdges>>,
    directed: bool,
    num_edges: NumEdges,
}

impl MultiEdges {
    /// Creates a store with nodes `0..n` and no edges
    pub fn new(directed: bool, n: NumNodes) -> Self {
        Self {
            cells: AutoRelation::with_nodes(n, ParallelEdges::new()),
            directed,
            num_edges: 0,
        }
    }

    /// Returns *true* if `(u, v)` and `(v, u)` are distinct cells
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.cells.number_of_nodes()
    }

    /// Returns the total number of edges; a mirrored undirected edge counts once
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Registers node `id`. Fails if `id` is not the next sequential id.
    pub fn add_user(&mut self, id: Node) -> bool {
        self.cells.add_user(id)
    }

    fn push(&mut self, origin: Node, destination: Node, entry: (Weight, EdgeType)) -> bool {
        self.cells.modify(origin, destination, |cell| cell.push(entry))
            || self.cells.add(origin, destination, smallvec![entry])
    }

    fn pop(&mut self, origin: Node, destination: Node) {
        if self.num_parallel_edges(origin, destination) > 1 {
            self.cells.modify(origin, destination, |cell| {
                cell.pop();
            });
        } else {
            self.cells.remove_pair(origin, destination);
        }
    }

    /// Appends an edge to the cell of `(origin, destination)`.
    /// Returns *false* only if an id is out of range.
    pub fn add_edge(
        &mut self,
        origin: Node,
        destination: Node,
        weight: Weight,
        edge_type: EdgeType,
    ) -> bool {
        if !self.push(origin, destination, (weight, edge_type)) {
            return false;
        }
        if !self.directed && !Edge(origin, destination).is_loop() {
            self.push(destination, origin, (weight, edge_type));
        }

        self.num_edges += 1;
        true
    }

    /// Removes the most recently added edge from `origin` to `destination`.
    /// Returns *false* if there is none.
    pub fn remove_edge(&mut self, origin: Node, destination: Node) -> bool {
        if !self.contains_edge(origin, destination) {
            return false;
        }

        self.pop(origin, destination);
        if !self.directed && !Edge(origin, destination).is_loop() {
            self.pop(destination, origin);
        }

        self.num_edges -= 1;
        true
    }

    /// Removes all edges from `origin` to `destination` and returns how many there were
    pub fn remove_all_edges(&mut self, origin: Node, destination: Node) -> usize {
        let Some(cell) = self.cells.take(origin, destination) else {
            return 0;
        };
        if !self.directed && !Edge(origin, destination).is_loop() {
            self.cells.remove_pair(destination, origin);
        }

        self.num_edges -= cell.len() as NumEdges;
        cell.len()
    }

    /// Returns *true* if there is at least one edge from `origin` to `destination`
    pub fn contains_edge(&self, origin: Node, destination: Node) -> bool {
        self.cells.contains(origin, destination)
    }

    /// Returns the `(weight, type)` of all edges from `origin` to `destination` in insertion order
    pub fn parallel_edges(&self, origin: Node, destination: Node) -> &[(Weight, EdgeType)] {
        self.cells
            .value_ref(origin, destination)
            .map(|cell| cell.as_slice())
            .unwrap_or_default()
    }

    /// Returns the number of edges from `origin` to `destination`
    pub fn num_parallel_edges(&self, origin: Node, destination: Node) -> usize {
        self.parallel_edges(origin, destination).len()
    }

    /// Returns the weights of all edges from `origin` to `destination` in insertion order
    pub fn edge_weights(&self, origin: Node, destination: Node) -> Vec<Weight> {
        self.parallel_edges(origin, destination)
            .iter()
            .map(|&(w, _)| w)
            .collect()
    }

    /// Returns the types of all edges from `origin` to `destination` in insertion order
    pub fn edge_types(&self, origin: Node, destination: Node) -> Vec<EdgeType> {
        self.parallel_edges(origin, destination)
            .iter()
            .map(|&(_, t)| t)
            .collect()
    }

    /// Returns the distinct neighbours of `u` in the given orientation
    pub fn neighbourhood(&self, u: Node, orientation: EdgeOrientation) -> NodeIter<'_> {
        let incident = self.cells.incident(u);
        let adjacent = self.cells.adjacent(u);
        if !self.directed {
            return adjacent.into();
        }

        match orientation {
            EdgeOrientation::Out => adjacent.into(),
            EdgeOrientation::In => incident.into(),
            EdgeOrientation::Und => merge::union_nodes(incident, adjacent).into(),
            EdgeOrientation::Mutual => merge::intersect_nodes(incident, adjacent).into(),
        }
    }

    /// Returns every neighbour of `u` with the parallel edges connecting them.
    ///
    /// A neighbour reached in both directions lists the incoming edges before the
    /// outgoing ones. A self-loop lists each of its edges once.
    pub fn neighbourhood_edges(
        &self,
        u: Node,
        orientation: EdgeOrientation,
    ) -> Vec<(Node, ParallelEdges)> {
        let outgoing = self.cells.adjacent_entries(u);
        if !self.directed {
            return outgoing.collect();
        }

        // the self-loop cell sits in both rows; its incoming copy stays empty
        let incoming = self.cells.incident_entries(u).map(|(v, cell)| {
            if Edge(v, u).is_loop() {
                (v, ParallelEdges::new())
            } else {
                (v, cell)
            }
        });

        let concat = |mut a: ParallelEdges, b: ParallelEdges| {
            a.extend(b);
            a
        };
        match orientation {
            EdgeOrientation::Out => outgoing.collect(),
            EdgeOrientation::In => self.cells.incident_entries(u).collect(),
            EdgeOrientation::Und => merge::union_entries(incoming, outgoing, concat),
            EdgeOrientation::Mutual => merge::intersect_entries(incoming, outgoing, concat),
        }
    }

    /// Returns the number of distinct neighbours of `u` in the given orientation
    pub fn degree(&self, u: Node, orientation: EdgeOrientation) -> NumNodes {
        let incident = self.cells.incident(u);
        let adjacent = self.cells.adjacent(u);
        if !self.directed {
            return adjacent.len() as NumNodes;
        }

        let degree = match orientation {
            EdgeOrientation::Out => adjacent.len(),
            EdgeOrientation::In => incident.len(),
            EdgeOrientation::Und => {
                incident.len() + adjacent.len() - merge::count_common(incident, adjacent)
            }
            EdgeOrientation::Mutual => merge::count_common(incident, adjacent),
        };
        degree as NumNodes
    }

    /// Returns the neighbours of `u` with the number of parallel edges to each of them
    pub fn edge_counts_of(&self, u: Node, orientation: EdgeOrientation) -> Vec<(Node, NumEdges)> {
        self.neighbourhood_edges(u, orientation)
            .into_iter()
            .map(|(v, cell)| (v, cell.len() as NumEdges))
            .collect()
    }

    /// Removes node `id` with all its edges; every larger id moves down by one.
    /// Returns *false* if `id` is out of range.
    pub fn remove_node(&mut self, id: Node) -> bool {
        if id >= self.number_of_nodes() {
            return false;
        }

        let outgoing: usize = self
            .cells
            .adjacent(id)
            .iter()
            .map(|&v| self.num_parallel_edges(id, v))
            .sum();
        let removed = if self.directed {
            let incoming: usize = self
                .cells
                .incident(id)
                .iter()
                .map(|&v| self.num_parallel_edges(v, id))
                .sum();
            outgoing + incoming - self.num_parallel_edges(id, id)
        } else {
            outgoing
        };

        self.num_edges -= removed as NumEdges;
        self.cells.remove(id);

        debug!(id, removed, "removed node from multi edges");
        true
    }

    /// Returns every edge as `(edge, weight, type)`, parallel edges in insertion order.
    /// Undirected stores report every edge once as `(u, v)` with `u <= v`.
    pub fn edges(&self) -> impl Iterator<Item = (Edge, Weight, EdgeType)> + '_ {
        (0..self.number_of_nodes()).flat_map(move |u| {
            self.cells
                .adjacent(u)
                .iter()
                .map(move |&v| Edge(u, v))
                .filter(move |edge| self.directed || edge.is_normalized())
                .flat_map(move |edge| {
                    self.parallel_edges(edge.0, edge.1)
                        .iter()
                        .map(move |&(w, t)| (edge, w, t))
                })
        })
    }
}

impl Default for MultiEdges {
    fn default() -> Self {
        Self::new(true, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn parallel_edges_keep_insertion_order() {
        let mut edges = MultiEdges::new(true, 3);
        assert!(edges.add_edge(0, 1, 1.0, DEFAULT_TYPE));
        assert!(edges.add_edge(0, 1, 1.0, DEFAULT_TYPE));
        assert!(edges.add_edge(0, 1, 2.5, 3));
        assert!(!edges.add_edge(0, 3, 1.0, 0));

        assert_eq!(edges.num_parallel_edges(0, 1), 3);
        assert_eq!(edges.edge_weights(0, 1), vec![1.0, 1.0, 2.5]);
        assert_eq!(edges.edge_types(0, 1), vec![0, 0, 3]);
        assert_eq!(edges.num_parallel_edges(1, 0), 0);
        assert_eq!(edges.number_of_edges(), 3);

        assert!(edges.remove_edge(0, 1));
        assert_eq!(edges.edge_weights(0, 1), vec![1.0, 1.0]);
        assert_eq!(edges.remove_all_edges(0, 1), 2);
        assert!(!edges.contains_edge(0, 1));
        assert!(!edges.remove_edge(0, 1));
        assert_eq!(edges.number_of_edges(), 0);
    }

    #[test]
    fn undirected_cells_are_mirrored() {
        let mut edges = MultiEdges::new(false, 3);
        edges.add_edge(0, 2, 1.0, 1);
        edges.add_edge(2, 0, 2.0, 2);
        edges.add_edge(1, 1, 3.0, 3);
        edges.add_edge(1, 1, 4.0, 4);

        assert_eq!(edges.number_of_edges(), 4);
        assert_eq!(edges.edge_weights(0, 2), vec![1.0, 2.0]);
        assert_eq!(edges.edge_weights(2, 0), vec![1.0, 2.0]);
        assert_eq!(edges.num_parallel_edges(1, 1), 2);

        for o in EdgeOrientation::ALL {
            assert_eq!(edges.neighbourhood(2, o).collect_vec(), vec![0]);
            assert_eq!(edges.degree(1, o), 1);
        }
        assert_eq!(
            edges.edges().collect_vec(),
            vec![
                (Edge(0, 2), 1.0, 1),
                (Edge(0, 2), 2.0, 2),
                (Edge(1, 1), 3.0, 3),
                (Edge(1, 1), 4.0, 4)
            ]
        );

        assert!(edges.remove_edge(0, 2));
        assert_eq!(edges.edge_types(2, 0), vec![1]);

        assert!(edges.remove_node(1));
        assert_eq!(edges.number_of_edges(), 1);
        assert_eq!(edges.edge_weights(1, 0), vec![1.0]);
    }

    #[test]
    fn directed_self_loop_listed_once() {
        let mut edges = MultiEdges::new(true, 2);
        edges.add_edge(0, 0, 1.0, 0);
        edges.add_edge(0, 0, 2.0, 1);
        edges.add_edge(1, 0, 3.0, 2);

        let und = edges.neighbourhood_edges(0, EdgeOrientation::Und);
        assert_eq!(und[0].0, 0);
        assert_eq!(und[0].1.as_slice(), &[(1.0, 0), (2.0, 1)]);
        assert_eq!(und[1].1.as_slice(), &[(3.0, 2)]);

        let mutual = edges.neighbourhood_edges(0, EdgeOrientation::Mutual);
        assert_eq!(mutual.len(), 1);
        assert_eq!(mutual[0].1.len(), 2);

        assert_eq!(edges.neighbourhood_edges(0, EdgeOrientation::In)[0].1.len(), 2);
        for o in EdgeOrientation::ALL {
            assert_eq!(edges.edge_counts_of(0, o)[0], (0, 2));
        }
    }

    #[test]
    fn directed_views_concatenate_parallel_lists() {
        let mut edges = MultiEdges::new(true, 3);
        edges.add_edge(0, 1, 1.0, 0);
        edges.add_edge(1, 0, 2.0, 0);
        edges.add_edge(1, 0, 3.0, 0);
        edges.add_edge(2, 1, 4.0, 0);

        let und = edges.neighbourhood_edges(1, EdgeOrientation::Und);
        assert_eq!(und.len(), 2);
        assert_eq!(und[0].0, 0);
        assert_eq!(und[0].1.as_slice(), &[(1.0, 0), (2.0, 0), (3.0, 0)]);
        assert_eq!(und[1].0, 2);

        assert_eq!(edges.edge_counts_of(0, EdgeOrientation::Mutual), vec![(1, 3)]);
        assert_eq!(edges.edge_counts_of(1, EdgeOrientation::In), vec![(0, 1), (2, 1)]);
        assert_eq!(edges.degree(1, EdgeOrientation::Und), 2);
        assert_eq!(edges.degree(0, EdgeOrientation::Mutual), 1);

        assert!(edges.remove_node(0));
        assert_eq!(edges.number_of_edges(), 1);
        assert_eq!(edges.edge_weights(1, 0), vec![4.0]);
    }
}
