/*!
# Edge Stores

An edge store keeps the edges between the dense ids `0..n` of one graph. Every store
composes two [`AutoRelation`]s sharing the same pair structure:

- the *weight relation* holding one [`Weight`] per edge, and
- the *type relation* holding one [`EdgeType`] per edge.

Stores vary along two axes:

- **Direction**: [`DirectedEdges`] keeps incoming and outgoing rows apart, while
  [`UndirectedEdges`] mirrors every edge so that all orientations coincide.
- **Weight**: the row type of the weight relation. [`WeightedAdjacency`] stores a weight
  per edge, [`UnweightedAdjacency`] reports [`DEFAULT_WEIGHT`] for every edge. The
  [`WeightAxis`] trait decides how the two weights of a node reached in both
  directions combine.

This yields the four stores [`DirectedWeightedEdges`], [`DirectedUnweightedEdges`],
[`UndirectedWeightedEdges`] and [`UndirectedUnweightedEdges`]. [`AnyEdges`] picks one of
them at runtime.

All queries accept out-of-range ids and treat them as isolated nodes.
*/

mod any;
mod directed;
mod iter;
pub(crate) mod merge;
mod undirected;

pub use any::*;
pub use directed::*;
pub use iter::*;
pub use undirected::*;

use crate::{edge::*, node::*, orientation::EdgeOrientation, relation::*};

/// Decides how the weight axis of a store behaves
pub trait WeightAxis: Adjacency<Value = Weight> {
    /// Weight reported for a node reached by an incoming edge of weight `incoming`
    /// and an outgoing edge of weight `outgoing`
    fn combine(incoming: Weight, outgoing: Weight) -> Weight;
}

impl WeightAxis for WeightedAdjacency<Weight> {
    fn combine(incoming: Weight, outgoing: Weight) -> Weight {
        incoming + outgoing
    }
}

impl WeightAxis for UnweightedAdjacency<Weight> {
    fn combine(_incoming: Weight, _outgoing: Weight) -> Weight {
        DEFAULT_WEIGHT
    }
}

/// Uniform interface of all simple edge stores.
///
/// Orientation names follow the edges as seen from the queried node `u`:
/// - *incident*: nodes `v` with an edge `(v, u)`
/// - *adjacent*: nodes `v` with an edge `(u, v)`
/// - *neighbour*: union of both
/// - *mutual*: intersection of both
///
/// For undirected stores all four coincide.
pub trait Edges: Clone {
    /// Returns *true* if `(u, v)` and `(v, u)` are distinct edges
    fn is_directed(&self) -> bool;

    /// Returns *true* if the store keeps a weight per edge
    fn is_weighted(&self) -> bool;

    /// Returns the number of nodes
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of edges; a mirrored undirected edge counts once
    fn number_of_edges(&self) -> NumEdges;

    /// Creates an empty store of the same variant with nodes `0..n`
    fn empty_like(&self, n: NumNodes) -> Self;

    /// Registers node `id`. Fails if `id` is not the next sequential id.
    fn add_user(&mut self, id: Node) -> bool;

    /// Removes node `id` with all its edges; every larger id moves down by one.
    /// Returns *false* if `id` is out of range.
    fn remove_node(&mut self, id: Node) -> bool;

    /// Adds the edge `(origin, destination)`.
    /// Returns *false* if an id is out of range or the edge already exists.
    fn add_edge(
        &mut self,
        origin: Node,
        destination: Node,
        weight: Weight,
        edge_type: EdgeType,
    ) -> bool;

    /// Removes the edge. Returns *false* if it did not exist.
    fn remove_edge(&mut self, origin: Node, destination: Node) -> bool;

    /// Replaces the weight of an existing edge.
    /// Unweighted stores only report whether the edge exists.
    fn update_edge_weight(&mut self, origin: Node, destination: Node, weight: Weight) -> bool;

    /// Replaces the type of an existing edge. Returns *false* if the edge does not exist.
    fn update_edge_type(&mut self, origin: Node, destination: Node, edge_type: EdgeType)
        -> bool;

    /// Returns *true* if the edge exists
    fn contains_edge(&self, origin: Node, destination: Node) -> bool;

    /// Returns the weight of the edge or [`MISSING_WEIGHT`] if it does not exist
    fn edge_weight(&self, origin: Node, destination: Node) -> Weight;

    /// Returns the type of the edge or [`MISSING_TYPE`] if it does not exist
    fn edge_type(&self, origin: Node, destination: Node) -> EdgeType;

    fn incident_nodes(&self, u: Node) -> NodeIter<'_>;
    fn adjacent_nodes(&self, u: Node) -> NodeIter<'_>;
    fn neighbour_nodes(&self, u: Node) -> NodeIter<'_>;
    fn mutual_nodes(&self, u: Node) -> NodeIter<'_>;

    fn incident_weights(&self, u: Node) -> EntryIter<'_, Weight>;
    fn adjacent_weights(&self, u: Node) -> EntryIter<'_, Weight>;
    /// A node reached in both directions reports the combined weight of both edges
    /// (see [`WeightAxis::combine`]). In directed stores a self-loop is reached in
    /// both directions, so a weighted self-loop reports twice its weight.
    fn neighbour_weights(&self, u: Node) -> EntryIter<'_, Weight>;
    /// Reports the combined weight of both edges
    fn mutual_weights(&self, u: Node) -> EntryIter<'_, Weight>;

    fn incident_types(&self, u: Node) -> EntryIter<'_, EdgeType>;
    fn adjacent_types(&self, u: Node) -> EntryIter<'_, EdgeType>;
    /// A node reached in both directions reports the type of the outgoing edge
    fn neighbour_types(&self, u: Node) -> EntryIter<'_, EdgeType>;
    /// Reports the type of the outgoing edge
    fn mutual_types(&self, u: Node) -> EntryIter<'_, EdgeType>;

    fn incident_degree(&self, u: Node) -> NumNodes;
    fn adjacent_degree(&self, u: Node) -> NumNodes;
    fn neighbour_degree(&self, u: Node) -> NumNodes;
    fn mutual_degree(&self, u: Node) -> NumNodes;

    /// Returns the neighbourhood of `u` in the given orientation
    fn neighbourhood(&self, u: Node, orientation: EdgeOrientation) -> NodeIter<'_> {
        match orientation {
            EdgeOrientation::Out => self.adjacent_nodes(u),
            EdgeOrientation::In => self.incident_nodes(u),
            EdgeOrientation::Und => self.neighbour_nodes(u),
            EdgeOrientation::Mutual => self.mutual_nodes(u),
        }
    }

    /// Weighted version of [`Edges::neighbourhood`]
    fn neighbourhood_weights(&self, u: Node, orientation: EdgeOrientation) -> EntryIter<'_, Weight> {
        match orientation {
            EdgeOrientation::Out => self.adjacent_weights(u),
            EdgeOrientation::In => self.incident_weights(u),
            EdgeOrientation::Und => self.neighbour_weights(u),
            EdgeOrientation::Mutual => self.mutual_weights(u),
        }
    }

    /// Typed version of [`Edges::neighbourhood`]
    fn neighbourhood_types(
        &self,
        u: Node,
        orientation: EdgeOrientation,
    ) -> EntryIter<'_, EdgeType> {
        match orientation {
            EdgeOrientation::Out => self.adjacent_types(u),
            EdgeOrientation::In => self.incident_types(u),
            EdgeOrientation::Und => self.neighbour_types(u),
            EdgeOrientation::Mutual => self.mutual_types(u),
        }
    }

    /// Returns the size of the neighbourhood of `u` in the given orientation
    fn degree(&self, u: Node, orientation: EdgeOrientation) -> NumNodes {
        match orientation {
            EdgeOrientation::Out => self.adjacent_degree(u),
            EdgeOrientation::In => self.incident_degree(u),
            EdgeOrientation::Und => self.neighbour_degree(u),
            EdgeOrientation::Mutual => self.mutual_degree(u),
        }
    }

    /// Returns all edges with weight and type, ordered by origin and then destination.
    /// Undirected stores report every edge once as `(u, v)` with `u <= v`.
    fn edges(&self) -> impl Iterator<Item = (Edge, Weight, EdgeType)> + '_ {
        let directed = self.is_directed();
        (0..self.number_of_nodes()).flat_map(move |u| {
            self.adjacent_weights(u)
                .zip(self.adjacent_types(u))
                .map(move |((v, weight), (_, edge_type))| (Edge(u, v), weight, edge_type))
                .filter(move |(edge, _, _)| directed || edge.is_normalized())
        })
    }
}

pub(crate) mod macros {
    /// Methods shared by the directed and undirected stores.
    /// Both keep fields `weights`, `types` and `num_edges` and have a generic `A: WeightAxis`.
    macro_rules! impl_common_edges {
        ($self:ident) => {
            fn is_weighted(&$self) -> bool {
                A::STORES_VALUES
            }

            fn number_of_nodes(&$self) -> NumNodes {
                $self.weights.number_of_nodes()
            }

            fn number_of_edges(&$self) -> NumEdges {
                $self.num_edges
            }

            fn empty_like(&$self, n: NumNodes) -> Self {
                Self::new(n)
            }

            fn add_user(&mut $self, id: Node) -> bool {
                if id != $self.number_of_nodes() {
                    return false;
                }
                $self.weights.add_user(id) && $self.types.add_user(id)
            }

            fn contains_edge(&$self, origin: Node, destination: Node) -> bool {
                $self.weights.contains(origin, destination)
            }

            fn edge_weight(&$self, origin: Node, destination: Node) -> Weight {
                $self.weights.value(origin, destination).unwrap_or(MISSING_WEIGHT)
            }

            fn edge_type(&$self, origin: Node, destination: Node) -> EdgeType {
                $self.types.value(origin, destination).unwrap_or(MISSING_TYPE)
            }

            fn incident_degree(&$self, u: Node) -> NumNodes {
                $self.weights.incident(u).len() as NumNodes
            }

            fn adjacent_degree(&$self, u: Node) -> NumNodes {
                $self.weights.adjacent(u).len() as NumNodes
            }
        };
    }

    pub(super) use impl_common_edges;
}
