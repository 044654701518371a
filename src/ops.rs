use std::{borrow::Borrow, hash::Hash};

use itertools::Itertools;
use ndarray::Array2;
use num::{One, Zero};

use crate::{
    edges::NodeIter,
    error::Result,
    matrix::{cell_value, CsrMatrix},
    *,
};

/// Operations shared by all object-level graphs ([`Graph`] and [`Multigraph`]).
///
/// Objects of type `T` are mapped to dense ids by an [`Index`]. Methods taking objects
/// treat absent objects as isolated: they return `false`, empty iterators or zero.
pub trait GraphOps<T>: Sized
where
    T: Eq + Hash + Clone,
{
    /// Returns the index mapping objects to ids
    fn index(&self) -> &Index<T>;

    /// Returns the number of edges
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if `(u, v)` and `(v, u)` are distinct edges
    fn is_directed(&self) -> bool;

    /// Returns *true* if the graph keeps a weight per edge
    fn is_weighted(&self) -> bool;

    /// Adds a node for `obj`. Returns *false* if `obj` already is a node.
    fn add_node(&mut self, obj: T) -> bool;

    /// Removes the node of `obj` with all its edges.
    /// Returns *false* if `obj` is not a node.
    fn remove_node<Q>(&mut self, obj: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized;

    /// Adds an edge from `origin` to `destination`.
    ///
    /// If an endpoint is missing, it is added if `insert_missing_nodes` is set; otherwise
    /// nothing changes and *false* is returned. Nodes inserted this way stay in the graph
    /// even if the edge itself cannot be added.
    fn add_edge(
        &mut self,
        origin: &T,
        destination: &T,
        weight: Weight,
        edge_type: EdgeType,
        insert_missing_nodes: bool,
    ) -> bool;

    /// Removes an edge from `origin` to `destination`. Returns *false* if there is none.
    fn remove_edge<Q>(&mut self, origin: &Q, destination: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized;

    /// Returns *true* if there is an edge from `origin` to `destination`
    fn contains_edge<Q>(&self, origin: &Q, destination: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized;

    /// Replaces the weight of an existing edge and returns whether it exists.
    /// Fails with [`GraphError::Unsupported`] for variants without a single weight per edge.
    fn update_edge_weight<Q>(&mut self, origin: &Q, destination: &Q, weight: Weight) -> Result<bool>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized;

    /// Returns the graph on the same nodes containing exactly the edges `(u, v)`, `u != v`,
    /// missing in `self`. New edges carry [`DEFAULT_WEIGHT`] and [`DEFAULT_TYPE`].
    /// Fails with [`GraphError::Unsupported`] for multigraphs.
    fn complement(&self) -> Result<Self>;

    /// Returns the neighbourhood of node id `u` in ascending id order
    fn neighbour_ids(&self, u: Node, orientation: EdgeOrientation) -> NodeIter<'_>;

    /// Returns the size of the neighbourhood of node id `u`
    fn degree_of(&self, u: Node, orientation: EdgeOrientation) -> NumNodes;

    /// Returns the neighbourhood of node id `u` with the number of edges to each neighbour
    fn edge_counts_of(&self, u: Node, orientation: EdgeOrientation) -> Vec<(Node, NumEdges)>;

    /// Returns all edges as `(origin, destination, weight, type)`, ordered by the ids of
    /// origin and destination. Undirected graphs report every edge once.
    fn edges<'a>(&'a self) -> impl Iterator<Item = (&'a T, &'a T, Weight, EdgeType)> + 'a
    where
        T: 'a;

    /// Returns the number of nodes
    fn number_of_nodes(&self) -> NumNodes {
        self.index().num_objects()
    }

    /// Returns all node objects in id order
    fn vertices(&self) -> std::slice::Iter<'_, T> {
        self.index().objects()
    }

    /// Returns *true* if `obj` is a node
    fn contains_vertex<Q>(&self, obj: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index().contains_object(obj)
    }

    /// Adds an edge with [`DEFAULT_WEIGHT`] and [`DEFAULT_TYPE`], inserting missing endpoints
    fn add_default_edge(&mut self, origin: &T, destination: &T) -> bool {
        self.add_edge(origin, destination, DEFAULT_WEIGHT, DEFAULT_TYPE, true)
    }

    /// Returns the neighbours of `obj` in the given orientation, ordered by id
    fn neighbourhood<'a, Q>(
        &'a self,
        obj: &Q,
        orientation: EdgeOrientation,
    ) -> impl Iterator<Item = &'a T> + 'a
    where
        T: Borrow<Q> + 'a,
        Q: Eq + Hash + ?Sized,
    {
        let index = self.index();
        index
            .object_to_idx(obj)
            .into_iter()
            .flat_map(move |u| self.neighbour_ids(u, orientation))
            .filter_map(move |v| index.idx_to_object(v))
    }

    /// Returns the size of the neighbourhood of `obj` (zero if `obj` is not a node)
    fn degree<Q>(&self, obj: &Q, orientation: EdgeOrientation) -> NumNodes
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index()
            .object_to_idx(obj)
            .map_or(0, |u| self.degree_of(u, orientation))
    }

    /// Returns the degrees of all nodes in id order
    fn degrees(&self, orientation: EdgeOrientation) -> impl Iterator<Item = NumNodes> + '_ {
        self.index()
            .all_ids()
            .map(move |u| self.degree_of(u, orientation))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self, orientation: EdgeOrientation) -> NumNodes {
        self.degrees(orientation).max().unwrap_or(0)
    }

    /// Returns `(degree, number of nodes)` sorted by degree
    fn degree_distribution(&self, orientation: EdgeOrientation) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees(orientation)
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }

    /// Returns the mean degree or `0.0` for a graph without nodes
    fn average_degree(&self, orientation: EdgeOrientation) -> f64 {
        let n = self.number_of_nodes();
        if n == 0 {
            return 0.0;
        }
        self.degrees(orientation).map(f64::from).sum::<f64>() / n as f64
    }

    /// Returns the dense `n x n` adjacency matrix in id order.
    /// Cell `(u, v)` counts the edges between `u` and `v` in the given orientation
    /// (`1` for simple graphs).
    fn adjacency_matrix<C>(&self, orientation: EdgeOrientation) -> Array2<C>
    where
        C: Clone + Zero + One,
    {
        let n = self.number_of_nodes() as usize;
        let mut matrix = Array2::zeros((n, n));
        for u in self.index().all_ids() {
            for (v, count) in self.edge_counts_of(u, orientation) {
                matrix[[u as usize, v as usize]] = cell_value(count);
            }
        }
        matrix
    }

    /// Sparse version of [`GraphOps::adjacency_matrix`]
    fn sparse_adjacency_matrix<C>(&self, orientation: EdgeOrientation) -> CsrMatrix<C>
    where
        C: Zero + One,
    {
        CsrMatrix::from_rows(self.index().all_ids().map(|u| {
            self.edge_counts_of(u, orientation)
                .into_iter()
                .map(|(v, count)| (v, cell_value(count)))
        }))
    }
}
