/*!
`relgraph` is a sparse, mutable graph storage engine for graphs over arbitrary objects.
It is meant as the storage layer below community detection, link prediction,
propagation simulation and graph metrics.

# Representation

Objects of any type `T: Eq + Hash + Clone` are mapped to dense ids by an [`Index`].
We represent ids as [`Node`] `= u32` in the range `0..n` where `n` is the number of
nodes in the graph. Ids are *dense*: removing a node shifts every larger id down by
one, so ids must never be kept across a structural change.

Edges between ids live in sorted relations (see [`relation`]): every node has an
ascending row of its successors and one of its predecessors, so membership tests are
a binary search and neighbourhoods are returned in ascending id order.
Each edge carries a [`Weight`] (`f64`) and an [`EdgeType`] (`i32`).

### Variants

See the [`edges`] module for the edge stores:

- [`DirectedWeightedEdges`](edges::DirectedWeightedEdges)
- [`DirectedUnweightedEdges`](edges::DirectedUnweightedEdges)
- [`UndirectedWeightedEdges`](edges::UndirectedWeightedEdges)
- [`UndirectedUnweightedEdges`](edges::UndirectedUnweightedEdges)
- [`AnyEdges`](edges::AnyEdges), one of the above chosen at runtime

A [`Graph`] combines an [`Index`] with one of these stores; a [`Multigraph`] uses
[`MultiEdges`](multigraph::MultiEdges), which permits parallel edges.

### Orientations

Queries name the edges they refer to by an [`EdgeOrientation`]: outgoing (*adjacent*),
incoming (*incident*), their union (*neighbours*) or their intersection (*mutual*).
For undirected graphs all four coincide.

# Absence

Hot-path operations never panic on unknown objects or out-of-range ids. They report
absence through `bool`, `Option`, empty iterators and the sentinels
[`MISSING_WEIGHT`] (`NaN`) and [`MISSING_TYPE`]. A [`GraphError`] is only returned for
capabilities a variant lacks and for unparsable configuration.

# Usage

In most use-cases, `use relgraph::prelude::*;` suffices.

```
use relgraph::prelude::*;

let mut g: DirectedGraph<&str> = Graph::new();
for (u, v) in [("a", "b"), ("a", "d"), ("b", "d"), ("c", "a"), ("c", "e")] {
    g.add_default_edge(&u, &v);
}

let neighbours: Vec<_> = g.neighbourhood(&"c", EdgeOrientation::Und).collect();
assert_eq!(neighbours, vec![&"a", &"e"]);

g.remove_node(&"b");
assert_eq!(g.number_of_edges(), 3);
assert_eq!(g.index().object_to_idx(&"c"), Some(2));
```

# Logging

Structural changes (node removal, complement construction, builder selection) are
reported through [`tracing`] at `debug`/`trace` level. No subscriber is installed.
*/

pub mod config;
pub mod edge;
pub mod edges;
pub mod error;
pub mod graph;
pub mod index;
pub mod matrix;
pub mod multigraph;
pub mod node;
pub mod ops;
pub mod orientation;
pub mod relation;
pub(crate) mod testing;

pub use edge::*;
pub use error::GraphError;
pub use graph::*;
pub use index::Index;
pub use multigraph::Multigraph;
pub use node::*;
pub use orientation::EdgeOrientation;

/// `relgraph::prelude` includes ids, edges, orientations, all graph types and the
/// traits needed to query them.
pub mod prelude {
    pub use super::{
        config::{GraphBuilder, GraphKind},
        edge::*,
        edges::{
            AnyEdges, DirectedEdges, DirectedUnweightedEdges, DirectedWeightedEdges, Edges,
            EntryIter, NodeIter, UndirectedEdges, UndirectedUnweightedEdges,
            UndirectedWeightedEdges,
        },
        error::GraphError,
        graph::*,
        index::Index,
        multigraph::{MultiEdges, Multigraph, ParallelEdges},
        node::*,
        ops::GraphOps,
        orientation::EdgeOrientation,
    };
}
