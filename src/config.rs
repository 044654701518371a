/*!
# Graph Configuration

Collaborators often pick the graph variant from configuration (a command-line flag, a
settings file). [`GraphKind`] names a variant and parses from strings such as
`"directed-weighted"`; [`GraphBuilder`] turns a kind into an empty graph.

```
use relgraph::prelude::*;

let kind: GraphKind = "undirected-weighted".parse().unwrap();
let mut g: DynGraph<u32> = GraphBuilder::new().kind(kind).capacity(16).build().unwrap();

g.add_edge(&1, &2, 0.5, DEFAULT_TYPE, true);
assert!(g.contains_edge(&2, &1));
assert!(g.is_weighted());
```
*/

use std::{fmt::Display, hash::Hash, str::FromStr};

use tracing::debug;

use crate::{edges::AnyEdges, error::Result, *};

/// Variant of a graph: direction, weights and multiplicity.
/// Multigraphs always keep weights.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GraphKind {
    pub directed: bool,
    pub weighted: bool,
    pub multi: bool,
}

impl Default for GraphKind {
    fn default() -> Self {
        Self::simple(true, false)
    }
}

impl GraphKind {
    /// Kind of a simple graph
    pub const fn simple(directed: bool, weighted: bool) -> Self {
        Self {
            directed,
            weighted,
            multi: false,
        }
    }

    /// Kind of a multigraph
    pub const fn multi(directed: bool) -> Self {
        Self {
            directed,
            weighted: true,
            multi: true,
        }
    }
}

impl Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.directed { "directed" } else { "undirected" })?;
        if self.multi {
            f.write_str("-multi")
        } else if self.weighted {
            f.write_str("-weighted")
        } else {
            Ok(())
        }
    }
}

impl FromStr for GraphKind {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        let (direction, rest) = normalized
            .split_once('-')
            .unwrap_or((normalized.as_str(), ""));

        let directed = match direction {
            "directed" => true,
            "undirected" => false,
            _ => return Err(GraphError::UnknownGraphKind(s.to_string())),
        };
        match rest {
            "" | "unweighted" => Ok(Self::simple(directed, false)),
            "weighted" => Ok(Self::simple(directed, true)),
            "multi" => Ok(Self::multi(directed)),
            _ => Err(GraphError::UnknownGraphKind(s.to_string())),
        }
    }
}

/// Builds empty graphs of a configured [`GraphKind`].
///
/// Setters consume and return the builder, so a configuration reads as one chain.
#[derive(Debug, Copy, Clone, Default)]
pub struct GraphBuilder {
    kind: GraphKind,
    capacity: usize,
}

impl GraphBuilder {
    /// Creates a builder for directed unweighted simple graphs
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the complete kind
    pub fn kind(mut self, kind: GraphKind) -> Self {
        self.kind = kind;
        self
    }

    /// Updates the direction
    pub fn directed(mut self, directed: bool) -> Self {
        self.kind.directed = directed;
        self
    }

    /// Updates whether edges keep weights; ignored for multigraphs
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.kind.weighted = weighted;
        self
    }

    /// Updates whether parallel edges are permitted
    pub fn multi(mut self, multi: bool) -> Self {
        self.kind.multi = multi;
        self
    }

    /// Reserves index space for `capacity` nodes
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns the configured kind
    pub fn graph_kind(&self) -> GraphKind {
        if self.kind.multi {
            GraphKind::multi(self.kind.directed)
        } else {
            self.kind
        }
    }

    /// Builds an empty simple graph.
    /// Fails with [`GraphError::Unsupported`] if a multigraph is configured;
    /// use [`GraphBuilder::build_multigraph`] instead.
    pub fn build<T>(&self) -> Result<DynGraph<T>>
    where
        T: Eq + Hash + Clone,
    {
        let kind = self.graph_kind();
        if kind.multi {
            return Err(GraphError::unsupported("build", "GraphBuilder for multigraphs"));
        }

        debug!(%kind, capacity = self.capacity, "building graph");
        let mut graph = Graph::with_store(AnyEdges::new(kind.directed, kind.weighted, 0));
        graph.reserve(self.capacity);
        Ok(graph)
    }

    /// Builds an empty multigraph with the configured direction.
    /// The `multi` and `weighted` settings are ignored.
    pub fn build_multigraph<T>(&self) -> Multigraph<T>
    where
        T: Eq + Hash + Clone,
    {
        debug!(
            kind = %GraphKind::multi(self.kind.directed),
            capacity = self.capacity,
            "building multigraph"
        );
        Multigraph::with_capacity(self.kind.directed, self.capacity)
    }
}
