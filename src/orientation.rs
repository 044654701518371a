use std::{fmt::Display, str::FromStr};

use crate::error::GraphError;

/// Which edges of a node a query refers to.
///
/// - [`EdgeOrientation::Out`]: edges leaving the node (*adjacent*)
/// - [`EdgeOrientation::In`]: edges entering the node (*incident*)
/// - [`EdgeOrientation::Und`]: union of both (*neighbours*)
/// - [`EdgeOrientation::Mutual`]: intersection of both (reciprocated edges)
///
/// For undirected graphs all four orientations describe the same neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeOrientation {
    Out,
    In,
    Und,
    Mutual,
}

impl EdgeOrientation {
    /// All orientations
    pub const ALL: [EdgeOrientation; 4] = [Self::Out, Self::In, Self::Und, Self::Mutual];

    /// Swaps `Out` and `In`; `Und` and `Mutual` stay as they are.
    ///
    /// # Example
    /// ```
    /// use relgraph::EdgeOrientation;
    ///
    /// assert_eq!(EdgeOrientation::Out.invert(), EdgeOrientation::In);
    /// assert_eq!(EdgeOrientation::Und.invert(), EdgeOrientation::Und);
    /// ```
    pub const fn invert(self) -> Self {
        match self {
            Self::Out => Self::In,
            Self::In => Self::Out,
            other => other,
        }
    }

    /// Swaps `Und` and `Mutual`; `Out` and `In` stay as they are.
    ///
    /// # Example
    /// ```
    /// use relgraph::EdgeOrientation;
    ///
    /// assert_eq!(EdgeOrientation::Und.complement(), EdgeOrientation::Mutual);
    /// assert_eq!(EdgeOrientation::In.complement(), EdgeOrientation::In);
    /// ```
    pub const fn complement(self) -> Self {
        match self {
            Self::Und => Self::Mutual,
            Self::Mutual => Self::Und,
            other => other,
        }
    }

    /// Returns *true* for orientations that do not depend on the edge direction
    pub const fn is_symmetric(self) -> bool {
        matches!(self, Self::Und | Self::Mutual)
    }
}

impl Display for EdgeOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Out => "out",
            Self::In => "in",
            Self::Und => "und",
            Self::Mutual => "mutual",
        })
    }
}

impl FromStr for EdgeOrientation {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "out" | "adjacent" => Ok(Self::Out),
            "in" | "incident" => Ok(Self::In),
            "und" | "undirected" | "neighbour" | "neighbor" => Ok(Self::Und),
            "mutual" => Ok(Self::Mutual),
            _ => Err(GraphError::UnknownOrientation(s.to_string())),
        }
    }
}
