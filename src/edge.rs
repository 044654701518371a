use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints: `Edge(origin, destination)`.
/// It is up to the edge store whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Weight attached to an edge
pub type Weight = f64;

/// Type label attached to an edge
pub type EdgeType = i32;

/// Weight of an edge inserted without an explicit weight and of every edge of an unweighted store
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Weight reported for a pair of nodes that is not connected
pub const MISSING_WEIGHT: Weight = Weight::NAN;

/// Type of an edge inserted without an explicit type
pub const DEFAULT_TYPE: EdgeType = 0;

/// Type reported for a pair of nodes that is not connected
pub const MISSING_TYPE: EdgeType = EdgeType::MIN;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loops_and_orientation() {
        let e = Edge(4, 1);
        assert!(!e.is_normalized());
        assert!(!e.is_loop());
        assert!(Edge(1, 4).is_normalized());
        assert!(Edge(2, 2).is_loop() && Edge(2, 2).is_normalized());
        assert_eq!(format!("{e}"), "(4,1)");
        assert_eq!(format!("{:?}", Edge(0, 3)), "(0,3)");
    }

    #[test]
    fn sentinels() {
        assert!(MISSING_WEIGHT.is_nan());
        assert_ne!(MISSING_TYPE, DEFAULT_TYPE);
        assert_eq!(DEFAULT_WEIGHT, 1.0);
    }
}
