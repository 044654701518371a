/*!
# Errors

Hot-path operations (edge insertion, lookups, removals) report absence through
`bool`, `Option` and sentinel values such as [`MISSING_WEIGHT`](crate::MISSING_WEIGHT).
[`GraphError`] is reserved for outcomes a caller has to tell apart from "absent":
a capability the variant does not offer, or configuration that cannot be parsed.
*/

use thiserror::Error;

/// Errors reported by graph variants and configuration parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The graph variant does not offer this operation
    #[error("`{operation}` is not supported by {variant}")]
    Unsupported {
        operation: &'static str,
        variant: &'static str,
    },

    /// A graph kind string could not be parsed
    #[error("unknown graph kind: {0}")]
    UnknownGraphKind(String),

    /// An edge orientation string could not be parsed
    #[error("unknown edge orientation: {0}")]
    UnknownOrientation(String),
}

impl GraphError {
    pub(crate) const fn unsupported(operation: &'static str, variant: &'static str) -> Self {
        Self::Unsupported { operation, variant }
    }

    /// Returns *true* if the error signals a missing capability
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
