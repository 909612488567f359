//! Error types for graph storage.

use thiserror::Error;

/// Which allocation context an operation drew from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocContext {
    /// Vertex storage.
    Vertex,
    /// Arc (half-edge) storage. One edge pair takes two arcs.
    Arc,
}

impl core::fmt::Display for AllocContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AllocContext::Vertex => f.write_str("vertex"),
            AllocContext::Arc => f.write_str("arc"),
        }
    }
}

/// The error type for allocation failures.
///
/// Allocation never hands out a placeholder handle; callers see this error
/// instead and the graph is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The context reached its configured slot limit.
    #[error("{context} storage exhausted (limit {limit} slots)")]
    Exhausted {
        /// Context that ran out.
        context: AllocContext,
        /// Configured limit in slots.
        limit: usize,
    },
}

impl AllocError {
    /// Returns the context that failed.
    pub fn context(&self) -> AllocContext {
        match self {
            AllocError::Exhausted { context, .. } => *context,
        }
    }
}
