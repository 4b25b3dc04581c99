//! Errors returned by the harness.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The timing loop needs at least one invocation to derive a mean
    #[error("iteration count must be at least 1")]
    ZeroIterations,

    /// Bound-call and closure wrappers disagreed for the same input
    #[error("{operation}: bind returned {bind}, closure returned {closure}")]
    Mismatch {
        operation: &'static str,
        bind: i32,
        closure: i32,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
