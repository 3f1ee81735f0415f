//! Error types shared by the densest subgraph solvers.
//!
//! An empty or zero-density result is not an error : each algorithm documents
//! its return convention for degenerate graphs.

use thiserror::Error;

/// Result type for the density algorithms
pub type Result<T> = std::result::Result<T, DensestError>;

/// Errors reported by the density algorithms and the flow solver.
#[derive(Debug, Error)]
pub enum DensestError {
    /// A caller-supplied argument is unusable (k = 0, negative or NaN threshold ...)
    #[error("invalid argument : {0}")]
    InvalidArgument(String),

    /// The input graph violates the contract (self loop or parallel edge).
    /// Such graphs are rejected, never silently repaired.
    #[error("malformed graph : {0}")]
    MalformedGraph(String),

    /// The max-flow collaborator did not converge or returned a cut whose value
    /// disagrees with the capacity of the partition it reported.
    #[error("max-flow solver failure : {0}")]
    SolverFailure(String),
}
