//! Error types for the benchmark harness
//!
//! Following the distilled error taxonomy: configuration errors are
//! recoverable (reported, process exits 1); protocol violations are not
//! (the process aborts rather than continue with corrupted slot state).

use thiserror::Error;

/// Result type alias used by the setup/configuration layer.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can surface before or while spinning up a run.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Wrong argument count, or an argument that doesn't parse as an integer.
    #[error("usage: flux-bench <iterations_millions> <read_thread_count> <write_thread_count> <read_write_thread_count> <processing_time>")]
    Usage,

    /// A parsed argument violates a structural invariant (e.g. no producers
    /// at all, or a requested ring capacity below the protocol minimum).
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// CPU affinity pinning failed. Logged and ignored by callers; this
    /// variant exists so the failure has a typed shape to log.
    #[error("failed to pin thread to cpu {cpu}: {source}")]
    Affinity {
        cpu: usize,
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        BenchError::InvalidConfig { message: message.into() }
    }
}
