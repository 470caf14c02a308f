//! Error types for the stats sampler.
//!
//! Everything below the sampling loop fails loudly through `Result`; the
//! loop is the single containment point. Missing snapshot keys are not
//! errors (they degrade to defaults), so the variants here only cover the
//! three failure classes a cycle can actually hit.

use thiserror::Error;

/// Type alias for Results using [`SamplerError`].
pub type SamplerResult<T> = Result<T, SamplerError>;

/// Failure classes for one sampling cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplerError {
    /// The host's stats capability could not produce a snapshot.
    #[error("failed to acquire stats snapshot: {0}")]
    Snapshot(String),

    /// The snapshot was produced but its shape cannot be aggregated
    /// (non-array `worker_status`, worker record without `last_status`,
    /// wrong-typed counters).
    #[error("malformed stats snapshot: {0}")]
    MalformedSnapshot(String),

    /// The injected log sink rejected the finished line.
    #[error("log sink rejected stats line: {0}")]
    Sink(String),
}
