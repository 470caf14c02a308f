//! Raw runtime stats snapshots and their shape handling.
//!
//! The host server hands over its stats as loosely shaped JSON. A
//! single-process server reports a flat object (`running`, `backlog`,
//! `pool_capacity`, `max_threads`, `requests_count`); a clustered server
//! reports worker counts plus a `worker_status` array whose entries nest the
//! same five fields under `last_status`. Presence of the `workers` key is the
//! sole discriminator between the two shapes.
//!
//! Missing scalar fields are a policy, not an error: they read as zero
//! (worker counts as one, reflecting the single implicit worker). Shape
//! violations are real faults. A `worker_status` that is not an array, or a
//! worker record without a usable `last_status`, surfaces as
//! [`SamplerError::MalformedSnapshot`](crate::error::SamplerError).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SamplerError, SamplerResult};

/// One raw stats snapshot as produced by the host runtime.
///
/// The wrapped JSON is kept opaque; all interpretation happens through the
/// accessors below so the two topologies stay behind one surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    raw: Value,
}

impl Snapshot {
    /// Wrap a raw stats value.
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Whether this snapshot came from a clustered (multi-worker) server.
    ///
    /// The `workers` key only ever appears in the clustered shape.
    pub fn is_clustered(&self) -> bool {
        self.raw.get("workers").is_some()
    }

    /// Total worker count. Defaults to 1: a single-process server is one
    /// implicit worker.
    pub fn workers(&self) -> u64 {
        self.raw.get("workers").and_then(Value::as_u64).unwrap_or(1)
    }

    /// Workers that have finished booting. Defaults to 1, same as
    /// [`workers`](Self::workers).
    pub fn booted_workers(&self) -> u64 {
        self.raw
            .get("booted_workers")
            .and_then(Value::as_u64)
            .unwrap_or(1)
    }

    /// Workers from a previous generation still draining (phased restarts).
    pub fn old_workers(&self) -> u64 {
        self.raw
            .get("old_workers")
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }

    /// Read the flat single-process status off the snapshot root.
    pub fn single_record(&self) -> SamplerResult<WorkerStatus> {
        WorkerStatus::deserialize(&self.raw).map_err(|e| {
            SamplerError::MalformedSnapshot(format!("bad single-process status: {}", e))
        })
    }

    /// Extract one status record per worker from `worker_status`.
    ///
    /// No defaults are invented at this level: a missing or non-array
    /// `worker_status`, or a record whose `last_status` cannot be read, is a
    /// malformed snapshot.
    pub fn worker_records(&self) -> SamplerResult<Vec<WorkerStatus>> {
        let entries = self
            .raw
            .get("worker_status")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                SamplerError::MalformedSnapshot(
                    "clustered snapshot has no worker_status array".to_string(),
                )
            })?;

        entries
            .iter()
            .enumerate()
            .map(|(index, worker)| {
                let last_status = worker.get("last_status").ok_or_else(|| {
                    SamplerError::MalformedSnapshot(format!(
                        "worker record {} has no last_status",
                        index
                    ))
                })?;
                WorkerStatus::deserialize(last_status).map_err(|e| {
                    SamplerError::MalformedSnapshot(format!(
                        "worker record {} has a bad last_status: {}",
                        index, e
                    ))
                })
            })
            .collect()
    }
}

impl From<Value> for Snapshot {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}

/// The five core figures one worker reports (or the whole server, in
/// single-process mode).
///
/// Unknown fields in the source object (`started_at`, `phase`, …) are
/// ignored; missing fields read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerStatus {
    /// Spawned threads, whether working or idle.
    pub running: u64,
    /// Requests waiting for a free thread.
    pub backlog: u64,
    /// Threads currently available to take a request.
    pub pool_capacity: u64,
    /// Configured upper bound of the thread pool.
    pub max_threads: u64,
    /// Requests handled since the worker started.
    pub requests_count: u64,
}

impl WorkerStatus {
    /// Threads occupied by a request. Signed: a snapshot claiming more
    /// capacity than threads goes negative rather than being clamped.
    pub fn busy_threads(&self) -> i64 {
        self.max_threads as i64 - self.pool_capacity as i64
    }

    /// Whether this worker holds at least one busy thread.
    pub fn is_busy(&self) -> bool {
        self.busy_threads() > 0
    }

    /// Whether this worker reported any running threads.
    pub fn is_running(&self) -> bool {
        self.running > 0
    }
}
