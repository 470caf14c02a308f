//! Normalized per-cycle view over one stats snapshot.
//!
//! [`StatsView`] is built once per sampling cycle, read by the reporter, and
//! dropped. Both server topologies collapse into one aggregation model here:
//! a single-process snapshot contributes exactly one status record, a
//! clustered snapshot one record per worker, and every aggregate accessor
//! sums or counts over that record slice without caring which shape it came
//! from.
//!
//! Derived metrics deliberately skip the guards the host also skips:
//! `idle_workers` can go negative when a snapshot reports more busy than
//! booted workers, and `percent_busy_threads` divides by `max_threads`
//! without a zero check, so a pool-less snapshot yields a non-finite value
//! for the consumer to tolerate.

use std::slice;

use crate::error::SamplerResult;
use crate::snapshot::{Snapshot, WorkerStatus};

/// Where the per-worker records of a view came from.
///
/// The two variants carry the topology distinction; everything downstream
/// iterates [`records`](Self::records) and stays shape-agnostic.
#[derive(Debug, Clone)]
enum MetricSource {
    /// One implicit worker: the flat snapshot itself.
    Single(WorkerStatus),
    /// One record per worker, taken from `worker_status[].last_status`.
    Clustered(Vec<WorkerStatus>),
}

impl MetricSource {
    fn records(&self) -> &[WorkerStatus] {
        match self {
            MetricSource::Single(record) => slice::from_ref(record),
            MetricSource::Clustered(records) => records,
        }
    }
}

/// Immutable, normalized reading of one snapshot.
///
/// Constructed with the previous cycle's cumulative request count so the
/// view can expose [`requests_delta`](Self::requests_delta); no other state
/// crosses cycle boundaries.
#[derive(Debug, Clone)]
pub struct StatsView {
    workers: u64,
    booted_workers: u64,
    old_workers: u64,
    source: MetricSource,
    previous_requests_count: u64,
}

impl StatsView {
    /// Build a view from a raw snapshot.
    ///
    /// Missing scalar fields degrade to defaults; a structurally broken
    /// snapshot (see [`Snapshot::worker_records`]) is the one way this
    /// fails.
    pub fn new(snapshot: &Snapshot, previous_requests_count: u64) -> SamplerResult<Self> {
        let source = if snapshot.is_clustered() {
            MetricSource::Clustered(snapshot.worker_records()?)
        } else {
            MetricSource::Single(snapshot.single_record()?)
        };

        Ok(Self {
            workers: snapshot.workers(),
            booted_workers: snapshot.booted_workers(),
            old_workers: snapshot.old_workers(),
            source,
            previous_requests_count,
        })
    }

    fn records(&self) -> &[WorkerStatus] {
        self.source.records()
    }

    /// Whether the observed server runs in clustered mode.
    pub fn is_clustered(&self) -> bool {
        matches!(self.source, MetricSource::Clustered(_))
    }

    /// Total workers (1 for a single-process server).
    pub fn workers(&self) -> u64 {
        self.workers
    }

    /// Workers that have finished booting.
    pub fn booted_workers(&self) -> u64 {
        self.booted_workers
    }

    /// Workers from a previous generation still draining.
    pub fn old_workers(&self) -> u64 {
        self.old_workers
    }

    /// Workers whose last status reported at least one running thread.
    pub fn running_workers(&self) -> u64 {
        self.records().iter().filter(|w| w.is_running()).count() as u64
    }

    /// Spawned threads across all workers.
    pub fn running_threads(&self) -> u64 {
        self.records().iter().map(|w| w.running).sum()
    }

    /// Requests waiting for a free thread, across all workers.
    pub fn backlog(&self) -> u64 {
        self.records().iter().map(|w| w.backlog).sum()
    }

    /// Threads currently free to take a request, across all workers.
    pub fn pool_capacity(&self) -> u64 {
        self.records().iter().map(|w| w.pool_capacity).sum()
    }

    /// Configured thread ceiling, across all workers.
    pub fn max_threads(&self) -> u64 {
        self.records().iter().map(|w| w.max_threads).sum()
    }

    /// Requests handled since boot, across all workers.
    pub fn requests_count(&self) -> u64 {
        self.records().iter().map(|w| w.requests_count).sum()
    }

    /// Workers holding at least one busy thread.
    pub fn busy_workers(&self) -> u64 {
        self.records().iter().filter(|w| w.is_busy()).count() as u64
    }

    /// Booted workers minus busy workers. Not clamped: inconsistent
    /// snapshots can drive this negative.
    pub fn idle_workers(&self) -> i64 {
        self.booted_workers as i64 - self.busy_workers() as i64
    }

    /// Free threads; alias for [`pool_capacity`](Self::pool_capacity).
    pub fn idle_threads(&self) -> u64 {
        self.pool_capacity()
    }

    /// Threads occupied by a request. Signed, unguarded.
    pub fn busy_threads(&self) -> i64 {
        self.max_threads() as i64 - self.idle_threads() as i64
    }

    /// Share of the thread ceiling currently busy, in percent.
    ///
    /// No guard on `max_threads == 0`: the division is allowed to produce
    /// `NaN` or an infinity, which the reporter passes through verbatim.
    pub fn percent_busy_threads(&self) -> f64 {
        (1.0 - self.idle_threads() as f64 / self.max_threads() as f64) * 100.0
    }

    /// Requests handled since the previous cycle.
    ///
    /// Negative when a worker restarted and its counter reset; the raw
    /// difference is reported as-is.
    pub fn requests_delta(&self) -> i64 {
        self.requests_count() as i64 - self.previous_requests_count as i64
    }
}
