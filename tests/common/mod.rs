//! Common test utilities for integration tests.
//!
//! Snapshot fixtures mirror the two wire shapes a Puma server reports:
//! the flat single-process object and the clustered object with nested
//! per-worker `last_status` records.

use serde_json::{json, Value};

/// Best-effort tracing init so `--nocapture` runs show the loop's logs.
/// Safe to call from every test; only the first call wins.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Flat single-process snapshot.
pub fn single_snapshot(
    running: u64,
    backlog: u64,
    pool_capacity: u64,
    max_threads: u64,
    requests_count: u64,
) -> Value {
    json!({
        "running": running,
        "backlog": backlog,
        "pool_capacity": pool_capacity,
        "max_threads": max_threads,
        "requests_count": requests_count,
    })
}

/// One clustered worker entry wrapping a nested `last_status` record.
pub fn worker_entry(
    running: u64,
    backlog: u64,
    pool_capacity: u64,
    max_threads: u64,
    requests_count: u64,
) -> Value {
    json!({
        "last_status": {
            "running": running,
            "backlog": backlog,
            "pool_capacity": pool_capacity,
            "max_threads": max_threads,
            "requests_count": requests_count,
        }
    })
}

/// Clustered snapshot with every listed worker booted.
pub fn clustered_snapshot(workers: Vec<Value>) -> Value {
    json!({
        "workers": workers.len(),
        "booted_workers": workers.len(),
        "old_workers": 0,
        "worker_status": workers,
    })
}
