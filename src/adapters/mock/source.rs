//! Scripted stats source for testing.
//!
//! Feeds the sampling loop a predefined sequence of snapshots and
//! failures, so loop behavior can be asserted cycle by cycle.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::{SamplerError, SamplerResult};
use crate::snapshot::Snapshot;
use crate::traits::StatsSource;

/// Mock stats source driven by a script.
///
/// Each call to [`StatsSource::stats_snapshot`] consumes the next scripted
/// entry; once the script runs out, the last entry repeats forever, which
/// keeps a free-running loop fed after the interesting cycles. A call
/// counter lets tests wait for a specific cycle.
///
/// # Example
///
/// ```ignore
/// use puma_stats_logger::adapters::mock::MockStatsSource;
/// use serde_json::json;
///
/// let source = MockStatsSource::new();
/// source.push_snapshot(json!({ "running": 5, "max_threads": 5 }));
/// source.push_failure("control socket gone");
///
/// assert!(source.stats_snapshot().is_ok());  // cycle 1
/// assert!(source.stats_snapshot().is_err()); // cycle 2
/// assert!(source.stats_snapshot().is_err()); // script exhausted, repeats
/// assert_eq!(source.calls(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockStatsSource {
    /// Scripted outcomes, consumed in order
    script: Arc<Mutex<Vec<SamplerResult<Snapshot>>>>,
    /// Number of snapshot requests served so far
    calls: Arc<Mutex<usize>>,
}

impl MockStatsSource {
    /// Create a source with an empty script. Every call fails until
    /// something is pushed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source that always serves the same snapshot.
    pub fn with_snapshot(raw: Value) -> Self {
        let source = Self::new();
        source.push_snapshot(raw);
        source
    }

    /// Append a successful snapshot to the script.
    pub fn push_snapshot(&self, raw: Value) {
        self.script
            .lock()
            .unwrap()
            .push(Ok(Snapshot::new(raw)));
    }

    /// Append an acquisition failure to the script.
    pub fn push_failure(&self, message: &str) {
        self.script
            .lock()
            .unwrap()
            .push(Err(SamplerError::Snapshot(message.to_string())));
    }

    /// Number of snapshot requests served so far.
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl StatsSource for MockStatsSource {
    fn stats_snapshot(&self) -> SamplerResult<Snapshot> {
        let mut calls = self.calls.lock().unwrap();
        let index = *calls;
        *calls += 1;
        drop(calls);

        let script = self.script.lock().unwrap();
        match script.get(index.min(script.len().saturating_sub(1))) {
            Some(entry) => entry.clone(),
            None => Err(SamplerError::Snapshot(
                "mock source has no scripted snapshot".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_script_always_fails() {
        let source = MockStatsSource::new();
        assert!(matches!(
            source.stats_snapshot(),
            Err(SamplerError::Snapshot(_))
        ));
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_script_is_consumed_in_order() {
        let source = MockStatsSource::new();
        source.push_snapshot(json!({ "running": 1 }));
        source.push_failure("boom");
        source.push_snapshot(json!({ "running": 3 }));

        assert!(source.stats_snapshot().is_ok());
        assert!(source.stats_snapshot().is_err());
        assert!(source.stats_snapshot().is_ok());
        assert_eq!(source.calls(), 3);
    }

    #[test]
    fn test_exhausted_script_repeats_last_entry() {
        let source = MockStatsSource::with_snapshot(json!({ "running": 2 }));

        for _ in 0..5 {
            let snapshot = source.stats_snapshot().unwrap();
            assert_eq!(snapshot.single_record().unwrap().running, 2);
        }
        assert_eq!(source.calls(), 5);
    }

    #[test]
    fn test_clones_share_script_and_counter() {
        let source = MockStatsSource::with_snapshot(json!({}));
        let clone = source.clone();

        clone.stats_snapshot().unwrap();
        assert_eq!(source.calls(), 1);
    }
}
