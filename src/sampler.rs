//! Background sampling loop.
//!
//! A process-lifetime task that samples the host server on a fixed
//! interval: acquire a snapshot, normalize it, emit one stats line, sleep,
//! repeat. The loop is the single containment point for failures. Any
//! error in a cycle is reported once and the loop keeps going, because a
//! metrics task must never take down its host.
//!
//! # Dependency Injection
//!
//! All three host capabilities arrive as trait objects, so the loop runs
//! unchanged against a live server or against the mocks in
//! [`crate::adapters::mock`].

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::config::SamplerConfig;
use crate::error::SamplerResult;
use crate::reporter::StatsReporter;
use crate::traits::{ErrorSink, LogSink, StatsSource};
use crate::view::StatsView;

/// Label attached to every contained sampling failure.
pub const STATS_ERROR_LABEL: &str = "failed to sample puma stats";

/// Runs one sampling cycle at a time and owns the request-delta baseline,
/// the only state that crosses cycle boundaries.
pub struct Sampler {
    source: Arc<dyn StatsSource>,
    reporter: StatsReporter,
    previous_requests_count: u64,
}

impl Sampler {
    /// Create a sampler with a zero delta baseline.
    pub fn new(source: Arc<dyn StatsSource>, reporter: StatsReporter) -> Self {
        Self {
            source,
            reporter,
            previous_requests_count: 0,
        }
    }

    /// Run one acquire → normalize → report cycle, returning the emitted
    /// line.
    ///
    /// The baseline advances as soon as the view exists, before the
    /// reporter runs: a sink failure must not skew the next cycle's delta.
    /// An acquisition or shape failure leaves the baseline untouched, since
    /// there is no trustworthy count to advance to.
    pub fn run_cycle(&mut self) -> SamplerResult<String> {
        let snapshot = self.source.stats_snapshot()?;
        let view = StatsView::new(&snapshot, self.previous_requests_count)?;
        self.previous_requests_count = view.requests_count();
        self.reporter.report(&view)
    }

    /// Baseline that the next cycle's delta will be computed against.
    pub fn previous_requests_count(&self) -> u64 {
        self.previous_requests_count
    }
}

/// Spawn the sampling loop with injected capabilities.
///
/// Sleeps `config.warmup` once so the host server can finish booting, then
/// cycles forever: one [`Sampler::run_cycle`], then an unconditional
/// `config.interval` sleep, success or failure. A failed cycle produces one
/// [`ErrorSink::report`] under [`STATS_ERROR_LABEL`] and no stats line.
///
/// # Returns
///
/// A JoinHandle that can be used to abort the task on shutdown; the loop
/// itself never terminates.
pub fn spawn_sampler(
    source: Arc<dyn StatsSource>,
    log_sink: Arc<dyn LogSink>,
    error_sink: Arc<dyn ErrorSink>,
    config: SamplerConfig,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(
            "Puma stats sampler started (interval: {:?}, warmup: {:?})",
            config.interval,
            config.warmup
        );

        let mut sampler = Sampler::new(source, StatsReporter::new(log_sink));

        tokio::time::sleep(config.warmup).await;

        loop {
            match sampler.run_cycle() {
                Ok(line) => {
                    tracing::debug!("Emitted stats line ({} bytes)", line.len());
                }
                Err(err) => {
                    tracing::warn!("Stats cycle failed: {}", err);
                    error_sink.report(STATS_ERROR_LABEL, &err);
                }
            }

            tokio::time::sleep(config.interval).await;
        }
    })
}
