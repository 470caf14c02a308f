//! Tracing-backed output sinks.
//!
//! Default production wiring: stats lines and contained failures both land
//! in the host's `tracing` subscriber under the `puma_stats` target, so
//! they can be filtered or re-routed without touching the sampler.

use tracing::{error, info};

use crate::error::{SamplerError, SamplerResult};
use crate::traits::{ErrorSink, LogSink};

/// Emits each stats line at `info` level under the `puma_stats` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl TracingLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingLogSink {
    fn log_line(&self, line: &str) -> SamplerResult<()> {
        info!(target: "puma_stats", "{}", line);
        Ok(())
    }
}

/// Emits each contained failure at `error` level under the `puma_stats`
/// target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl TracingErrorSink {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorSink for TracingErrorSink {
    fn report(&self, label: &str, error: &SamplerError) {
        error!(target: "puma_stats", "{}: {}", label, error);
    }
}
