//! Fixed-format stats line rendering and delivery.
//!
//! One [`StatsView`] in, one line out. The line layout is a stable contract
//! with downstream log parsers: fixed prefix, twelve `puma.*` key=value
//! pairs in a fixed order, single spaces between pairs, and a trailing
//! space after the last pair. Nothing about the current topology changes
//! the shape; a single-process server simply reports `puma.workers=1`.

use std::sync::Arc;

use crate::error::SamplerResult;
use crate::traits::LogSink;
use crate::view::StatsView;

/// Prefix carried by every stats line.
pub const LINE_PREFIX: &str = "Puma Stats: ";

/// Renders stats lines and hands them to a [`LogSink`].
#[derive(Clone)]
pub struct StatsReporter {
    sink: Arc<dyn LogSink>,
}

impl StatsReporter {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Render one view into the wire format.
    ///
    /// Key order and the trailing space are load-bearing; see the module
    /// docs. `requests_delta` is computed by the view but never rendered
    /// here.
    pub fn format_line(view: &StatsView) -> String {
        format!(
            "{}puma.workers={} puma.booted_workers={} puma.running_workers={} puma.busy_workers={} puma.idle_workers={} puma.running_threads={} puma.busy_threads={} puma.idle_threads={} puma.percent_busy_threads={} puma.backlog={} puma.max_threads={} puma.requests_count={} ",
            LINE_PREFIX,
            view.workers(),
            view.booted_workers(),
            view.running_workers(),
            view.busy_workers(),
            view.idle_workers(),
            view.running_threads(),
            view.busy_threads(),
            view.idle_threads(),
            format_percent(view.percent_busy_threads()),
            view.backlog(),
            view.max_threads(),
            view.requests_count(),
        )
    }

    /// Render and deliver one line, returning it on success.
    pub fn report(&self, view: &StatsView) -> SamplerResult<String> {
        let line = Self::format_line(view);
        self.sink.log_line(&line)?;
        Ok(line)
    }
}

/// Render the busy-thread percentage: round to two decimal places, then
/// print whole numbers with one forced decimal (`30.0`) and everything else
/// with only the digits it needs (`62.5`, `33.33`). Non-finite values pass
/// through as `NaN` / `inf` / `-inf`.
fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.is_finite() && rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        rounded.to_string()
    }
}
