//! Output sink trait abstractions.
//!
//! Two delivery channels leave the sampling loop: formatted stats lines on
//! the happy path, and contained cycle failures on the error path. Both are
//! trait-shaped so tests can capture what production would log.

use crate::error::{SamplerError, SamplerResult};

/// Trait for delivering one formatted stats line per cycle.
///
/// Implementations must be thread-safe (Send + Sync) so the async loop can
/// hold them across await points.
pub trait LogSink: Send + Sync {
    /// Write one complete stats line.
    ///
    /// # Returns
    /// Ok(()) on delivery, or an error if the sink rejected the line.
    fn log_line(&self, line: &str) -> SamplerResult<()>;
}

/// Trait for reporting a contained sampling failure.
///
/// Called at most once per cycle, with a stable label and whichever error
/// ended that cycle. Reporting is infallible: this is the last stop for a
/// failure, so the sink absorbs delivery problems itself.
pub trait ErrorSink: Send + Sync {
    /// Report one contained failure under a stable label.
    fn report(&self, label: &str, error: &SamplerError);
}
