//! Capturing output sinks for testing.
//!
//! In-memory counterparts of the tracing sinks: one captures every stats
//! line, the other records every contained failure, both cloneable so a
//! test can keep a handle while the sampling loop owns another.

use std::sync::{Arc, Mutex};

use crate::error::{SamplerError, SamplerResult};
use crate::traits::{ErrorSink, LogSink};

/// Mock log sink that captures emitted lines.
#[derive(Debug, Clone, Default)]
pub struct MockLogSink {
    /// Captured lines, in emission order
    lines: Arc<Mutex<Vec<String>>>,
    /// Whether log_line should fail
    should_fail: Arc<Mutex<bool>>,
}

impl MockLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure whether line delivery should fail.
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// Get all captured lines (for test assertions).
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for MockLogSink {
    fn log_line(&self, line: &str) -> SamplerResult<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(SamplerError::Sink("mock sink failure".to_string()));
        }

        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

/// Mock error sink that records reported failures.
#[derive(Debug, Clone, Default)]
pub struct MockErrorSink {
    /// Recorded (label, error message) pairs, in report order
    reports: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded reports (for test assertions).
    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorSink for MockErrorSink {
    fn report(&self, label: &str, error: &SamplerError) {
        self.reports
            .lock()
            .unwrap()
            .push((label.to_string(), error.to_string()));
    }
}
