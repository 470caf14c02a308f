//! Mock implementations for testing.
//!
//! This module provides mock implementations of all trait abstractions,
//! enabling deterministic tests without a running Puma server or a live
//! log subscriber.
//!
//! # Available Mocks
//!
//! - [`MockStatsSource`] - scripted snapshot sequence with failure injection
//! - [`MockLogSink`] - captures emitted lines, optional forced failure
//! - [`MockErrorSink`] - records reported failures for assertions

pub mod sink;
pub mod source;

pub use sink::{MockErrorSink, MockLogSink};
pub use source::MockStatsSource;
