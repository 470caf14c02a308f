//! Concrete implementations of trait abstractions.
//!
//! Production adapters route the sampler's two output channels through
//! `tracing`; the [`mock`] submodule provides test doubles for all three
//! capability traits.
//!
//! # Adapters
//!
//! - [`TracingLogSink`] - stats lines via `tracing::info!`
//! - [`TracingErrorSink`] - contained failures via `tracing::error!`
//!
//! # Mock Implementations
//!
//! - [`mock::MockStatsSource`] - scripted snapshots with failure injection
//! - [`mock::MockLogSink`] - captures emitted lines
//! - [`mock::MockErrorSink`] - records reported failures

pub mod mock;
pub mod tracing_sink;

pub use mock::{MockErrorSink, MockLogSink, MockStatsSource};
pub use tracing_sink::{TracingErrorSink, TracingLogSink};
