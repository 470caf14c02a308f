//! Trait abstractions for dependency injection and testability.
//!
//! The sampling loop never touches a concrete server or logger directly;
//! it talks to these traits, so tests can swap in the mocks from
//! [`crate::adapters::mock`] without a running Puma behind them.
//!
//! # Traits
//!
//! - [`StatsSource`] - acquisition of one raw stats snapshot
//! - [`LogSink`] - delivery of one formatted stats line
//! - [`ErrorSink`] - delivery of contained per-cycle failures

pub mod sink;
pub mod source;

pub use sink::{ErrorSink, LogSink};
pub use source::StatsSource;
