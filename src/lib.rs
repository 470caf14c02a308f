//! Puma stats logger - periodic sampling of Puma worker and thread-pool
//! stats into one normalized log line per cycle.
//!
//! Wire it up by handing [`sampler::spawn_sampler`] a stats source, a log
//! sink, and an error sink; everything else is plumbing around that loop.

pub mod adapters;
pub mod config;
pub mod error;
pub mod reporter;
pub mod sampler;
pub mod snapshot;
pub mod traits;
pub mod view;

pub use config::SamplerConfig;
pub use error::{SamplerError, SamplerResult};
pub use reporter::StatsReporter;
pub use sampler::{spawn_sampler, Sampler, STATS_ERROR_LABEL};
pub use snapshot::Snapshot;
pub use view::StatsView;
