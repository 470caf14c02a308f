//! Stats source trait abstraction.
//!
//! Abstracts where snapshots come from so the sampling loop can run
//! against a live server in production and against scripted snapshots in
//! tests.

use crate::error::SamplerResult;
use crate::snapshot::Snapshot;

/// Trait for acquiring one raw stats snapshot per sampling cycle.
///
/// Implementations must be thread-safe (Send + Sync) so the async loop can
/// hold them across await points.
///
/// # Example
///
/// ```ignore
/// use puma_stats_logger::traits::StatsSource;
///
/// fn sample<S: StatsSource>(source: &S) {
///     match source.stats_snapshot() {
///         Ok(snapshot) => println!("clustered: {}", snapshot.is_clustered()),
///         Err(err) => eprintln!("no stats this cycle: {}", err),
///     }
/// }
/// ```
pub trait StatsSource: Send + Sync {
    /// Acquire the current stats snapshot.
    ///
    /// # Returns
    /// - `Ok(snapshot)` with whatever the server reported, unvalidated
    /// - `Err(error)` if the snapshot could not be acquired this cycle
    fn stats_snapshot(&self) -> SamplerResult<Snapshot>;
}
