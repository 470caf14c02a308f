//! Sampler configuration types.
//!
//! This module defines the timing knobs for the sampling loop.

use std::time::Duration;

use tracing::warn;

/// Environment variable holding the sampling interval in whole seconds.
pub const INTERVAL_ENV_VAR: &str = "PUMA_STATS_INTERVAL";

/// Seconds between sampling cycles when nothing overrides it.
pub const DEFAULT_INTERVAL_SECS: u64 = 20;

/// Seconds to wait before the first cycle so the host finishes booting.
pub const DEFAULT_WARMUP_SECS: u64 = 5;

/// Configuration for the sampling loop.
///
/// Use the builder pattern to customize timing.
///
/// # Example
///
/// ```ignore
/// use puma_stats_logger::config::SamplerConfig;
/// use std::time::Duration;
///
/// let config = SamplerConfig::default()
///     .with_interval(Duration::from_secs(60))
///     .with_warmup(Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Sleep between cycles (default: 20s)
    pub interval: Duration,
    /// One-time sleep before the first cycle (default: 5s)
    pub warmup: Duration,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            warmup: Duration::from_secs(DEFAULT_WARMUP_SECS),
        }
    }
}

impl SamplerConfig {
    /// Create a new SamplerConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sleep between cycles.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the one-time warm-up sleep before the first cycle.
    pub fn with_warmup(mut self, warmup: Duration) -> Self {
        self.warmup = warmup;
        self
    }

    /// Create config from the environment.
    ///
    /// Reads `PUMA_STATS_INTERVAL` once, as a whole number of seconds.
    /// Unset keeps the default; an unparsable value keeps the default and
    /// logs a warning. Nothing is reloaded later.
    pub fn from_env() -> Self {
        match std::env::var(INTERVAL_ENV_VAR) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Self::default().with_interval(Duration::from_secs(secs)),
                Err(_) => {
                    warn!(
                        "Ignoring {}={:?}: expected whole seconds",
                        INTERVAL_ENV_VAR, raw
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_sampler_config_default() {
        let config = SamplerConfig::default();
        assert_eq!(config.interval, Duration::from_secs(20));
        assert_eq!(config.warmup, Duration::from_secs(5));
    }

    #[test]
    fn test_sampler_config_builder() {
        let config = SamplerConfig::new()
            .with_interval(Duration::from_secs(60))
            .with_warmup(Duration::from_millis(10));

        assert_eq!(config.interval, Duration::from_secs(60));
        assert_eq!(config.warmup, Duration::from_millis(10));
    }

    #[test]
    #[serial]
    fn test_from_env_unset_uses_default() {
        std::env::remove_var(INTERVAL_ENV_VAR);
        let config = SamplerConfig::from_env();
        assert_eq!(config, SamplerConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_whole_seconds() {
        std::env::set_var(INTERVAL_ENV_VAR, "45");
        let config = SamplerConfig::from_env();
        std::env::remove_var(INTERVAL_ENV_VAR);

        assert_eq!(config.interval, Duration::from_secs(45));
        assert_eq!(config.warmup, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_garbage() {
        std::env::set_var(INTERVAL_ENV_VAR, "soon");
        let config = SamplerConfig::from_env();
        std::env::remove_var(INTERVAL_ENV_VAR);

        assert_eq!(config, SamplerConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_fractional_seconds() {
        std::env::set_var(INTERVAL_ENV_VAR, "2.5");
        let config = SamplerConfig::from_env();
        std::env::remove_var(INTERVAL_ENV_VAR);

        assert_eq!(config.interval, Duration::from_secs(20));
    }
}
