//! SnowflakeConfig builder for constructing configuration

use super::{ConfigError, SnowflakeConfig};
use crate::clock::{Clock, SystemClock};

/// Default epoch: July 1, 2021 00:00:00 UTC
pub const DEFAULT_EPOCH_MS: u64 = 1_625_097_600_000;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 0;

/// Builder for SnowflakeConfig
#[derive(Debug)]
pub struct SnowflakeConfigBuilder {
    pub(super) epoch: u64,
    pub(super) spin_yield_every: u32,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH_MS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set a custom epoch in milliseconds since the Unix epoch.
    /// The epoch must not lie in the future.
    pub fn epoch(mut self, epoch: u64) -> Result<Self, ConfigError> {
        let now = SystemClock.unix_millis();
        if epoch > now {
            return Err(ConfigError::EpochInFuture { epoch, now });
        }
        self.epoch = epoch;
        Ok(self)
    }

    /// Yield the thread every N spins while waiting out an exhausted
    /// millisecond; 0 spins without yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final SnowflakeConfig
    pub fn build(self) -> SnowflakeConfig {
        SnowflakeConfig::from_builder(self)
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
