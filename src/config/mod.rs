//! Configuration for the Snowflake generator
//!
//! The bit layout is fixed at 41/5/12; only the epoch and the spin
//! behaviour of the overflow wait are tunable.

mod builder;

use std::error::Error;
use std::fmt;

pub use builder::{SnowflakeConfigBuilder, DEFAULT_EPOCH_MS};
use builder::DEFAULT_SPIN_YIELD_EVERY;

/// Width of the timestamp offset field
pub const TIMESTAMP_BITS: u32 = 41;
/// Width of the machine identifier field
pub const MACHINE_ID_BITS: u32 = 5;
/// Width of the per-millisecond sequence field
pub const SEQUENCE_BITS: u32 = 12;

/// Errors related to `SnowflakeConfig` builder validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Epoch lies after the current wall-clock time
    EpochInFuture { epoch: u64, now: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EpochInFuture { epoch, now } => {
                write!(f, "Epoch {} ms is later than the current time {} ms", epoch, now)
            }
        }
    }
}

impl Error for ConfigError {}

/// Configuration for the Snowflake generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeConfig {
    epoch: u64,
    spin_yield_every: u32,
}

impl SnowflakeConfig {
    /// Calculate mask for given number of bits
    #[inline]
    pub(crate) const fn calculate_mask(bits: u32) -> u64 {
        (1u64 << bits) - 1
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: SnowflakeConfigBuilder) -> Self {
        Self {
            epoch: b.epoch,
            spin_yield_every: b.spin_yield_every,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub const fn max_machine_id(&self) -> u8 {
        Self::calculate_mask(MACHINE_ID_BITS) as u8
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u16 {
        Self::calculate_mask(SEQUENCE_BITS) as u16
    }

    /// Largest timestamp offset (ms since epoch) the 41-bit field can hold
    #[inline(always)]
    pub const fn max_timestamp(&self) -> u64 {
        Self::calculate_mask(TIMESTAMP_BITS)
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u32 {
        MACHINE_ID_BITS + SEQUENCE_BITS
    }

    #[inline(always)]
    pub(crate) const fn machine_shift(&self) -> u32 {
        SEQUENCE_BITS
    }

    #[inline(always)]
    pub(crate) const fn machine_mask(&self) -> u64 {
        Self::calculate_mask(MACHINE_ID_BITS)
    }

    #[inline(always)]
    pub(crate) const fn sequence_mask(&self) -> u64 {
        Self::calculate_mask(SEQUENCE_BITS)
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH_MS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }
}
