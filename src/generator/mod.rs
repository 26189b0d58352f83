//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Shared atomic state (timestamp + sequence)
//! - `wait` - Busy-wait for the next millisecond
//! - `generate` - ID generation logic
//! - `string_methods` - Decimal-string and unique-id entry points

mod generate;
mod state;
mod string_methods;
mod wait;

use std::sync::Arc;

use log::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::SnowflakeConfig;
use crate::error::SnowflakeError;
use crate::extractor::SnowflakeExtractor;

pub use state::SequenceState;
use wait::spin_until_after;

/// Snowflake ID generator bound to one machine identifier.
///
/// Cheap to share behind an `Arc`; all mutation goes through the
/// [`SequenceState`] it was built with.
#[derive(Debug)]
pub struct Snowflake<C = SystemClock> {
    // === Hot path fields ===
    pub(crate) state: Arc<SequenceState>,
    clock: C,
    machine_prefix: u64,
    pub(crate) max_seq: u16,
    ts_shift: u32,
    max_ts: u64,
    epoch: u64,

    // === Cold path fields ===
    pub machine_id: u8,
    pub config: SnowflakeConfig,
    pub extract: SnowflakeExtractor,
}

impl Snowflake {
    /// Create with default configuration on the process-wide state
    pub fn new(machine_id: impl Into<i64>) -> Result<Self, SnowflakeError> {
        Self::with_config(machine_id, SnowflakeConfig::default())
    }

    /// Create with custom configuration on the process-wide state
    pub fn with_config(
        machine_id: impl Into<i64>,
        config: SnowflakeConfig,
    ) -> Result<Self, SnowflakeError> {
        Self::from_parts(machine_id, config, SystemClock, SequenceState::process())
    }
}

impl<C: Clock> Snowflake<C> {
    /// Create from an explicit clock and state.
    ///
    /// Generators only guarantee unique, ordered IDs relative to others built
    /// on the same `state`.
    pub fn from_parts(
        machine_id: impl Into<i64>,
        config: SnowflakeConfig,
        clock: C,
        state: Arc<SequenceState>,
    ) -> Result<Self, SnowflakeError> {
        let machine_id = Self::validate_machine_id(machine_id.into(), &config)?;
        debug!(
            "snowflake generator created: machine_id={}, epoch={}",
            machine_id,
            config.epoch()
        );
        Ok(Self::build(machine_id, config, clock, state))
    }

    fn validate_machine_id(machine_id: i64, config: &SnowflakeConfig) -> Result<u8, SnowflakeError> {
        let max = config.max_machine_id();
        match u8::try_from(machine_id) {
            Ok(id) if id <= max => Ok(id),
            _ => Err(SnowflakeError::InvalidMachineId { machine_id, max }),
        }
    }

    fn build(machine_id: u8, config: SnowflakeConfig, clock: C, state: Arc<SequenceState>) -> Self {
        Self {
            state,
            clock,
            machine_prefix: (machine_id as u64) << config.machine_shift(),
            max_seq: config.max_sequence(),
            ts_shift: config.timestamp_shift(),
            max_ts: config.max_timestamp(),
            epoch: config.epoch(),
            machine_id,
            config,
            extract: SnowflakeExtractor::new(config),
        }
    }

    #[inline(always)]
    pub(crate) fn now_ms(&self) -> u64 {
        self.clock.unix_millis()
    }

    pub(crate) fn wait_next_millis(&self, from_ts: u64) -> u64 {
        spin_until_after(from_ts, self.config.spin_yield_every(), || self.now_ms())
    }

    /// Pack a Unix-millisecond timestamp and sequence into an ID.
    ///
    /// The offset from the epoch must fit the 41-bit field; it is never
    /// truncated into the machine-id bits.
    #[inline(always)]
    pub(crate) fn assemble_id(&self, unix_ms: u64, sequence: u16) -> Result<u64, SnowflakeError> {
        let timestamp = unix_ms - self.epoch;
        if timestamp > self.max_ts {
            return Err(SnowflakeError::TimestampOverflow {
                timestamp,
                max: self.max_ts,
            });
        }
        Ok((timestamp << self.ts_shift) | self.machine_prefix | (sequence as u64))
    }
}
