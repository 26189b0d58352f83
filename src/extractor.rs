use chrono::{DateTime, Utc};

use crate::config::SnowflakeConfig;
use crate::error::SnowflakeError;

/// Snowflake ID component extractor
#[derive(Debug, Copy, Clone)]
pub struct SnowflakeExtractor {
    config: SnowflakeConfig,
}

impl SnowflakeExtractor {
    /// Create a new extractor for IDs built with the given configuration
    pub(crate) fn new(config: SnowflakeConfig) -> Self {
        Self { config }
    }

    /// Extract the timestamp offset (ms since the configured epoch)
    #[inline(always)]
    pub fn timestamp(&self, id: u64) -> u64 {
        (id >> self.config.timestamp_shift()) & self.config.max_timestamp()
    }

    /// Extract machine ID component
    #[inline(always)]
    pub fn machine_id(&self, id: u64) -> u8 {
        ((id >> self.config.machine_shift()) & self.config.machine_mask()) as u8
    }

    /// Extract sequence component
    #[inline(always)]
    pub fn sequence(&self, id: u64) -> u16 {
        (id & self.config.sequence_mask()) as u16
    }

    /// Decompose an ID into its components: timestamp offset, machine ID, and sequence
    #[inline]
    pub fn decompose(&self, id: u64) -> (u64, u8, u16) {
        (self.timestamp(id), self.machine_id(id), self.sequence(id))
    }

    /// Parse a decimal ID string and decompose it
    pub fn parse(&self, id: &str) -> Result<(u64, u8, u16), SnowflakeError> {
        let id: u64 = id.trim().parse()?;
        Ok(self.decompose(id))
    }

    /// Absolute Unix-millisecond time at which the ID was issued
    #[inline]
    pub fn unix_millis(&self, id: u64) -> u64 {
        self.timestamp(id) + self.config.epoch()
    }

    /// UTC instant at which the ID was issued
    pub fn datetime(&self, id: u64) -> Option<DateTime<Utc>> {
        i64::try_from(self.unix_millis(id))
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}
