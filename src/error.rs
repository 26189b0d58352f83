use std::num::ParseIntError;

use thiserror::Error;

/// Represents errors that can occur during Snowflake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Machine ID outside the 5-bit range
    #[error("Machine ID {machine_id} is invalid. Allowed range is 0..={max}")]
    InvalidMachineId { machine_id: i64, max: u8 },
    /// Current time precedes the last recorded time (host clock fault)
    #[error("Clock moved backwards: now is {now} ms, last issued at {last} ms")]
    ClockRegression { last: u64, now: u64 },
    /// Timestamp offset no longer fits into the 41-bit field
    #[error("Timestamp offset {timestamp} exceeds the maximum of {max} ms since epoch")]
    TimestampOverflow { timestamp: u64, max: u64 },
    /// Text is not a decimal Snowflake ID
    #[error("Invalid Snowflake ID: {0}")]
    InvalidId(#[from] ParseIntError),
}
