//! # flakeid
//!
//! Snowflake-style ID generation with a 41-bit millisecond timestamp, a 5-bit
//! machine identifier and a 12-bit per-millisecond sequence.
//!
//! IDs are:
//! - 📈 Time-sorted
//! - 🔄 Monotonic within a process
//! - 🔒 Thread-safe (lock-free CAS on a process-wide state)
//! - 🛑 Refused when the host clock moves backward
//!
//! The crate also produces short, random [`unique_id`] tokens for
//! non-critical uses such as log correlation.
//!
//! ```
//! use flakeid::Snowflake;
//!
//! let generator = Snowflake::new(3).unwrap();
//! let id = generator.snowflake_id().unwrap();
//! let (_, machine, _) = generator.extract.parse(&id).unwrap();
//! assert_eq!(machine, 3);
//! ```

#![forbid(unsafe_code)]

pub mod base36;
mod clock;
mod config;
mod error;
mod extractor;
mod generator;
pub mod unique_id;

#[cfg(test)]
pub mod tests;

pub use clock::{Clock, SystemClock};
pub use config::{ConfigError, SnowflakeConfig, SnowflakeConfigBuilder, DEFAULT_EPOCH_MS};
pub use config::{MACHINE_ID_BITS, SEQUENCE_BITS, TIMESTAMP_BITS};
pub use error::SnowflakeError;
pub use extractor::SnowflakeExtractor;
pub use generator::{SequenceState, Snowflake};
