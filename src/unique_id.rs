//! Short random identifiers
//!
//! A unique id is an optional base36 Unix-millisecond prefix followed by
//! characters drawn uniformly from `a-z`, `A-Z` and `0-9`. Nothing is checked
//! for collisions; use Snowflake IDs where uniqueness matters.

use rand::distr::Alphanumeric;
use rand::Rng;

use crate::base36;
use crate::clock::{Clock, SystemClock};

/// Number of random characters when no length is given
pub const DEFAULT_LENGTH: usize = 4;

/// Generate a unique id against the system clock
pub fn generate(length: usize, include_timestamp: bool) -> String {
    generate_at(length, include_timestamp.then(|| SystemClock.unix_millis()))
}

/// Generate a unique id with an explicit timestamp prefix (or none)
pub fn generate_at(length: usize, unix_ms: Option<u64>) -> String {
    let mut out = unix_ms.map(base36::encode).unwrap_or_default();
    out.reserve(length);
    out.extend(
        rand::rng()
            .sample_iter(Alphanumeric)
            .take(length)
            .map(char::from),
    );
    out
}
