//! Wall-clock time sources
//!
//! Generators read time through [`Clock`] so that tests can pin or rewind it.

use chrono::Utc;

/// A source of wall-clock time in milliseconds since the Unix epoch.
///
/// Implementations must be cheap: the overflow wait calls `unix_millis` in a
/// tight loop until the returned value advances.
pub trait Clock {
    /// Returns the current time in milliseconds since 1970-01-01T00:00:00Z.
    fn unix_millis(&self) -> u64;
}

/// The host's wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn unix_millis(&self) -> u64 {
        // A host clock set before 1970 reads as 0
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}
