//! Combined atomic state for timestamp + sequence
//!
//! Packs a 48-bit Unix-millisecond timestamp and a 16-bit sequence into a
//! single u64 for lock-free CAS

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

/// State shared by every generator built without an explicit one
static PROCESS_STATE: Lazy<Arc<SequenceState>> = Lazy::new(|| Arc::new(SequenceState::new()));

/// Combined state: upper 48 bits = Unix ms timestamp, lower 16 bits = sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State(u64);

impl State {
    /// Number of bits used for sequence
    pub const SEQ_BITS: u32 = 16;

    /// Mask to extract sequence from raw value
    pub const SEQ_MASK: u64 = (1 << Self::SEQ_BITS) - 1;

    /// No ID issued yet
    pub const UNSET: Self = Self(u64::MAX);

    /// Create new state from timestamp and sequence
    #[inline(always)]
    pub const fn new(timestamp: u64, sequence: u16) -> Self {
        Self((timestamp << Self::SEQ_BITS) | (sequence as u64))
    }

    /// Last issued timestamp, `None` while unset
    #[inline(always)]
    pub const fn timestamp(self) -> Option<u64> {
        if self.0 == Self::UNSET.0 {
            None
        } else {
            Some(self.0 >> Self::SEQ_BITS)
        }
    }

    /// Extract sequence from state
    #[inline(always)]
    pub const fn sequence(self) -> u16 {
        (self.0 & Self::SEQ_MASK) as u16
    }

    /// Get raw u64 value for atomic operations
    #[inline(always)]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Create state from raw u64 value
    #[inline(always)]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// The `(last_timestamp, sequence)` authority behind one or more generators.
///
/// Every generator created with [`Snowflake::new`](crate::Snowflake::new) or
/// [`Snowflake::with_config`](crate::Snowflake::with_config) shares the single
/// process-wide instance returned by [`SequenceState::process`], so IDs stay
/// unique and ordered across all of them. Timestamps are kept in absolute Unix
/// milliseconds, which keeps the state coherent for generators configured with
/// different epochs.
#[derive(Debug)]
#[repr(align(64))]
pub struct SequenceState {
    raw: AtomicU64,
}

impl SequenceState {
    /// A fresh, unset state independent of the process-wide one
    pub fn new() -> Self {
        Self {
            raw: AtomicU64::new(State::UNSET.raw()),
        }
    }

    /// Handle to the process-wide state
    pub fn process() -> Arc<Self> {
        Arc::clone(&PROCESS_STATE)
    }

    /// Last issued Unix-millisecond timestamp and sequence, if any
    pub fn snapshot(&self) -> Option<(u64, u16)> {
        let state = self.load();
        state.timestamp().map(|ts| (ts, state.sequence()))
    }

    #[inline(always)]
    pub(crate) fn load(&self) -> State {
        State::from_raw(self.raw.load(Ordering::Acquire))
    }

    /// Atomic compare-and-swap on state
    #[inline(always)]
    pub(crate) fn compare_and_swap(&self, expected: State, new: State) -> bool {
        self.raw
            .compare_exchange_weak(expected.raw(), new.raw(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for SequenceState {
    fn default() -> Self {
        Self::new()
    }
}
