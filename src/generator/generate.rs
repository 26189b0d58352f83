//! ID generation logic
//!
//! One read-decide-CAS cycle per attempt; a lost race restarts the cycle.

use log::{trace, warn};

use super::state::State;
use super::Snowflake;
use crate::clock::Clock;
use crate::error::SnowflakeError;

impl<C: Clock> Snowflake<C> {
    /// Generate a new Snowflake ID
    ///
    /// Fails with [`SnowflakeError::ClockRegression`] when the clock reads
    /// earlier than the last issued timestamp (or the epoch). The shared state
    /// is left untouched on every error.
    #[inline]
    pub fn generate(&self) -> Result<u64, SnowflakeError> {
        loop {
            // State before clock: a timestamp stored by another caller was
            // read from the clock before our own read.
            let current = self.state.load();
            let now = self.now_ms();
            self.check_regression(current, now)?;

            let claimed = match current.timestamp() {
                Some(last) if now == last && current.sequence() < self.max_seq => {
                    self.try_increment_sequence(current, last)?
                }
                Some(last) if now == last => {
                    trace!("sequence exhausted at {} ms, waiting for next millisecond", last);
                    let next = self.wait_next_millis(last);
                    self.try_claim_millisecond(current, next)?
                }
                _ => self.try_claim_millisecond(current, now)?,
            };

            if let Some(id) = claimed {
                return Ok(id);
            }
        }
    }

    fn check_regression(&self, current: State, now: u64) -> Result<(), SnowflakeError> {
        let floor = current
            .timestamp()
            .map_or(self.epoch, |last| last.max(self.epoch));
        if now < floor {
            warn!(
                "clock moved backwards by {} ms (now={}, last={}); refusing to generate id",
                floor - now,
                now,
                floor
            );
            return Err(SnowflakeError::ClockRegression { last: floor, now });
        }
        Ok(())
    }

    /// Try to claim a new millisecond with sequence 0
    #[inline]
    pub(crate) fn try_claim_millisecond(
        &self,
        current: State,
        new_ts: u64,
    ) -> Result<Option<u64>, SnowflakeError> {
        let id = self.assemble_id(new_ts, 0)?;
        Ok(self
            .state
            .compare_and_swap(current, State::new(new_ts, 0))
            .then_some(id))
    }

    /// Try to increment sequence within current millisecond
    #[inline]
    pub(crate) fn try_increment_sequence(
        &self,
        current: State,
        last: u64,
    ) -> Result<Option<u64>, SnowflakeError> {
        let new_seq = current.sequence() + 1;
        let id = self.assemble_id(last, new_seq)?;
        Ok(self
            .state
            .compare_and_swap(current, State::new(last, new_seq))
            .then_some(id))
    }
}
