//! String-producing entry points of the generator

use super::Snowflake;
use crate::clock::Clock;
use crate::error::SnowflakeError;
use crate::unique_id;

impl<C: Clock> Snowflake<C> {
    /// Generate a new Snowflake ID as its decimal string
    pub fn snowflake_id(&self) -> Result<String, SnowflakeError> {
        self.generate().map(|id| id.to_string())
    }

    /// Short random token: base36 timestamp followed by 4 alphanumerics
    pub fn unique_id(&self) -> String {
        self.unique_id_with(unique_id::DEFAULT_LENGTH, true)
    }

    /// Short random token with `length` alphanumerics, optionally prefixed by
    /// the current Unix-millisecond time in base36.
    ///
    /// Does not touch the Snowflake sequence state and never fails.
    pub fn unique_id_with(&self, length: usize, include_timestamp: bool) -> String {
        let prefix = include_timestamp.then(|| self.now_ms());
        unique_id::generate_at(length, prefix)
    }
}
