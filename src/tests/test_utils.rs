//! Shared test utilities for Snowflake tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::{Clock, SequenceState, Snowflake, SnowflakeConfig, SystemClock};

/// Clock that only moves when told to. Clones share the same reading.
#[derive(Debug, Clone)]
pub struct ManualClock(Arc<AtomicU64>);

impl ManualClock {
    pub fn new(unix_ms: u64) -> Self {
        Self(Arc::new(AtomicU64::new(unix_ms)))
    }

    pub fn set(&self, unix_ms: u64) {
        self.0.store(unix_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: u64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn unix_millis(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Generator on a private state, driven by a manual clock starting at `start`
pub fn manual_generator(machine_id: i64, start: u64) -> (Snowflake<ManualClock>, ManualClock) {
    let clock = ManualClock::new(start);
    let generator = Snowflake::from_parts(
        machine_id,
        SnowflakeConfig::default(),
        clock.clone(),
        Arc::new(SequenceState::new()),
    )
    .unwrap();
    (generator, clock)
}

/// Generator on a private state, driven by the system clock
pub fn isolated_generator(machine_id: i64) -> Snowflake {
    Snowflake::from_parts(
        machine_id,
        SnowflakeConfig::default(),
        SystemClock,
        Arc::new(SequenceState::new()),
    )
    .unwrap()
}

/// Current wall-clock offset from `epoch`
pub fn wall_clock_ms(epoch: u64) -> u64 {
    SystemClock.unix_millis() - epoch
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[u64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing when sorted
pub fn assert_monotonic_sorted(ids: &mut [u64]) {
    ids.sort_unstable();
    for i in 1..ids.len() {
        assert!(
            ids[i] > ids[i - 1],
            "ID at position {} ({}) is not greater than previous ID ({})",
            i,
            ids[i],
            ids[i - 1]
        );
    }
}

/// Assert collection has expected unique count and is monotonically increasing
pub fn assert_unique_and_monotonic(mut ids: Vec<u64>, expected_count: usize) {
    assert_unique_ids(&ids, expected_count);
    assert_monotonic_sorted(&mut ids);
}

/// Assert IDs are in issue order: (timestamp, sequence) never decreases
pub fn assert_issue_order<C: Clock>(generator: &Snowflake<C>, ids: &[u64]) {
    for pair in ids.windows(2) {
        let (ts_a, _, seq_a) = generator.extract.decompose(pair[0]);
        let (ts_b, _, seq_b) = generator.extract.decompose(pair[1]);
        assert!(
            (ts_b, seq_b) > (ts_a, seq_a),
            "({}, {}) issued after ({}, {})",
            ts_b,
            seq_b,
            ts_a,
            seq_a
        );
    }
}
