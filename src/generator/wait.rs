//! Busy-wait for the next millisecond after sequence exhaustion
//!
//! The wait has no upper bound and never sleeps: a sleeping caller could be
//! overtaken and reordered by others contending for the same state.

use std::thread;

/// Spin until `get_time` returns a value greater than `from_timestamp`,
/// yielding the thread every `yield_every` iterations (0 never yields)
#[inline]
pub fn spin_until_after<F>(from_timestamp: u64, yield_every: u32, get_time: F) -> u64
where
    F: Fn() -> u64,
{
    let mut spins: u32 = 0;

    loop {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return new_ts;
        }

        std::hint::spin_loop();
        spins = spins.wrapping_add(1);

        if yield_every != 0 && spins % yield_every == 0 {
            thread::yield_now();
        }
    }
}
