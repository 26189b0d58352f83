//! Timestamp accuracy and clock regression tests

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{isolated_generator, manual_generator, wall_clock_ms};
    use crate::*;
    use std::thread;
    use std::time::Duration;

    const T0: u64 = 1_700_000_000_000;

    #[test]
    fn test_timestamp_reflects_wall_clock() {
        let g = isolated_generator(1);
        let epoch = g.config.epoch();
        let before = wall_clock_ms(epoch);
        let ts = g.extract.timestamp(g.generate().unwrap());
        let after = wall_clock_ms(epoch);
        assert!(ts >= before && ts <= after, "{ts} not in [{before}, {after}]");
    }

    #[test]
    fn test_timestamp_monotonicity_with_sleeps() {
        let g = isolated_generator(1);
        let mut last_timestamp = 0;

        for _ in 0..20 {
            let ts = g.extract.timestamp(g.generate().unwrap());
            assert!(ts >= last_timestamp);
            last_timestamp = ts;
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_clock_regression_fails_without_mutation() {
        let (g, clock) = manual_generator(1, T0);
        g.generate().unwrap();
        g.generate().unwrap();
        let before = g.state.snapshot();
        assert_eq!(before, Some((T0, 1)));

        clock.set(T0 - 5);
        assert_eq!(
            g.generate(),
            Err(SnowflakeError::ClockRegression { last: T0, now: T0 - 5 })
        );
        assert_eq!(g.snowflake_id().unwrap_err(), SnowflakeError::ClockRegression {
            last: T0,
            now: T0 - 5,
        });
        assert_eq!(g.state.snapshot(), before);
    }

    #[test]
    fn test_recovers_once_clock_catches_up() {
        let (g, clock) = manual_generator(1, T0);
        let first = g.generate().unwrap();

        clock.set(T0 - 1);
        assert!(g.generate().is_err());

        clock.set(T0);
        let second = g.generate().unwrap();
        assert!(second > first);
        assert_eq!(g.extract.sequence(second), 1);
    }

    #[test]
    fn test_regression_seen_by_every_generator_on_the_state() {
        let (g1, clock) = manual_generator(1, T0);
        let g2 = Snowflake::from_parts(
            2,
            g1.config,
            clock.clone(),
            std::sync::Arc::clone(&g1.state),
        )
        .unwrap();

        g1.generate().unwrap();
        clock.set(T0 - 1);
        assert!(matches!(
            g2.generate(),
            Err(SnowflakeError::ClockRegression { .. })
        ));
    }

    #[test]
    fn test_custom_epoch_offsets_timestamp() {
        let epoch = 1_577_836_800_000; // 2020-01-01 00:00:00 UTC
        let config = SnowflakeConfig::builder().epoch(epoch).unwrap().build();
        let g = Snowflake::with_config(1, config).unwrap();
        let id = g.generate().unwrap();

        let unix = g.extract.unix_millis(id);
        assert!(unix > DEFAULT_EPOCH_MS);
        assert_eq!(g.extract.timestamp(id), unix - epoch);
    }
}
