use proptest::prelude::*;
use trafficmix_core::config::RateConfig;
use trafficmix_core::models::{Sample, TimeRange};
use trafficmix_rate::RateAggregator;

fn small_window() -> RateConfig {
    RateConfig {
        poll_interval_secs: 30,
        default_range: TimeRange::FiveMinutes,
        ..RateConfig::default()
    }
}

/// Arbitrary poll stream: (seconds offset, counter increment), offsets may go backwards.
fn arb_polls() -> impl Strategy<Value = Vec<(i64, u64)>> {
    prop::collection::vec((-30i64..60, 0u64..50), 1..200)
}

// ── History never exceeds its window and stays strictly ordered ─────────

proptest! {
    #[test]
    fn history_is_bounded_and_ordered(polls in arb_polls()) {
        let mut agg = RateAggregator::with_config(small_window());
        let capacity = agg.history().capacity();
        let (mut t, mut total) = (1_000i64, 0u64);
        for (dt, inc) in polls {
            t += dt;
            total += inc;
            agg.ingest(Sample::at_unix(t, total).unwrap());

            prop_assert!(agg.history().len() <= capacity);
            let stamps: Vec<_> = agg.history().iter().map(|e| e.timestamp).collect();
            prop_assert!(stamps.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

// ── Rate is never negative or non-finite ────────────────────────────────

proptest! {
    #[test]
    fn rate_is_finite_and_non_negative(polls in arb_polls()) {
        let mut agg = RateAggregator::new();
        let (mut t, mut total) = (1_000i64, 0u64);
        for (dt, inc) in polls {
            t += dt;
            total += inc;
            let outcome = agg.ingest(Sample::at_unix(t, total).unwrap());
            prop_assert!(outcome.rpm.is_finite());
            prop_assert!(outcome.rpm >= 0.0);
        }
    }
}

// ── Stale samples leave rate and history unchanged ──────────────────────

proptest! {
    #[test]
    fn stale_samples_are_inert(
        polls in prop::collection::vec((1i64..30, 1u64..50), 2..50),
        back in 0i64..100,
        bump in 0u64..1000,
    ) {
        let mut agg = RateAggregator::with_config(small_window());
        let (mut t, mut total) = (1_000i64, 0u64);
        for (dt, inc) in polls {
            t += dt;
            total += inc;
            agg.ingest(Sample::at_unix(t, total).unwrap());
        }
        let rpm = agg.rpm();
        let history = agg.history().to_vec();

        let outcome = agg.ingest(Sample::at_unix(t - back, total + bump).unwrap());

        prop_assert_eq!(outcome.rpm, rpm);
        prop_assert!(!outcome.history_appended);
        prop_assert_eq!(agg.history().to_vec(), history);
    }
}
