use proptest::prelude::*;
use vantage_core::models::MetricKind;
use vantage_telemetry::MetricBuffer;

fn kind_strategy() -> impl Strategy<Value = MetricKind> {
    prop::sample::select(MetricKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn size_is_min_of_inserts_and_capacity(
        capacity in 1usize..50,
        values in prop::collection::vec((kind_strategy(), 0.0f64..1e6), 0..200),
    ) {
        let mut buffer = MetricBuffer::with_capacity(capacity);
        for (kind, value) in &values {
            buffer.record(*kind, *value);
        }
        prop_assert_eq!(buffer.len(), values.len().min(capacity));
    }

    #[test]
    fn retained_samples_are_the_last_c_in_order(
        capacity in 1usize..20,
        values in prop::collection::vec(0.0f64..1e6, 1..100),
    ) {
        let mut buffer = MetricBuffer::with_capacity(capacity);
        for value in &values {
            buffer.record(MetricKind::LoadTime, *value);
        }
        let expected: Vec<f64> = values
            .iter()
            .copied()
            .skip(values.len().saturating_sub(capacity))
            .collect();
        let retained: Vec<f64> = buffer.samples().iter().map(|s| s.value).collect();
        prop_assert_eq!(retained, expected);
    }

    #[test]
    fn recent_never_exceeds_window_and_stays_chronological(
        window in 0usize..20,
        values in prop::collection::vec((kind_strategy(), 0.0f64..1e6), 0..100),
    ) {
        let mut buffer = MetricBuffer::new();
        for (kind, value) in &values {
            buffer.record(*kind, *value);
        }
        for kind in MetricKind::ALL {
            let recent = buffer.recent(kind, window);
            prop_assert!(recent.len() <= window);
            for pair in recent.windows(2) {
                prop_assert!(pair[0].captured_at <= pair[1].captured_at);
            }
        }
    }
}
