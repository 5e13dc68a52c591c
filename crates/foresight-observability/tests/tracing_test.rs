use foresight_core::config::ObservabilityConfig;
use foresight_observability::tracing_setup::spans::names;
use foresight_observability::{
    batch_span, calibration_span, init_from_config, init_tracing, init_tracing_json,
    init_tracing_with_filter, settlement_span, trend_span,
};

#[test]
fn initializers_are_idempotent() {
    init_tracing_with_filter("debug");
    init_tracing();
    init_tracing_json();
    init_from_config(&ObservabilityConfig::default());
    tracing::info!("still logging after repeated init");
}

#[test]
fn span_macros_carry_their_names() {
    init_tracing_with_filter("trace");
    let spans = [
        settlement_span!("p1"),
        trend_span!("p1", 3usize),
        calibration_span!("p1"),
        batch_span!(10usize),
    ];
    let expected = [names::SETTLEMENT, names::TREND, names::CALIBRATION, names::BATCH];
    for (span, name) in spans.iter().zip(expected) {
        if let Some(meta) = span.metadata() {
            assert_eq!(meta.name(), name);
        }
    }
}
