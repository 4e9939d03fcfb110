use swig_core::config::ObservabilityConfig;
use swig_core::tracing_setup::{init_tracing, init_tracing_from_config};

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    init_tracing_from_config(&ObservabilityConfig::default());
    tracing::info!(target: "swig_core", "tracing initialized");
}
