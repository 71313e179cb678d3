//! Tests for tracing setup.

use rotorops_core::tracing::init_tracing;

#[test]
fn test_init_tracing_is_idempotent() {
    std::env::set_var("ROTOROPS_LOG", "rotorops_core=debug");
    init_tracing();
    init_tracing();
    tracing::debug!(target: "rotorops_core", "tracing initialised twice without panicking");
}

#[test]
fn test_invalid_filter_falls_back() {
    std::env::set_var("ROTOROPS_LOG", "=[not a filter");
    init_tracing();
    tracing::info!("still logging with the default filter");
}
