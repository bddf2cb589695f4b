//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait using
//! the Prometheus metrics format. It delegates to utility functions in sibling
//! modules (`counters.rs`, `recorder.rs`) which handle the actual metrics
//! collection via the global `metrics` crate registry.

use crate::domain::Metrics;
use std::time::Instant;

/// Prometheus-based metrics implementation.
///
/// Empty because all metrics go through the global `metrics` registry; the
/// global `PrometheusHandle` in `recorder.rs` renders them.
pub struct PrometheusMetrics {
    // Empty - uses global metrics registry pattern
}

impl PrometheusMetrics {
    pub fn new() -> Self {
        tracing::info!("Creating Prometheus metrics");
        PrometheusMetrics {}
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        super::render_metrics()
    }

    fn record_user_registered(&self) {
        tracing::debug!("Recording user registered event");
        super::increment_user_registered();
    }

    fn record_login(&self, success: bool) {
        tracing::debug!(success, "Recording login attempt");
        super::increment_login(success);
    }

    fn record_hunt_completed(&self) {
        tracing::debug!("Recording hunt completed event");
        super::increment_hunt_completed();
    }

    fn record_operation(&self, start: Instant, operation: &'static str) {
        tracing::debug!(operation, "Recording operation duration");
        super::track_operation(start, operation);
    }
}
