use crate::domain::Metrics;
use std::time::Instant;

/// No-op metrics implementation for testing.
#[derive(Default)]
pub struct NoopMetrics;

impl NoopMetrics {
    pub fn new() -> Self {
        NoopMetrics
    }
}

impl Metrics for NoopMetrics {
    // ---
    fn render(&self) -> String {
        String::new()
    }
    fn record_user_registered(&self) {}
    fn record_login(&self, _: bool) {}
    fn record_hunt_completed(&self) {}
    fn record_operation(&self, _: Instant, _: &'static str) {}
}
