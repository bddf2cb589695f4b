use std::sync::Arc;
use std::time::Instant;

/// Abstraction for game metrics (counters, histograms).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> String;

    /// Record a "user registered" event.
    fn record_user_registered(&self);

    /// Record a login attempt and whether it succeeded.
    fn record_login(&self, success: bool);

    /// Record a finished hunt (leaderboard entry saved).
    fn record_hunt_completed(&self);

    /// Record how long a service operation took, pacing delay included.
    fn record_operation(&self, start: Instant, operation: &'static str);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
