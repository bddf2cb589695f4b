use metrics::{counter, histogram};
use std::time::Instant;

/// Increment a counter for registered users.
pub fn increment_user_registered() {
    counter!("treasure_users_registered_total").increment(1);
}

/// Increment the login counter, labelled by outcome.
pub fn increment_login(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!("treasure_logins_total", "outcome" => outcome).increment(1);
}

/// Increment a counter for finished hunts.
pub fn increment_hunt_completed() {
    counter!("treasure_hunts_completed_total").increment(1);
}

/// Track service operation latency using a histogram.
pub fn track_operation(start: Instant, operation: &'static str) {
    let elapsed = start.elapsed();
    histogram!("treasure_operation_duration_seconds", "operation" => operation).record(elapsed);
}
