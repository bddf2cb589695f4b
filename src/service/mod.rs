//! The game service.
//!
//! [`GameService`] is the dependency-injection point for the game: it owns
//! handles to the key-value store and the metrics backend, plus the pacing
//! delays. Operations are split by concern across the sibling modules
//! (`narrative`, `accounts`, `leaderboard`); each is an inherent `async`
//! method on the service.
//!
//! Every write is a read-modify-write of one whole collection. The service
//! holds one async mutex per collection across that sequence, so tasks that
//! share a service never lose each other's updates. Other processes writing
//! the same store keys are not coordinated.

mod accounts;
mod collections;
mod leaderboard;
mod narrative;
mod pacing;

pub use collections::{LEADERBOARD_KEY, USERS_KEY};
pub use leaderboard::LEADERBOARD_LIMIT;
pub use narrative::{HUNT_COMPLETE_SUFFIX, TEMPLE_KEYWORD, TREASURE_REWARDS};
pub use pacing::Pacing;

use crate::domain::{MetricsPtr, StorePtr};
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Treasure hunt game service.
///
/// # Fields
///
/// - `store`: persistent key-value storage holding the users and leaderboard collections
/// - `metrics`: metrics implementation (Prometheus or no-op)
/// - `pacing`: delay applied before each operation
/// - `users_lock`, `leaderboard_lock`: serialise writers of each collection
pub struct GameService {
    store: StorePtr,
    metrics: MetricsPtr,
    pacing: Pacing,
    users_lock: Mutex<()>,
    leaderboard_lock: Mutex<()>,
}

impl GameService {
    // ---

    pub fn new(store: StorePtr, metrics: MetricsPtr, pacing: Pacing) -> Self {
        // ---
        GameService {
            store,
            metrics,
            pacing,
            users_lock: Mutex::new(()),
            leaderboard_lock: Mutex::new(()),
        }
    }

    /// Get a reference to the store implementation.
    pub fn store(&self) -> &StorePtr {
        // ---
        &self.store
    }

    /// Get a reference to the metrics implementation.
    pub fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }

    /// Get the configured pacing.
    pub fn pacing(&self) -> Pacing {
        // ---
        self.pacing
    }

    /// Waits out `delay`, runs `work`, and records the operation's duration.
    async fn paced<T>(
        &self,
        operation: &'static str,
        delay: Duration,
        work: impl Future<Output = T>,
    ) -> T {
        // ---
        let start = Instant::now();

        if !delay.is_zero() {
            tracing::debug!(operation, ?delay, "Pacing operation");
            tokio::time::sleep(delay).await;
        }

        let output = work.await;
        self.metrics.record_operation(start, operation);
        output
    }
}
