// src/lib.rs
use anyhow::Result;

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod config;
mod infrastructure;
mod service;
mod session;

// Hoist up only the public symbol(s)
pub use service::{
    GameService, // ---
    Pacing,
    HUNT_COMPLETE_SUFFIX,
    LEADERBOARD_KEY,
    LEADERBOARD_LIMIT,
    TEMPLE_KEYWORD,
    TREASURE_REWARDS,
    USERS_KEY,
};

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_memory_store, // ---
    create_noop_metrics,
    create_prom_metrics,
    create_redis_store,
    create_store,
};

use domain::MetricsPtr;

/// Creates the metrics backend selected by configuration.
pub fn create_metrics(config: &MetricsConfig) -> Result<MetricsPtr> {
    // ---
    match config.kind {
        MetricsKind::Noop => Ok(create_noop_metrics()),
        MetricsKind::Prometheus => create_prom_metrics(),
    }
}

/// Build the game service with the store, metrics and pacing chosen by `config`.
pub fn create_game_service(config: &AppConfig) -> Result<GameService> {
    // ---
    let store = create_store(&config.store)?;
    let metrics = create_metrics(&config.metrics)?;

    Ok(GameService::new(store, metrics, config.pacing.pacing()))
}
