// src/config.rs

//! Game configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the game service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads a required environment variable.
///
/// # Behavior
/// - Fails fast if the variable is missing
/// - Produces a clear, human-readable error message
/// - Intended for startup-time configuration validation
macro_rules! required_env {
    // ---
    ($key:literal) => {
        std::env::var($key)
            .map_err(|_| anyhow::anyhow!(concat!("Missing required configuration: ", $key)))?
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails due to a missing
/// required environment variable.
macro_rules! assert_missing_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Missing required configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated game configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: store::StoreConfig,
    pub pacing: pacing::PacingConfig,
    pub metrics: metrics::MetricsConfig,
    pub player: player::PlayerConfig,
}

impl AppConfig {
    /// Loads and validates all configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any required configuration is missing or invalid.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            store: store::StoreConfig::from_env()?,
            pacing: pacing::PacingConfig::from_env(),
            metrics: metrics::MetricsConfig::from_env()?,
            player: player::PlayerConfig::from_env(),
        })
    }
}

// ============================================================
// Store configuration
// ============================================================

mod store {
    // ---
    use super::*;

    /// Which key-value backend holds the users and leaderboard collections.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum StoreBackend {
        /// Process-local map; nothing persists across runs.
        Memory,

        /// Redis server at the given connection string.
        Redis { url: String },
    }

    /// Store selection derived from environment variables.
    #[derive(Debug, Clone)]
    pub struct StoreConfig {
        pub backend: StoreBackend,
    }

    impl StoreConfig {
        /// Builds a [`StoreConfig`] from environment variables.
        ///
        /// `TREASURE_STORE` picks the backend (`memory` by default). The
        /// `redis` backend additionally requires `TREASURE_REDIS_URL`.
        ///
        /// # Errors
        /// Returns an error for an unknown backend name or a missing Redis URL.
        pub fn from_env() -> Result<Self> {
            // ---
            let kind = std::env::var("TREASURE_STORE").unwrap_or_else(|_| "memory".to_string());

            let backend = match kind.to_ascii_lowercase().as_str() {
                "memory" => StoreBackend::Memory,
                "redis" => StoreBackend::Redis {
                    url: required_env!("TREASURE_REDIS_URL"),
                },
                other => anyhow::bail!("Unknown TREASURE_STORE backend: {other}"),
            };

            Ok(Self { backend })
        }
    }
}
pub use self::store::{StoreBackend, StoreConfig};

// ============================================================
// Pacing configuration
// ============================================================

mod pacing {
    // ---
    use crate::service::Pacing;

    /// Scales the cosmetic delay in front of every game operation.
    #[derive(Debug, Clone)]
    pub struct PacingConfig {
        /// Percentage of the default delays to apply. 100 keeps the game's
        /// original pacing, 0 disables it. Defaults to 100.
        pub percent: u32,
    }

    impl PacingConfig {
        /// Builds a [`PacingConfig`] from `TREASURE_PACING_PERCENT`.
        pub fn from_env() -> Self {
            // ---
            Self {
                percent: optional_env_parse!("TREASURE_PACING_PERCENT", u32, 100),
            }
        }

        /// The per-operation delays this configuration selects.
        pub fn pacing(&self) -> Pacing {
            // ---
            Pacing::default().scaled(self.percent)
        }
    }
}
pub use self::pacing::PacingConfig;

// ============================================================
// Metrics configuration
// ============================================================

mod metrics {
    // ---
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MetricsKind {
        Noop,
        Prometheus,
    }

    #[derive(Debug, Clone)]
    pub struct MetricsConfig {
        pub kind: MetricsKind,
    }

    impl MetricsConfig {
        /// Builds a [`MetricsConfig`] from `TREASURE_METRICS_TYPE`
        /// (`noop` by default, or `prom`).
        pub fn from_env() -> Result<Self> {
            // ---
            let kind = match std::env::var("TREASURE_METRICS_TYPE").as_deref() {
                Err(_) | Ok("noop") => MetricsKind::Noop,
                Ok("prom") => MetricsKind::Prometheus,
                Ok(other) => anyhow::bail!("Unknown TREASURE_METRICS_TYPE: {other}"),
            };

            Ok(Self { kind })
        }
    }
}
pub use self::metrics::{MetricsConfig, MetricsKind};

// ============================================================
// Demo player configuration
// ============================================================

mod player {
    // ---

    /// Credentials the demo driver plays with.
    #[derive(Clone)]
    pub struct PlayerConfig {
        pub username: String,
        pub password: String,
    }

    impl PlayerConfig {
        pub fn from_env() -> Self {
            // ---
            let username =
                std::env::var("TREASURE_PLAYER").unwrap_or_else(|_| "explorer".to_string());
            let password =
                std::env::var("TREASURE_PASSWORD").unwrap_or_else(|_| "open-sesame".to_string());

            Self { username, password }
        }
    }

    impl std::fmt::Debug for PlayerConfig {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("PlayerConfig")
                .field("username", &self.username)
                .field("password", &"<redacted>")
                .finish()
        }
    }
}
pub use self::player::PlayerConfig;

// ============================================================
// Tests
// ============================================================
