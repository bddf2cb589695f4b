mod errors;
mod metrics;
mod models;
mod store;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Publicly expose the storage abstraction and the game's data model
pub use errors::GameError;
pub use models::{LeaderboardRecord, LoginSession, User, UserProfile};
pub use store::{KeyValueStore, StorePtr};
