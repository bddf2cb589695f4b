mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

use crate::config::{StoreBackend, StoreConfig};
use crate::domain::StorePtr;
use anyhow::Result;
use std::sync::Arc;

/// Creates an empty in-process store.
///
/// Nothing survives the process; useful for tests and the demo driver.
pub fn create_memory_store() -> StorePtr {
    // ---
    Arc::new(MemoryStore::new())
}

/// Creates a Redis-backed store.
///
/// The URL is validated here, but no connection is made until the first
/// read or write.
pub fn create_redis_store(url: &str) -> Result<StorePtr> {
    // ---
    tracing::info!("Using Redis store at {}", url);
    Ok(Arc::new(RedisStore::open(url)?))
}

/// Creates the store backend selected by configuration.
pub fn create_store(config: &StoreConfig) -> Result<StorePtr> {
    // ---
    match &config.backend {
        StoreBackend::Memory => Ok(create_memory_store()),
        StoreBackend::Redis { url } => create_redis_store(url),
    }
}
