use anyhow::Result;
use std::sync::Arc;

/// Abstraction for the game's persistent key-value storage.
///
/// Values are whole JSON documents addressed by string keys. Backends make
/// no attempt at partial updates; callers read a value, change it in memory
/// and write the full value back.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    // ---
    /// Fetch the value stored under `key`, or `None` if nothing was stored.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Type alias for any backend that implements KeyValueStore.
pub type StorePtr = Arc<dyn KeyValueStore>;
