use crate::domain::KeyValueStore;
use anyhow::Result;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory key-value store.
#[derive(Default)]
pub struct MemoryStore {
    // ---
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    // ---
    pub fn new() -> Self {
        // ---
        Self::default()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    // ---
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // ---
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        // ---
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() -> Result<()> {
        // ---
        let store = MemoryStore::new();
        assert!(store.get("nothing-here").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn set_replaces_previous_value() -> Result<()> {
        // ---
        let store = MemoryStore::new();

        store.set("k", "[1]").await?;
        store.set("k", "[1,2]").await?;

        assert_eq!(store.get("k").await?.as_deref(), Some("[1,2]"));
        Ok(())
    }
}
