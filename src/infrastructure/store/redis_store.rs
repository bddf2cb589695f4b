use crate::domain::KeyValueStore;
use anyhow::{Context, Result};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};

/// Key-value store backed by plain Redis string keys (`GET`/`SET`).
pub struct RedisStore {
    // ---
    client: Client,
}

impl RedisStore {
    // ---
    pub fn open(url: &str) -> Result<Self> {
        // ---
        let client = Client::open(url).with_context(|| format!("Invalid Redis URL: {url}"))?;
        Ok(Self { client })
    }

    /// Creates a new multiplexed Redis connection.
    async fn get_conn(&self) -> Result<MultiplexedConnection> {
        // ---
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|err| {
                tracing::error!("Failed to connect to Redis: {:?}", err);
                anyhow::anyhow!("Failed to connect to Redis: {err}")
            })
    }
}

#[async_trait::async_trait]
impl KeyValueStore for RedisStore {
    // ---
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // ---
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .with_context(|| format!("Redis GET {key} failed"))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        // ---
        let mut conn = self.get_conn().await?;
        conn.set::<_, _, ()>(key, value)
            .await
            .with_context(|| format!("Redis SET {key} failed"))?;
        Ok(())
    }
}
