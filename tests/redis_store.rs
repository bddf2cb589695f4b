//! Runs against a live Redis server.
//!
//! ```text
//! TREASURE_REDIS_URL=redis://127.0.0.1:6379 cargo test --test redis_store -- --ignored
//! ```

mod common;

use anyhow::Result;
use common::service_on;
use treasure_hunt::create_redis_store;
use treasure_hunt::domain::GameError;

fn redis_url() -> String {
    // ---
    std::env::var("TREASURE_REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
}

fn unique_name(prefix: &str) -> String {
    // ---
    format!("{prefix}-{}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

#[tokio::test]
#[ignore = "needs a running Redis server"]
async fn redis_store_round_trips_values() -> Result<()> {
    // ---
    let store = create_redis_store(&redis_url())?;
    let key = unique_name("treasure-test-key");

    assert!(store.get(&key).await?.is_none());
    store.set(&key, "[]").await?;
    assert_eq!(store.get(&key).await?.as_deref(), Some("[]"));

    Ok(())
}

#[tokio::test]
#[ignore = "needs a running Redis server"]
async fn accounts_persist_through_redis() -> Result<()> {
    // ---
    let username = unique_name("beorn");

    let service = service_on(create_redis_store(&redis_url())?);
    service.register_user(&username, "honey").await?;

    // A second service over the same server sees the registration.
    let other = service_on(create_redis_store(&redis_url())?);
    assert!(matches!(
        other.register_user(&username, "honey").await,
        Err(GameError::UsernameTaken(_))
    ));
    let session = other.login_user(&username, "honey").await?;
    assert_eq!(session.user.username, username);

    Ok(())
}
