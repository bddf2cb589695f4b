mod common;

use anyhow::Result;
use std::time::Duration;
use tokio::time::Instant;
use treasure_hunt::{create_memory_store, create_noop_metrics, GameService, Pacing};

/// Paused-clock sleeps may overshoot by the timer's 1 ms granularity.
fn assert_waited(start: Instant, expected_ms: u64) {
    // ---
    let elapsed = start.elapsed();
    let expected = Duration::from_millis(expected_ms);
    assert!(
        elapsed >= expected && elapsed <= expected + Duration::from_millis(5),
        "waited {elapsed:?}, expected {expected:?}"
    );
}

fn paced_service() -> GameService {
    // ---
    GameService::new(create_memory_store(), create_noop_metrics(), Pacing::default())
}

#[tokio::test(start_paused = true)]
async fn narrative_steps_wait_their_delay() {
    // ---
    let service = paced_service();

    let start = Instant::now();
    service.get_initial_clue().await;
    assert_waited(start, 1500);

    let start = Instant::now();
    service.open_treasure_box().await;
    assert_waited(start, 3000);
}

#[tokio::test(start_paused = true)]
async fn failed_search_still_waits() {
    // ---
    let service = paced_service();

    let start = Instant::now();
    assert!(service.search_temple("nothing useful").await.is_err());
    assert_waited(start, 2500);
}

#[tokio::test(start_paused = true)]
async fn account_steps_wait_their_delay() -> Result<()> {
    // ---
    let service = paced_service();

    let start = Instant::now();
    service.register_user("radagast", "birds").await?;
    service.login_user("radagast", "birds").await?;
    assert_waited(start, 2000);

    let start = Instant::now();
    service.complete_hunt("radagast").await?;
    assert_waited(start, 1600);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn instant_pacing_does_not_wait() -> Result<()> {
    // ---
    let service = common::test_service();

    let start = Instant::now();
    service.get_initial_clue().await;
    service.get_leaderboard().await?;
    assert_eq!(start.elapsed(), Duration::ZERO);

    Ok(())
}
