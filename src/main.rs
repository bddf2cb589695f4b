use anyhow::Result;
use tracing::info;
use treasure_hunt::domain::GameError;
use treasure_hunt::{create_game_service, AppConfig, GameService, PlayerConfig};

/// Plays one full hunt for the configured player, then shows the leaderboard.
#[tokio::main]
async fn main() -> Result<()> {
    // ---
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    info!(
        "Starting treasure hunt v{} with {:?}",
        env!("CARGO_PKG_VERSION"),
        config.store.backend
    );

    let service = create_game_service(&config)?;

    sign_in(&service, &config.player).await?;
    play(&service, &config.player.username).await?;

    for (rank, record) in service.get_leaderboard().await?.iter().enumerate() {
        info!("#{} {} at {}", rank + 1, record.username, record.display_time);
    }

    let metrics_text = service.metrics().render();
    if !metrics_text.is_empty() {
        info!("Metrics:\n{}", metrics_text);
    }

    Ok(())
}

/// Registers the player on first run, then logs in.
async fn sign_in(service: &GameService, player: &PlayerConfig) -> Result<()> {
    // ---
    match service.register_user(&player.username, &player.password).await {
        Ok(_) | Err(GameError::UsernameTaken(_)) => {}
        Err(err) => return Err(err.into()),
    }

    let session = service
        .login_user(&player.username, &player.password)
        .await?;
    info!(
        "Welcome {} ({} hunts completed so far)",
        session.user.username, session.user.completed_games
    );

    Ok(())
}

async fn play(service: &GameService, username: &str) -> Result<()> {
    // ---
    let clue = service.get_initial_clue().await;
    info!("{}", clue);

    let decoded = service.decode_ancient_script(clue).await;
    info!("{}", decoded);

    let found = service.search_temple(decoded).await?;
    info!("{}", found);

    let reward = service.open_treasure_box().await;
    info!("{}", reward);

    if let Some(profile) = service.complete_hunt(username).await? {
        info!("{} has now completed {} hunts", profile.username, profile.completed_games);
    }

    Ok(())
}
