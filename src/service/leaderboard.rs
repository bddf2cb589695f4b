//! The leaderboard of finished hunts.

use super::collections::{read_collection, write_collection, Records, LEADERBOARD_KEY};
use super::GameService;
use crate::domain::{GameError, LeaderboardRecord, UserProfile};
use chrono::Utc;

/// Most records returned by [`GameService::get_leaderboard`].
pub const LEADERBOARD_LIMIT: usize = 10;

impl GameService {
    // ---

    /// The earliest [`LEADERBOARD_LIMIT`] finishes, oldest first.
    ///
    /// Records are kept in insertion order and only sorted here; records with
    /// equal completion times keep their insertion order. Records that do not
    /// decode are left out, and a leaderboard that is not a JSON array reads
    /// as empty.
    #[tracing::instrument(skip(self))]
    pub async fn get_leaderboard(&self) -> Result<Vec<LeaderboardRecord>, GameError> {
        // ---
        self.paced("get_leaderboard", self.pacing.get_leaderboard, async {
            let mut records: Vec<LeaderboardRecord> =
                read_collection(&*self.store, LEADERBOARD_KEY)
                    .await?
                    .or_empty(LEADERBOARD_KEY)
                    .into_known();

            records.sort_by_key(|record| record.completion_time);
            records.truncate(LEADERBOARD_LIMIT);

            Ok::<_, GameError>(records)
        })
        .await
    }

    /// Appends a finish for `username`, stamped with the current time.
    ///
    /// The username is not checked against registered users. Stored records
    /// that do not decode are written back unchanged.
    ///
    /// # Errors
    /// [`GameError::CorruptCollection`] if the stored leaderboard is not a
    /// JSON array; it is left untouched.
    #[tracing::instrument(skip(self))]
    pub async fn save_to_leaderboard(&self, username: &str) -> Result<LeaderboardRecord, GameError> {
        // ---
        self.paced("save_to_leaderboard", self.pacing.save_to_leaderboard, async {
            let _guard = self.leaderboard_lock.lock().await;

            let mut records: Records<LeaderboardRecord> =
                read_collection(&*self.store, LEADERBOARD_KEY)
                    .await?
                    .or_refuse(LEADERBOARD_KEY)?;

            let record = LeaderboardRecord::new(username.to_string(), Utc::now());
            records.push(record.clone());
            write_collection(&*self.store, LEADERBOARD_KEY, &records).await?;

            self.metrics.record_hunt_completed();
            tracing::info!("Leaderboard entry saved for: {}", username);

            Ok::<_, GameError>(record)
        })
        .await
    }

    /// Books a finished hunt: adds the leaderboard entry, then bumps the
    /// player's completed-games counter.
    ///
    /// The entry is saved even when `username` is not a registered user; the
    /// returned profile is `None` in that case. If the save fails the counter
    /// is not touched. If the counter update fails after a successful save,
    /// the leaderboard entry stays.
    #[tracing::instrument(skip(self))]
    pub async fn complete_hunt(&self, username: &str) -> Result<Option<UserProfile>, GameError> {
        // ---
        self.save_to_leaderboard(username).await?;
        self.update_user_games_completed(username).await
    }
}
