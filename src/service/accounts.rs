//! Player accounts: registration, login, lookup and the completion counter.

use super::collections::{read_collection, write_collection, Collection, Records, USERS_KEY};
use super::GameService;
use crate::domain::{GameError, LoginSession, User, UserProfile};
use crate::session::{create_session_token, obfuscate_password};
use chrono::Utc;

impl GameService {
    // ---

    /// Registers a new player with zero completed games.
    ///
    /// Usernames are unique and compared case-sensitively. A stored record
    /// that no longer decodes still reserves its `username`.
    ///
    /// # Errors
    /// - [`GameError::UsernameTaken`] if the username exists
    /// - [`GameError::CorruptCollection`] if the stored users are not a JSON array
    #[tracing::instrument(skip(self, password))]
    pub async fn register_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserProfile, GameError> {
        // ---
        self.paced("register_user", self.pacing.register_user, async {
            let _guard = self.users_lock.lock().await;

            let mut users: Records<User> = read_collection(&*self.store, USERS_KEY)
                .await?
                .or_refuse(USERS_KEY)?;

            let taken = users.iter().any(|u| u.username == username)
                || users.unknown_has("username", username);
            if taken {
                tracing::warn!("Registration rejected, username taken: {}", username);
                return Err(GameError::UsernameTaken(username.to_string()));
            }

            let user = User::new(username.to_string(), obfuscate_password(password));
            let profile = user.profile();

            users.push(user);
            write_collection(&*self.store, USERS_KEY, &users).await?;

            self.metrics.record_user_registered();
            tracing::info!("Registered user: {}", username);

            Ok(profile)
        })
        .await
    }

    /// Checks a player's password and stamps `last_login`.
    ///
    /// # Errors
    /// - [`GameError::UserNotFound`] if no decodable record has that username
    ///   (including when the stored users are not a JSON array)
    /// - [`GameError::InvalidCredentials`] on a password mismatch
    #[tracing::instrument(skip(self, password))]
    pub async fn login_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginSession, GameError> {
        // ---
        self.paced("login_user", self.pacing.login_user, async {
            let _guard = self.users_lock.lock().await;

            let mut users: Records<User> = read_collection(&*self.store, USERS_KEY)
                .await?
                .or_empty(USERS_KEY);

            let Some(user) = users.iter_mut().find(|u| u.username == username) else {
                self.metrics.record_login(false);
                tracing::warn!("Login rejected, unknown user: {}", username);
                return Err(GameError::UserNotFound(username.to_string()));
            };

            if user.password != obfuscate_password(password) {
                self.metrics.record_login(false);
                tracing::warn!("Login rejected, bad password for: {}", username);
                return Err(GameError::InvalidCredentials);
            }

            let now = Utc::now();
            user.last_login = Some(now);
            let profile = user.profile();

            write_collection(&*self.store, USERS_KEY, &users).await?;

            self.metrics.record_login(true);
            tracing::info!("User logged in: {}", username);

            Ok(LoginSession {
                user: profile,
                token: create_session_token(username, now),
            })
        })
        .await
    }

    /// Looks a player up by username.
    ///
    /// Returns `None` when the user is unknown or the stored users are not a
    /// JSON array.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_data(&self, username: &str) -> Result<Option<UserProfile>, GameError> {
        // ---
        self.paced("get_user_data", self.pacing.get_user, async {
            let users: Records<User> = read_collection(&*self.store, USERS_KEY)
                .await?
                .or_empty(USERS_KEY);

            let profile = users
                .iter()
                .find(|u| u.username == username)
                .map(User::profile);
            Ok::<_, GameError>(profile)
        })
        .await
    }

    /// Adds one finished game to a player's record.
    ///
    /// Returns `None`, and changes nothing, when the user is unknown or the
    /// stored users are not a JSON array.
    #[tracing::instrument(skip(self))]
    pub async fn update_user_games_completed(
        &self,
        username: &str,
    ) -> Result<Option<UserProfile>, GameError> {
        // ---
        self.paced("update_user_games_completed", self.pacing.update_user, async {
            let _guard = self.users_lock.lock().await;

            let mut users: Records<User> = match read_collection(&*self.store, USERS_KEY).await? {
                Collection::Parsed(users) => users,
                Collection::Corrupt(err) => {
                    tracing::error!(error = %err, "Failed to update user record");
                    return Ok(None);
                }
            };

            let Some(user) = users.iter_mut().find(|u| u.username == username) else {
                return Ok(None);
            };

            user.completed_games = user.completed_games.saturating_add(1);
            let profile = user.profile();

            write_collection(&*self.store, USERS_KEY, &users).await?;

            Ok::<_, GameError>(Some(profile))
        })
        .await
    }
}
