use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A registered player, as persisted in the users collection.
///
/// The password is obfuscated, not hashed; it never leaves the service.
/// Callers only ever see a [`UserProfile`].
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    // ---
    pub username: String,
    pub password: String,
    pub registered_time: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub completed_games: u32,
}

/// Legacy records may carry `"completedGames": null`.
fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    // ---
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

impl User {
    // ---
    pub fn new(username: String, obfuscated_password: String) -> Self {
        // ---
        Self {
            username,
            password: obfuscated_password,
            registered_time: Utc::now(),
            last_login: None,
            completed_games: 0,
        }
    }

    /// Copy of this user without the password.
    pub fn profile(&self) -> UserProfile {
        // ---
        UserProfile {
            username: self.username.clone(),
            registered_time: self.registered_time,
            last_login: self.last_login,
            completed_games: self.completed_games,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // ---
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("registered_time", &self.registered_time)
            .field("last_login", &self.last_login)
            .field("completed_games", &self.completed_games)
            .finish()
    }
}

/// Public view of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    // ---
    pub username: String,
    pub registered_time: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,

    pub completed_games: u32,
}

/// A successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginSession {
    // ---
    pub user: UserProfile,

    /// Illustrative session identifier. Guessable; do not use for access control.
    pub token: String,
}

/// One finished hunt on the leaderboard. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRecord {
    // ---
    pub username: String,
    pub completion_time: DateTime<Utc>,
    pub display_time: String,
}

impl LeaderboardRecord {
    // ---
    pub fn new(username: String, completion_time: DateTime<Utc>) -> Self {
        // ---
        Self {
            username,
            display_time: display_time(completion_time),
            completion_time,
        }
    }
}

/// Human-readable local time, e.g. `2025/3/7 09:41:05`.
fn display_time(at: DateTime<Utc>) -> String {
    // ---
    at.with_timezone(&Local)
        .format("%Y/%-m/%-d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use anyhow::Result;

    #[test]
    fn user_serializes_with_camel_case_fields() -> Result<()> {
        // ---
        let user = User::new("bilbo".to_string(), "c2VjcmV0".to_string());
        let json = serde_json::to_value(&user)?;

        assert_eq!(json["username"], "bilbo");
        assert_eq!(json["password"], "c2VjcmV0");
        assert_eq!(json["completedGames"], 0);
        assert!(json.get("registeredTime").is_some());
        assert!(json.get("lastLogin").is_none());

        Ok(())
    }

    #[test]
    fn user_without_completed_games_defaults_to_zero() -> Result<()> {
        // ---
        let raw = r#"{"username":"frodo","password":"eA==","registeredTime":"2024-01-05T10:00:00.000Z"}"#;
        let user: User = serde_json::from_str(raw)?;

        assert_eq!(user.completed_games, 0);
        assert!(user.last_login.is_none());

        Ok(())
    }

    #[test]
    fn null_completed_games_reads_as_zero() -> Result<()> {
        // ---
        let raw = r#"{"username":"sam","password":"eA==","registeredTime":"2024-01-05T10:00:00.000Z","completedGames":null}"#;
        let user: User = serde_json::from_str(raw)?;

        assert_eq!(user.completed_games, 0);
        Ok(())
    }

    #[test]
    fn debug_output_hides_password() {
        // ---
        let user = User::new("sam".to_string(), "cG90YXRvZXM=".to_string());
        let rendered = format!("{user:?}");

        assert!(!rendered.contains("cG90YXRvZXM="));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn profile_drops_password() -> Result<()> {
        // ---
        let user = User::new("merry".to_string(), "cGlwcGlu".to_string());
        let json = serde_json::to_value(user.profile())?;

        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "merry");

        Ok(())
    }

    #[test]
    fn leaderboard_record_has_display_time() {
        // ---
        let record = LeaderboardRecord::new("pippin".to_string(), Utc::now());

        assert!(!record.display_time.is_empty());
        assert_eq!(record.display_time.matches('/').count(), 2);
    }
}
