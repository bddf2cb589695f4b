use thiserror::Error;

/// Errors returned by [`GameService`](crate::GameService) operations.
///
/// The first four variants are the game's own rejections and are decided
/// purely by the caller's input and the stored data. The remaining two
/// report problems with the store itself.
#[derive(Debug, Error)]
pub enum GameError {
    /// The clue handed to the temple search does not mention the temple.
    #[error("you need to understand the clue first")]
    ClueNotUnderstood,

    /// Registration with a username that already exists.
    #[error("username already exists: {0}")]
    UsernameTaken(String),

    /// Login with a username nobody registered.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// Login with the wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The stored collection under this key is not valid JSON. Writes refuse
    /// to replace it.
    #[error("stored collection is corrupt: {0}")]
    CorruptCollection(&'static str),

    /// The store backend failed.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
