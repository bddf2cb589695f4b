//! Login credentials and session tokens.
//!
//! Neither function here is a security mechanism. Passwords are stored
//! base64-encoded so a login can compare them for equality, and the session
//! token is a base64 rendering of `username:unix-millis`. Both are trivially
//! reversible and exist only to give the game a login flow.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};

// ---

/// Reversible encoding of a password as kept in the users collection.
pub(crate) fn obfuscate_password(password: &str) -> String {
    // ---
    STANDARD.encode(password.as_bytes())
}

/// Creates the illustrative token handed out on login.
pub(crate) fn create_session_token(username: &str, issued_at: DateTime<Utc>) -> String {
    // ---
    let raw = format!("{username}:{}", issued_at.timestamp_millis());
    STANDARD.encode(raw)
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn obfuscation_is_plain_base64() {
        // ---
        assert_eq!(obfuscate_password("secret"), "c2VjcmV0");
        assert_eq!(obfuscate_password(""), "");
    }

    #[test]
    fn obfuscation_accepts_non_ascii() {
        // ---
        let encoded = obfuscate_password("宝藏");
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "宝藏");
    }

    #[test]
    fn token_encodes_username_and_millis() {
        // ---
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let token = create_session_token("indy", at);

        let decoded = String::from_utf8(STANDARD.decode(token).unwrap()).unwrap();
        assert_eq!(decoded, "indy:1700000000123");
    }
}
