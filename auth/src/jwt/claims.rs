use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// The claim set carried by issued tokens.
///
/// All three fields are mandatory: a token missing any of them fails
/// deserialization and is rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the authenticated username)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build the claim set for a token issued now, expiring after `ttl`.
    pub fn issue(subject: &str, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.to_owned(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Whether the claims are expired at `current_timestamp`. A token is
    /// invalid from its expiry instant onward.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
