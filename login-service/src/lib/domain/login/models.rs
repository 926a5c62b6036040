use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Submitted login credentials. One per call, never stored.
///
/// Both fields default to empty strings so that an incomplete JSON body is
/// still a well-formed request; the empty values then fail credential
/// validation with the proper business message instead of a transport error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// Outcome of a login attempt. `token` is non-null exactly when `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: Option<String>,
}

impl LoginResponse {
    /// A successful login carrying the issued token.
    pub fn granted(token: String) -> Self {
        Self {
            success: true,
            message: "Login successfully".to_string(),
            token: Some(token),
        }
    }

    /// A failed login with a business message and no token.
    pub fn denied(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            token: None,
        }
    }
}

/// A stored credential record, owned by the user directory.
///
/// The authentication core only ever reads these; it never creates or
/// mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub active: bool,
    pub roles: Vec<String>,
}
