use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures never carry library detail; the variant alone is
/// what callers may expose.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is not a well-formed signed token")]
    Malformed,

    #[error("token signature does not match")]
    BadSignature,

    #[error("token is expired")]
    Expired,

    #[error("failed to encode token: {0}")]
    Encoding(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::BadSignature,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        }
    }
}
