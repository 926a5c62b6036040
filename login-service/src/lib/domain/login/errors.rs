use thiserror::Error;

/// Error for user directory lookups.
///
/// A directory failure is a local authentication failure for the request
/// that hit it, never a crash; callers log it and answer with a structured
/// denial.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("Database error: {0}")]
    Database(String),
}
