use async_trait::async_trait;

use crate::domain::login::errors::DirectoryError;
use crate::domain::login::models::Credential;
use crate::domain::login::models::LoginRequest;
use crate::domain::login::models::LoginResponse;

/// Port for the login operation.
#[async_trait]
pub trait AuthenticationPort: Send + Sync + 'static {
    /// Authenticate submitted credentials and produce a login outcome.
    ///
    /// Every outcome is a structured response; this operation has no error
    /// path visible to callers.
    async fn authenticate(&self, request: LoginRequest) -> LoginResponse;
}

/// Capability interface over stored credentials.
///
/// The authentication core depends only on this trait, so the backing store
/// can vary freely (PostgreSQL in production, a map in tests).
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Look up a credential record by exact username.
    ///
    /// # Returns
    /// Optional credential (None if no such user)
    ///
    /// # Errors
    /// * `Database` - the lookup itself failed
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DirectoryError>;
}
