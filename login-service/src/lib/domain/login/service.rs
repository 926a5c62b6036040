use std::sync::Arc;

use async_trait::async_trait;
use auth::validation::validate_password;
use auth::validation::validate_username;
use auth::PasswordHasher;
use auth::TokenService;

use crate::domain::login::models::LoginRequest;
use crate::domain::login::models::LoginResponse;
use crate::domain::login::ports::AuthenticationPort;
use crate::domain::login::ports::UserDirectory;

/// Orchestrates a login attempt: format validation, then directory lookup,
/// then password comparison, then token issuance, stopping at the first
/// failure.
///
/// A token is only ever issued after all four stages succeed. The service
/// holds no mutable state and performs no writes.
pub struct AuthenticationService<UD>
where
    UD: UserDirectory,
{
    directory: Arc<UD>,
    password_hasher: PasswordHasher,
    token_service: Arc<TokenService>,
}

impl<UD> AuthenticationService<UD>
where
    UD: UserDirectory,
{
    pub fn new(directory: Arc<UD>, token_service: Arc<TokenService>) -> Self {
        Self {
            directory,
            password_hasher: PasswordHasher::new(),
            token_service,
        }
    }
}

#[async_trait]
impl<UD> AuthenticationPort for AuthenticationService<UD>
where
    UD: UserDirectory,
{
    async fn authenticate(&self, request: LoginRequest) -> LoginResponse {
        if let Err(e) = validate_username(&request.username) {
            return LoginResponse::denied(e.to_string());
        }

        if let Err(e) = validate_password(&request.password) {
            return LoginResponse::denied(e.to_string());
        }

        let credential = match self.directory.find_by_username(&request.username).await {
            Ok(Some(credential)) if credential.active => credential,
            // An inactive account is indistinguishable from an absent one.
            Ok(_) => return LoginResponse::denied("User not found"),
            Err(e) => {
                tracing::error!(
                    username = %request.username,
                    error = %e,
                    "User directory lookup failed during login"
                );
                return LoginResponse::denied("Authentication failed");
            }
        };

        match self
            .password_hasher
            .verify(&request.password, &credential.password_hash)
        {
            Ok(true) => {}
            Ok(false) => return LoginResponse::denied("Password is incorrect"),
            Err(e) => {
                tracing::error!(
                    username = %credential.username,
                    error = %e,
                    "Stored password hash could not be verified"
                );
                return LoginResponse::denied("Authentication failed");
            }
        }

        match self.token_service.generate_token(&credential.username) {
            Ok(token) => LoginResponse::granted(token),
            Err(e) => {
                tracing::error!(error = %e, "Token issuance failed");
                LoginResponse::denied("Authentication failed")
            }
        }
    }
}
