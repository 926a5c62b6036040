//! Authentication infrastructure library
//!
//! Provides the building blocks the login service composes into its
//! authentication flow:
//! - Credential format validation (username/password rules)
//! - Password hashing (Argon2id)
//! - Signed bearer token issuance and verification
//!
//! The service defines its own ports and orchestration on top of these
//! implementations; nothing here touches storage or the network.
//!
//! # Examples
//!
//! ## Credential validation
//! ```
//! use auth::validation::{validate_password, validate_username};
//!
//! assert!(validate_username("alice.smith").is_ok());
//! assert!(validate_password("ab").is_err());
//! ```
//!
//! ## Bearer tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let token = tokens.generate_token("alice").unwrap();
//! assert_eq!(tokens.verify_and_extract_subject(&token).unwrap(), "alice");
//! ```
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```

pub mod jwt;
pub mod password;
pub mod validation;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenService;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use validation::validate_password;
pub use validation::validate_username;
pub use validation::ValidationError;
