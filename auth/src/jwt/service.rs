use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed bearer tokens.
///
/// Tokens are HS256-signed three-segment strings carrying `sub`, `iat`, and
/// `exp`. The signing secret and time-to-live are fixed at construction and
/// never change for the life of the process, so a service instance can be
/// shared freely across request tasks.
///
/// # Security Notes
/// - The secret should be at least 256 bits (32 bytes) for HS256
/// - Store secrets in environment variables or secure vaults, never in code
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service with a signing secret and token lifetime.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let algorithm = Algorithm::HS256;
        let mut validation = Validation::new(algorithm);
        // Expiry is enforced against the decoded claims below; the library
        // default of 60s leeway would accept just-expired tokens.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            validation,
            ttl,
        }
    }

    /// Issue a token for `subject`, expiring after the configured lifetime.
    ///
    /// # Errors
    /// * `Encoding` - claim serialization or signing failed
    pub fn generate_token(&self, subject: &str) -> Result<String, TokenError> {
        let claims = Claims::issue(subject, self.ttl);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verify a token and return its subject in one atomic operation.
    ///
    /// The signature is checked before any claim is inspected; no claim from
    /// an unverified token is ever returned.
    ///
    /// # Errors
    /// * `Malformed` - not three well-formed segments, or claims undecodable
    /// * `BadSignature` - signature does not match header+claims
    /// * `Expired` - the current time is at or past the `exp` claim
    pub fn verify_and_extract_subject(&self, token: &str) -> Result<String, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        let claims = data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims.sub)
    }
}
