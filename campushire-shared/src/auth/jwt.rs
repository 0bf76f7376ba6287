//! JWT session tokens for the admin console
//!
//! Tokens are signed with HS256 and expire after 24 hours. The claims carry
//! the admin id and email so the console can identify the session without a
//! database round trip.
//!
//! # Example
//!
//! ```
//! use campushire_shared::auth::jwt::{create_token, validate_token, Claims};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let secret = "test-secret-key-at-least-32-bytes-long";
//!
//! let claims = Claims::new(7, "admin@example.com");
//! let token = create_token(&claims, secret)?;
//!
//! let validated = validate_token(&token, secret)?;
//! assert_eq!(validated.sub, 7);
//! # Ok(())
//! # }
//! ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token issuer embedded in and required of every token
const ISSUER: &str = "campushire";

/// Session token lifetime (24 hours)
pub fn token_lifetime() -> Duration {
    Duration::hours(24)
}

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Failed to validate token
    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,
}

/// JWT claims structure
///
/// Standard claims (`sub`, `iss`, `iat`, `exp`, `nbf`) plus the admin email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - admin id
    pub sub: i64,

    /// Admin email (custom claim)
    pub email: String,

    /// Issuer - always "campushire"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,
}

impl Claims {
    /// Creates claims for an admin session with the default 24h expiration
    pub fn new(admin_id: i64, email: impl Into<String>) -> Self {
        Self::with_expiration(admin_id, email, token_lifetime())
    }

    /// Creates claims with a custom expiration, used by expiry tests
    pub fn with_expiration(admin_id: i64, email: impl Into<String>, expires_in: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + expires_in;

        Self {
            sub: admin_id,
            email: email.into(),
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            nbf: now.timestamp(),
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Creates a signed session token from claims
///
/// # Errors
///
/// Returns `JwtError::CreateError` if token encoding fails
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a session token and extracts the claims
///
/// Verifies the signature, expiration, not-before time and issuer.
///
/// # Errors
///
/// Returns `JwtError::Expired` for expired tokens, `JwtError::ValidationError`
/// for any other failure (bad signature, wrong issuer, malformed token).
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;
    validation.validate_nbf = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    #[test]
    fn test_claims_creation() {
        let claims = Claims::new(42, "admin@example.com");

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.iss, "campushire");
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, token_lifetime().num_seconds());
    }

    #[test]
    fn test_create_and_validate_token() {
        let claims = Claims::new(42, "admin@example.com");
        let token = create_token(&claims, SECRET).expect("Should create token");

        let validated = validate_token(&token, SECRET).expect("Should validate token");
        assert_eq!(validated.sub, 42);
        assert_eq!(validated.email, "admin@example.com");
        assert_eq!(validated.iss, "campushire");
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let claims = Claims::new(1, "a@b.c");
        let token = create_token(&claims, "secret1-secret1-secret1-secret1!").unwrap();

        let result = validate_token(&token, "wrong-secret-wrong-secret-wrong!");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_expired_token() {
        let claims = Claims::with_expiration(1, "a@b.c", Duration::seconds(-3600));
        assert!(claims.is_expired());

        let token = create_token(&claims, SECRET).unwrap();
        let result = validate_token(&token, SECRET);

        assert!(matches!(result.unwrap_err(), JwtError::Expired));
    }

    #[test]
    fn test_validate_garbage_token() {
        let result = validate_token("not.a.token", SECRET);
        assert!(matches!(result.unwrap_err(), JwtError::ValidationError(_)));
    }
}
