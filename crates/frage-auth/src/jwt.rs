//! Access-token verification.
//!
//! Tokens are HS256-signed by the auth provider with the shared project
//! secret. Only signature and expiry are checked; the provider's `aud`
//! claim is ignored.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use frage_config::JwtConfig;
use frage_core::AppError;

use crate::claims::{AppMetadata, Claims};

/// Verifies an access token and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, or it is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.validate_aud = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}

/// Creates an access token the same shape the auth provider issues.
///
/// Used by the admin CLI for local development and by tests.
pub fn create_access_token(
    principal_id: &str,
    email: &str,
    metadata_role: Option<&str>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.access_token_expiry).max(0) as usize;

    let claims = Claims {
        sub: principal_id.to_string(),
        email: email.to_string(),
        app_metadata: AppMetadata {
            role: metadata_role.map(str::to_string),
        },
        exp,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}
