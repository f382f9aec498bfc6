//! JWT claim structure for access tokens issued by the hosted auth provider.

use serde::{Deserialize, Serialize};

/// Application metadata embedded in the access token.
///
/// The auth provider stamps `role` at signup, which is why most accounts
/// carry the bare default `"parent"` here regardless of their real role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// JWT claims for access tokens.
///
/// # Fields
///
/// - `sub`: Principal ID (subject)
/// - `email`: Principal's email address
/// - `app_metadata`: Provider-managed metadata, possibly carrying a role
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Principal ID (subject claim)
    pub sub: String,
    /// Principal's email address
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub app_metadata: AppMetadata,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    #[serde(default)]
    pub iat: usize,
}
