//! # Frage Auth
//!
//! Authentication types for the Frage portal.
//!
//! Identities are issued by the hosted auth provider; this crate only
//! verifies its access tokens and turns them into a [`Principal`]:
//!
//! - [`claims`]: Access-token claim structure, including the embedded
//!   application metadata that may carry a role
//! - [`jwt`]: Token verification (and issuing, for the CLI and tests)
//! - [`principal`]: The authenticated identity handed to role resolution
//!
//! # Example
//!
//! ```ignore
//! use frage_auth::{Principal, verify_token};
//! use frage_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let claims = verify_token(&token, &config)?;
//! let principal = Principal::from(claims);
//! println!("{} ({:?})", principal.email, principal.metadata_role);
//! ```

pub mod claims;
pub mod jwt;
pub mod principal;

// Re-export commonly used types at crate root
pub use claims::{AppMetadata, Claims};
pub use jwt::{create_access_token, verify_token};
pub use principal::Principal;
