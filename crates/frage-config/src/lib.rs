//! # Frage Config
//!
//! Configuration types for the Frage portal, loaded from environment variables:
//!
//! - [`access`]: Role resolution settings (legacy master-teacher email, registry timeout)
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`jwt`]: Access-token verification configuration
//! - [`server`]: Listen address
//!
//! # Example
//!
//! ```ignore
//! use frage_config::{AccessConfig, CorsConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let access_config = AccessConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod access;
pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use access::AccessConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
