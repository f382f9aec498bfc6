//! # Frage Core
//!
//! Core types shared by every crate of the Frage portal:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`roles`]: The role hierarchy and role sets used for access control
//!
//! # Example
//!
//! ```ignore
//! use frage_core::{AppError, Role, RoleSet};
//!
//! let allowed = RoleSet::of(&[Role::Admin, Role::MasterAdmin]);
//! if !allowed.contains(Role::parse("teacher")) {
//!     return Err(AppError::forbidden("Administrator privileges required"));
//! }
//! ```

pub mod errors;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use roles::{Role, RoleSet};
