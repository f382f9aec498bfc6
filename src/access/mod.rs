//! Role resolution and access control.
//!
//! - [`resolver`]: Derives a principal's [`Role`](frage_core::Role) from token
//!   metadata, the teacher registry and the legacy master-teacher account
//! - [`guard`]: Allows or denies a principal against a permitted role set
//! - [`policy`]: The route table consulted by the enforcement middleware

pub mod guard;
pub mod policy;
pub mod resolver;

pub use guard::{AccessDecision, AccessDenied, AccessGuard, Authorized, CampusScope};
pub use policy::{Access, RoutePolicy};
pub use resolver::{PRECEDENCE, Resolution, RoleResolver, RoleSource};
