//! Feature modules.
//!
//! Each module follows the same layout: `model.rs` for DTOs, `controller.rs`
//! for handlers, `router.rs` for the axum router and, where there is logic
//! beyond a lookup, `service.rs`. Access is declared in the route policy,
//! not in the handlers; handlers take [`Authorized`](crate::access::Authorized)
//! when they need the caller's role or campus.
//!
//! - [`profile`]: The caller's own identity and resolved role
//! - [`roles`]: Role-resolution diagnostics for administrators
//! - [`teachers`]: Campus-scoped teacher directory

pub mod profile;
pub mod roles;
pub mod teachers;
