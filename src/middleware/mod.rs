//! Request middleware and extractors for access control.
//!
//! - [`auth`]: Bearer-token principal extraction and the [`Authorized`]
//!   extractor handlers use to read the guard's decision
//! - [`role`]: The route-policy enforcement layer every request passes through
//!
//! # Flow
//!
//! 1. [`role::enforce_route_policy`] looks the request path up in the
//!    [`RoutePolicy`](crate::access::RoutePolicy)
//! 2. Public paths pass straight through
//! 3. Otherwise the bearer token (if any) becomes a principal and the guard
//!    resolves its role against the path's permitted set
//! 4. On success the [`Authorized`] value is stored in request extensions
//!
//! ```ignore
//! async fn handler(authorized: Authorized) -> impl IntoResponse {
//!     match authorized.campus_scope() { /* ... */ }
//! }
//! ```
//!
//! [`Authorized`]: crate::access::Authorized

pub mod auth;
pub mod role;
