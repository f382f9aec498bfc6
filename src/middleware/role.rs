//! Route-policy enforcement.
//!
//! Installed once on the outermost router, so every route (including ones
//! added later, and unknown paths) is checked against the
//! [`RoutePolicy`](crate::access::RoutePolicy) before its handler runs.
//!
//! ```rust,ignore
//! Router::new()
//!     .merge(routes)
//!     .layer(middleware::from_fn_with_state(state.clone(), enforce_route_policy));
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::access::Access;
use crate::middleware::auth::bearer_principal;
use crate::state::AppState;

pub async fn enforce_route_policy(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let allowed = match state.policy.access_for(req.uri().path()) {
        Access::Public => return next.run(req).await,
        Access::Roles(allowed) => allowed,
    };

    let principal = bearer_principal(req.headers(), &state.jwt_config);

    match state.guard.authorize(principal.as_ref(), allowed).await {
        Ok(authorized) => {
            req.extensions_mut().insert(authorized);
            next.run(req).await
        }
        Err(denied) => denied.into_response(),
    }
}
