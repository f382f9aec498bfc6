use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_policy, resolve_role};

pub fn init_roles_router() -> Router<AppState> {
    Router::new()
        .route("/resolve", post(resolve_role))
        .route("/policy", get(get_policy))
}
