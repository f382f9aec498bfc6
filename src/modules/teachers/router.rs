use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_teacher, get_teachers};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_teachers))
        .route("/{id}", get(get_teacher))
}
