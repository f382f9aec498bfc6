use axum::Json;
use tracing::instrument;

use crate::access::Authorized;
use crate::modules::profile::model::ProfileResponse;

/// Current principal and resolved role
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Caller profile", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Profile"
)]
#[instrument(skip(authorized), fields(principal_id = %authorized.principal.id))]
pub async fn get_me(authorized: Authorized) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(authorized))
}
