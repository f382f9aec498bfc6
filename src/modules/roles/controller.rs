use axum::{Json, extract::State};
use tracing::instrument;

use crate::access::Authorized;
use crate::modules::roles::model::{PolicyEntry, ResolveRoleRequest, ResolveRoleResponse};
use crate::modules::roles::service::RoleService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/roles/resolve",
    request_body = ResolveRoleRequest,
    responses(
        (status = 200, description = "Role the principal would resolve to", body = ResolveRoleResponse),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required"),
        (status = 422, description = "Validation error")
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, authorized, dto), fields(caller = %authorized.principal.id, target = %dto.id))]
pub async fn resolve_role(
    State(state): State<AppState>,
    authorized: Authorized,
    ValidatedJson(dto): ValidatedJson<ResolveRoleRequest>,
) -> Json<ResolveRoleResponse> {
    Json(RoleService::resolve(state.guard.resolver(), dto).await)
}

#[utoipa::path(
    get,
    path = "/api/roles/policy",
    responses(
        (status = 200, description = "Declared route table", body = Vec<PolicyEntry>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Master admin role required")
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
pub async fn get_policy(State(state): State<AppState>) -> Json<Vec<PolicyEntry>> {
    Json(RoleService::policy_entries(&state.policy))
}
