use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;

use frage_core::AppError;

use crate::access::Authorized;
use crate::modules::teachers::model::{Teacher, TeacherFilterParams};
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/teachers",
    params(TeacherFilterParams),
    responses(
        (status = 200, description = "Teachers visible to the caller", body = Vec<Teacher>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not staff, or has no campus assigned")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, authorized), fields(role = %authorized.role))]
pub async fn get_teachers(
    State(state): State<AppState>,
    authorized: Authorized,
    Query(filters): Query<TeacherFilterParams>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers =
        TeacherService::list_teachers(state.registry.as_ref(), &authorized.campus_scope(), filters)
            .await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher", body = Teacher),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not staff, or has no campus assigned"),
        (status = 404, description = "Teacher not found on the caller's campus")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, authorized), fields(role = %authorized.role))]
pub async fn get_teacher(
    State(state): State<AppState>,
    authorized: Authorized,
    Path(id): Path<Uuid>,
) -> Result<Json<Teacher>, AppError> {
    let teacher =
        TeacherService::get_teacher(state.registry.as_ref(), &authorized.campus_scope(), id)
            .await?;
    Ok(Json(teacher))
}
