use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use frage_core::Role;

use crate::access::RoleSource;
use crate::modules::profile::model::ProfileResponse;
use crate::modules::roles::model::{PolicyEntry, ResolveRoleRequest, ResolveRoleResponse};
use crate::modules::teachers::model::{Teacher, TeacherFilterParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health,
        crate::modules::profile::controller::get_me,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::roles::controller::resolve_role,
        crate::modules::roles::controller::get_policy,
    ),
    components(
        schemas(
            Role,
            RoleSource,
            ProfileResponse,
            Teacher,
            TeacherFilterParams,
            ResolveRoleRequest,
            ResolveRoleResponse,
            PolicyEntry,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Profile", description = "The caller's resolved role and campus"),
        (name = "Teachers", description = "Campus-scoped teacher registry"),
        (name = "Roles", description = "Role resolution diagnostics for administrators")
    ),
    info(
        title = "Frage Portal API",
        version = "0.1.0",
        description = "Role resolution and access control for the Frage school portal.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
