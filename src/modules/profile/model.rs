use serde::Serialize;
use utoipa::ToSchema;

use frage_core::Role;

use crate::access::{Authorized, CampusScope, RoleSource};

/// The caller as the portal sees it on this request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub role_source: RoleSource,
    pub campus: Option<String>,
    /// `true` when the caller may read data from every campus
    pub all_campuses: bool,
}

impl From<Authorized> for ProfileResponse {
    fn from(authorized: Authorized) -> Self {
        let all_campuses = authorized.campus_scope() == CampusScope::All;
        Self {
            id: authorized.principal.id,
            email: authorized.principal.email,
            role: authorized.role,
            role_source: authorized.source,
            campus: authorized.campus,
            all_campuses,
        }
    }
}
