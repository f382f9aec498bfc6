use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use frage_core::Role;
use frage_db::TeacherRecord;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Teacher {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// `None` for registry rows that do not record a role yet
    pub role: Option<Role>,
    pub campus: Option<String>,
}

impl From<TeacherRecord> for Teacher {
    fn from(record: TeacherRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role.as_deref().map(Role::parse),
            campus: record.campus,
        }
    }
}

/// Query parameters for listing teachers.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct TeacherFilterParams {
    /// Restrict to one campus. Only honoured for callers who see every campus.
    pub campus: Option<String>,
}
