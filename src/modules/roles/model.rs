use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use frage_core::Role;

use crate::access::{Access, Resolution, RoleSource};

/// A principal to run through the resolver without a token.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ResolveRoleRequest {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub metadata_role: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResolveRoleResponse {
    pub role: Role,
    pub source: RoleSource,
    pub campus: Option<String>,
}

impl From<Resolution> for ResolveRoleResponse {
    fn from(resolution: Resolution) -> Self {
        Self {
            role: resolution.role,
            source: resolution.source,
            campus: resolution.campus,
        }
    }
}

/// One row of the route table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PolicyEntry {
    pub pattern: String,
    pub public: bool,
    /// Roles allowed through; empty for public routes
    pub roles: Vec<Role>,
}

impl PolicyEntry {
    pub fn new(pattern: &str, access: Access) -> Self {
        let (public, roles) = match access {
            Access::Public => (true, Vec::new()),
            Access::Roles(set) => (false, set.iter().collect()),
        };
        Self {
            pattern: pattern.to_string(),
            public,
            roles,
        }
    }
}
