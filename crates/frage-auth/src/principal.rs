//! The authenticated identity making a request.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::claims::Claims;

/// An authenticated identity as seen by role resolution.
///
/// Created by the external auth provider at signup; read-only here. The
/// metadata role is whatever the provider embedded, normalised so that an
/// empty label counts as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    pub id: String,
    pub email: String,
    pub metadata_role: Option<String>,
}

impl Principal {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        metadata_role: Option<impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            metadata_role: metadata_role
                .map(Into::into)
                .filter(|role: &String| !role.trim().is_empty()),
        }
    }
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Principal::new(claims.sub, claims.email, claims.app_metadata.role)
    }
}
