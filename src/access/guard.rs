//! Access guard.
//!
//! Gates a request behind a set of permitted roles. The guard never mutates
//! anything; it resolves the principal's role and either hands back an
//! [`Authorized`] for query scoping or one of exactly two denials:
//!
//! | Denial | Status | Body |
//! |--------|--------|------|
//! | no principal | 401 | `{"error": "unauthorized"}` |
//! | role not permitted | 403 | `{"error": "forbidden"}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

use frage_auth::Principal;
use frage_core::{Role, RoleSet};
use frage_observability::track_access_decision;

use super::resolver::{RoleResolver, RoleSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessDenied {
    #[error("unauthorized")]
    Unauthenticated,
    #[error("forbidden")]
    Forbidden,
}

impl AccessDenied {
    pub fn status(&self) -> StatusCode {
        match self {
            AccessDenied::Unauthenticated => StatusCode::UNAUTHORIZED,
            AccessDenied::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            AccessDenied::Unauthenticated => "unauthorized",
            AccessDenied::Forbidden => "forbidden",
        }
    }
}

impl IntoResponse for AccessDenied {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.reason() }))).into_response()
    }
}

/// Which campuses an authorized caller may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampusScope {
    All,
    Campus(String),
    /// Campus-scoped role without a registry campus
    Unassigned,
}

/// A principal that passed the guard, with its resolved role.
#[derive(Debug, Clone)]
pub struct Authorized {
    pub principal: Principal,
    pub role: Role,
    pub source: RoleSource,
    pub campus: Option<String>,
}

impl Authorized {
    pub fn campus_scope(&self) -> CampusScope {
        match self.role {
            Role::MasterAdmin | Role::Admin | Role::MasterTeacher => CampusScope::All,
            Role::Teacher | Role::Campus => match &self.campus {
                Some(campus) => CampusScope::Campus(campus.clone()),
                None => CampusScope::Unassigned,
            },
            Role::Parent | Role::Unknown => CampusScope::Unassigned,
        }
    }
}

pub type AccessDecision = Result<Authorized, AccessDenied>;

#[derive(Clone)]
pub struct AccessGuard {
    resolver: RoleResolver,
}

impl AccessGuard {
    pub fn new(resolver: RoleResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &RoleResolver {
        &self.resolver
    }

    pub async fn authorize(&self, principal: Option<&Principal>, allowed: RoleSet) -> AccessDecision {
        let Some(principal) = principal else {
            track_access_decision("unauthorized", "none");
            debug!("Denied unauthenticated request");
            return Err(AccessDenied::Unauthenticated);
        };

        let resolution = self.resolver.resolve(principal).await;

        if !allowed.contains(resolution.role) {
            track_access_decision("forbidden", resolution.role.as_str());
            info!(
                principal_id = %principal.id,
                role = %resolution.role,
                allowed = ?allowed,
                "Denied request for role"
            );
            return Err(AccessDenied::Forbidden);
        }

        track_access_decision("allowed", resolution.role.as_str());
        Ok(Authorized {
            principal: principal.clone(),
            role: resolution.role,
            source: resolution.source,
            campus: resolution.campus,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frage_config::AccessConfig;
    use frage_db::InMemoryTeacherRegistry;
    use http_body_util::BodyExt;
    use std::sync::Arc;

    fn guard(registry: Arc<InMemoryTeacherRegistry>) -> AccessGuard {
        AccessGuard::new(RoleResolver::new(registry, AccessConfig::default()))
    }

    async fn body_json(denied: AccessDenied) -> (StatusCode, serde_json::Value) {
        let response = denied.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_no_principal_is_unauthorized_for_any_set() {
        let guard = guard(Arc::new(InMemoryTeacherRegistry::new()));
        for allowed in [RoleSet::EMPTY, RoleSet::ALL, RoleSet::ADMINS] {
            let denied = guard.authorize(None, allowed).await.unwrap_err();
            assert_eq!(denied, AccessDenied::Unauthenticated);
            let (status, body) = body_json(denied).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, json!({ "error": "unauthorized" }));
        }
    }

    #[tokio::test]
    async fn test_teacher_is_forbidden_from_admin_routes() {
        let registry = Arc::new(InMemoryTeacherRegistry::new());
        registry.insert("u1", "Kim", Some("teacher"), Some("gangnam"));
        let principal = Principal::new("u1", "t@x.com", None::<String>);

        let denied = guard(registry)
            .authorize(Some(&principal), RoleSet::ADMINS)
            .await
            .unwrap_err();
        let (status, body) = body_json(denied).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({ "error": "forbidden" }));
    }

    #[tokio::test]
    async fn test_admin_passes_through() {
        let principal = Principal::new("u2", "a@x.com", Some("admin"));
        let authorized = guard(Arc::new(InMemoryTeacherRegistry::new()))
            .authorize(Some(&principal), RoleSet::ADMINS)
            .await
            .unwrap();
        assert_eq!(authorized.principal, principal);
        assert_eq!(authorized.role, Role::Admin);
        assert_eq!(authorized.campus_scope(), CampusScope::All);
    }

    #[tokio::test]
    async fn test_empty_set_forbids_authenticated_principal() {
        let principal = Principal::new("u2", "a@x.com", Some("master_admin"));
        let denied = guard(Arc::new(InMemoryTeacherRegistry::new()))
            .authorize(Some(&principal), RoleSet::EMPTY)
            .await
            .unwrap_err();
        assert_eq!(denied, AccessDenied::Forbidden);
    }

    #[tokio::test]
    async fn test_campus_scope_for_teacher() {
        let registry = Arc::new(InMemoryTeacherRegistry::new());
        registry.insert("u1", "Kim", Some("teacher"), Some("gangnam"));
        let principal = Principal::new("u1", "t@x.com", Some("parent"));

        let authorized = guard(registry)
            .authorize(Some(&principal), RoleSet::STAFF)
            .await
            .unwrap();
        assert_eq!(
            authorized.campus_scope(),
            CampusScope::Campus("gangnam".to_string())
        );
    }

    #[test]
    fn test_parent_has_no_campus_scope() {
        let authorized = Authorized {
            principal: Principal::new("u3", "p@x.com", None::<String>),
            role: Role::Parent,
            source: RoleSource::Default,
            campus: Some("gangnam".to_string()),
        };
        assert_eq!(authorized.campus_scope(), CampusScope::Unassigned);
    }
}
