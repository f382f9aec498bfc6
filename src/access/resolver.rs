//! Role resolution.
//!
//! A principal's role is recomputed on every request from three sources of
//! differing trust, evaluated in [`PRECEDENCE`] order; the first source that
//! yields a role wins and `parent` is the fallback. Nothing is persisted.
//!
//! The teacher registry is read at most once per resolution. A failing or
//! slow registry never fails the request: the lookup is bounded by
//! [`AccessConfig::registry_timeout`] and any error is logged and treated as
//! "no row".

use std::sync::Arc;

use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};
use utoipa::ToSchema;

use frage_auth::Principal;
use frage_config::AccessConfig;
use frage_core::Role;
use frage_db::{TeacherRecord, TeacherRegistry};
use frage_observability::{track_registry_fallback, track_role_resolved};

/// Where a resolved role came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoleSource {
    /// Role embedded in the token's application metadata
    Metadata,
    /// Role stored on the principal's teacher registry row
    Registry,
    /// Principal is the configured legacy master-teacher account
    LegacyEmail,
    /// Nothing matched
    Default,
}

impl RoleSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleSource::Metadata => "metadata",
            RoleSource::Registry => "registry",
            RoleSource::LegacyEmail => "legacy_email",
            RoleSource::Default => "default",
        }
    }
}

/// Sources consulted before falling back to [`RoleSource::Default`].
///
/// Metadata outranks the registry: a non-default metadata role is trusted
/// even when the registry row says otherwise.
pub const PRECEDENCE: [RoleSource; 3] = [
    RoleSource::Metadata,
    RoleSource::Registry,
    RoleSource::LegacyEmail,
];

/// Metadata label the auth provider stamps on every account at signup.
const DEFAULT_METADATA_ROLE: &str = "parent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub role: Role,
    pub source: RoleSource,
    /// Campus from the registry row, when one was read
    pub campus: Option<String>,
}

enum RegistryLookup {
    Pending,
    Done(Option<TeacherRecord>),
}

#[derive(Clone)]
pub struct RoleResolver {
    registry: Arc<dyn TeacherRegistry>,
    config: AccessConfig,
}

impl RoleResolver {
    pub fn new(registry: Arc<dyn TeacherRegistry>, config: AccessConfig) -> Self {
        Self { registry, config }
    }

    /// Resolve exactly one role for `principal`.
    #[instrument(skip(self, principal), fields(principal_id = %principal.id))]
    pub async fn resolve(&self, principal: &Principal) -> Resolution {
        let mut lookup = RegistryLookup::Pending;

        let (role, source) = self
            .first_match(principal, &mut lookup)
            .await
            .unwrap_or((Role::Parent, RoleSource::Default));

        // Campus-scoped roles need the registry campus even when metadata decided.
        if matches!(role, Role::Teacher | Role::Campus) {
            self.registry_row(&principal.id, &mut lookup).await;
        }

        let campus = match lookup {
            RegistryLookup::Done(Some(row)) => row.campus,
            _ => None,
        };

        track_role_resolved(source.as_str());
        debug!(role = %role, source = source.as_str(), campus = ?campus, "Resolved role");

        Resolution {
            role,
            source,
            campus,
        }
    }

    async fn first_match(
        &self,
        principal: &Principal,
        lookup: &mut RegistryLookup,
    ) -> Option<(Role, RoleSource)> {
        for source in PRECEDENCE {
            if let Some(role) = self.from_source(source, principal, lookup).await {
                return Some((role, source));
            }
        }
        None
    }

    async fn from_source(
        &self,
        source: RoleSource,
        principal: &Principal,
        lookup: &mut RegistryLookup,
    ) -> Option<Role> {
        match source {
            RoleSource::Metadata => principal
                .metadata_role
                .as_deref()
                .filter(|label| *label != DEFAULT_METADATA_ROLE)
                .map(Role::parse),
            RoleSource::Registry => self
                .registry_row(&principal.id, lookup)
                .await
                .and_then(|row| row.role.as_deref())
                .filter(|label| !label.trim().is_empty())
                .map(Role::parse),
            RoleSource::LegacyEmail => self
                .config
                .legacy_master_teacher_email
                .as_deref()
                .filter(|legacy| *legacy == principal.email)
                .map(|_| Role::MasterTeacher),
            RoleSource::Default => Some(Role::Parent),
        }
    }

    async fn registry_row<'a>(
        &self,
        principal_id: &str,
        lookup: &'a mut RegistryLookup,
    ) -> Option<&'a TeacherRecord> {
        if let RegistryLookup::Pending = lookup {
            *lookup = RegistryLookup::Done(self.lookup_registry(principal_id).await);
        }
        match &*lookup {
            RegistryLookup::Done(row) => row.as_ref(),
            RegistryLookup::Pending => None,
        }
    }

    async fn lookup_registry(&self, principal_id: &str) -> Option<TeacherRecord> {
        match timeout(
            self.config.registry_timeout,
            self.registry.find_by_auth_id(principal_id),
        )
        .await
        {
            Ok(Ok(row)) => row,
            Ok(Err(err)) => {
                warn!(principal_id, error = %err, "Teacher registry lookup failed; resolving without it");
                track_registry_fallback("error");
                None
            }
            Err(_) => {
                warn!(
                    principal_id,
                    timeout_ms = self.config.registry_timeout.as_millis() as u64,
                    "Teacher registry lookup timed out; resolving without it"
                );
                track_registry_fallback("timeout");
                None
            }
        }
    }
}
