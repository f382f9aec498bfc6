//! Teacher registry: the authoritative mapping from an auth principal to
//! its staff role and campus.
//!
//! Role resolution reads it through the [`TeacherRegistry`] trait so the
//! backing store can be swapped (Postgres in production, in-memory in tests).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

mod postgres;
pub use postgres::PgTeacherRegistry;

#[cfg(any(test, feature = "test-utils"))]
mod memory;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryTeacherRegistry;

/// A row of the `teachers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeacherRecord {
    pub id: Uuid,
    /// Principal ID issued by the auth provider
    pub auth_user_id: String,
    pub name: String,
    pub email: String,
    /// Stored role label; `None` for rows created before roles were tracked
    pub role: Option<String>,
    pub campus: Option<String>,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry query failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("registry unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait TeacherRegistry: Send + Sync {
    /// Look up the registry row for an auth principal.
    async fn find_by_auth_id(&self, auth_id: &str)
    -> Result<Option<TeacherRecord>, RegistryError>;

    /// Look up a registry row by its own ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TeacherRecord>, RegistryError>;

    /// List teachers ordered by name, optionally restricted to one campus.
    async fn list_teachers(
        &self,
        campus: Option<&str>,
    ) -> Result<Vec<TeacherRecord>, RegistryError>;
}
