use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::{RegistryError, TeacherRecord, TeacherRegistry};

#[derive(Clone, Debug)]
pub struct PgTeacherRegistry {
    db: PgPool,
}

impl PgTeacherRegistry {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeacherRegistry for PgTeacherRegistry {
    #[instrument(skip(self))]
    async fn find_by_auth_id(
        &self,
        auth_id: &str,
    ) -> Result<Option<TeacherRecord>, RegistryError> {
        let row = sqlx::query_as::<_, TeacherRecord>(
            r#"
            SELECT id, auth_user_id, name, email, role, campus
            FROM teachers
            WHERE auth_user_id = $1
            "#,
        )
        .bind(auth_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TeacherRecord>, RegistryError> {
        let row = sqlx::query_as::<_, TeacherRecord>(
            r#"
            SELECT id, auth_user_id, name, email, role, campus
            FROM teachers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    #[instrument(skip(self))]
    async fn list_teachers(
        &self,
        campus: Option<&str>,
    ) -> Result<Vec<TeacherRecord>, RegistryError> {
        let rows = sqlx::query_as::<_, TeacherRecord>(
            r#"
            SELECT id, auth_user_id, name, email, role, campus
            FROM teachers
            WHERE ($1::TEXT IS NULL OR campus = $1)
            ORDER BY name ASC
            "#,
        )
        .bind(campus)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }
}
