use anyhow::anyhow;
use uuid::Uuid;

use frage_core::AppError;
use frage_db::TeacherRegistry;

use crate::access::CampusScope;
use crate::modules::teachers::model::{Teacher, TeacherFilterParams};

pub struct TeacherService;

impl TeacherService {
    /// Campus filter to apply for a caller. Campus-scoped callers always get
    /// their own campus whatever they asked for.
    fn campus_filter(
        scope: &CampusScope,
        filters: &TeacherFilterParams,
    ) -> Result<Option<String>, AppError> {
        match scope {
            CampusScope::All => Ok(filters.campus.clone()),
            CampusScope::Campus(campus) => Ok(Some(campus.clone())),
            CampusScope::Unassigned => Err(AppError::forbidden(
                "No campus is assigned to this account",
            )),
        }
    }

    pub async fn list_teachers(
        registry: &dyn TeacherRegistry,
        scope: &CampusScope,
        filters: TeacherFilterParams,
    ) -> Result<Vec<Teacher>, AppError> {
        let campus = Self::campus_filter(scope, &filters)?;

        let rows = registry
            .list_teachers(campus.as_deref())
            .await
            .map_err(AppError::database)?;

        Ok(rows.into_iter().map(Teacher::from).collect())
    }

    pub async fn get_teacher(
        registry: &dyn TeacherRegistry,
        scope: &CampusScope,
        id: Uuid,
    ) -> Result<Teacher, AppError> {
        let not_found = || AppError::not_found(anyhow!("Teacher with id {} not found", id));

        let row = registry
            .find_by_id(id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(not_found)?;

        match scope {
            CampusScope::All => Ok(Teacher::from(row)),
            CampusScope::Campus(campus) if row.campus.as_deref() == Some(campus.as_str()) => {
                Ok(Teacher::from(row))
            }
            CampusScope::Campus(_) => Err(not_found()),
            CampusScope::Unassigned => Err(AppError::forbidden(
                "No campus is assigned to this account",
            )),
        }
    }
}
