use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use super::{RegistryError, TeacherRecord, TeacherRegistry};

/// Registry backed by a vector, for tests and local tooling.
///
/// Can be switched into a failing mode, or given an artificial latency, to
/// exercise callers' degradation paths.
#[derive(Debug, Default)]
pub struct InMemoryTeacherRegistry {
    rows: RwLock<Vec<TeacherRecord>>,
    failing: AtomicBool,
    latency: Option<Duration>,
}

impl InMemoryTeacherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Insert a row and return it.
    pub fn insert(
        &self,
        auth_user_id: &str,
        name: &str,
        role: Option<&str>,
        campus: Option<&str>,
    ) -> TeacherRecord {
        let record = TeacherRecord {
            id: Uuid::new_v4(),
            auth_user_id: auth_user_id.to_string(),
            name: name.to_string(),
            email: format!("{}@frage.test", auth_user_id),
            role: role.map(str::to_string),
            campus: campus.map(str::to_string),
        };
        self.rows
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record.clone());
        record
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    async fn check(&self) -> Result<(), RegistryError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(RegistryError::Unavailable("registry switched off".to_string()));
        }
        Ok(())
    }

    fn find(&self, predicate: impl Fn(&TeacherRecord) -> bool) -> Option<TeacherRecord> {
        self.rows
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .find(|row| predicate(row))
            .cloned()
    }
}

#[async_trait]
impl TeacherRegistry for InMemoryTeacherRegistry {
    async fn find_by_auth_id(
        &self,
        auth_id: &str,
    ) -> Result<Option<TeacherRecord>, RegistryError> {
        self.check().await?;
        Ok(self.find(|row| row.auth_user_id == auth_id))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TeacherRecord>, RegistryError> {
        self.check().await?;
        Ok(self.find(|row| row.id == id))
    }

    async fn list_teachers(
        &self,
        campus: Option<&str>,
    ) -> Result<Vec<TeacherRecord>, RegistryError> {
        self.check().await?;
        let mut rows: Vec<TeacherRecord> = self
            .rows
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|row| campus.is_none() || row.campus.as_deref() == campus)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }
}
