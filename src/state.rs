use std::sync::Arc;

use frage_config::{AccessConfig, CorsConfig, JwtConfig};
use frage_db::{PgTeacherRegistry, TeacherRegistry, init_db_pool, run_migrations};

use crate::access::{AccessGuard, RoleResolver, RoutePolicy};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn TeacherRegistry>,
    pub guard: AccessGuard,
    pub policy: Arc<RoutePolicy>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        registry: Arc<dyn TeacherRegistry>,
        jwt_config: JwtConfig,
        access_config: AccessConfig,
        cors_config: CorsConfig,
    ) -> Self {
        let guard = AccessGuard::new(RoleResolver::new(registry.clone(), access_config));
        Self {
            registry,
            guard,
            policy: Arc::new(RoutePolicy::default_table()),
            jwt_config,
            cors_config,
        }
    }

    pub fn with_policy(mut self, policy: RoutePolicy) -> Self {
        self.policy = Arc::new(policy);
        self
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let pool = init_db_pool().await?;
    run_migrations(&pool).await?;

    Ok(AppState::new(
        Arc::new(PgTeacherRegistry::new(pool)),
        JwtConfig::from_env(),
        AccessConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
