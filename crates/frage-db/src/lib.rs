//! # Frage DB
//!
//! Database access for the Frage portal.
//!
//! - [`init_db_pool`] / [`run_migrations`]: PostgreSQL pool setup with SQLx
//! - [`registry`]: The teacher registry consulted during role resolution
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 10)
//!
//! # Example
//!
//! ```ignore
//! use frage_db::{init_db_pool, registry::PgTeacherRegistry};
//!
//! let pool = init_db_pool().await?;
//! let registry = PgTeacherRegistry::new(pool);
//! let row = registry.find_by_auth_id("auth-user-id").await?;
//! ```

use std::env;

use sqlx::postgres::PgPoolOptions;

pub mod registry;

// Re-export PgPool for convenience
pub use registry::{PgTeacherRegistry, RegistryError, TeacherRecord, TeacherRegistry};
pub use sqlx::PgPool;

#[cfg(any(test, feature = "test-utils"))]
pub use registry::InMemoryTeacherRegistry;

/// Initializes a PostgreSQL connection pool from `DATABASE_URL`.
///
/// # Errors
///
/// Returns a configuration error if `DATABASE_URL` is unset, or the
/// connection error if the database cannot be reached.
pub async fn init_db_pool() -> Result<PgPool, sqlx::Error> {
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
}

/// Applies the bundled schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
