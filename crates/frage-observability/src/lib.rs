//! Frage Observability
//!
//! - Structured logging to console and rolling JSON files, with optional
//!   OpenTelemetry export
//! - Per-request logging middleware
//! - Prometheus metrics, including access-control counters
//!
//! Observability can be switched off at runtime with
//! `OBSERVABILITY_ENABLED=false`; logging to the console stays on.
//!
//! # Examples
//!
//! ```no_run
//! use frage_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_tracing()?;
//!     // ... application code ...
//!     shutdown_tracer().await;
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, logging_middleware, shutdown_tracer};
pub use metrics::{
    init_metrics, is_observability_enabled, metrics_middleware, track_access_decision,
    track_registry_fallback, track_role_resolved,
};
pub use metrics_exporter_prometheus::PrometheusHandle;
