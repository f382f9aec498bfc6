#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use frage::router::init_router;
use frage::state::AppState;
use frage_auth::create_access_token;
use frage_config::{AccessConfig, CorsConfig, JwtConfig};
use frage_db::InMemoryTeacherRegistry;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const LEGACY_EMAIL: &str = "master_teacher@frage.com";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_token_expiry: 3600,
    }
}

/// Registry with one staff member per campus-scoped role plus an
/// administrator row.
pub fn seeded_registry() -> Arc<InMemoryTeacherRegistry> {
    let registry = Arc::new(InMemoryTeacherRegistry::new());
    registry.insert("teacher-gangnam", "Kim Minji", Some("teacher"), Some("gangnam"));
    registry.insert("teacher-bundang", "Lee Jisoo", Some("teacher"), Some("bundang"));
    registry.insert("campus-bundang", "Bundang Office", Some("campus"), Some("bundang"));
    registry.insert("teacher-nocampus", "Jung Hana", Some("teacher"), None);
    registry.insert("admin-1", "Oh Sejin", Some("admin"), None);
    registry
}

pub fn setup_test_app(registry: Arc<InMemoryTeacherRegistry>) -> Router {
    let state = AppState::new(
        registry,
        test_jwt_config(),
        AccessConfig::default(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    );
    init_router(state, None)
}

pub fn token_for(id: &str, email: &str, metadata_role: Option<&str>) -> String {
    create_access_token(id, email, metadata_role, &test_jwt_config()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: &Value,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}
