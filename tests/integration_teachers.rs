mod common;

use axum::http::StatusCode;
use common::{get, seeded_registry, setup_test_app, token_for};
use serde_json::Value;

fn names(body: &Value) -> Vec<String> {
    let mut names: Vec<String> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_parent_is_forbidden() {
    let app = setup_test_app(seeded_registry());
    let token = token_for("parent-1", "mom@example.com", Some("parent"));

    let (status, body) = get(&app, "/api/teachers", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn test_admin_sees_every_campus() {
    let app = setup_test_app(seeded_registry());
    let token = token_for("admin-1", "admin@frage.com", None);

    let (status, body) = get(&app, "/api/teachers", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_admin_can_filter_by_campus() {
    let app = setup_test_app(seeded_registry());
    let token = token_for("admin-1", "admin@frage.com", None);

    let (status, body) = get(&app, "/api/teachers?campus=bundang", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Bundang Office", "Lee Jisoo"]);
}

#[tokio::test]
async fn test_teacher_sees_own_campus_only() {
    let app = setup_test_app(seeded_registry());
    let token = token_for("teacher-gangnam", "minji@frage.com", None);

    let (status, body) =
        get(&app, "/api/teachers?campus=bundang", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Kim Minji"]);
}

#[tokio::test]
async fn test_campus_account_sees_own_campus() {
    let app = setup_test_app(seeded_registry());
    let token = token_for("campus-bundang", "bundang@frage.com", Some("parent"));

    let (status, body) = get(&app, "/api/teachers", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Bundang Office", "Lee Jisoo"]);
}

#[tokio::test]
async fn test_teacher_without_campus_is_forbidden() {
    let app = setup_test_app(seeded_registry());
    let token = token_for("teacher-nocampus", "hana@frage.com", None);

    let (status, body) = get(&app, "/api/teachers", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "No campus is assigned to this account");
}

#[tokio::test]
async fn test_get_teacher_respects_campus() {
    let registry = seeded_registry();
    let other = registry.insert("teacher-ilsan", "Choi Yuna", Some("teacher"), Some("ilsan"));
    let app = setup_test_app(registry);

    let teacher = token_for("teacher-gangnam", "minji@frage.com", None);
    let uri = format!("/api/teachers/{}", other.id);
    let (status, _) = get(&app, &uri, Some(&teacher)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let admin = token_for("admin-1", "admin@frage.com", None);
    let (status, body) = get(&app, &uri, Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Choi Yuna");
    assert_eq!(body["campus"], "ilsan");
}
