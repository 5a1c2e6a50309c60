//! Integration tests for API endpoints.
//!
//! These tests drive the real router and service stack against an
//! in-memory repository and a scripted cost source, so no database or
//! cost service is required.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{json, Value};
use tower::ServiceExt;

use users_service::api::{create_router, AppState};
use users_service::domain::{NewUser, User};
use users_service::errors::{AppError, AppResult};
use users_service::infra::{AuditEntry, AuditLogger, Database, UserRepository};
use users_service::services::{CostAggregator, CostSource, UserManager};

// =============================================================================
// Test doubles
// =============================================================================

/// In-memory user repository preserving insertion-order-independent
/// natural ordering by id.
#[derive(Default)]
struct InMemoryUsers {
    users: Mutex<BTreeMap<i64, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        // Mirrors the store's uniqueness constraint
        if users.contains_key(&user.id) {
            return Err(AppError::UserExists(user.id));
        }
        let created = User {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            birthday: user.birthday,
        };
        users.insert(created.id, created.clone());
        Ok(created)
    }
}

/// Cost source returning a fixed total, or failing when scripted to.
struct ScriptedCostSource {
    total: f64,
    fail: bool,
}

#[async_trait]
impl CostSource for ScriptedCostSource {
    async fn total_for(&self, _user_id: i64) -> AppResult<f64> {
        if self.fail {
            Err(AppError::cost_source("cost service down"))
        } else {
            Ok(self.total)
        }
    }
}

/// Audit logger that discards records.
struct NullAudit;

#[async_trait]
impl AuditLogger for NullAudit {
    async fn record(&self, _entry: AuditEntry) {}
}

fn test_app(source: ScriptedCostSource) -> Router {
    let audit: Arc<dyn AuditLogger> = Arc::new(NullAudit);
    let aggregator = CostAggregator::new(Arc::new(source), audit.clone());
    let service = Arc::new(UserManager::new(
        Arc::new(InMemoryUsers::default()),
        aggregator,
        audit,
    ));
    let database = Arc::new(Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
    ));

    create_router(AppState::new(service, database))
}

fn default_app() -> Router {
    test_app(ScriptedCostSource {
        total: 100.0,
        fail: false,
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_returns_created_user() {
    let app = default_app();

    let (status, body) = send(
        &app,
        post_json(
            "/api/add",
            json!({
                "id": 999999,
                "first_name": "Test",
                "last_name": "User",
                "birthday": "01/01/1990"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 999999,
            "first_name": "Test",
            "last_name": "User",
            "birthday": "01/01/1990"
        })
    );
}

#[tokio::test]
async fn test_register_rejects_iso_date_format() {
    let app = default_app();

    let (status, body) = send(
        &app,
        post_json(
            "/api/add",
            json!({
                "id": 888888,
                "first_name": "Test",
                "last_name": "User",
                "birthday": "1990-01-01"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "BAD_DATE_FORMAT");
}

#[tokio::test]
async fn test_register_rejects_missing_fields() {
    let app = default_app();

    let (status, body) = send(&app, post_json("/api/add", json!({ "id": 888888 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "MISSING_FIELDS");
}

#[tokio::test]
async fn test_register_rejects_bad_id() {
    let app = default_app();

    let (status, body) = send(
        &app,
        post_json(
            "/api/add",
            json!({
                "id": "abc",
                "first_name": "Test",
                "last_name": "User",
                "birthday": "01/01/1990"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "ID_NOT_POSITIVE_INTEGER");
}

#[tokio::test]
async fn test_register_twice_yields_user_exists() {
    let app = default_app();
    let payload = json!({
        "id": 123123,
        "first_name": "Test",
        "last_name": "User",
        "birthday": "01/01/1990"
    });

    let (status, _) = send(&app, post_json("/api/add", payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, post_json("/api/add", payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "USER_EXISTS");

    // No partial state: exactly one user remains
    let (_, body) = send(&app, get("/api/users")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

// =============================================================================
// Detail lookup
// =============================================================================

#[tokio::test]
async fn test_detail_round_trips_birthday_and_total() {
    let app = default_app();

    send(
        &app,
        post_json(
            "/api/add",
            json!({
                "id": 123123,
                "first_name": "mosh",
                "last_name": "israeli",
                "birthday": "01/01/1990"
            }),
        ),
    )
    .await;

    let (status, body) = send(&app, get("/api/users/123123")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "first_name": "mosh",
            "last_name": "israeli",
            "id": 123123,
            "total": 100.0
        })
    );

    // The stored birthday renders back as the exact input string
    let (_, body) = send(&app, get("/api/users")).await;
    assert_eq!(body[0]["birthday"], "01/01/1990");
}

#[tokio::test]
async fn test_detail_unknown_user_is_404() {
    let app = default_app();

    let (status, body) = send(&app, get("/api/users/424242")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_detail_invalid_id_is_400() {
    let app = default_app();

    let (status, body) = send(&app, get("/api/users/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "ID_NOT_POSITIVE_INTEGER");
}

#[tokio::test]
async fn test_detail_survives_cost_service_outage() {
    let app = test_app(ScriptedCostSource {
        total: 0.0,
        fail: true,
    });

    send(
        &app,
        post_json(
            "/api/add",
            json!({
                "id": 123123,
                "first_name": "Test",
                "last_name": "User",
                "birthday": "01/01/1990"
            }),
        ),
    )
    .await;

    let (status, body) = send(&app, get("/api/users/123123")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0.0);
}

// =============================================================================
// Listing and fallback routes
// =============================================================================

#[tokio::test]
async fn test_list_users_empty() {
    let app = default_app();

    let (status, body) = send(&app, get("/api/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = default_app();

    let (status, body) = send(&app, get("/api/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "NOT_FOUND");
}
