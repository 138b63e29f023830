//! Gateway tests: bearer injection and the global 401 rule
//!
//! Each test spins up a stub backend on an ephemeral port.

use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use crewdesk::api::navigator::{RouteLog, DASHBOARD_ROUTE, ENTRY_ROUTE};
use crewdesk::api::{Gateway, Navigator};
use crewdesk::auth::models::User;
use crewdesk::auth::Role;
use crewdesk::session::{MemoryStorage, SessionStore};
use crewdesk::Config;
use serde_json::{json, Value};
use std::sync::Arc;

async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{}", addr)
}

fn gateway_at(base_url: &str, navigator: Arc<RouteLog>) -> Gateway {
    let mut config = Config::default();
    config.server.base_url = base_url.to_string();
    let session = Arc::new(SessionStore::new(Box::new(MemoryStorage::new())));
    Gateway::new(&config, session, navigator)
}

fn log_in(gateway: &Gateway, token: &str) {
    gateway
        .session()
        .save(
            User {
                id: 1,
                username: "admin".to_string(),
                email: None,
                role: Role::Admin,
            },
            token,
        )
        .expect("save");
}

async fn echo_auth(headers: HeaderMap) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    Json(json!({ "authorization": auth }))
}

#[tokio::test]
async fn test_bearer_token_attached_when_logged_in() {
    let app = Router::new().route("/api/v1/echo", get(echo_auth));
    let base = spawn_backend(app).await;

    let gateway = gateway_at(&base, Arc::new(RouteLog::new()));
    log_in(&gateway, "tok1");

    let body: Value = gateway.get_json("/echo").await.expect("request");
    assert_eq!(body["authorization"], "Bearer tok1");
}

#[tokio::test]
async fn test_request_without_session_is_unauthenticated() {
    let app = Router::new().route("/api/v1/echo", get(echo_auth));
    let base = spawn_backend(app).await;

    let gateway = gateway_at(&base, Arc::new(RouteLog::new()));

    let body: Value = gateway.get_json("/echo").await.expect("request");
    assert_eq!(body["authorization"], "");
}

#[tokio::test]
async fn test_401_clears_session_and_redirects_to_entry() {
    let app = Router::new().fallback(|| async { StatusCode::UNAUTHORIZED });
    let base = spawn_backend(app).await;

    let navigator = Arc::new(RouteLog::starting_at(DASHBOARD_ROUTE));
    let gateway = gateway_at(&base, Arc::clone(&navigator));
    log_in(&gateway, "stale");

    let err = gateway
        .get_json::<Value>("/tasks")
        .await
        .expect_err("must fail");
    assert!(err.is_unauthorized());

    assert!(!gateway.session().current().is_authenticated());
    assert_eq!(navigator.current(), ENTRY_ROUTE);
    assert_eq!(navigator.history(), vec![ENTRY_ROUTE]);
}

#[tokio::test]
async fn test_concurrent_401s_redirect_exactly_once() {
    let app = Router::new().fallback(|| async { StatusCode::UNAUTHORIZED });
    let base = spawn_backend(app).await;

    let navigator = Arc::new(RouteLog::starting_at(DASHBOARD_ROUTE));
    let gateway = gateway_at(&base, Arc::clone(&navigator));
    log_in(&gateway, "stale");

    let (a, b, c) = tokio::join!(
        gateway.get_json::<Value>("/tasks"),
        gateway.get_json::<Value>("/projects"),
        gateway.get_json::<Value>("/notifications"),
    );
    assert!(a.is_err() && b.is_err() && c.is_err());

    assert!(!gateway.session().current().is_authenticated());
    // All three got a 401; the already-at-entry guard allows one redirect
    assert_eq!(navigator.history(), vec![ENTRY_ROUTE]);
}

#[tokio::test]
async fn test_401_at_entry_route_does_not_navigate() {
    let app = Router::new().fallback(|| async { StatusCode::UNAUTHORIZED });
    let base = spawn_backend(app).await;

    let navigator = Arc::new(RouteLog::new());
    let gateway = gateway_at(&base, Arc::clone(&navigator));

    let _ = gateway.get_json::<Value>("/tasks").await;

    assert!(navigator.history().is_empty());
    assert_eq!(navigator.current(), ENTRY_ROUTE);
}

#[tokio::test]
async fn test_late_401_after_logout_is_tolerated() {
    let app = Router::new().fallback(|| async { StatusCode::UNAUTHORIZED });
    let base = spawn_backend(app).await;

    let navigator = Arc::new(RouteLog::starting_at(DASHBOARD_ROUTE));
    let gateway = gateway_at(&base, Arc::clone(&navigator));
    log_in(&gateway, "stale");

    // Logout happened first; the straggler 401 must not redirect again
    gateway.session().clear();
    navigator.go(ENTRY_ROUTE);

    let _ = gateway.get_json::<Value>("/tasks").await;

    assert!(!gateway.session().current().is_authenticated());
    assert_eq!(navigator.history(), vec![ENTRY_ROUTE]);
}

#[tokio::test]
async fn test_non_401_errors_pass_through_with_detail() {
    let app = Router::new().route(
        "/api/v1/projects",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "End date before start date" })),
            )
        }),
    );
    let base = spawn_backend(app).await;

    let navigator = Arc::new(RouteLog::starting_at(DASHBOARD_ROUTE));
    let gateway = gateway_at(&base, Arc::clone(&navigator));
    log_in(&gateway, "tok1");

    let err = gateway
        .get_json::<Value>("/projects")
        .await
        .expect_err("must fail");

    match err {
        crewdesk::Error::Api { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "End date before start date");
        }
        other => panic!("expected api error, got {:?}", other),
    }

    // Only 401 triggers the session teardown
    assert!(gateway.session().current().is_authenticated());
    assert!(navigator.history().is_empty());
}

#[tokio::test]
async fn test_success_responses_pass_through() {
    let app = Router::new().route(
        "/api/v1/tasks/my-tasks",
        get(|| async { Json(json!([{ "id": 5, "title": "Ship it", "status": "todo" }])) }),
    );
    let base = spawn_backend(app).await;

    let gateway = gateway_at(&base, Arc::new(RouteLog::new()));
    log_in(&gateway, "tok1");

    let tasks = gateway.tasks().my_tasks().await.expect("tasks");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Ship it");
}
