//! Auth service flows against a stub backend

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Form, Json, Router};
use crewdesk::api::navigator::{RouteLog, DASHBOARD_ROUTE};
use crewdesk::api::{Gateway, Navigator};
use crewdesk::auth::{AuthService, LoginOutcome, Permission};
use crewdesk::session::{MemoryStorage, SessionStore};
use crewdesk::{Config, Error};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
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

fn service_at(base_url: &str, navigator: Arc<RouteLog>) -> (AuthService, Arc<Gateway>) {
    let mut config = Config::default();
    config.server.base_url = base_url.to_string();
    let session = Arc::new(SessionStore::new(Box::new(MemoryStorage::new())));
    let gateway = Arc::new(Gateway::new(&config, session, navigator));
    (AuthService::new(Arc::clone(&gateway)), gateway)
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

/// Stub token endpoint: admin/admin123 is the only valid pair
async fn login_handler(Form(form): Form<LoginForm>) -> (StatusCode, Json<Value>) {
    if form.username == "admin" && form.password == "admin123" {
        (
            StatusCode::OK,
            Json(json!({
                "access_token": "tok1",
                "user": { "id": 1, "username": "admin", "role": "admin" }
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Incorrect username or password" })),
        )
    }
}

#[tokio::test]
async fn test_login_success_stores_session_and_grants_permissions() {
    let app = Router::new().route("/api/v1/auth/login", post(login_handler));
    let base = spawn_backend(app).await;

    let navigator = Arc::new(RouteLog::new());
    let (auth, gateway) = service_at(&base, Arc::clone(&navigator));

    let outcome = auth.login("admin", "admin123").await;
    assert_eq!(outcome, LoginOutcome::Success);

    let session = gateway.session().current();
    assert_eq!(session.token.as_deref(), Some("tok1"));
    assert_eq!(session.user.as_ref().map(|u| u.username.as_str()), Some("admin"));

    assert!(gateway.session().has_permission(Permission::ManageEmployees));
    assert!(!gateway.session().has_permission(Permission::CreateBlogs));

    assert_eq!(navigator.current(), DASHBOARD_ROUTE);
}

#[tokio::test]
async fn test_login_failure_surfaces_server_detail() {
    let app = Router::new().route("/api/v1/auth/login", post(login_handler));
    let base = spawn_backend(app).await;

    let (auth, gateway) = service_at(&base, Arc::new(RouteLog::new()));

    let outcome = auth.login("admin", "wrong").await;
    assert_eq!(
        outcome.error_message(),
        Some("Incorrect username or password")
    );
    assert!(!gateway.session().current().is_authenticated());
}

#[tokio::test]
async fn test_login_network_failure_uses_generic_message() {
    // Bind then drop a listener so the port is closed
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let base = format!("http://{}", listener.local_addr().expect("addr"));
    drop(listener);

    let (auth, gateway) = service_at(&base, Arc::new(RouteLog::new()));

    let outcome = auth.login("admin", "admin123").await;
    assert_eq!(
        outcome.error_message(),
        Some("Login failed. Please check your credentials.")
    );
    assert!(!gateway.session().current().is_authenticated());
}

#[tokio::test]
async fn test_forgot_password_round_trip() {
    let app = Router::new().route(
        "/api/v1/auth/forgot-password",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["email"], "admin@example.com");
            Json(json!({ "message": "sent" }))
        }),
    );
    let base = spawn_backend(app).await;

    let (auth, _) = service_at(&base, Arc::new(RouteLog::new()));
    auth.forgot_password("admin@example.com")
        .await
        .expect("forgot password");
}

#[tokio::test]
async fn test_reset_password_sends_code_and_new_password() {
    let app = Router::new().route(
        "/api/v1/auth/reset-password",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["email"], "admin@example.com");
            assert_eq!(body["reset_code"], "424242");
            assert_eq!(body["new_password"], "longenough");
            Json(json!({ "message": "ok" }))
        }),
    );
    let base = spawn_backend(app).await;

    let (auth, gateway) = service_at(&base, Arc::new(RouteLog::new()));
    auth.reset_password("admin@example.com", "424242", "longenough")
        .await
        .expect("reset password");

    // Password recovery never touches the session
    assert!(!gateway.session().current().is_authenticated());
}

#[tokio::test]
async fn test_short_reset_password_never_reaches_the_server() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route(
            "/api/v1/auth/reset-password",
            post(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "message": "ok" }))
            }),
        )
        .with_state(Arc::clone(&hits));
    let base = spawn_backend(app).await;

    let (auth, _) = service_at(&base, Arc::new(RouteLog::new()));
    let err = auth
        .reset_password("admin@example.com", "424242", "seven77")
        .await
        .expect_err("must be rejected");

    match err {
        Error::Validation(message) => {
            assert!(message.contains("at least 8 characters"), "{}", message)
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
