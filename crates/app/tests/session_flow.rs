//! End-to-end session lifecycle against a mock backend
//!
//! Exercises the full wiring: real HTTP adapters, real file token store,
//! real context construction.

use brick_app::AppContext;
use brick_domain::config::{ApiConfig, PollConfig, SessionConfig};
use brick_domain::{Config, RegisterRequest, Role};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer, dir: &tempfile::TempDir) -> Config {
    Config {
        api: ApiConfig { base_url: server.uri(), timeout_seconds: 5 },
        session: SessionConfig {
            token_path: dir.path().join("token.json").display().to_string(),
        },
        notifications: PollConfig { interval_seconds: 30 },
    }
}

fn user_json(role: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "u1",
        "email": "vet@example.org",
        "full_name": "Pat Doe",
        "role": role,
        "is_veteran": true
    })
}

#[tokio::test]
async fn register_persists_the_token_and_logout_clears_it() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok-register",
            "token_type": "bearer",
            "user": user_json("user")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let context = AppContext::new(test_config(&server, &dir)).unwrap();
    let request = RegisterRequest {
        email: "vet@example.org".into(),
        password: "hunter2".into(),
        full_name: "Pat Doe".into(),
        phone: None,
        is_veteran: Some(true),
    };

    let user = context.session.register(&request).await.unwrap();
    assert_eq!(user.role, Role::User);

    let session = context.session.session();
    assert!(session.is_authenticated());
    assert_eq!(session.token.as_deref(), Some("tok-register"));

    // The token landed on disk
    let raw = std::fs::read_to_string(dir.path().join("token.json")).unwrap();
    assert!(raw.contains("tok-register"));

    context.session.logout().await;
    assert!(!context.session.session().is_authenticated());
    assert!(!dir.path().join("token.json").exists());
}

#[tokio::test]
async fn a_persisted_token_is_restored_at_startup() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    std::fs::write(
        dir.path().join("token.json"),
        serde_json::json!({"access_token": "tok-persisted"}).to_string(),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("Authorization", "Bearer tok-persisted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("caseworker")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "notifications": [],
            "unread_count": 0
        })))
        .mount(&server)
        .await;

    let context = AppContext::new(test_config(&server, &dir)).unwrap();
    context.startup().await.unwrap();

    let session = context.session.session();
    assert!(session.is_authenticated());
    assert_eq!(session.user.as_ref().map(|u| u.role), Some(Role::Caseworker));
    assert!(!context.session.is_loading());

    context.shutdown().await.unwrap();
}

#[tokio::test]
async fn an_invalid_token_demotes_to_anonymous_without_noise() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    std::fs::write(
        dir.path().join("token.json"),
        serde_json::json!({"access_token": "tok-stale"}).to_string(),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": "Could not validate credentials"
        })))
        .mount(&server)
        .await;

    let context = AppContext::new(test_config(&server, &dir)).unwrap();
    context.session.bootstrap().await;

    let session = context.session.session();
    assert!(!session.is_authenticated());
    assert!(session.user.is_none());

    // The stale token was scrubbed from disk
    assert!(!dir.path().join("token.json").exists());
}

#[tokio::test]
async fn requests_after_logout_carry_no_token() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok-login",
            "token_type": "bearer",
            "user": user_json("user")
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dossier"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let context = AppContext::new(test_config(&server, &dir)).unwrap();
    context.session.login_with_credentials("vet@example.org", "hunter2").await.unwrap();
    context.session.logout().await;

    context.dossier.refresh().await;

    let requests = server.received_requests().await.unwrap();
    let dossier_request = requests.iter().find(|r| r.url.path() == "/api/dossier").unwrap();
    assert!(dossier_request.headers.get("Authorization").is_none());
}
