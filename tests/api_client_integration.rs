//! Integration tests for the HTTP transport.
//! Each test runs `HttpReviewClient` against an in-process axum server.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use critique::domain::{ReviewError, ReviewRequest, ReviewType, Severity};
use critique::infra::api::{HttpReviewClient, ReviewTransport};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const GENERIC_FAILURE: &str = "Failed to analyze code. Please check if the backend is running.";

struct MockServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn spawn_mock_server(app: Router) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server listener");
    let address: SocketAddr = listener.local_addr().expect("mock listener local addr");
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let server = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });
        server.await.expect("run mock server");
    });
    MockServer {
        base_url: format!("http://{address}"),
        shutdown: Some(shutdown_tx),
    }
}

/// Address where nothing is listening.
async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let address = listener.local_addr().expect("probe local addr");
    drop(listener);
    format!("http://{address}")
}

fn analyze_responding(status: StatusCode, body: Value) -> Router {
    Router::new().route(
        "/api/review/analyze",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

fn request() -> ReviewRequest {
    ReviewRequest::new("const x = 1;", "a.js", ReviewType::Security)
}

fn client(base_url: &str) -> HttpReviewClient {
    HttpReviewClient::new(base_url, Some(Duration::from_secs(5))).expect("build client")
}

#[tokio::test]
async fn analyze_posts_wire_body_and_parses_review() {
    let captured: Arc<Mutex<Vec<Value>>> = Arc::default();
    let sink = captured.clone();
    let app = Router::new().route(
        "/api/review/analyze",
        post(move |Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(body);
                Json(json!({
                    "summary": "ok",
                    "positive_aspects": ["const is good"],
                    "issues": [{ "title": "t", "description": "d", "severity": "high" }],
                    "metadata": { "model": "gemini-1.5", "review_type": "security" }
                }))
            }
        }),
    );
    let server = spawn_mock_server(app).await;

    let result = client(&server.base_url)
        .analyze(&request())
        .await
        .expect("review succeeds");

    assert_eq!(result.summary, "ok");
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].severity, Severity::High);
    assert_eq!(result.metadata.model, "gemini-1.5");
    assert_eq!(result.metadata.filename, "a.js");

    let bodies = captured.lock().unwrap();
    assert_eq!(
        bodies.as_slice(),
        &[json!({ "code": "const x = 1;", "filename": "a.js", "review_type": "security" })]
    );
}

#[tokio::test]
async fn rate_limit_wins_over_detail() {
    let server = spawn_mock_server(analyze_responding(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "detail": "Gemini API rate limit reached." }),
    ))
    .await;

    let err = client(&server.base_url).analyze(&request()).await.unwrap_err();

    assert_eq!(err, ReviewError::RateLimited);
    assert_eq!(
        err.to_string(),
        "Rate limit reached. Please wait a moment and try again."
    );
}

#[tokio::test]
async fn detail_message_is_surfaced() {
    let server = spawn_mock_server(analyze_responding(
        StatusCode::BAD_REQUEST,
        json!({ "detail": "File too large: 900 lines (max 500)" }),
    ))
    .await;

    let err = client(&server.base_url).analyze(&request()).await.unwrap_err();

    assert_eq!(err.to_string(), "File too large: 900 lines (max 500)");
}

#[tokio::test]
async fn error_without_detail_is_generic() {
    let app = Router::new().route(
        "/api/review/analyze",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    );
    let server = spawn_mock_server(app).await;

    let err = client(&server.base_url).analyze(&request()).await.unwrap_err();

    assert!(matches!(err, ReviewError::Transport { .. }));
    assert_eq!(err.to_string(), GENERIC_FAILURE);
}

#[tokio::test]
async fn malformed_success_body_is_generic() {
    let server = spawn_mock_server(analyze_responding(
        StatusCode::OK,
        json!({ "issues": [{ "title": "t" }] }),
    ))
    .await;

    let err = client(&server.base_url).analyze(&request()).await.unwrap_err();

    assert!(matches!(err, ReviewError::MalformedResponse { .. }));
    assert_eq!(err.to_string(), GENERIC_FAILURE);
}

#[tokio::test]
async fn unreachable_service_is_generic() {
    let base_url = closed_address().await;

    let err = client(&base_url).analyze(&request()).await.unwrap_err();

    assert!(matches!(err, ReviewError::Transport { .. }));
    assert_eq!(err.to_string(), GENERIC_FAILURE);
}

#[tokio::test]
async fn configured_timeout_is_a_transport_failure() {
    let app = Router::new().route(
        "/api/review/analyze",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "summary": "too late" }))
        }),
    );
    let server = spawn_mock_server(app).await;
    let client = HttpReviewClient::new(&server.base_url, Some(Duration::from_millis(200)))
        .expect("build client");

    let err = client.analyze(&request()).await.unwrap_err();

    assert!(matches!(err, ReviewError::Transport { .. }));
}

#[tokio::test]
async fn health_reports_service_status() {
    let app = Router::new().route(
        "/health",
        get(|| async {
            Json(json!({ "status": "healthy", "version": "0.1.0", "claude_model": "gemini-pro" }))
        }),
    );
    let server = spawn_mock_server(app).await;

    let status = client(&server.base_url).health().await;

    assert_eq!(status.status, "healthy");
    assert_eq!(status.version.as_deref(), Some("0.1.0"));
    assert_eq!(status.model.as_deref(), Some("gemini-pro"));
    assert!(!status.is_offline());
}

#[tokio::test]
async fn health_is_offline_on_any_failure() {
    let base_url = closed_address().await;
    assert!(client(&base_url).health().await.is_offline());

    let app = Router::new().route(
        "/health",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let server = spawn_mock_server(app).await;
    assert!(client(&server.base_url).health().await.is_offline());
}

#[tokio::test]
async fn review_types_are_fetched() {
    let app = Router::new().route(
        "/api/review/types",
        get(|| async {
            Json(json!({
                "review_types": [
                    { "type": "general", "name": "General Review", "description": "Everything" },
                    { "type": "security", "name": "Security Analysis", "description": "Vulns" }
                ]
            }))
        }),
    );
    let server = spawn_mock_server(app).await;

    let types = client(&server.base_url)
        .review_types()
        .await
        .expect("types load");

    let names: Vec<&str> = types.iter().map(|t| t.review_type.as_str()).collect();
    assert_eq!(names, vec!["general", "security"]);
}
