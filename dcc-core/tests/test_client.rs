//! `SubmissionClient` against an in-process stand-in for the submission server.

use axum::extract::{Path, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use dcc_core::config::Config;
use dcc_core::{
    basic_token, AdminApi, AdminController, ApiError, SharedCredentials, SubmissionClient,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const TOKEN: &str = "dXNlcjpwYXNz";

#[derive(Debug, Clone)]
struct SeenRequest {
    method: String,
    path: String,
    authorization: Option<String>,
    accept: Option<String>,
    content_type: Option<String>,
}

struct ServerState {
    upcoming: String,
    releases: HashMap<String, Value>,
    active: bool,
    queue: Vec<String>,
    patches: Vec<Value>,
    seen: Vec<SeenRequest>,
}

type Shared = Arc<Mutex<ServerState>>;

fn release_json(name: &str, created: i64) -> Value {
    json!({
        "name": name,
        "created": created,
        "lastUpdate": created + 500,
        "state": "OPENED",
        "dictionaryVersion": "0.11c",
    })
}

async fn record_and_authorize(State(state): State<Shared>, req: Request, next: Next) -> Response {
    let seen = {
        let header_value = |name: header::HeaderName| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string())
        };
        SeenRequest {
            method: req.method().to_string(),
            path: req.uri().path().to_string(),
            authorization: header_value(header::AUTHORIZATION),
            accept: header_value(header::ACCEPT),
            content_type: header_value(header::CONTENT_TYPE),
        }
    };
    let authorized = seen.authorization.as_deref() == Some(format!("Basic {TOKEN}").as_str());
    state.lock().unwrap().seen.push(seen);

    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({"code": "UNAUTHORIZED"}))).into_response();
    }
    next.run(req).await
}

async fn next_release(State(state): State<Shared>) -> Redirect {
    let name = state.lock().unwrap().upcoming.clone();
    Redirect::temporary(&format!("/ws/releases/{name}"))
}

async fn get_release(State(state): State<Shared>, Path(name): Path<String>) -> Response {
    match state.lock().unwrap().releases.get(&name) {
        Some(release) => Json(release.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"code": "NO_SUCH_ENTITY", "message": format!("No release {name}")})),
        )
            .into_response(),
    }
}

async fn perform_release(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let name = body["name"].as_str().unwrap_or_default().to_string();
    if name == "bad" {
        return (StatusCode::BAD_REQUEST, Json(json!({"code": "RELEASE_EXCEPTION"}))).into_response();
    }
    let mut state = state.lock().unwrap();
    let release = release_json(&name, 9_000);
    state.releases.insert(name.clone(), release.clone());
    state.upcoming = name;
    Json(release).into_response()
}

async fn get_systems(State(state): State<Shared>) -> Json<Value> {
    let state = state.lock().unwrap();
    Json(json!({
        "active": state.active,
        "activeSftpSessions": 1,
        "userSessions": [
            {"userName": "alice", "ioSessionMap": {"fileTransfer": "ssm_p.txt"}}
        ],
    }))
}

async fn patch_systems(State(state): State<Shared>, Json(body): Json<Value>) -> StatusCode {
    let mut state = state.lock().unwrap();
    if let Some(active) = body["active"].as_bool() {
        state.active = active;
    }
    state.patches.push(body);
    StatusCode::NO_CONTENT
}

async fn get_queue(State(state): State<Shared>) -> Json<Vec<String>> {
    Json(state.lock().unwrap().queue.clone())
}

async fn clear_queue(State(state): State<Shared>) -> StatusCode {
    state.lock().unwrap().queue.clear();
    StatusCode::NO_CONTENT
}

async fn start_server() -> (String, Shared) {
    let state: Shared = Arc::new(Mutex::new(ServerState {
        upcoming: "ICGC22".to_string(),
        releases: HashMap::from([
            ("ICGC21".to_string(), release_json("ICGC21", 1_000)),
            ("ICGC22".to_string(), release_json("ICGC22", 5_000)),
        ]),
        active: false,
        queue: vec!["PACA-CA".to_string(), "BRCA-UK".to_string()],
        patches: Vec::new(),
        seen: Vec::new(),
    }));

    let app = Router::new()
        .route("/ws/nextRelease", get(next_release).post(perform_release))
        .route("/ws/nextRelease/queue", get(get_queue).delete(clear_queue))
        .route("/ws/releases/:name", get(get_release))
        .route("/ws/systems", get(get_systems).patch(patch_systems))
        .layer(middleware::from_fn_with_state(state.clone(), record_and_authorize))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (format!("http://{addr}/ws"), state)
}

fn client(api_url: &str) -> SubmissionClient {
    let credentials = SharedCredentials::with_token(basic_token("user", "pass"));
    SubmissionClient::new(Config::default().with_api_url(api_url), credentials).unwrap()
}

#[tokio::test]
async fn test_requests_carry_auth_headers() {
    let (url, state) = start_server().await;
    let client = client(&url);

    client.set_submissions_active(true).await.unwrap();

    let seen = state.lock().unwrap().seen.clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "PATCH");
    assert_eq!(seen[0].path, "/ws/systems");
    assert_eq!(seen[0].authorization.as_deref(), Some("Basic dXNlcjpwYXNz"));
    assert_eq!(seen[0].accept.as_deref(), Some("application/json"));
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_upcoming_release_follows_redirect() {
    let (url, state) = start_server().await;
    let client = client(&url);

    let release = client.upcoming_release().await.unwrap();
    assert_eq!(release.name, "ICGC22");
    assert_eq!(release.created, Some(5_000));
    assert_eq!(release.last_update, Some(5_500));
    assert_eq!(release.state.as_deref(), Some("OPENED"));
    assert_eq!(release.dictionary_version.as_deref(), Some("0.11c"));

    let paths: Vec<String> = state.lock().unwrap().seen.iter().map(|s| s.path.clone()).collect();
    assert_eq!(paths, vec!["/ws/nextRelease", "/ws/releases/ICGC22"]);
}

#[tokio::test]
async fn test_named_release_not_found() {
    let (url, _state) = start_server().await;
    let client = client(&url);

    assert_eq!(client.release("ICGC21").await.unwrap().created, Some(1_000));

    let err = client.release("ICGC99").await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 404, .. }));
    assert_eq!(err.to_string(), "No release ICGC99");
}

#[tokio::test]
async fn test_inactive_system_is_locked() {
    let (url, state) = start_server().await;
    let client = client(&url);

    let systems = client.systems().await.unwrap();
    assert!(systems.is_release_locked);
    assert_eq!(systems.active_sftp_sessions, 1);
    assert_eq!(systems.user_sessions[0].file_transfer(), Some("ssm_p.txt"));

    client.set_submissions_active(true).await.unwrap();
    assert!(!client.systems().await.unwrap().is_release_locked);
    assert_eq!(state.lock().unwrap().patches, vec![json!({"active": true})]);
}

#[tokio::test]
async fn test_perform_release_error_code_is_the_message() {
    let (url, state) = start_server().await;
    let client = client(&url);

    let err = client.perform_release("bad").await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 400, .. }));
    assert_eq!(err.to_string(), "RELEASE_EXCEPTION");
    assert_eq!(state.lock().unwrap().upcoming, "ICGC22");

    client.perform_release("ICGC23").await.unwrap();
    assert_eq!(client.upcoming_release().await.unwrap().name, "ICGC23");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let (url, state) = start_server().await;
    let client = client(&url);
    client.credentials().clear();

    let err = client.systems().await.unwrap_err();
    assert!(err.is_unauthorized());

    let seen = state.lock().unwrap().seen.clone();
    assert_eq!(seen[0].authorization.as_deref().map(str::trim), Some("Basic"));
}

#[tokio::test]
async fn test_clear_queue_then_fetch_is_empty() {
    let (url, _state) = start_server().await;
    let client = client(&url);

    assert_eq!(client.validation_queue().await.unwrap(), vec!["PACA-CA", "BRCA-UK"]);

    client.clear_validation_queue().await.unwrap();
    assert!(client.validation_queue().await.unwrap().is_empty());

    client.clear_validation_queue().await.unwrap();
    assert!(client.validation_queue().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_controller_round_trip() {
    let (url, _state) = start_server().await;
    let controller = AdminController::new(client(&url));

    controller.load().await;
    assert!(controller.ui_state().load_errors.is_empty());
    assert!(controller.systems.is_release_locked());
    assert_eq!(controller.release.current().map(|r| r.name), Some("ICGC22".into()));

    controller.toggle_lock().await.unwrap();
    assert!(!controller.systems.is_release_locked());

    controller.perform_release("ICGC23").await.unwrap();
    assert_eq!(controller.release.current().map(|r| r.name), Some("ICGC23".into()));

    controller.clear_queue().await.unwrap();
    assert!(controller.queue.current().is_empty());
}
