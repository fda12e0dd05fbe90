//! End-to-end tests for the schema endpoint.
//!
//! These spin up a local stub of the remote schema repository on an
//! ephemeral port, point the service at it, and drive the real router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use schema_service::api::{create_router, AppState};
use schema_service::config::{Config, Profile};

const GOOD_SCHEMA: &str = "\
name: sdss_dr18
'@id': '#sdss_dr18'
description: SDSS Data Release 18
tables:
  - name: sdss_specobj
    columns:
      - name: specObjID
        datatype: long
      - name: survey
        datatype: string
        length: 32
";

const NOT_YAML: &str = "name: x: y: z\n\t{broken";

const WRONG_SHAPE: &str = "\
greeting: hello
tables: []
";

/// Serve fixture documents on an ephemeral port, returning the base URL.
async fn spawn_repository_stub() -> String {
    let stub = Router::new()
        .route("/yml/sdss_dr18.yaml", get(|| async { GOOD_SCHEMA }))
        .route("/yml/broken.yaml", get(|| async { NOT_YAML }))
        .route("/yml/wrong.yaml", get(|| async { WRONG_SHAPE }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub).await.unwrap();
    });

    format!("http://{addr}/yml")
}

fn test_config(base_url: &str) -> Config {
    Config {
        name: "schema-service".to_string(),
        path_prefix: String::new(),
        profile: Profile::Development,
        log_level: "info".to_string(),
        port: 8080,
        schema_base_url: base_url.to_string(),
        http_timeout_ms: 2_000,
        http_pool_size: 2,
    }
}

async fn get_bytes(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn valid_schema_is_returned_as_json() {
    let base_url = spawn_repository_stub().await;
    let app = create_router(AppState::new(test_config(&base_url)));

    let (status, body) = get_bytes(app, "/schema?name=sdss_dr18").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["name"], "sdss_dr18");
    assert_eq!(json["@id"], "#sdss_dr18");
    assert_eq!(json["tables"][0]["name"], "sdss_specobj");
    assert_eq!(json["tables"][0]["columns"][1]["length"], 32);
    // Optional fields that were unset must be absent, not null.
    assert!(json.get("version").is_none());
    assert!(json["tables"][0]["columns"][0].get("nullable").is_none());
}

#[tokio::test]
async fn repeated_fetches_are_byte_identical() {
    let base_url = spawn_repository_stub().await;
    let app = create_router(AppState::new(test_config(&base_url)));

    let (status_a, body_a) = get_bytes(app.clone(), "/schema?name=sdss_dr18").await;
    let (status_b, body_b) = get_bytes(app, "/schema?name=sdss_dr18").await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn unreachable_repository_is_bad_gateway() {
    // Bind then drop a listener so the port is known to refuse connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base_url = format!("http://{addr}/yml");
    let app = create_router(AppState::new(test_config(&base_url)));

    let (status, body) = get_bytes(app, "/schema?name=sdss_dr18").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let attempted = format!("{base_url}/sdss_dr18.yaml");
    assert_eq!(json["url"], attempted.as_str());
    assert!(json["error"].as_str().unwrap().contains(&attempted));
}

#[tokio::test]
async fn malformed_yaml_is_internal_server_error() {
    let base_url = spawn_repository_stub().await;
    let app = create_router(AppState::new(test_config(&base_url)));

    let (status, body) = get_bytes(app, "/schema?name=broken").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("not valid YAML"));
}

#[tokio::test]
async fn schema_shape_mismatch_is_unprocessable() {
    let base_url = spawn_repository_stub().await;
    let app = create_router(AppState::new(test_config(&base_url)));

    let (status, body) = get_bytes(app, "/schema?name=wrong").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    // The error names the field that failed validation.
    assert!(json["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn unknown_schema_name_is_not_a_crash() {
    // The stub returns 404 with a plain-text body; the service parses the
    // body regardless of upstream status, so this surfaces as a validation
    // error rather than a panic or a silent 200.
    let base_url = spawn_repository_stub().await;
    let app = create_router(AppState::new(test_config(&base_url)));

    let (status, _) = get_bytes(app, "/schema?name=nonexistent").await;
    assert_ne!(status, StatusCode::OK);
}
