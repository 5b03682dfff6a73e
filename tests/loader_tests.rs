#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use specdock::{load_document, DocumentSource, Fetch, HttpFetcher, LoadError};
use std::time::Duration;

const JSON_SPEC: &str = r#"{"swagger": "2.0", "info": {"title": "Wired", "version": "1"}, "paths": {}}"#;

const YAML_SPEC: &str = r#"swagger: "2.0"
info:
  title: Wired
  version: "1"
paths: {}
"#;

/// Serve canned spec bodies on an ephemeral port until the handle drops.
fn spawn_spec_server() -> (String, std::thread::JoinHandle<()>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let base = format!("http://127.0.0.1:{port}");
    let handle = std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let (status, body) = match request.url() {
                "/spec.json" => (200, JSON_SPEC),
                "/spec.yaml" => (200, YAML_SPEC),
                "/shutdown" => break,
                _ => (404, "not found"),
            };
            let response = tiny_http::Response::from_string(body).with_status_code(status);
            let _ = request.respond(response);
        }
    });
    (base, handle)
}

async fn shutdown(base: &str, handle: std::thread::JoinHandle<()>) {
    let fetcher = HttpFetcher::new();
    let _ = fetcher.fetch(&format!("{base}/shutdown")).await;
    let _ = handle.join();
}

#[tokio::test]
async fn test_load_json_over_http() {
    let (base, handle) = spawn_spec_server();
    let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5));
    let doc = load_document(
        DocumentSource::Url(format!("{base}/spec.json")),
        &fetcher,
    )
    .await
    .unwrap();
    assert_eq!(doc["info"]["title"], json!("Wired"));
    shutdown(&base, handle).await;
}

#[tokio::test]
async fn test_load_yaml_over_http() {
    let (base, handle) = spawn_spec_server();
    let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5));
    let doc = load_document(
        DocumentSource::Url(format!("{base}/spec.yaml")),
        &fetcher,
    )
    .await
    .unwrap();
    assert_eq!(doc["swagger"], json!("2.0"));
    shutdown(&base, handle).await;
}

#[tokio::test]
async fn test_missing_remote_document_is_fetch_error() {
    let (base, handle) = spawn_spec_server();
    let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5));
    let err = load_document(
        DocumentSource::Url(format!("{base}/nope.json")),
        &fetcher,
    )
    .await
    .unwrap_err();
    match err {
        LoadError::Fetch(failure) => assert_eq!(failure.status, Some(404)),
        other => panic!("expected fetch error, got {other:?}"),
    }
    shutdown(&base, handle).await;
}
