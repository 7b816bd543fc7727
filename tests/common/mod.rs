//! Shared helpers: an in-process app plus throwaway upstream sites.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use quick_summariser::{api::routes::create_router, config::Config, fetcher::FetchConfig, AppState};
use serde_json::Value;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceExt; // for `oneshot`

pub fn test_app_with(fetch: FetchConfig) -> Router {
    let config = Config {
        server_addr: "127.0.0.1:0".parse().unwrap(),
        fetch,
    };
    create_router(AppState::new(&config).expect("Failed to build app state"))
}

pub fn test_app() -> Router {
    test_app_with(FetchConfig::default())
}

/// Fetch config with a short timeout so slow-upstream tests finish quickly.
pub fn quick_fetch() -> FetchConfig {
    FetchConfig {
        timeout: Duration::from_millis(300),
        ..FetchConfig::default()
    }
}

/// Serves `router` on an ephemeral local port and returns its address.
pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

pub async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
