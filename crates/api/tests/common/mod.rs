#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use memo_api::config::ServerConfig;
use memo_api::middleware::rate_limit::{RateLimit, RateLimitConfig, RateLimiter};
use memo_api::router::build_app_router;
use memo_api::state::AppState;

/// Budget large enough that functional tests never trip the limiter.
const UNLIMITED: RateLimit = RateLimit::new(10_000, Duration::from_secs(1));

/// Build a test `ServerConfig` with safe defaults and the given budgets.
pub fn test_config(rate_limit: RateLimitConfig) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        rate_limit,
        log_json: false,
    }
}

fn build_app(pool: SqlitePool, rate_limit: RateLimitConfig) -> Router {
    let config = test_config(rate_limit);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        rate_limiter: Arc::new(RateLimiter::new(rate_limit)),
    };
    build_app_router(state, &config)
}

/// Full application router with effectively unlimited budgets.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app(
        pool,
        RateLimitConfig {
            list: UNLIMITED,
            mutate: UNLIMITED,
        },
    )
}

/// Full application router with the production default budgets
/// (5/s for listing, 1/s for mutations).
pub fn build_rate_limited_app(pool: SqlitePool) -> Router {
    build_app(pool, RateLimitConfig::default())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Default peer address attached to every request.
pub fn client(last_octet: u8) -> SocketAddr {
    SocketAddr::from(([10, 0, 0, last_octet], 40000))
}

/// Send a request as `from`, with an optional JSON body.
pub async fn send_from(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    from: SocketAddr,
) -> Response {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .extension(ConnectInfo(from));

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send_from(app, Method::GET, uri, None, client(1)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_from(app, Method::POST, uri, Some(body), client(1)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_from(app, Method::PATCH, uri, Some(body), client(1)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send_from(app, Method::DELETE, uri, None, client(1)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
