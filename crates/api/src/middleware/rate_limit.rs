//! Per-route, per-client request rate limiting.
//!
//! Each (route, client IP) pair owns a fixed window. The first request
//! opens the window; further requests are counted until the budget is
//! spent, after which requests are rejected with `429 Too Many Requests`
//! until the window expires.
//!
//! Counters live in a [`DashMap`], so the read-modify-write on one key
//! happens under that key's shard lock and concurrent requests from the
//! same client are never double- or under-counted. State is per process.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::RETRY_AFTER;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dashmap::DashMap;
use serde_json::json;

/// Key used when the peer address is not available (e.g. in-process tests).
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Rate-limited memo routes. Each has its own budget per client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKey {
    ListMemos,
    CreateMemo,
    UpdateMemo,
    DeleteMemo,
}

impl RouteKey {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteKey::ListMemos => "list_memos",
            RouteKey::CreateMemo => "create_memo",
            RouteKey::UpdateMemo => "update_memo",
            RouteKey::DeleteMemo => "delete_memo",
        }
    }

    /// Mutating routes share the stricter budget.
    pub fn is_mutation(self) -> bool {
        !matches!(self, RouteKey::ListMemos)
    }
}

/// "N requests per window".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub max_requests: u32,
    pub window: Duration,
}

impl RateLimit {
    pub const fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }

    /// Body text of a rejection, e.g. `Rate limit exceeded: 5 per 1 second`.
    pub fn describe(&self) -> String {
        let secs = self.window.as_secs().max(1);
        let unit = if secs == 1 { "second" } else { "seconds" };
        format!("Rate limit exceeded: {} per {secs} {unit}", self.max_requests)
    }
}

/// Budgets for the list route and for the mutating routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub list: RateLimit,
    pub mutate: RateLimit,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            list: RateLimit::new(5, Duration::from_secs(1)),
            mutate: RateLimit::new(1, Duration::from_secs(1)),
        }
    }
}

impl RateLimitConfig {
    pub fn limit_for(&self, route: RouteKey) -> RateLimit {
        if route.is_mutation() {
            self.mutate
        } else {
            self.list
        }
    }
}

/// Outcome of a single rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Limited { limit: RateLimit, retry_after: Duration },
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// In-memory fixed-window counters keyed by (route, client).
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: DashMap<(RouteKey, String), Window>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: DashMap::new(),
        }
    }

    /// Count one request for `client` on `route` now.
    pub fn check(&self, route: RouteKey, client: &str) -> Decision {
        self.check_at(route, client, Instant::now())
    }

    /// Count one request for `client` on `route` at the given instant.
    pub fn check_at(&self, route: RouteKey, client: &str, now: Instant) -> Decision {
        let limit = self.config.limit_for(route);

        let mut entry = self
            .windows
            .entry((route, client.to_string()))
            .or_insert(Window {
                started: now,
                count: 0,
            });
        let window = entry.value_mut();

        let elapsed = now.saturating_duration_since(window.started);
        if elapsed >= limit.window {
            window.started = now;
            window.count = 0;
        }

        if window.count < limit.max_requests {
            window.count += 1;
            Decision::Allowed
        } else {
            let retry_after = limit.window.saturating_sub(elapsed);
            Decision::Limited { limit, retry_after }
        }
    }

    /// Drop windows that have fully expired. Returns the number removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub fn purge_expired_at(&self, now: Instant) -> usize {
        let before = self.windows.len();
        let config = self.config;
        self.windows.retain(|(route, _), window| {
            now.saturating_duration_since(window.started) < config.limit_for(*route).window
        });
        before.saturating_sub(self.windows.len())
    }

    /// Number of live (route, client) windows.
    pub fn tracked_keys(&self) -> usize {
        self.windows.len()
    }
}

/// State handed to [`enforce_rate_limit`] for one route.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    pub limiter: Arc<RateLimiter>,
    pub route: RouteKey,
}

impl RateLimitState {
    pub fn new(limiter: &Arc<RateLimiter>, route: RouteKey) -> Self {
        Self {
            limiter: Arc::clone(limiter),
            route,
        }
    }
}

/// Resolve the client identity from the peer address, if the server was
/// started with connect info.
pub fn client_key(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Middleware: reject the request with 429 before it reaches the handler
/// when the client's budget for this route is spent.
pub async fn enforce_rate_limit(
    State(state): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_key(&request);

    match state.limiter.check(state.route, &client) {
        Decision::Allowed => next.run(request).await,
        Decision::Limited { limit, retry_after } => {
            tracing::info!(
                route = state.route.as_str(),
                client = %client,
                "Rate limit exceeded"
            );
            too_many_requests(&limit, retry_after)
        }
    }
}

fn too_many_requests(limit: &RateLimit, retry_after: Duration) -> Response {
    // Round up so clients never retry inside the window.
    let retry_secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
    (
        StatusCode::TOO_MANY_REQUESTS,
        [(RETRY_AFTER, retry_secs.max(1).to_string())],
        Json(json!({ "error": limit.describe() })),
    )
        .into_response()
}
