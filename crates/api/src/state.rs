use std::sync::Arc;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;
use crate::services::memo::MemoService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: memo_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Per-route, per-client request counters.
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Memo service bound to this state's pool.
    pub fn memo_service(&self) -> MemoService {
        MemoService::new(self.pool.clone())
    }
}
