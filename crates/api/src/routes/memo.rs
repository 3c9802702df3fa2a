//! Route definitions for the memo API.
//!
//! ```text
//! GET    /api/memo/ping  -> ping           (not rate limited)
//! GET    /api/memo/      -> list_memos     (5 / second / client)
//! POST   /api/memo/      -> create_memo    (1 / second / client)
//! PATCH  /api/memo/{id}  -> update_memo    (1 / second / client)
//! DELETE /api/memo/{id}  -> delete_memo    (1 / second / client)
//! ```
//!
//! The collection is reachable with and without the trailing slash; both
//! spellings share one budget. The budgets above are the defaults from
//! [`RateLimitConfig`].
//!
//! [`RateLimitConfig`]: crate::middleware::rate_limit::RateLimitConfig

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::memo;
use crate::middleware::rate_limit::{enforce_rate_limit, RateLimitState, RateLimiter, RouteKey};
use crate::state::AppState;

/// Base path of the memo API.
pub const BASE_PATH: &str = "/api/memo";

/// Build the memo routes with their full paths (merge at the root).
pub fn router(limiter: &Arc<RateLimiter>) -> Router<AppState> {
    let limited =
        |route| from_fn_with_state(RateLimitState::new(limiter, route), enforce_rate_limit);

    let collection = get(memo::list_memos)
        .route_layer(limited(RouteKey::ListMemos))
        .merge(post(memo::create_memo).route_layer(limited(RouteKey::CreateMemo)));

    let item = patch(memo::update_memo)
        .route_layer(limited(RouteKey::UpdateMemo))
        .merge(delete(memo::delete_memo).route_layer(limited(RouteKey::DeleteMemo)));

    Router::new()
        .route(&format!("{BASE_PATH}/ping"), get(memo::ping))
        .route(BASE_PATH, collection.clone())
        .route(&format!("{BASE_PATH}/"), collection)
        .route(&format!("{BASE_PATH}/{{id}}"), item)
}
