//! Handlers for the memo API.
//!
//! Input is validated here, before the memo service is called. Every
//! handler ends in either a success envelope or an [`AppError`].

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

use memo_core::error::CoreError;
use memo_core::memo::{validate_content, validate_title};
use memo_core::types::DbId;
use memo_db::models::memo::{CreateMemo, UpdateMemo};

use crate::error::{AppError, AppResult};
use crate::response::{ApiResponse, MemoListResponse};
use crate::state::AppState;

/// GET /ping
pub async fn ping() -> &'static str {
    "pong"
}

/// GET /
///
/// List every memo.
pub async fn list_memos(State(state): State<AppState>) -> AppResult<Json<MemoListResponse>> {
    tracing::debug!("Listing memos");
    let memos = state.memo_service().list_memos().await?;
    tracing::info!(count = memos.len(), "Memos listed");

    Ok(Json(MemoListResponse::new(memos)))
}

/// POST /
///
/// Create a memo from `{title, content?}`.
pub async fn create_memo(
    State(state): State<AppState>,
    payload: Result<Json<CreateMemo>, JsonRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    validate_title(&input.title).map_err(CoreError::Validation)?;
    if let Some(ref content) = input.content {
        validate_content(content).map_err(CoreError::Validation)?;
    }

    let memo = state.memo_service().create_memo(&input).await?;

    tracing::info!(memo_id = memo.id, title = %memo.title, "Memo created");

    Ok(Json(ApiResponse::ok()))
}

/// PATCH /{id}
///
/// Partially update a memo. Fields missing from the body are left as-is.
pub async fn update_memo(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateMemo>, JsonRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Path(id) = id.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    if let Some(ref title) = input.title {
        validate_title(title).map_err(CoreError::Validation)?;
    }
    if let Some(ref content) = input.content {
        validate_content(content).map_err(CoreError::Validation)?;
    }

    let memo = state.memo_service().update_memo(id, &input).await?;

    tracing::info!(memo_id = memo.id, "Memo updated");

    Ok(Json(ApiResponse::ok()))
}

/// DELETE /{id}
///
/// Hard-delete a memo.
pub async fn delete_memo(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Path(id) = id.map_err(|e| AppError::BadRequest(e.body_text()))?;

    state.memo_service().delete_memo(id).await?;

    tracing::info!(memo_id = id, "Memo deleted");

    Ok(Json(ApiResponse::ok()))
}
