//! Response envelope types for the memo API.
//!
//! Successful calls answer `{ "errCode": 0, ...payload }`; failures answer
//! `{ "code": <int>, "message": <string> }` next to a non-2xx status (see
//! [`crate::error::AppError`]).

use memo_core::codes::ErrorCode;
use memo_db::models::memo::Memo;
use serde::Serialize;

/// Bare success envelope returned by mutating endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    #[serde(rename = "errCode")]
    pub err_code: ErrorCode,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            err_code: ErrorCode::NoError,
        }
    }
}

/// Success envelope for `GET /api/memo/`.
#[derive(Debug, Serialize)]
pub struct MemoListResponse {
    #[serde(rename = "errCode")]
    pub err_code: ErrorCode,
    pub memos: Vec<Memo>,
}

impl MemoListResponse {
    pub fn new(memos: Vec<Memo>) -> Self {
        Self {
            err_code: ErrorCode::NoError,
            memos,
        }
    }
}

/// Error envelope paired with a non-2xx HTTP status.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}
