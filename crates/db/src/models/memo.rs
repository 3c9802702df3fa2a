//! Memo model.

use memo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `memos` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Memo {
    pub id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new memo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMemo {
    pub title: String,
    pub content: Option<String>,
}

/// DTO for a partial memo update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMemo {
    pub title: Option<String>,
    pub content: Option<String>,
}
