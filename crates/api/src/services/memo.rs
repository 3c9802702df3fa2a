//! Memo service.
//!
//! Wraps [`MemoRepo`] calls, performs the existence checks that precede
//! updates and deletes, and folds every storage failure into a single
//! [`ServiceError::Storage`] variant. No call is retried.

use memo_core::codes::ErrorCode;
use memo_core::error::CoreError;
use memo_core::types::DbId;
use memo_db::models::memo::{CreateMemo, Memo, UpdateMemo};
use memo_db::repositories::MemoRepo;
use memo_db::DbPool;

/// Entity name used in not-found errors.
const ENTITY: &str = "Memo";

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A domain-level error (currently only not-found).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any failure raised by the store. The cause is opaque on purpose.
    #[error("Storage failure during '{action}': {source}")]
    Storage {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl ServiceError {
    fn storage(action: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| ServiceError::Storage { action, source }
    }

    fn not_found(id: DbId, code: ErrorCode) -> Self {
        ServiceError::Core(CoreError::NotFound {
            entity: ENTITY,
            id,
            code,
        })
    }

    /// Caller-facing message for a storage failure. Never includes the cause.
    ///
    /// The wording, including its spelling, is part of the wire contract
    /// existing clients match on.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Storage { action, .. } => {
                format!("fail to {action}:Unkown Error Happened")
            }
            ServiceError::Core(err) => err.code().message().to_string(),
        }
    }
}

/// Stateless memo operations over a connection pool.
#[derive(Clone)]
pub struct MemoService {
    pool: DbPool,
}

impl MemoService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All memos in id order. An empty store yields an empty vec.
    pub async fn list_memos(&self) -> Result<Vec<Memo>, ServiceError> {
        MemoRepo::list(&self.pool)
            .await
            .map_err(ServiceError::storage("get memo"))
    }

    pub async fn find_memo(&self, id: DbId) -> Result<Option<Memo>, ServiceError> {
        MemoRepo::find_by_id(&self.pool, id)
            .await
            .map_err(ServiceError::storage("get memo"))
    }

    /// Insert a memo. The title must already be validated.
    pub async fn create_memo(&self, input: &CreateMemo) -> Result<Memo, ServiceError> {
        MemoRepo::create(&self.pool, input)
            .await
            .map_err(ServiceError::storage("create memo"))
    }

    /// Apply a partial update to an existing memo.
    ///
    /// The lookup runs first so a missing memo is reported as
    /// [`ErrorCode::MemoNotFound`] rather than as a failed write.
    pub async fn update_memo(&self, id: DbId, input: &UpdateMemo) -> Result<Memo, ServiceError> {
        let existing = self
            .find_memo(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(id, ErrorCode::MemoNotFound))?;

        MemoRepo::update(&self.pool, existing.id, input)
            .await
            .map_err(ServiceError::storage("update memo"))?
            // Deleted between the lookup and the write.
            .ok_or_else(|| ServiceError::not_found(id, ErrorCode::MemoNotFound))
    }

    /// Hard-delete an existing memo. Deleting twice reports
    /// [`ErrorCode::NoMsg`] the second time.
    pub async fn delete_memo(&self, id: DbId) -> Result<(), ServiceError> {
        if self.find_memo(id).await?.is_none() {
            return Err(ServiceError::not_found(id, ErrorCode::NoMsg));
        }

        let deleted = MemoRepo::delete(&self.pool, id)
            .await
            .map_err(ServiceError::storage("delete memo"))?;

        if deleted {
            Ok(())
        } else {
            Err(ServiceError::not_found(id, ErrorCode::NoMsg))
        }
    }
}
