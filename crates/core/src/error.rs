use crate::codes::ErrorCode;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity does not exist. `code` selects which logical error code
    /// the caller reports for the miss.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound {
        entity: &'static str,
        id: DbId,
        code: ErrorCode,
    },

    /// Client input rejected before it reaches the store.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Logical error code carried in the `{code, message}` envelope.
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::NotFound { code, .. } => *code,
            CoreError::Validation(_) => ErrorCode::InvalidParam,
        }
    }
}
