use crate::domain::error::{DomainError, StoreError};

/// Serviceの呼び出し元が受け取る失敗。種別で照合できる。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
