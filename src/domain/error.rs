use super::model::id::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("no such user: {0}")]
    NoSuchUser(UserId),
}

/// バックエンド固有の失敗。Serviceは捕捉せずそのまま呼び出し元へ返す。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} has no id assigned")]
    MissingId { entity: &'static str },
}
