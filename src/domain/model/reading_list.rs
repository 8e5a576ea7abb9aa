use serde::{Deserialize, Serialize};

use super::book::Book;
use super::user::User;

/// ユーザーと解決済み書籍の組。都度組み立てる派生ビューで、保存はしない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingList {
    user: User,
    /// `user.books` の順序を保ち、解決できなかったIDは含まない。
    books: Vec<Book>,
}

impl ReadingList {
    pub fn new(user: User, books: Vec<Book>) -> Self {
        Self { user, books }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// 書籍ストアで解決できなかった参照の数。
    pub fn unresolved(&self) -> usize {
        self.user.books().len().saturating_sub(self.books.len())
    }
}
