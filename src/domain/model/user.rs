use serde::{Deserialize, Serialize};

use super::id::{BookId, UserId};

/// 読書リストの所有者。
///
/// `books` の並びがそのまま読書リストの順序になる。重複は許容する（再読など）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 永続化前はNone。`add_user` には採番済みのユーザーを渡す。
    id: Option<UserId>,
    first_name: String,
    last_name: String,
    books: Vec<BookId>,
}

impl User {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            books: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<UserId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_books(mut self, books: impl IntoIterator<Item = BookId>) -> Self {
        self.books = books.into_iter().collect();
        self
    }

    pub fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn books(&self) -> &[BookId] {
        &self.books
    }

    // --- 読書リスト操作（Service経由でのみ呼ばれる） ---

    /// 末尾に追加する。重複チェックはしない。
    pub(crate) fn push_book(&mut self, book_id: BookId) {
        self.books.push(book_id);
    }

    /// 一致する要素を全て取り除く。
    pub(crate) fn remove_book(&mut self, book_id: &BookId) {
        self.books.retain(|id| id != book_id);
    }
}
