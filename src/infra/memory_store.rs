use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use crate::application::error::AppError;
use crate::domain::effect::Fallible;
use crate::domain::error::StoreError;
use crate::domain::model::book::Book;
use crate::domain::model::id::{BookId, UserId};
use crate::domain::model::user::User;
use crate::domain::repository::{BookRepository, UserRepository};

/// 可変マップによるUserRepository実装。
///
/// 単一スレッド専用（`RefCell` なので `Sync` ではない）。ロックは持たない。
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RefCell<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    type Effect = Fallible<AppError>;

    fn get_user(&self, id: &UserId) -> Result<Option<User>, AppError> {
        Ok(self.users.borrow().get(id).cloned())
    }

    fn add_user(&self, user: User) -> Result<(), AppError> {
        let id = user
            .id()
            .cloned()
            .ok_or(StoreError::MissingId { entity: "user" })?;
        tracing::trace!(user_id = %id, "in-memory user upsert");
        self.users.borrow_mut().insert(id, user);
        Ok(())
    }

    fn update_user(&self, user: User) -> Result<(), AppError> {
        self.add_user(user)
    }
}

/// 可変マップによるBookRepository実装。`list_books` はID順。
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RefCell<BTreeMap<BookId, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookRepository for InMemoryBookRepository {
    type Effect = Fallible<AppError>;

    fn list_books(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.books.borrow().values().cloned().collect())
    }

    fn get_book(&self, id: &BookId) -> Result<Option<Book>, AppError> {
        Ok(self.books.borrow().get(id).cloned())
    }

    fn add_book(&self, book: Book) -> Result<(), AppError> {
        let id = book
            .id()
            .cloned()
            .ok_or(StoreError::MissingId { entity: "book" })?;
        tracing::trace!(book_id = %id, "in-memory book upsert");
        self.books.borrow_mut().insert(id, book);
        Ok(())
    }
}
