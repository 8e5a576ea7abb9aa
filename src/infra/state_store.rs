//! 状態を明示的に受け渡すリポジトリ実装。
//!
//! リポジトリ自身は状態を持たないハンドルで、各操作は `S -> (S, Result)` の
//! [`Transition`] を返すだけ。状態は呼び出し側が `run` に渡して初めて評価される。
//! 状態型はテーブルごとに独立させても（[`UserSnapshot`] / [`BookSnapshot`]）、
//! 1つにまとめても（[`Library`]）よい。Serviceは両リポジトリが同じ状態を共有する
//! [`Library`] 上で動かす。

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::marker::PhantomData;

use crate::application::error::AppError;
use crate::domain::effect::{Stateful, Transition};
use crate::domain::error::StoreError;
use crate::domain::model::book::Book;
use crate::domain::model::id::{BookId, UserId};
use crate::domain::model::user::User;
use crate::domain::repository::{BookRepository, UserRepository};

/// ユーザー表を持つ状態。
pub trait UserTable {
    fn users(&self) -> &HashMap<UserId, User>;
    fn users_mut(&mut self) -> &mut HashMap<UserId, User>;
}

/// 書籍表を持つ状態。ID順に並ぶ。
pub trait BookTable {
    fn books(&self) -> &BTreeMap<BookId, Book>;
    fn books_mut(&mut self) -> &mut BTreeMap<BookId, Book>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSnapshot {
    users: HashMap<UserId, User>,
}

impl UserTable for UserSnapshot {
    fn users(&self) -> &HashMap<UserId, User> {
        &self.users
    }

    fn users_mut(&mut self) -> &mut HashMap<UserId, User> {
        &mut self.users
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookSnapshot {
    books: BTreeMap<BookId, Book>,
}

impl BookTable for BookSnapshot {
    fn books(&self) -> &BTreeMap<BookId, Book> {
        &self.books
    }

    fn books_mut(&mut self) -> &mut BTreeMap<BookId, Book> {
        &mut self.books
    }
}

/// ユーザー表と書籍表の組。1回の `run` で両方の操作を同じスナップショットに適用する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    users: UserSnapshot,
    books: BookSnapshot,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserTable for Library {
    fn users(&self) -> &HashMap<UserId, User> {
        self.users.users()
    }

    fn users_mut(&mut self) -> &mut HashMap<UserId, User> {
        self.users.users_mut()
    }
}

impl BookTable for Library {
    fn books(&self) -> &BTreeMap<BookId, Book> {
        self.books.books()
    }

    fn books_mut(&mut self) -> &mut BTreeMap<BookId, Book> {
        self.books.books_mut()
    }
}

/// 状態 `S` のユーザー表を操作するUserRepository。
pub struct StateUserRepository<S> {
    _state: PhantomData<fn(S) -> S>,
}

impl<S> StateUserRepository<S> {
    pub fn new() -> Self {
        Self {
            _state: PhantomData,
        }
    }
}

impl<S> Default for StateUserRepository<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for StateUserRepository<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StateUserRepository")
    }
}

impl<S: UserTable + 'static> UserRepository for StateUserRepository<S> {
    type Effect = Stateful<S, AppError>;

    fn get_user(&self, id: &UserId) -> Transition<'_, S, Option<User>, AppError> {
        let id = id.clone();
        Transition::read(move |state: &S| Ok(state.users().get(&id).cloned()))
    }

    fn add_user(&self, user: User) -> Transition<'_, S, (), AppError> {
        Transition::new(move |mut state: S| match user.id().cloned() {
            Some(id) => {
                tracing::trace!(user_id = %id, "state user upsert");
                state.users_mut().insert(id, user);
                (state, Ok(()))
            }
            None => (
                state,
                Err(AppError::from(StoreError::MissingId { entity: "user" })),
            ),
        })
    }

    fn update_user(&self, user: User) -> Transition<'_, S, (), AppError> {
        self.add_user(user)
    }
}

/// 状態 `S` の書籍表を操作するBookRepository。
pub struct StateBookRepository<S> {
    _state: PhantomData<fn(S) -> S>,
}

impl<S> StateBookRepository<S> {
    pub fn new() -> Self {
        Self {
            _state: PhantomData,
        }
    }
}

impl<S> Default for StateBookRepository<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for StateBookRepository<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StateBookRepository")
    }
}

impl<S: BookTable + 'static> BookRepository for StateBookRepository<S> {
    type Effect = Stateful<S, AppError>;

    fn list_books(&self) -> Transition<'_, S, Vec<Book>, AppError> {
        Transition::read(|state: &S| Ok(state.books().values().cloned().collect()))
    }

    fn get_book(&self, id: &BookId) -> Transition<'_, S, Option<Book>, AppError> {
        let id = id.clone();
        Transition::read(move |state: &S| Ok(state.books().get(&id).cloned()))
    }

    fn add_book(&self, book: Book) -> Transition<'_, S, (), AppError> {
        Transition::new(move |mut state: S| match book.id().cloned() {
            Some(id) => {
                tracing::trace!(book_id = %id, "state book upsert");
                state.books_mut().insert(id, book);
                (state, Ok(()))
            }
            None => (
                state,
                Err(AppError::from(StoreError::MissingId { entity: "book" })),
            ),
        })
    }
}
