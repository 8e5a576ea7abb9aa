//! Shared test harness for integration tests.

#![allow(dead_code)]

use reading_list::application::error::AppError;
use reading_list::application::service::ReadingListService;
use reading_list::domain::effect::Stateful;
use reading_list::domain::model::book::Book;
use reading_list::domain::model::id::BookId;
use reading_list::domain::model::user::User;
use reading_list::domain::repository::{BookRepository, UserRepository};
use reading_list::infra::memory_store::{InMemoryBookRepository, InMemoryUserRepository};
use reading_list::infra::state_store::{Library, StateBookRepository, StateUserRepository};

pub type MemoryService = ReadingListService<InMemoryUserRepository, InMemoryBookRepository>;
pub type StateService =
    ReadingListService<StateUserRepository<Library>, StateBookRepository<Library>>;
pub type Threaded = Stateful<Library, AppError>;

// =============================================================================
// Builders
// =============================================================================

pub fn book(id: &str, title: &str, author: &str) -> Book {
    Book::new(title, author).with_id(id)
}

pub fn user(id: &str, first: &str, last: &str, books: &[&str]) -> User {
    User::new(first, last).with_id(id).with_books(book_ids(books))
}

pub fn book_ids(raw: &[&str]) -> Vec<BookId> {
    raw.iter().map(|s| BookId::new(*s)).collect()
}

pub fn state_service() -> StateService {
    ReadingListService::new(StateUserRepository::new(), StateBookRepository::new())
}

// =============================================================================
// Fixture — 両バックエンドに同じ初期データを投入する
// =============================================================================

pub struct Fixture {
    pub users: Vec<User>,
    pub books: Vec<Book>,
}

impl Fixture {
    /// ```text
    /// books: 1 The Rust Programming Language / 2 Programming Rust / 3 Fake Book
    /// users: 1 Jane Doe [1, 2] / 2 John Roe []
    /// ```
    pub fn standard() -> Self {
        Self {
            users: vec![
                user("1", "Jane", "Doe", &["1", "2"]),
                user("2", "John", "Roe", &[]),
            ],
            books: Self::catalogue(),
        }
    }

    /// ユーザー1の読書リストが空の状態。
    pub fn empty_reader() -> Self {
        Self {
            users: vec![user("1", "Jane", "Doe", &[])],
            books: Self::catalogue(),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            books: Self::catalogue(),
        }
    }

    pub fn catalogue() -> Vec<Book> {
        vec![
            book("1", "The Rust Programming Language", "Steve Klabnik"),
            book("2", "Programming Rust", "Jim Blandy"),
            book("3", "Fake Book", "Fake Author"),
        ]
    }

    pub fn memory_service(&self) -> MemoryService {
        let users = InMemoryUserRepository::new();
        let books = InMemoryBookRepository::new();
        for b in &self.books {
            books.add_book(b.clone()).unwrap();
        }
        for u in &self.users {
            users.add_user(u.clone()).unwrap();
        }
        ReadingListService::new(users, books)
    }

    pub fn library(&self) -> Library {
        let svc = state_service();
        let mut library = Library::new();
        for b in &self.books {
            let (next, result) = svc.books().add_book(b.clone()).run(library);
            result.unwrap();
            library = next;
        }
        for u in &self.users {
            let (next, result) = svc.users().add_user(u.clone()).run(library);
            result.unwrap();
            library = next;
        }
        library
    }
}

// =============================================================================
// Assertion helpers
// =============================================================================

pub fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|b| b.title()).collect()
}
