//! デモ用CLI
//!
//! `reading-list [USER_ID] [memory|state]`
//!
//! サンプルの書籍とユーザーを選んだバックエンドに投入し、読書リストへの追加・削除を
//! 行った結果をJSONで標準出力に書く。どちらのバックエンドでも同じ手順
//! （[`walkthrough`]）をそのまま実行する。

use std::str::FromStr;

use crate::application::error::AppError;
use crate::application::service::ReadingListService;
use crate::domain::effect::{Effect, EffectOf};
use crate::domain::error::DomainError;
use crate::domain::model::book::Book;
use crate::domain::model::id::{BookId, UserId};
use crate::domain::model::reading_list::ReadingList;
use crate::domain::model::user::User;
use crate::domain::repository::{BookRepository, UserRepository};
use crate::infra::memory_store::{InMemoryBookRepository, InMemoryUserRepository};
use crate::infra::state_store::{Library, StateBookRepository, StateUserRepository};

const DEFAULT_USER_ID: &str = "1";

/// ストレージの実装。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Memory,
    State,
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(Self::Memory),
            "state" => Ok(Self::State),
            other => anyhow::bail!("unknown backend `{other}` (expected `memory` or `state`)"),
        }
    }
}

/// 位置引数から組み立てる設定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub user_id: UserId,
    pub backend: Backend,
}

impl CliConfig {
    /// プログラム名を除いた引数列から読む。省略時は `1` / `memory`。
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let user_id = args
            .next()
            .map(UserId::new)
            .unwrap_or_else(|| UserId::new(DEFAULT_USER_ID));
        let backend = match args.next() {
            Some(raw) => raw.parse()?,
            None => Backend::Memory,
        };
        Ok(Self { user_id, backend })
    }
}

/// エントリポイント。
pub fn run<I>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = String>,
{
    let config = CliConfig::from_args(args)?;
    tracing::info!(user_id = %config.user_id, backend = ?config.backend, "starting walkthrough");

    let list = execute(&config)?;
    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}

/// 選択したバックエンドで [`walkthrough`] を実行する。
pub fn execute(config: &CliConfig) -> Result<ReadingList, AppError> {
    match config.backend {
        Backend::Memory => {
            let svc = ReadingListService::new(
                InMemoryUserRepository::new(),
                InMemoryBookRepository::new(),
            );
            walkthrough(&svc, &config.user_id)
        }
        Backend::State => {
            let svc = ReadingListService::new(
                StateUserRepository::<Library>::new(),
                StateBookRepository::<Library>::new(),
            );
            walkthrough(&svc, &config.user_id).eval(Library::new())
        }
    }
}

/// サンプル投入 → 書籍3を追加 → 書籍1を削除 → 読書リスト取得。
pub fn walkthrough<'a, K, U, B>(
    svc: &'a ReadingListService<U, B>,
    user_id: &'a UserId,
) -> EffectOf<'a, K, ReadingList>
where
    K: Effect,
    K::Error: From<DomainError>,
    U: UserRepository<Effect = K>,
    B: BookRepository<Effect = K>,
{
    let seeded = seed::<K, U, B>(svc.users(), svc.books());
    let catalogued = K::and_then::<(), Vec<Book>, _>(seeded, move |()| svc.books().list_books());
    K::and_then::<Vec<Book>, ReadingList, _>(catalogued, move |catalogue| {
        tracing::info!(books = catalogue.len(), "catalogue seeded");
        let added = svc.add_to_reading_list(user_id, &BookId::new("3"));
        K::and_then::<(), ReadingList, _>(added, move |()| {
            let removed = svc.remove_from_reading_list(user_id, &BookId::new("1"));
            K::and_then::<(), ReadingList, _>(removed, move |()| svc.get_reading_list(user_id))
        })
    })
}

fn seed<'a, K, U, B>(users: &'a U, books: &'a B) -> EffectOf<'a, K, ()>
where
    K: Effect,
    U: UserRepository<Effect = K>,
    B: BookRepository<Effect = K>,
{
    let with_books = sample_books()
        .into_iter()
        .fold(K::pure::<()>(()), |acc, book| {
            K::and_then::<(), (), _>(acc, move |()| books.add_book(book))
        });
    sample_users()
        .into_iter()
        .fold(with_books, |acc, user| {
            K::and_then::<(), (), _>(acc, move |()| users.add_user(user))
        })
}

fn sample_books() -> Vec<Book> {
    vec![
        Book::new("The Rust Programming Language", "Steve Klabnik").with_id("1"),
        Book::new("Programming Rust", "Jim Blandy").with_id("2"),
        Book::new("Fake Book", "Fake Author").with_id("3"),
    ]
}

fn sample_users() -> Vec<User> {
    vec![
        User::new("Jane", "Doe")
            .with_id("1")
            .with_books([BookId::new("1"), BookId::new("2")]),
        User::new("John", "Roe").with_id("2"),
    ]
}
