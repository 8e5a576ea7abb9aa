//! 読書リストサービス
//!
//! ユーザーが順序付きの書籍リストを持ち、その取得・追加・削除を提供する。
//! Serviceはストレージの実行方式（[`domain::effect::Effect`]）に依存しない:
//!
//! - [`infra::memory_store`] — 可変マップ、即時実行の `Result`
//! - [`infra::state_store`] — 状態を明示的に受け渡す純粋な遷移
//!
//! ```
//! use reading_list::application::service::ReadingListService;
//! use reading_list::domain::model::id::{BookId, UserId};
//! use reading_list::domain::model::user::User;
//! use reading_list::domain::repository::UserRepository;
//! use reading_list::infra::state_store::{Library, StateBookRepository, StateUserRepository};
//!
//! let svc = ReadingListService::new(
//!     StateUserRepository::<Library>::new(),
//!     StateBookRepository::<Library>::new(),
//! );
//! let library = svc
//!     .users()
//!     .add_user(User::new("Jane", "Doe").with_id("1"))
//!     .exec(Library::new());
//!
//! let library = svc
//!     .add_to_reading_list(&UserId::new("1"), &BookId::new("3"))
//!     .exec(library);
//! let list = svc.get_reading_list(&UserId::new("1")).eval(library).unwrap();
//! assert_eq!(list.user().books(), &[BookId::new("3")]);
//! assert!(list.books().is_empty());
//! ```

pub mod application;
pub mod domain;
pub mod infra;
pub mod interface;
