use super::effect::{Effect, EffectOf};
use super::model::book::Book;
use super::model::id::{BookId, UserId};
use super::model::user::User;

/// ユーザー永続化の抽象。Infra層が実装する。
///
/// 書き込みはどちらもIDをキーにしたupsert。`update_user` は存在しないユーザーでも
/// エラーにせず作成する。
pub trait UserRepository {
    type Effect: Effect;

    /// 見つからない場合は `None`（エラーではない）。
    fn get_user(&self, id: &UserId) -> EffectOf<'_, Self::Effect, Option<User>>;

    /// `user.id` は採番済みであること。
    fn add_user(&self, user: User) -> EffectOf<'_, Self::Effect, ()>;

    fn update_user(&self, user: User) -> EffectOf<'_, Self::Effect, ()>;
}

/// 書籍永続化の抽象。更新操作は持たない。
pub trait BookRepository {
    type Effect: Effect;

    /// 並び順はバックエンドの反復順。
    fn list_books(&self) -> EffectOf<'_, Self::Effect, Vec<Book>>;

    fn get_book(&self, id: &BookId) -> EffectOf<'_, Self::Effect, Option<Book>>;

    /// `book.id` は採番済みであること。IDをキーにupsertする。
    fn add_book(&self, book: Book) -> EffectOf<'_, Self::Effect, ()>;
}
