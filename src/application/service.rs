use crate::domain::effect::{self, Effect, EffectOf};
use crate::domain::error::DomainError;
use crate::domain::model::book::Book;
use crate::domain::model::id::{BookId, UserId};
use crate::domain::model::reading_list::ReadingList;
use crate::domain::model::user::User;
use crate::domain::repository::{BookRepository, UserRepository};

/// 読書リストに対するユースケース。
///
/// 2つのリポジトリが共有するエフェクト `K` の上で、
/// lookup → mutate → update のパターンで操作する。
/// どの段階で失敗しても後続のリポジトリ呼び出しは行われない。
#[derive(Debug)]
pub struct ReadingListService<U, B> {
    users: U,
    books: B,
}

impl<U, B> ReadingListService<U, B> {
    pub fn new(users: U, books: B) -> Self {
        Self { users, books }
    }

    pub fn users(&self) -> &U {
        &self.users
    }

    pub fn books(&self) -> &B {
        &self.books
    }
}

impl<K, U, B> ReadingListService<U, B>
where
    K: Effect,
    K::Error: From<DomainError>,
    U: UserRepository<Effect = K>,
    B: BookRepository<Effect = K>,
{
    /// ユーザーと、解決できた書籍を元の順序で返す。
    /// 書籍ストアにない参照は黙って落とす。
    pub fn get_reading_list(&self, user_id: &UserId) -> EffectOf<'_, K, ReadingList> {
        let books = &self.books;
        K::and_then::<User, ReadingList, _>(self.require_user(user_id), move |user| {
            let wanted = user.books().to_vec();
            let resolved = effect::collect_found::<K, _, BookId, Book, _>(wanted, move |id| {
                books.get_book(&id)
            });
            K::map::<Vec<Book>, ReadingList, _>(resolved, move |found| {
                let list = ReadingList::new(user, found);
                tracing::debug!(
                    user_id = ?list.user().id(),
                    resolved = list.books().len(),
                    dropped = list.unresolved(),
                    "reading list resolved"
                );
                list
            })
        })
    }

    /// 末尾に追加する。書籍の存在確認も重複排除もしない（読み出し時に解決する）。
    pub fn add_to_reading_list(
        &self,
        user_id: &UserId,
        book_id: &BookId,
    ) -> EffectOf<'_, K, ()> {
        let users = &self.users;
        let appended = book_id.clone();
        K::and_then::<User, (), _>(self.require_user(user_id), move |mut user| {
            tracing::debug!(user_id = ?user.id(), book_id = %appended, "adding to reading list");
            user.push_book(appended);
            users.update_user(user)
        })
    }

    /// 一致する書籍を全て取り除く。
    pub fn remove_from_reading_list(
        &self,
        user_id: &UserId,
        book_id: &BookId,
    ) -> EffectOf<'_, K, ()> {
        let users = &self.users;
        let removed = book_id.clone();
        K::and_then::<User, (), _>(self.require_user(user_id), move |mut user| {
            tracing::debug!(user_id = ?user.id(), book_id = %removed, "removing from reading list");
            user.remove_book(&removed);
            users.update_user(user)
        })
    }

    // --- private ---

    fn require_user(&self, user_id: &UserId) -> EffectOf<'_, K, User> {
        let wanted = user_id.clone();
        K::and_then::<Option<User>, User, _>(self.users.get_user(user_id), move |found| {
            match found {
                Some(user) => K::pure(user),
                None => {
                    tracing::debug!(user_id = %wanted, "no such user");
                    K::fail::<User>(DomainError::NoSuchUser(wanted).into())
                }
            }
        })
    }
}
