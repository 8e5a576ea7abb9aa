//! 計算の種類（エフェクト）の抽象。
//!
//! リポジトリとServiceは具体的な実行方式を知らずに `Effect::Of<A>` を組み立てる。
//! 同期的に失敗しうる計算（[`Fallible`]）と、状態を明示的に受け渡す純粋な遷移
//! （[`Stateful`]）の2種類を用意している。

pub mod fallible;
pub mod state;

pub use fallible::Fallible;
pub use state::{Stateful, Transition};

/// `K::Of<'a, A>` の短縮形。
pub type EffectOf<'a, K, A> = <K as Effect>::Of<'a, A>;

/// 結果を包み、失敗しうる計算の型族。
///
/// `and_then` は逐次合成で、前段が失敗したら後段の関数は呼ばれない。
pub trait Effect: 'static {
    type Error;
    type Of<'a, A: 'a>: 'a;

    fn pure<'a, A: 'a>(value: A) -> Self::Of<'a, A>;

    fn fail<'a, A: 'a>(error: Self::Error) -> Self::Of<'a, A>;

    fn and_then<'a, A: 'a, B: 'a, F>(fa: Self::Of<'a, A>, f: F) -> Self::Of<'a, B>
    where
        F: FnOnce(A) -> Self::Of<'a, B> + 'a;

    fn map<'a, A: 'a, B: 'a, F>(fa: Self::Of<'a, A>, f: F) -> Self::Of<'a, B>
    where
        F: FnOnce(A) -> B + 'a,
    {
        Self::and_then::<A, B, _>(fa, move |a| Self::pure(f(a)))
    }

    /// 各要素を順に `lookup` し、見つかったものだけを元の順序で集める。
    ///
    /// 既定の実装は `and_then` を要素数だけ重ねる。遅延評価のエフェクトでは
    /// 実行時の呼び出しが要素数に比例して深くなるので、ループで上書きすること。
    fn collect_found<'a, I, T, B, F>(items: I, lookup: F) -> Self::Of<'a, Vec<B>>
    where
        I: IntoIterator<Item = T>,
        T: 'a,
        B: 'a,
        F: Fn(T) -> Self::Of<'a, Option<B>> + Clone + 'a,
    {
        items
            .into_iter()
            .fold(Self::pure::<Vec<B>>(Vec::new()), |acc, item| {
                let lookup = lookup.clone();
                Self::and_then::<Vec<B>, Vec<B>, _>(acc, move |mut found: Vec<B>| {
                    Self::map::<Option<B>, Vec<B>, _>(lookup(item), move |hit| {
                        found.extend(hit);
                        found
                    })
                })
            })
    }
}

/// 各要素を順に `lookup` し、見つかったものだけを元の順序で集める。
///
/// `lookup` の失敗はそこで全体を打ち切る。見つからない（None）は失敗ではない。
pub fn collect_found<'a, K, I, T, B, F>(items: I, lookup: F) -> K::Of<'a, Vec<B>>
where
    K: Effect,
    I: IntoIterator<Item = T>,
    T: 'a,
    B: 'a,
    F: Fn(T) -> K::Of<'a, Option<B>> + Clone + 'a,
{
    K::collect_found::<I, T, B, F>(items, lookup)
}
