use std::marker::PhantomData;

use super::Effect;

/// 即時実行され、`Result` で失敗を返す計算。
#[derive(Debug)]
pub struct Fallible<E>(PhantomData<fn() -> E>);

impl<E: 'static> Effect for Fallible<E> {
    type Error = E;
    type Of<'a, A: 'a> = Result<A, E>;

    fn pure<'a, A: 'a>(value: A) -> Result<A, E> {
        Ok(value)
    }

    fn fail<'a, A: 'a>(error: E) -> Result<A, E> {
        Err(error)
    }

    fn and_then<'a, A: 'a, B: 'a, F>(fa: Result<A, E>, f: F) -> Result<B, E>
    where
        F: FnOnce(A) -> Result<B, E> + 'a,
    {
        fa.and_then(f)
    }
}
