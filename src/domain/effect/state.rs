use std::fmt;
use std::marker::PhantomData;

use super::Effect;

/// 状態 `S` を受け取り、次の状態と結果を返す純粋な遷移。
///
/// 実行されるまで何も起きない。`run` に初期スナップショットを渡して初めて評価される。
/// 失敗した場合もそこまでの状態は返すが、後続の遷移は実行されない。
pub struct Transition<'a, S, A, E> {
    step: Box<dyn FnOnce(S) -> (S, Result<A, E>) + 'a>,
}

impl<'a, S, A, E> Transition<'a, S, A, E> {
    pub fn new<F>(step: F) -> Self
    where
        F: FnOnce(S) -> (S, Result<A, E>) + 'a,
    {
        Self {
            step: Box::new(step),
        }
    }

    /// 状態を読むだけの遷移。
    pub fn read<F>(f: F) -> Self
    where
        F: FnOnce(&S) -> Result<A, E> + 'a,
    {
        Self::new(move |state| {
            let out = f(&state);
            (state, out)
        })
    }

    pub fn run(self, state: S) -> (S, Result<A, E>) {
        (self.step)(state)
    }

    /// 結果だけを返す。
    pub fn eval(self, state: S) -> Result<A, E> {
        self.run(state).1
    }

    /// 最終状態だけを返す。
    pub fn exec(self, state: S) -> S {
        self.run(state).0
    }
}

impl<S, A, E> fmt::Debug for Transition<'_, S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition").finish_non_exhaustive()
    }
}

/// 状態 `S` を明示的に受け渡す計算。`Of<A>` は [`Transition`]。
#[derive(Debug)]
pub struct Stateful<S, E>(PhantomData<fn(S) -> (S, E)>);

impl<S: 'static, E: 'static> Effect for Stateful<S, E> {
    type Error = E;
    type Of<'a, A: 'a> = Transition<'a, S, A, E>;

    fn pure<'a, A: 'a>(value: A) -> Transition<'a, S, A, E> {
        Transition::new(move |state| (state, Ok(value)))
    }

    fn fail<'a, A: 'a>(error: E) -> Transition<'a, S, A, E> {
        Transition::new(move |state| (state, Err(error)))
    }

    fn and_then<'a, A: 'a, B: 'a, F>(
        fa: Transition<'a, S, A, E>,
        f: F,
    ) -> Transition<'a, S, B, E>
    where
        F: FnOnce(A) -> Transition<'a, S, B, E> + 'a,
    {
        Transition::new(move |state| match fa.run(state) {
            (next, Ok(value)) => f(value).run(next),
            (next, Err(error)) => (next, Err(error)),
        })
    }

    /// 遷移を入れ子にせず、1つの遷移の中で順に実行する。要素数によらずスタックは一定。
    fn collect_found<'a, I, T, B, F>(items: I, lookup: F) -> Transition<'a, S, Vec<B>, E>
    where
        I: IntoIterator<Item = T>,
        T: 'a,
        B: 'a,
        F: Fn(T) -> Transition<'a, S, Option<B>, E> + Clone + 'a,
    {
        let items: Vec<T> = items.into_iter().collect();
        Transition::new(move |mut state| {
            let mut found = Vec::new();
            for item in items {
                let (next, hit) = lookup(item).run(state);
                state = next;
                match hit {
                    Ok(hit) => found.extend(hit),
                    Err(error) => return (state, Err(error)),
                }
            }
            (state, Ok(found))
        })
    }
}
