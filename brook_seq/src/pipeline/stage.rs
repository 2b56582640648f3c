//! Deferred stages and pipe composition.
//!
//! Every unary pipeline operation has a curried shape: a free function of
//! the same name that captures only the operation's parameters and returns a
//! [`Stage`]. The pipe operator applies the stage to the generator on its
//! left and returns whatever the underlying operation returns, a generator
//! or a terminal scalar:
//!
//! ```
//! use brook_seq::pipeline::{filters, take, transforms};
//! use brook_seq::Generator;
//!
//! let source = Generator::from_vec(vec![1_i64, 2, 3, 4, 5]);
//! let trimmed = source
//!     | transforms(|x: i64| x + 1)
//!     | filters(|x: &i64| x % 2 == 0)
//!     | take(2);
//! let got: Vec<i64> = trimmed.list().unwrap();
//! assert_eq!(got, vec![2, 4]);
//! ```
//!
//! Parameter capture is eager; element work stays lazy until the resulting
//! generator is driven. Each stage consumes the generator to its left and
//! applies exactly once.

use brook_core::BrookResult;
use std::fmt;
use std::ops::BitOr;

use crate::generator::Generator;

// ============================================================================
// Stage
// ============================================================================

/// An unapplied pipeline operation holding only its parameters.
pub struct Stage<F> {
    apply: F,
}

impl<F> Stage<F> {
    /// Wraps an apply-to-generator callable as a deferred stage.
    pub const fn new(apply: F) -> Self {
        Self { apply }
    }

    /// Applies the stage to `source`, returning the operation's result.
    pub fn apply<T, R>(self, source: Generator<T>) -> R
    where
        T: 'static,
        F: FnOnce(Generator<T>) -> R,
    {
        (self.apply)(source)
    }
}

impl<F> fmt::Debug for Stage<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stage(<deferred>)")
    }
}

/// `source | stage` applies the stage and returns the operation's result.
impl<T, F, R> BitOr<Stage<F>> for Generator<T>
where
    T: 'static,
    F: FnOnce(Generator<T>) -> R,
{
    type Output = R;

    #[inline]
    fn bitor(self, stage: Stage<F>) -> R {
        stage.apply(self)
    }
}

// ============================================================================
// Curried adapters
// ============================================================================

/// Curried [`Generator::enumerate`].
#[must_use]
pub fn enumerate<T: 'static>() -> Stage<impl FnOnce(Generator<T>) -> Generator<(usize, T)>> {
    Stage::new(|source: Generator<T>| source.enumerate())
}

/// Curried [`Generator::transforms`].
#[must_use]
pub fn transforms<T, U, F>(op: F) -> Stage<impl FnOnce(Generator<T>) -> Generator<U>>
where
    T: 'static,
    U: 'static,
    F: FnMut(T) -> U + 'static,
{
    Stage::new(move |source: Generator<T>| source.transforms(op))
}

/// Curried [`Generator::try_transforms`].
#[must_use]
pub fn try_transforms<T, U, F>(op: F) -> Stage<impl FnOnce(Generator<T>) -> Generator<U>>
where
    T: 'static,
    U: 'static,
    F: FnMut(T) -> BrookResult<U> + 'static,
{
    Stage::new(move |source: Generator<T>| source.try_transforms(op))
}

/// Curried [`Generator::filters`].
#[must_use]
pub fn filters<T, F>(keep: F) -> Stage<impl FnOnce(Generator<T>) -> Generator<T>>
where
    T: 'static,
    F: FnMut(&T) -> bool + 'static,
{
    Stage::new(move |source: Generator<T>| source.filters(keep))
}

/// Curried [`Generator::extract`].
#[must_use]
pub fn extract<T, F>(matches: F) -> Stage<impl FnOnce(Generator<T>) -> Generator<T>>
where
    T: 'static,
    F: FnMut(&T) -> bool + 'static,
{
    Stage::new(move |source: Generator<T>| source.extract(matches))
}

/// Curried [`Generator::take`].
#[must_use]
pub fn take<T: 'static>(limit: usize) -> Stage<impl FnOnce(Generator<T>) -> Generator<T>> {
    Stage::new(move |source: Generator<T>| source.take(limit))
}

/// Curried [`Generator::skip`].
#[must_use]
pub fn skip<T: 'static>(count: usize) -> Stage<impl FnOnce(Generator<T>) -> Generator<T>> {
    Stage::new(move |source: Generator<T>| source.skip(count))
}

/// Curried [`Generator::flatten`].
#[must_use]
pub fn flatten<U, S>() -> Stage<impl FnOnce(Generator<(U, S)>) -> Generator<U>>
where
    U: 'static,
    S: Into<U> + 'static,
{
    Stage::new(|source: Generator<(U, S)>| source.flatten())
}

// ============================================================================
// Curried terminals
// ============================================================================

/// Curried [`Generator::count`].
#[must_use]
pub fn count<T: 'static>() -> Stage<impl FnOnce(Generator<T>) -> BrookResult<usize>> {
    Stage::new(|source: Generator<T>| source.count())
}

/// Curried [`Generator::count_if`].
#[must_use]
pub fn count_if<T, F>(matches: F) -> Stage<impl FnOnce(Generator<T>) -> BrookResult<usize>>
where
    T: 'static,
    F: FnMut(&T) -> bool,
{
    Stage::new(move |source: Generator<T>| source.count_if(matches))
}

/// Curried [`Generator::all`].
#[must_use]
pub fn all<T, F>(matches: F) -> Stage<impl FnOnce(Generator<T>) -> BrookResult<bool>>
where
    T: 'static,
    F: FnMut(&T) -> bool,
{
    Stage::new(move |source: Generator<T>| source.all(matches))
}

/// Curried [`Generator::any`].
#[must_use]
pub fn any<T, F>(matches: F) -> Stage<impl FnOnce(Generator<T>) -> BrookResult<bool>>
where
    T: 'static,
    F: FnMut(&T) -> bool,
{
    Stage::new(move |source: Generator<T>| source.any(matches))
}

/// Curried [`Generator::none`].
#[must_use]
pub fn none<T, F>(matches: F) -> Stage<impl FnOnce(Generator<T>) -> BrookResult<bool>>
where
    T: 'static,
    F: FnMut(&T) -> bool,
{
    Stage::new(move |source: Generator<T>| source.none(matches))
}

/// Curried [`Generator::position`].
#[must_use]
pub fn position<T, F>(matches: F) -> Stage<impl FnOnce(Generator<T>) -> BrookResult<usize>>
where
    T: 'static,
    F: FnMut(&T) -> bool,
{
    Stage::new(move |source: Generator<T>| source.position(matches))
}

/// Curried [`Generator::find`].
#[must_use]
pub fn find<T, F>(matches: F) -> Stage<impl FnOnce(Generator<T>) -> BrookResult<T>>
where
    T: Default + 'static,
    F: FnMut(&T) -> bool,
{
    Stage::new(move |source: Generator<T>| source.find(matches))
}

/// Curried [`Generator::fold`].
#[must_use]
pub fn fold<T, A, F>(init: A, op: F) -> Stage<impl FnOnce(Generator<T>) -> BrookResult<A>>
where
    T: 'static,
    F: FnMut(A, T) -> A,
{
    Stage::new(move |source: Generator<T>| source.fold(init, op))
}

/// Curried [`Generator::collect`].
#[must_use]
pub fn collect<S, T>() -> Stage<impl FnOnce(Generator<T>) -> BrookResult<S>>
where
    T: 'static,
    S: Default + Extend<T>,
{
    Stage::new(|source: Generator<T>| source.collect::<S>())
}

/// Curried [`Generator::list`].
#[must_use]
pub fn list<C, T>() -> Stage<impl FnOnce(Generator<T>) -> BrookResult<C>>
where
    T: 'static,
    C: Default + Extend<T>,
{
    Stage::new(|source: Generator<T>| source.list::<C>())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(items: &[i64]) -> Generator<i64> {
        Generator::from_vec(items.to_vec())
    }

    #[test]
    fn test_stage_applies_once_through_apply() {
        let doubled = transforms(|x: i64| x * 2).apply(ints(&[1, 2, 3]));
        let got: Vec<i64> = doubled.list().unwrap();
        assert_eq!(got, vec![2, 4, 6]);
    }

    #[test]
    fn test_pipe_returns_a_generator_for_adapters() {
        let trimmed = ints(&[1, 2, 3, 4]) | take(2);
        let got: Vec<i64> = trimmed.list().unwrap();
        assert_eq!(got, vec![1, 2]);
    }

    #[test]
    fn test_pipe_returns_a_scalar_for_terminals() {
        let total = (ints(&[1, 2, 3]) | count()).unwrap();
        assert_eq!(total, 3);
        let found = (ints(&[1, 2, 3]) | any(|x: &i64| *x == 2)).unwrap();
        assert!(found);
    }

    #[test]
    fn test_pipe_chains_left_to_right() {
        let got: Vec<i64> = (ints(&[1, 2, 3, 4, 5])
            | transforms(|x: i64| x + 1)
            | filters(|x: &i64| x % 2 == 0)
            | take(2)
            | list())
        .unwrap();
        assert_eq!(got, vec![2, 4]);
    }

    #[test]
    fn test_curried_capture_is_eager_but_work_is_lazy() {
        let touched = std::rc::Rc::new(std::cell::Cell::new(0));
        let probe = std::rc::Rc::clone(&touched);
        let stage = transforms(move |x: i64| {
            probe.set(probe.get() + 1);
            x
        });
        // Capturing and even applying the stage performs no element work.
        let mut mapped = ints(&[1, 2]) | stage;
        assert_eq!(touched.get(), 0);
        mapped.next().unwrap();
        assert_eq!(touched.get(), 1);
    }

    #[test]
    fn test_curried_enumerate_and_skip() {
        let got: Vec<(usize, i64)> =
            (ints(&[9, 8, 7]) | enumerate() | skip(1) | list()).unwrap();
        assert_eq!(got, vec![(1, 8), (2, 7)]);
    }

    #[test]
    fn test_curried_extract_and_position() {
        let pos = (ints(&[2, 4, 5, 6]) | extract(|x: &i64| x % 2 == 0) | position(|x: &i64| *x == 5))
            .unwrap();
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_curried_flatten() {
        let pairs: Generator<(i64, i64)> = Generator::from_vec(vec![(1, 2), (3, 4)]);
        let got: Vec<i64> = (pairs | flatten() | list()).unwrap();
        assert_eq!(got, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_curried_fold_and_find() {
        let sum = (ints(&[1, 2, 3]) | fold(0_i64, |acc, x| acc + x)).unwrap();
        assert_eq!(sum, 6);
        let hit = (ints(&[1, 2, 3]) | find(|x: &i64| *x > 1)).unwrap();
        assert_eq!(hit, 2);
    }

    #[test]
    fn test_curried_collect_into_a_set() {
        let set = (ints(&[1, 1, 2]) | collect::<rustc_hash::FxHashSet<i64>, _>()).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_failures_propagate_through_piped_stages() {
        use brook_core::BrookError;
        let outcome = ints(&[1, 2, 3])
            | try_transforms(|x: i64| {
                if x == 2 {
                    Err(BrookError::production("no twos"))
                } else {
                    Ok(x)
                }
            })
            | count();
        assert_eq!(outcome, Err(BrookError::production("no twos")));
    }
}
