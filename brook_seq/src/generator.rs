//! The suspendable sequence producer.
//!
//! A [`Generator`] owns exactly one resumable production, the value that
//! production most recently parked on, and a terminal state tag. It is the
//! single currency of the pipeline algebra: every adapter consumes one (or
//! two) generators by ownership transfer and wraps them in a new one.
//!
//! # Ownership
//!
//! A generator has exactly one owner at a time. The type is deliberately not
//! `Clone`: passing it into a pipeline stage is a move, and the compiler
//! statically rejects any later use of the original handle. Two independent
//! handles can therefore never observe or resume the same production.
//!
//! # Failure Semantics
//!
//! A failure raised during a resumption is fatal to the generator. It is
//! surfaced exactly once, to the caller of the [`next`](Generator::next) that
//! triggered the failing resumption, after which the generator behaves as
//! exhausted forever: no repeated failure, no resurrection.

use brook_core::{BrookError, BrookResult, Slot};
use std::fmt;

use crate::produce::{Produce, Step};
use crate::state::GenState;

/// A single-owner, forward-only, suspendable sequence producer.
///
/// # Example
///
/// ```
/// use brook_seq::{Generator, Step};
///
/// let mut countdown = 3;
/// let mut gen = Generator::from_fn(move || {
///     if countdown == 0 {
///         Step::Complete
///     } else {
///         countdown -= 1;
///         Step::Yielded(countdown)
///     }
/// });
///
/// assert_eq!(gen.next().unwrap(), Some(2));
/// assert_eq!(gen.peek(), Some(&2));
/// assert_eq!(gen.next().unwrap(), Some(1));
/// assert_eq!(gen.next().unwrap(), Some(0));
/// assert_eq!(gen.next().unwrap(), None);
/// assert!(!gen.has_next());
/// ```
pub struct Generator<T: 'static> {
    source: Box<dyn Produce<Output = T>>,
    current: Slot<T>,
    state: GenState,
    launched: bool,
}

impl<T: 'static> Generator<T> {
    /// Wraps a resumable production in a generator.
    pub fn from_produce<P>(production: P) -> Self
    where
        P: Produce<Output = T> + 'static,
    {
        Self {
            source: Box::new(production),
            current: Slot::empty(),
            state: GenState::Created,
            launched: false,
        }
    }

    /// Wraps a closure-shaped production in a generator.
    ///
    /// The closure is called once per resumption and reports each outcome as
    /// a [`Step`].
    pub fn from_fn<F>(production: F) -> Self
    where
        F: FnMut() -> Step<T> + 'static,
    {
        Self::from_produce(production)
    }

    /// Builds a generator over a snapshot of `items`, produced in order.
    ///
    /// This is the seam containers plug into: the snapshot is owned by the
    /// generator, so later mutation of the original container cannot disturb
    /// the production.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_produce(SnapshotSource {
            items: items.into_iter(),
        })
    }

    /// Builds a generator that is exhausted from the start.
    ///
    /// It produces nothing, has never launched, and [`has_next`] is false
    /// immediately.
    ///
    /// [`has_next`]: Generator::has_next
    #[must_use]
    pub fn empty() -> Self {
        Self {
            source: Box::new(|| Step::<T>::Complete),
            current: Slot::empty(),
            state: GenState::Exhausted,
            launched: false,
        }
    }

    /// Returns the generator's lifecycle state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GenState {
        self.state
    }

    /// Returns true if the production exists and has not completed.
    ///
    /// This does not promise a value is ready: only an advance (or an
    /// iteration step) reveals that.
    #[inline]
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.state.is_resumable()
    }

    /// Returns true if at least one resumption has occurred.
    #[inline]
    #[must_use]
    pub const fn launched(&self) -> bool {
        self.launched
    }

    /// Returns the value produced by the most recent advance, without
    /// resuming the production.
    ///
    /// Idempotent: repeated calls without an intervening advance return the
    /// same value. Returns `None` before the first advance and after
    /// exhaustion or failure.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.current.get()
    }

    /// Checked dereference of the currently held value.
    ///
    /// # Errors
    ///
    /// [`BrookError::TerminalPosition`] when the generator is exhausted or
    /// failed; [`BrookError::EmptyAccess`] when it has not yet produced a
    /// value.
    pub fn current(&self) -> BrookResult<&T> {
        if self.state.is_finished() {
            return Err(BrookError::TerminalPosition);
        }
        self.current.value()
    }

    /// Resumes the production once and hands the produced value straight to
    /// the caller, bypassing the peek cache.
    ///
    /// This is the advance used inside pipeline stages: once a generator has
    /// been consumed by a stage its peek cache is unreachable anyway, and
    /// skipping it lets elements flow through a pipeline without a `Clone`
    /// bound.
    pub(crate) fn pull(&mut self) -> BrookResult<Option<T>> {
        if !self.state.is_resumable() {
            return Ok(None);
        }
        self.launched = true;
        match self.source.resume() {
            Step::Yielded(value) => {
                self.state = GenState::Suspended;
                Ok(Some(value))
            }
            Step::Complete => {
                self.current.reset();
                self.state = GenState::Exhausted;
                Ok(None)
            }
            Step::Raised(failure) => {
                self.current.reset();
                self.state = GenState::Failed;
                Err(failure)
            }
        }
    }
}

impl<T: Clone + 'static> Generator<T> {
    /// Advances the production and fetches the next value.
    ///
    /// Returns `Ok(None)` once the production has completed (and on every
    /// call after that). A failure raised during this resumption is returned
    /// as `Err` exactly once; afterwards the generator behaves as exhausted.
    ///
    /// The produced value is also retained for [`peek`](Generator::peek).
    ///
    /// # Errors
    ///
    /// The production's failure, verbatim, if this resumption raised one.
    pub fn next(&mut self) -> BrookResult<Option<T>> {
        match self.pull()? {
            Some(value) => {
                self.current.set(value.clone());
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}

impl<T: 'static> From<Vec<T>> for Generator<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: 'static> fmt::Debug for Generator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("state", &self.state)
            .field("launched", &self.launched)
            .field("holding", &self.current.is_occupied())
            .finish_non_exhaustive()
    }
}

/// Produces an owned snapshot of a container, in the container's order.
struct SnapshotSource<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Produce for SnapshotSource<T> {
    type Output = T;

    #[inline]
    fn resume(&mut self) -> Step<T> {
        Step::from(self.items.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(items: &[i64]) -> Generator<i64> {
        Generator::from_vec(items.to_vec())
    }

    #[test]
    fn test_created_state_before_first_advance() {
        let gen = ints(&[1, 2]);
        assert_eq!(gen.state(), GenState::Created);
        assert!(!gen.launched());
        assert!(gen.has_next());
        assert_eq!(gen.peek(), None);
    }

    #[test]
    fn test_next_produces_in_order() {
        let mut gen = ints(&[1, 2, 3]);
        assert_eq!(gen.next().unwrap(), Some(1));
        assert_eq!(gen.next().unwrap(), Some(2));
        assert_eq!(gen.next().unwrap(), Some(3));
        assert_eq!(gen.next().unwrap(), None);
    }

    #[test]
    fn test_exhaustion_is_permanent() {
        let mut gen = ints(&[1]);
        assert_eq!(gen.next().unwrap(), Some(1));
        assert_eq!(gen.next().unwrap(), None);
        assert_eq!(gen.state(), GenState::Exhausted);
        assert_eq!(gen.next().unwrap(), None);
        assert!(!gen.has_next());
    }

    #[test]
    fn test_peek_is_idempotent() {
        let mut gen = ints(&[7, 8]);
        assert_eq!(gen.peek(), None);
        gen.next().unwrap();
        assert_eq!(gen.peek(), Some(&7));
        assert_eq!(gen.peek(), Some(&7));
        gen.next().unwrap();
        assert_eq!(gen.peek(), Some(&8));
    }

    #[test]
    fn test_peek_clears_on_exhaustion() {
        let mut gen = ints(&[1]);
        gen.next().unwrap();
        assert_eq!(gen.peek(), Some(&1));
        gen.next().unwrap();
        assert_eq!(gen.peek(), None);
    }

    #[test]
    fn test_launched_tracks_first_resumption() {
        let mut gen = ints(&[]);
        assert!(!gen.launched());
        assert_eq!(gen.next().unwrap(), None);
        assert!(gen.launched());
        assert_eq!(gen.state(), GenState::Exhausted);
    }

    #[test]
    fn test_empty_generator_is_terminal_from_the_start() {
        let mut gen: Generator<i64> = Generator::empty();
        assert!(!gen.has_next());
        assert!(!gen.launched());
        assert_eq!(gen.next().unwrap(), None);
    }

    #[test]
    fn test_current_before_launch_is_empty_access() {
        let gen = ints(&[1]);
        assert_eq!(gen.current(), Err(BrookError::EmptyAccess));
    }

    #[test]
    fn test_current_after_advance() {
        let mut gen = ints(&[4]);
        gen.next().unwrap();
        assert_eq!(gen.current(), Ok(&4));
    }

    #[test]
    fn test_current_at_terminal_position() {
        let mut gen = ints(&[1]);
        gen.next().unwrap();
        gen.next().unwrap();
        assert_eq!(gen.current(), Err(BrookError::TerminalPosition));
    }

    #[test]
    fn test_failure_is_surfaced_once_then_exhausted() {
        let mut calls = 0;
        let mut gen = Generator::from_fn(move || {
            calls += 1;
            match calls {
                1 => Step::Yielded(10),
                2 => Step::Raised(BrookError::production("bad element")),
                _ => Step::Yielded(99),
            }
        });
        assert_eq!(gen.next().unwrap(), Some(10));
        assert_eq!(gen.next(), Err(BrookError::production("bad element")));
        assert_eq!(gen.state(), GenState::Failed);
        // No repeated failure, no resurrection.
        assert_eq!(gen.next(), Ok(None));
        assert_eq!(gen.next(), Ok(None));
        assert_eq!(gen.peek(), None);
    }

    #[test]
    fn test_failed_generator_never_resumes_the_production() {
        let mut calls = 0;
        let probe = std::rc::Rc::new(std::cell::Cell::new(0));
        let seen = std::rc::Rc::clone(&probe);
        let mut gen: Generator<i64> = Generator::from_fn(move || {
            calls += 1;
            seen.set(calls);
            Step::Raised(BrookError::production("always"))
        });
        assert!(gen.next().is_err());
        assert_eq!(gen.next(), Ok(None));
        assert_eq!(gen.next(), Ok(None));
        assert_eq!(probe.get(), 1);
    }

    #[test]
    fn test_snapshot_is_independent_of_the_source() {
        let items = vec![1, 2, 3];
        let mut gen = Generator::from_vec(items.clone());
        drop(items);
        assert_eq!(gen.next().unwrap(), Some(1));
    }

    #[test]
    fn test_from_vec_conversion() {
        let mut gen: Generator<i64> = vec![5, 6].into();
        assert_eq!(gen.next().unwrap(), Some(5));
        assert_eq!(gen.next().unwrap(), Some(6));
        assert_eq!(gen.next().unwrap(), None);
    }

    #[test]
    fn test_drop_mid_sequence_does_not_resume() {
        let resumes = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = std::rc::Rc::clone(&resumes);
        let mut gen = Generator::from_fn(move || {
            counter.set(counter.get() + 1);
            Step::Yielded(1)
        });
        gen.next().unwrap();
        gen.next().unwrap();
        drop(gen);
        assert_eq!(resumes.get(), 2);
    }

    #[test]
    fn test_debug_reports_state() {
        let gen = ints(&[1]);
        let rendered = format!("{gen:?}");
        assert!(rendered.contains("Created"));
    }
}
