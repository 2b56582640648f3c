//! Unary lazy adapters.
//!
//! Each adapter takes ownership of exactly one upstream generator and
//! implements [`Produce`] by pulling from it until it can emit a value,
//! conclude, or pass a failure through unchanged. No element moves until the
//! downstream generator is driven.
//!
//! The adapter types themselves are an implementation detail: every
//! operation returns a plain [`Generator`], so pipelines stay a single
//! uniform currency no matter how many stages deep they are.

use brook_core::BrookResult;

use crate::generator::Generator;
use crate::produce::{Produce, Step};

// ============================================================================
// Adapter productions
// ============================================================================

/// Pairs each element with its zero-based production index.
struct Enumerate<T: 'static> {
    source: Generator<T>,
    index: usize,
}

impl<T: 'static> Produce for Enumerate<T> {
    type Output = (usize, T);

    fn resume(&mut self) -> Step<(usize, T)> {
        match self.source.pull() {
            Ok(Some(value)) => {
                let index = self.index;
                self.index += 1;
                Step::Yielded((index, value))
            }
            Ok(None) => Step::Complete,
            Err(failure) => Step::Raised(failure),
        }
    }
}

/// Applies a callable to each element.
struct Transforms<T: 'static, F> {
    source: Generator<T>,
    op: F,
}

impl<T, U, F> Produce for Transforms<T, F>
where
    T: 'static,
    F: FnMut(T) -> U,
{
    type Output = U;

    fn resume(&mut self) -> Step<U> {
        match self.source.pull() {
            Ok(Some(value)) => Step::Yielded((self.op)(value)),
            Ok(None) => Step::Complete,
            Err(failure) => Step::Raised(failure),
        }
    }
}

/// Applies a fallible callable to each element.
struct TryTransforms<T: 'static, F> {
    source: Generator<T>,
    op: F,
}

impl<T, U, F> Produce for TryTransforms<T, F>
where
    T: 'static,
    F: FnMut(T) -> BrookResult<U>,
{
    type Output = U;

    fn resume(&mut self) -> Step<U> {
        match self.source.pull() {
            Ok(Some(value)) => match (self.op)(value) {
                Ok(mapped) => Step::Yielded(mapped),
                Err(failure) => Step::Raised(failure),
            },
            Ok(None) => Step::Complete,
            Err(failure) => Step::Raised(failure),
        }
    }
}

/// Keeps elements matching a predicate.
struct Filters<T: 'static, F> {
    source: Generator<T>,
    keep: F,
}

impl<T, F> Produce for Filters<T, F>
where
    T: 'static,
    F: FnMut(&T) -> bool,
{
    type Output = T;

    fn resume(&mut self) -> Step<T> {
        loop {
            match self.source.pull() {
                Ok(Some(value)) => {
                    if (self.keep)(&value) {
                        return Step::Yielded(value);
                    }
                }
                Ok(None) => return Step::Complete,
                Err(failure) => return Step::Raised(failure),
            }
        }
    }
}

/// Drops elements matching a predicate (the inverse filter).
struct Extract<T: 'static, F> {
    source: Generator<T>,
    matches: F,
}

impl<T, F> Produce for Extract<T, F>
where
    T: 'static,
    F: FnMut(&T) -> bool,
{
    type Output = T;

    fn resume(&mut self) -> Step<T> {
        loop {
            match self.source.pull() {
                Ok(Some(value)) => {
                    if !(self.matches)(&value) {
                        return Step::Yielded(value);
                    }
                }
                Ok(None) => return Step::Complete,
                Err(failure) => return Step::Raised(failure),
            }
        }
    }
}

/// Yields at most the first `remaining` elements.
struct Take<T: 'static> {
    source: Generator<T>,
    remaining: usize,
}

impl<T: 'static> Produce for Take<T> {
    type Output = T;

    fn resume(&mut self) -> Step<T> {
        if self.remaining == 0 {
            // Concluded by count; the rest of the source stays unproduced.
            return Step::Complete;
        }
        match self.source.pull() {
            Ok(Some(value)) => {
                self.remaining -= 1;
                Step::Yielded(value)
            }
            Ok(None) => Step::Complete,
            Err(failure) => Step::Raised(failure),
        }
    }
}

/// Discards the first `pending` elements, then yields the rest.
struct Skip<T: 'static> {
    source: Generator<T>,
    pending: usize,
}

impl<T: 'static> Produce for Skip<T> {
    type Output = T;

    fn resume(&mut self) -> Step<T> {
        while self.pending > 0 {
            match self.source.pull() {
                Ok(Some(_)) => self.pending -= 1,
                Ok(None) => return Step::Complete,
                Err(failure) => return Step::Raised(failure),
            }
        }
        match self.source.pull() {
            Ok(Some(value)) => Step::Yielded(value),
            Ok(None) => Step::Complete,
            Err(failure) => Step::Raised(failure),
        }
    }
}

// ============================================================================
// Applied operation surface
// ============================================================================

impl<T: 'static> Generator<T> {
    /// Pairs each element with a zero-based sequential index in production
    /// order.
    #[must_use]
    pub fn enumerate(self) -> Generator<(usize, T)> {
        Generator::from_produce(Enumerate {
            source: self,
            index: 0,
        })
    }

    /// Applies `op` to each element lazily, one at a time.
    #[must_use]
    pub fn transforms<U, F>(self, op: F) -> Generator<U>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        Generator::from_produce(Transforms { source: self, op })
    }

    /// Applies a fallible `op` to each element lazily.
    ///
    /// A callable failure becomes the generator's failure at that position:
    /// it surfaces to the consumer requesting that element, and nothing is
    /// produced afterwards.
    #[must_use]
    pub fn try_transforms<U, F>(self, op: F) -> Generator<U>
    where
        U: 'static,
        F: FnMut(T) -> BrookResult<U> + 'static,
    {
        Generator::from_produce(TryTransforms { source: self, op })
    }

    /// Keeps the elements for which `keep` is true.
    ///
    /// Skipped elements consume no output slot.
    #[must_use]
    pub fn filters<F>(self, keep: F) -> Generator<T>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        Generator::from_produce(Filters { source: self, keep })
    }

    /// Keeps the elements for which `matches` is false (the inverse of
    /// [`filters`](Generator::filters)).
    #[must_use]
    pub fn extract<F>(self, matches: F) -> Generator<T>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        Generator::from_produce(Extract {
            source: self,
            matches,
        })
    }

    /// Yields at most the first `limit` elements, then stops without
    /// draining the remainder of the source.
    #[must_use]
    pub fn take(self, limit: usize) -> Generator<T> {
        Generator::from_produce(Take {
            source: self,
            remaining: limit,
        })
    }

    /// Discards the first `count` elements (all of them, if fewer exist),
    /// then yields the rest.
    #[must_use]
    pub fn skip(self, count: usize) -> Generator<T> {
        Generator::from_produce(Skip {
            source: self,
            pending: count,
        })
    }
}
