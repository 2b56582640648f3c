//! Multi-source and expanding adapters.
//!
//! These operations take ownership of both of their sources (`zip`, `join`)
//! or expand each upstream element into several outputs (`flatten`). Like
//! the unary adapters, they are pull-driven and move nothing until the
//! downstream generator is driven.

use smallvec::SmallVec;

use crate::generator::Generator;
use crate::produce::{Produce, Step};

// ============================================================================
// Zip
// ============================================================================

/// Advances two sources in lockstep, pairing their elements.
struct Zip<A: 'static, B: 'static> {
    left: Generator<A>,
    right: Generator<B>,
}

impl<A: 'static, B: 'static> Produce for Zip<A, B> {
    type Output = (A, B);

    fn resume(&mut self) -> Step<(A, B)> {
        let left = match self.left.pull() {
            Ok(Some(value)) => value,
            Ok(None) => return Step::Complete,
            Err(failure) => return Step::Raised(failure),
        };
        match self.right.pull() {
            Ok(Some(right)) => Step::Yielded((left, right)),
            // The right source ended first; the pulled left element is
            // discarded rather than emitted as a partial pair.
            Ok(None) => Step::Complete,
            Err(failure) => Step::Raised(failure),
        }
    }
}

// ============================================================================
// Join
// ============================================================================

/// Concatenates two sources, converting the second's elements.
struct Join<T: 'static, S: 'static> {
    first: Option<Generator<T>>,
    second: Generator<S>,
}

impl<T, S> Produce for Join<T, S>
where
    T: 'static,
    S: Into<T> + 'static,
{
    type Output = T;

    fn resume(&mut self) -> Step<T> {
        if let Some(first) = self.first.as_mut() {
            match first.pull() {
                Ok(Some(value)) => return Step::Yielded(value),
                Ok(None) => self.first = None,
                Err(failure) => return Step::Raised(failure),
            }
        }
        match self.second.pull() {
            Ok(Some(value)) => Step::Yielded(value.into()),
            Ok(None) => Step::Complete,
            Err(failure) => Step::Raised(failure),
        }
    }
}

// ============================================================================
// Flatten
// ============================================================================

/// Expands each upstream pair into two sequential outputs.
///
/// One expansion fits the inline buffer, so flattening allocates nothing per
/// element.
struct Flatten<U: 'static, S: 'static> {
    source: Generator<(U, S)>,
    pending: SmallVec<[U; 2]>,
}

impl<U, S> Produce for Flatten<U, S>
where
    U: 'static,
    S: Into<U> + 'static,
{
    type Output = U;

    fn resume(&mut self) -> Step<U> {
        if self.pending.is_empty() {
            match self.source.pull() {
                Ok(Some((first, second))) => {
                    self.pending.push(first);
                    self.pending.push(second.into());
                }
                Ok(None) => return Step::Complete,
                Err(failure) => return Step::Raised(failure),
            }
        }
        Step::Yielded(self.pending.remove(0))
    }
}

// ============================================================================
// Applied operation surface
// ============================================================================

impl<T: 'static> Generator<T> {
    /// Advances this generator and `other` in lockstep, yielding pairs.
    ///
    /// Stops at the first source exhaustion (shorter-source-wins) and never
    /// produces a partial pair.
    #[must_use]
    pub fn zip<B: 'static>(self, other: Generator<B>) -> Generator<(T, B)> {
        Generator::from_produce(Zip {
            left: self,
            right: other,
        })
    }

    /// Concatenates: fully drains this generator, then `tail`, converting
    /// the tail's elements.
    #[must_use]
    pub fn join<S>(self, tail: Generator<S>) -> Generator<T>
    where
        S: Into<T> + 'static,
    {
        Generator::from_produce(Join {
            first: Some(self),
            second: tail,
        })
    }
}

impl<U: 'static, S: 'static> Generator<(U, S)> {
    /// Expands each pair into two sequential outputs, converting the second
    /// half.
    #[must_use]
    pub fn flatten(self) -> Generator<U>
    where
        S: Into<U>,
    {
        Generator::from_produce(Flatten {
            source: self,
            pending: SmallVec::new(),
        })
    }
}
