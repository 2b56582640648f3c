//! Terminal reducers.
//!
//! Terminals consume their generator outright and drive it as far as their
//! answer requires: the counting and materializing operations drain the
//! source to exhaustion, while the quantifiers and searches stop at the
//! deciding element and drop the rest unproduced. Every terminal returns a
//! `BrookResult` so that a production failure reaches the consumer instead
//! of being swallowed mid-drain.

use brook_core::BrookResult;

use crate::generator::Generator;

impl<T: 'static> Generator<T> {
    /// Counts the elements produced by draining the source.
    ///
    /// # Errors
    ///
    /// A production failure raised while draining.
    pub fn count(mut self) -> BrookResult<usize> {
        let mut total = 0;
        while self.pull()?.is_some() {
            total += 1;
        }
        Ok(total)
    }

    /// Counts the elements for which `matches` is true.
    ///
    /// # Errors
    ///
    /// A production failure raised while draining.
    pub fn count_if<F>(mut self, mut matches: F) -> BrookResult<usize>
    where
        F: FnMut(&T) -> bool,
    {
        let mut total = 0;
        while let Some(value) = self.pull()? {
            if matches(&value) {
                total += 1;
            }
        }
        Ok(total)
    }

    /// Returns true if `matches` holds for every element.
    ///
    /// Vacuously true over an empty source. Inspects every element until a
    /// counterexample or exhaustion.
    ///
    /// # Errors
    ///
    /// A production failure raised before the answer is decided.
    pub fn all<F>(mut self, mut matches: F) -> BrookResult<bool>
    where
        F: FnMut(&T) -> bool,
    {
        while let Some(value) = self.pull()? {
            if !matches(&value) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns true if `matches` holds for at least one element.
    ///
    /// False over an empty source. Short-circuits on the deciding element
    /// without draining further.
    ///
    /// # Errors
    ///
    /// A production failure raised before the answer is decided.
    pub fn any<F>(mut self, mut matches: F) -> BrookResult<bool>
    where
        F: FnMut(&T) -> bool,
    {
        while let Some(value) = self.pull()? {
            if matches(&value) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns true if `matches` holds for no element.
    ///
    /// Vacuously true over an empty source. Short-circuits on the deciding
    /// element without draining further.
    ///
    /// # Errors
    ///
    /// A production failure raised before the answer is decided.
    pub fn none<F>(mut self, mut matches: F) -> BrookResult<bool>
    where
        F: FnMut(&T) -> bool,
    {
        while let Some(value) = self.pull()? {
            if matches(&value) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the zero-based index of the first matching element.
    ///
    /// If no element matches, returns the total number of elements observed
    /// (a sentinel equal to the source's length).
    ///
    /// # Errors
    ///
    /// A production failure raised before a match is found.
    pub fn position<F>(mut self, mut matches: F) -> BrookResult<usize>
    where
        F: FnMut(&T) -> bool,
    {
        let mut observed = 0;
        while let Some(value) = self.pull()? {
            if matches(&value) {
                return Ok(observed);
            }
            observed += 1;
        }
        Ok(observed)
    }

    /// Returns the first matching element, or a default-constructed value if
    /// no element matches.
    ///
    /// # Errors
    ///
    /// A production failure raised before a match is found.
    pub fn find<F>(mut self, mut matches: F) -> BrookResult<T>
    where
        T: Default,
        F: FnMut(&T) -> bool,
    {
        while let Some(value) = self.pull()? {
            if matches(&value) {
                return Ok(value);
            }
        }
        Ok(T::default())
    }

    /// Folds every element into an accumulator, left to right, in production
    /// order.
    ///
    /// # Errors
    ///
    /// A production failure raised while draining.
    pub fn fold<A, F>(mut self, init: A, mut op: F) -> BrookResult<A>
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = init;
        while let Some(value) = self.pull()? {
            acc = op(acc, value);
        }
        Ok(acc)
    }

    /// Inserts every produced element into a set-like container.
    ///
    /// Duplicate elements collapse per the target container's equality
    /// semantics.
    ///
    /// # Errors
    ///
    /// A production failure raised while draining.
    pub fn collect<S>(mut self) -> BrookResult<S>
    where
        S: Default + Extend<T>,
    {
        let mut out = S::default();
        while let Some(value) = self.pull()? {
            out.extend(std::iter::once(value));
        }
        Ok(out)
    }

    /// Appends every produced element to a sequence container, in production
    /// order.
    ///
    /// # Errors
    ///
    /// A production failure raised while draining.
    pub fn list<C>(self) -> BrookResult<C>
    where
        C: Default + Extend<T>,
    {
        self.collect()
    }
}
