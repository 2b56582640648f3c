//! Arithmetic-progression sources.
//!
//! The range factory builds a generator producing `start, start + step,
//! start + 2 * step, …` lazily, stopping at the first value that fails its
//! bound test. Degenerate inputs are no-op ranges, never errors:
//!
//! - a zero step produces nothing;
//! - a start already past its bound produces nothing;
//! - a step that would overflow the element type ends the progression
//!   instead of wrapping.

use crate::generator::Generator;
use crate::produce::{Produce, Step};

/// Lazy arithmetic progression with a saved cursor.
struct Progression {
    cursor: i64,
    stop: i64,
    step: i64,
}

impl Progression {
    /// Returns true while the cursor has not crossed the bound.
    #[inline]
    const fn in_bounds(&self) -> bool {
        if self.step > 0 {
            self.cursor < self.stop
        } else {
            self.cursor > self.stop
        }
    }
}

impl Produce for Progression {
    type Output = i64;

    fn resume(&mut self) -> Step<i64> {
        if self.step == 0 || !self.in_bounds() {
            return Step::Complete;
        }
        let value = self.cursor;
        match value.checked_add(self.step) {
            Some(advanced) => self.cursor = advanced,
            // Overflow: park the cursor on the bound so the next resumption
            // completes.
            None => self.cursor = self.stop,
        }
        Step::Yielded(value)
    }
}

/// Builds a generator producing `start, start + 1, …` up to (excluding)
/// `stop`.
///
/// # Example
///
/// ```
/// use brook_seq::ranges_of;
///
/// let collected: Vec<i64> = ranges_of(0, 4).list().unwrap();
/// assert_eq!(collected, vec![0, 1, 2, 3]);
/// assert_eq!(ranges_of(4, 0).count().unwrap(), 0);
/// ```
#[must_use]
pub fn ranges_of(start: i64, stop: i64) -> Generator<i64> {
    ranges_of_step(start, stop, 1)
}

/// Builds a generator producing the progression `start, start + step, …`.
///
/// With a positive step, values are produced while strictly less than
/// `stop`; with a negative step, while strictly greater. A zero step is a
/// degenerate no-op range: the generator is exhausted immediately.
///
/// # Example
///
/// ```
/// use brook_seq::ranges_of_step;
///
/// let down: Vec<i64> = ranges_of_step(5, 0, -2).list().unwrap();
/// assert_eq!(down, vec![5, 3, 1]);
/// ```
#[must_use]
pub fn ranges_of_step(start: i64, stop: i64, step: i64) -> Generator<i64> {
    if step == 0 {
        return Generator::empty();
    }
    Generator::from_produce(Progression {
        cursor: start,
        stop,
        step,
    })
}
