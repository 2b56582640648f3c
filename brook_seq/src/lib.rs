//! # Brook Seq
//!
//! Suspendable sequence producers and a lazy pipeline algebra.
//!
//! This crate provides the engine's moving parts:
//!
//! - **Generator Core**: [`Generator`], a single-owner, forward-only,
//!   suspendable sequence producer with exactly-once-advance and
//!   idempotent-peek semantics
//! - **Production Model**: the [`Produce`] trait and [`Step`] vocabulary, a
//!   pull-based state machine standing in for native coroutine suspension
//! - **Range Factory**: [`ranges_of`]/[`ranges_of_step`], lazy arithmetic
//!   progressions with degenerate-case handling
//! - **Pipeline Algebra**: non-materializing adapters (`transforms`,
//!   `filters`, `zip`, `take`, …) and terminal reducers (`count`, `all`,
//!   `position`, `collect`, …), all consuming their source by ownership
//!   transfer
//! - **Deferred Stages**: curried pipeline operations applied through the
//!   pipe operator, as in
//!   `source | transforms(f) | filters(p) | take(n)`
//!
//! # Example
//!
//! ```
//! use brook_seq::pipeline::{filters, take, transforms};
//! use brook_seq::ranges_of;
//!
//! let squares = ranges_of(0, 100)
//!     | transforms(|x: i64| x * x)
//!     | filters(|x: &i64| x % 2 == 0)
//!     | take(3);
//! let collected: Vec<i64> = squares.list().unwrap();
//! assert_eq!(collected, vec![0, 4, 16]);
//! ```
//!
//! # Thread Safety
//!
//! Generators are NOT thread-safe. The execution model is strictly
//! single-threaded cooperative suspension: a production parks immediately
//! after yielding and resumes only in response to an explicit advance on the
//! same thread. Sharing a generator across threads requires external
//! synchronization, which this crate does not provide.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod generator;
pub mod iter;
pub mod pipeline;
pub mod produce;
pub mod range;
pub mod state;

pub use brook_core::{BrookError, BrookResult, Slot};
pub use generator::Generator;
pub use iter::{IntoIter, IterMut};
pub use produce::{Produce, Step};
pub use range::{ranges_of, ranges_of_step};
pub use state::GenState;
