//! The pipeline algebra.
//!
//! A library of generator-to-generator and generator-to-scalar operations,
//! all consuming their source by ownership transfer, split into logical
//! submodules:
//!
//! - `adapters` — unary lazy adapters: `enumerate`, `transforms`,
//!   `try_transforms`, `filters`, `extract`, `take`, `skip`
//! - `combine` — multi-source and expanding adapters: `zip`, `join`,
//!   `flatten`
//! - `terminal` — reducers that drive the source: `count`, `count_if`,
//!   `all`, `any`, `none`, `position`, `find`, `fold`, `collect`, `list`
//! - `stage` — the deferred-stage currying layer and the pipe operator
//!
//! The applied shape of every operation is a method on
//! [`Generator`](crate::Generator); the curried shape is a free function of
//! the same name re-exported here, producing a [`Stage`] for use with the
//! pipe operator:
//!
//! ```
//! use brook_seq::pipeline::{filters, position};
//! use brook_seq::ranges_of;
//!
//! // Applied and curried shapes of the same operation.
//! let applied = ranges_of(0, 10).filters(|x: &i64| x % 2 == 0);
//! let piped = ranges_of(0, 10) | filters(|x: &i64| x % 2 == 0);
//! assert_eq!(applied.count().unwrap(), piped.count().unwrap());
//!
//! // Terminals pipe the same way.
//! let idx = (ranges_of(0, 10) | position(|x: &i64| *x == 7)).unwrap();
//! assert_eq!(idx, 7);
//! ```

mod adapters;
mod combine;
mod stage;
mod terminal;


pub use stage::{
    Stage, all, any, collect, count, count_if, enumerate, extract, filters, find, flatten, fold,
    list, none, position, skip, take, transforms, try_transforms,
};
