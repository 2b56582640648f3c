//! Error types and result definitions for the brook engine.
//!
//! The engine's error surface is deliberately small: access violations on the
//! slot container, dereferences past the end of a sequence, and failures
//! raised by user-supplied production logic. Failures are always returned as
//! values, never printed or swallowed.

use std::fmt;
use thiserror::Error;

/// The unified result type used throughout the engine.
pub type BrookResult<T> = Result<T, BrookError>;

/// Error conditions surfaced by the sequence engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrookError {
    /// A value was requested from a slot that holds nothing.
    #[error("empty slot: no value is held")]
    EmptyAccess,

    /// A value was dereferenced at a terminal position.
    #[error("dereferenced a terminal position")]
    TerminalPosition,

    /// User-supplied production logic failed while producing a value.
    #[error("production failed: {message}")]
    Production {
        /// Failure description.
        message: String,
    },
}

impl BrookError {
    /// Creates a production failure from any message.
    #[inline]
    pub fn production<S: Into<String>>(message: S) -> Self {
        Self::Production {
            message: message.into(),
        }
    }

    /// Wraps an arbitrary error raised by user logic as a production failure.
    #[inline]
    pub fn from_source<E: fmt::Display>(source: &E) -> Self {
        Self::Production {
            message: source.to_string(),
        }
    }

    /// Returns true if this is a production failure.
    #[inline]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production { .. })
    }

    /// Returns true if this is an access violation (empty slot or terminal
    /// dereference) rather than a user-originated failure.
    #[inline]
    pub const fn is_access(&self) -> bool {
        matches!(self, Self::EmptyAccess | Self::TerminalPosition)
    }
}
