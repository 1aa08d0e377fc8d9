//! Precondition contract shared by every sequence
//!
//! There is exactly one error kind: a caller broke a precondition
//! (read an exhausted sequence, indexed past the end, ...). It is never
//! recoverable, so it is signalled by panicking through [`fail`].

mod policy;

pub use policy::{CheckPolicy, Checked, Unchecked};

use thiserror::Error;

/// A violated sequence precondition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// An element was read from, or popped off, an empty sequence
    #[error("{op} called on an exhausted sequence")]
    Exhausted {
        /// Operation that was attempted
        op: &'static str,
    },

    /// Random access outside of the remaining elements
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Requested offset from the front
        index: usize,
        /// Remaining length at the time of the access
        len: usize,
    },

    /// Random-access offset that the element type cannot represent
    #[error("offset {index} is not representable in the element type")]
    UnrepresentableOffset {
        /// Requested offset from the front
        index: usize,
    },

    /// Sub-range bounds that do not describe a part of the sequence
    #[error("invalid slice {start}..{end} of sequence of length {len}")]
    InvalidSlice {
        /// Start offset
        start: usize,
        /// End offset (exclusive)
        end: usize,
        /// Remaining length
        len: usize,
    },

    /// A block handed to a sentinel-terminated sequence has no sentinel
    #[error("block does not contain a terminating sentinel")]
    MissingTerminator,

    /// A deferred constructor touched the sequence it is constructing
    #[error("deferred sequence accessed while it was being constructed")]
    ReentrantConstruction,
}

/// Abort the current operation because `violation` happened.
#[cold]
#[track_caller]
pub fn fail(violation: Violation) -> ! {
    tracing::error!(%violation, "sequence precondition violated");
    panic!("{violation}")
}

/// Fail with [`Violation::Exhausted`] unless `non_empty` holds.
#[inline]
#[track_caller]
pub(crate) fn require_non_empty(non_empty: bool, op: &'static str) {
    if !non_empty {
        fail(Violation::Exhausted { op })
    }
}

/// Fail with [`Violation::IndexOutOfRange`] unless `index < len`.
#[inline]
#[track_caller]
pub(crate) fn require_index(index: usize, len: usize) {
    if index >= len {
        fail(Violation::IndexOutOfRange { index, len })
    }
}
