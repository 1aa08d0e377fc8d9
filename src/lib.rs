//! # Lazy, pull-based sequences
//!
//! A small set of independent sequence adapters sharing one capability
//! surface: test for empty, read the front, pop the front, and optionally
//! save the position, read from the back, index from the front or report a
//! length.
//!
//! ## Adapters
//!
//! 1. **[`PtrRange`]**: a borrowed block walked with a `(current, end)`
//!    pointer pair, with compile-time selectable bounds checking
//! 2. **[`NullTerminated`]**: a block ending in a sentinel, C-string style
//! 3. **[`pairwise`]**: `f(r[i], r[i + 1])` over adjacent elements
//! 4. **[`infinite`]**: an unbounded count with O(1) random access
//! 5. **[`empty`]**: the sequence with no elements, usable everywhere
//! 6. **[`deferred_value`]**: one element computed each time it is read
//! 7. **[`deferred`]**: a sequence built on first touch, exactly once
//!
//! ## Usage Example
//!
//! ```
//! use lazyseq::{pairwise, PtrRange, SequenceExt};
//!
//! let data = [1, 2, 3];
//! let sums: Vec<i32> = pairwise(|a: &i32, b: &i32| a + b, PtrRange::new(&data))
//!     .iter()
//!     .collect();
//! assert_eq!(sums, vec![3, 5]);
//! ```
//!
//! Breaking a precondition (reading an exhausted sequence, indexing past its
//! end) is a programming error and panics; see [`contract`].

#![warn(missing_docs, missing_debug_implementations)]

pub mod combinator; // Zip, Map, Pairwise
pub mod contract;   // Precondition violations and check policies
pub mod deferred;   // Deferred evaluation and construction
pub mod generate;   // Infinite, Empty, Only
pub mod pointer;    // Pointer-pair and sentinel-terminated ranges
pub mod sequence;   // Capability traits

// Re-exports for convenience
pub use combinator::{pairwise, Map, Pairwise, Zip};
pub use contract::{CheckPolicy, Checked, Unchecked, Violation};
pub use deferred::{deferred, deferred_value, Deferred, DeferredValue};
pub use generate::{empty, infinite, infinite_from, only, Empty, Infinite, Only};
pub use pointer::{NullTerminated, PtrRange};
pub use sequence::{
    from_iter, BidirectionalSequence, ForwardSequence, FromIter, Iter, RandomAccessSequence,
    Sequence, SequenceExt, SizedSequence,
};
