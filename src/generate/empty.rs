//! The empty sequence

use std::fmt;
use std::marker::PhantomData;

use crate::contract::{self, Violation};
use crate::sequence::{
    BidirectionalSequence, ForwardSequence, RandomAccessSequence, Sequence, SizedSequence,
};

/// Sequence with no elements
///
/// Implements every capability so it fits wherever any sequence is expected.
/// Every data operation is a precondition violation.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

/// The empty sequence of `T`
pub const fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    #[inline]
    fn is_empty(&self) -> bool {
        true
    }

    fn front(&self) -> T {
        contract::fail(Violation::Exhausted { op: "front" })
    }

    fn pop_front(&mut self) {
        contract::fail(Violation::Exhausted { op: "pop_front" })
    }
}

impl<T> ForwardSequence for Empty<T> {
    #[inline]
    fn save(&self) -> Self {
        empty()
    }
}

impl<T> BidirectionalSequence for Empty<T> {
    fn back(&self) -> T {
        contract::fail(Violation::Exhausted { op: "back" })
    }

    fn pop_back(&mut self) {
        contract::fail(Violation::Exhausted { op: "pop_back" })
    }
}

impl<T> RandomAccessSequence for Empty<T> {
    fn at(&self, index: usize) -> T {
        contract::fail(Violation::IndexOutOfRange { index, len: 0 })
    }
}

impl<T> SizedSequence for Empty<T> {
    #[inline]
    fn len(&self) -> usize {
        0
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}
