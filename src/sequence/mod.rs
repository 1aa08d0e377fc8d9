//! Sequence capabilities
//!
//! A sequence is a pull-based view of elements. Every adapter in this crate
//! implements [`Sequence`]; the richer capabilities are separate traits so a
//! consumer can ask for exactly what it needs:
//!
//! | Trait | Adds |
//! |---|---|
//! | [`Sequence`] | `is_empty`, `front`, `pop_front` |
//! | [`ForwardSequence`] | `save` (independent copy of the position) |
//! | [`BidirectionalSequence`] | `back`, `pop_back` |
//! | [`RandomAccessSequence`] | `at` (offset from the front) |
//! | [`SizedSequence`] | `len` |
//!
//! Reading or popping an empty sequence, or indexing past its end, breaks a
//! precondition and panics (see [`crate::contract`]).

mod iter;

pub use iter::{from_iter, FromIter, Iter};

use crate::combinator::{Map, Pairwise, Zip};

/// Minimal input sequence
pub trait Sequence {
    /// Element type produced by `front`
    type Item;

    /// Whether the sequence has no elements left
    fn is_empty(&self) -> bool;

    /// Current element. Precondition: `!self.is_empty()`
    fn front(&self) -> Self::Item;

    /// Advance past the current element. Precondition: `!self.is_empty()`
    fn pop_front(&mut self);
}

/// Sequence whose position can be duplicated
pub trait ForwardSequence: Sequence + Sized {
    /// Copy of the current position.
    ///
    /// Advancing the copy never affects `self`, and vice versa.
    fn save(&self) -> Self;
}

/// Sequence that can also be consumed from the back
pub trait BidirectionalSequence: ForwardSequence {
    /// Last element. Precondition: `!self.is_empty()`
    fn back(&self) -> Self::Item;

    /// Drop the last element. Precondition: `!self.is_empty()`
    fn pop_back(&mut self);
}

/// Sequence with O(1) access by offset from the front
pub trait RandomAccessSequence: Sequence {
    /// Element `index` positions after the front
    fn at(&self, index: usize) -> Self::Item;
}

/// Sequence that knows how many elements remain
pub trait SizedSequence: Sequence {
    /// Number of remaining elements
    fn len(&self) -> usize;
}

/// Composition helpers available on every [`Sequence`]
pub trait SequenceExt: Sequence + Sized {
    /// Drain the sequence through [`Iterator`]
    fn iter(self) -> Iter<Self> {
        Iter::new(self)
    }

    /// Pair up elements of `self` and `other`, stopping at the shorter one
    fn zip<B: Sequence>(self, other: B) -> Zip<Self, B> {
        Zip::new(self, other)
    }

    /// Transform each element through `f` when it is read
    fn map<R, F: Fn(Self::Item) -> R>(self, f: F) -> Map<Self, F> {
        Map::new(self, f)
    }

    /// Pop up to `n` elements, stopping early if the sequence runs out
    fn drop_front(mut self, n: usize) -> Self {
        for _ in 0..n {
            if self.is_empty() {
                break;
            }
            self.pop_front();
        }
        self
    }

    /// Combine every adjacent pair of elements through `f`
    fn pairwise<R, F>(self, f: F) -> Pairwise<Self, F>
    where
        Self: ForwardSequence,
        F: Fn(Self::Item, Self::Item) -> R,
    {
        Pairwise::new(f, self)
    }
}

impl<S: Sequence> SequenceExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PtrRange;

    #[test]
    fn drop_front_stops_at_end() {
        let data = [1, 2, 3];
        let rest = PtrRange::new(&data).drop_front(2);
        assert_eq!(rest.as_slice(), &[3]);

        let none = PtrRange::new(&data).drop_front(10);
        assert!(none.is_empty());
    }

    #[test]
    fn map_is_applied_on_read() {
        let data = [1, 2, 3];
        let doubled: Vec<i32> = PtrRange::new(&data).map(|x| x * 2).iter().collect();
        assert_eq!(doubled, vec![2, 4, 6]);
    }
}
