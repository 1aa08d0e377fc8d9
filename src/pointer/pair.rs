//! Pointer-pair range
//!
//! Tracks `(current, end)` instead of `(current, length)`: advancing is one
//! pointer increment and the empty test one comparison.

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;
use std::slice;

use crate::contract::{CheckPolicy, Checked, Unchecked, Violation};
use crate::sequence::{
    BidirectionalSequence, ForwardSequence, RandomAccessSequence, Sequence, SizedSequence,
};

/// Range over a contiguous block, represented as two pointers
///
/// `P` selects the bounds-checking policy. [`Checked`] ranges come from
/// [`PtrRange::new`] and panic on every precondition violation. [`Unchecked`]
/// ranges come from the `unsafe` [`PtrRange::new_unchecked`] and only check
/// in debug builds.
///
/// For zero-sized `T` the pointers carry no address information, so `end` is
/// kept `len` bytes past `current` and reads go through a dangling pointer.
pub struct PtrRange<'a, T, P: CheckPolicy = Checked> {
    current: *const T,
    end: *const T,
    _marker: PhantomData<(&'a [T], P)>,
}

impl<'a, T> PtrRange<'a, T, Checked> {
    /// Checked range over `block`
    pub fn new(block: &'a [T]) -> Self {
        Self::from_block(block)
    }
}

impl<'a, T> PtrRange<'a, T, Unchecked> {
    /// Range over `block` that skips precondition checks in release builds.
    ///
    /// # Safety
    ///
    /// The caller must never read, pop, index or slice past the end of the
    /// range. Doing so in a release build is undefined behaviour.
    pub unsafe fn new_unchecked(block: &'a [T]) -> Self {
        Self::from_block(block)
    }
}

impl<'a, T, P: CheckPolicy> PtrRange<'a, T, P> {
    fn from_block(block: &'a [T]) -> Self {
        let current = block.as_ptr();
        Self {
            current,
            // SAFETY: `len` elements past the start of a slice is its end.
            end: unsafe { step(current, block.len()) },
            _marker: PhantomData,
        }
    }

    /// Number of elements left
    #[inline]
    pub fn len(&self) -> usize {
        if is_zst::<T>() {
            (self.end as usize).wrapping_sub(self.current as usize)
        } else {
            // SAFETY: both pointers are derived from the same block and
            // `current <= end` holds.
            unsafe { self.end.offset_from(self.current) as usize }
        }
    }

    /// Whether no elements are left
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current == self.end
    }

    /// Remaining elements as a slice
    pub fn as_slice(&self) -> &'a [T] {
        // SAFETY: `[current, end)` is a live sub-slice of the original
        // block for `'a`. ZST slices only need an aligned pointer.
        unsafe { slice::from_raw_parts(read_ptr(self.current), self.len()) }
    }

    /// Sub-range covering offsets `start..end` of the remaining elements
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let len = self.len();
        P::check(start <= end && end <= len, || Violation::InvalidSlice {
            start,
            end,
            len,
        });
        tracing::trace!(start, end, len, "slicing pointer range");
        // SAFETY: `start <= end <= len` keeps both pointers inside the block.
        unsafe {
            Self {
                current: step(self.current, start),
                end: step(self.current, end),
                _marker: PhantomData,
            }
        }
    }
}

impl<'a, T, P: CheckPolicy> Sequence for PtrRange<'a, T, P> {
    type Item = &'a T;

    #[inline]
    fn is_empty(&self) -> bool {
        PtrRange::is_empty(self)
    }

    #[inline]
    fn front(&self) -> &'a T {
        P::check(!self.is_empty(), || Violation::Exhausted { op: "front" });
        // SAFETY: a non-empty range points at a live element.
        unsafe { &*read_ptr(self.current) }
    }

    #[inline]
    fn pop_front(&mut self) {
        P::check(!self.is_empty(), || Violation::Exhausted { op: "pop_front" });
        // SAFETY: a non-empty range can move one element towards `end`.
        self.current = unsafe { step(self.current, 1) };
    }
}

impl<'a, T, P: CheckPolicy> ForwardSequence for PtrRange<'a, T, P> {
    #[inline]
    fn save(&self) -> Self {
        *self
    }
}

impl<'a, T, P: CheckPolicy> BidirectionalSequence for PtrRange<'a, T, P> {
    #[inline]
    fn back(&self) -> &'a T {
        P::check(!self.is_empty(), || Violation::Exhausted { op: "back" });
        // SAFETY: a non-empty range has its last element just before `end`.
        unsafe { &*read_ptr(step_back(self.end, 1)) }
    }

    #[inline]
    fn pop_back(&mut self) {
        P::check(!self.is_empty(), || Violation::Exhausted { op: "pop_back" });
        // SAFETY: a non-empty range can move `end` one element back.
        self.end = unsafe { step_back(self.end, 1) };
    }
}

impl<'a, T, P: CheckPolicy> RandomAccessSequence for PtrRange<'a, T, P> {
    #[inline]
    fn at(&self, index: usize) -> &'a T {
        let len = self.len();
        P::check(index < len, || Violation::IndexOutOfRange { index, len });
        // SAFETY: `index < len` is inside the remaining block.
        unsafe { &*read_ptr(step(self.current, index)) }
    }
}

impl<'a, T, P: CheckPolicy> SizedSequence for PtrRange<'a, T, P> {
    #[inline]
    fn len(&self) -> usize {
        PtrRange::len(self)
    }
}

impl<'a, T, P: CheckPolicy> Clone for PtrRange<'a, T, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, P: CheckPolicy> Copy for PtrRange<'a, T, P> {}

impl<'a, T> From<&'a [T]> for PtrRange<'a, T, Checked> {
    fn from(block: &'a [T]) -> Self {
        Self::new(block)
    }
}

impl<'a, T: fmt::Debug, P: CheckPolicy> fmt::Debug for PtrRange<'a, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PtrRange")
            .field("remaining", &self.as_slice())
            .field("policy", &P::default())
            .finish()
    }
}

#[inline]
fn is_zst<T>() -> bool {
    mem::size_of::<T>() == 0
}

/// Move `ptr` forward by `n` elements.
///
/// # Safety
///
/// For sized `T` the result must stay within (or one past) the block.
#[inline]
unsafe fn step<T>(ptr: *const T, n: usize) -> *const T {
    if is_zst::<T>() {
        (ptr as *const u8).wrapping_add(n) as *const T
    } else {
        ptr.add(n)
    }
}

/// Move `ptr` back by `n` elements.
///
/// # Safety
///
/// Same as [`step`].
#[inline]
unsafe fn step_back<T>(ptr: *const T, n: usize) -> *const T {
    if is_zst::<T>() {
        (ptr as *const u8).wrapping_sub(n) as *const T
    } else {
        ptr.sub(n)
    }
}

/// Pointer that can be dereferenced for a position
#[inline]
fn read_ptr<T>(ptr: *const T) -> *const T {
    if is_zst::<T>() {
        NonNull::<T>::dangling().as_ptr()
    } else {
        ptr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceExt;

    #[test]
    fn walks_block_front_to_back() {
        let data = [10, 20, 30];
        let mut range = PtrRange::new(&data);
        assert_eq!(range.len(), 3);
        assert_eq!(*range.front(), 10);
        range.pop_front();
        assert_eq!(*range.front(), 20);
        range.pop_front();
        range.pop_front();
        assert!(range.is_empty());
    }

    #[test]
    fn back_and_pop_back_shrink_from_the_end() {
        let data = [1, 2, 3, 4];
        let mut range = PtrRange::new(&data);
        assert_eq!(*range.back(), 4);
        range.pop_back();
        assert_eq!(*range.back(), 3);
        assert_eq!(range.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn at_is_relative_to_front() {
        let data = [5, 6, 7, 8];
        let mut range = PtrRange::new(&data);
        range.pop_front();
        assert_eq!(*range.at(0), 6);
        assert_eq!(*range.at(2), 8);
    }

    #[test]
    fn slice_extracts_sub_range() {
        let data = [0, 1, 2, 3, 4, 5];
        let sub = PtrRange::new(&data).slice(2, 5);
        assert_eq!(sub.as_slice(), &[2, 3, 4]);
        assert!(PtrRange::new(&data).slice(3, 3).is_empty());
    }

    #[test]
    fn save_is_independent() {
        let data = ['a', 'b'];
        let range = PtrRange::new(&data);
        let mut copy = range.save();
        copy.pop_front();
        assert_eq!(*range.front(), 'a');
        assert_eq!(*copy.front(), 'b');
    }

    #[test]
    fn zero_sized_elements_are_counted() {
        let data = [(), (), ()];
        let mut range = PtrRange::new(&data);
        assert_eq!(range.len(), 3);
        range.pop_front();
        range.pop_back();
        assert_eq!(range.len(), 1);
        assert_eq!(range.iter().count(), 1);
    }

    #[test]
    fn unchecked_range_reads_like_checked() {
        let data = [3, 1, 4, 1, 5];
        // SAFETY: the range is drained through `iter`, which checks emptiness.
        let unchecked = unsafe { PtrRange::new_unchecked(&data) };
        let checked = PtrRange::new(&data);
        assert!(unchecked.iter().eq(checked.iter()));
    }

    #[test]
    #[should_panic(expected = "front called on an exhausted sequence")]
    fn front_of_empty_panics() {
        let data: [u8; 0] = [];
        PtrRange::new(&data).front();
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for sequence of length 3")]
    fn at_past_end_panics() {
        let data = [1, 2, 3];
        PtrRange::new(&data).at(3);
    }

    #[test]
    #[should_panic(expected = "invalid slice 2..5")]
    fn slice_past_end_panics() {
        let data = [1, 2, 3];
        PtrRange::new(&data).slice(2, 5);
    }
}
