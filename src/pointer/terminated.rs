//! Sentinel-terminated sequence (C strings and friends)

use std::ffi::CStr;
use std::fmt;
use std::marker::PhantomData;

use crate::contract::{self, CheckPolicy, Checked, Unchecked, Violation};
use crate::sequence::{ForwardSequence, Sequence};

/// Forward sequence over a block ending in `T::default()`
///
/// No length is stored or computed; the empty test dereferences the current
/// position and compares it with the sentinel.
///
/// `P` selects the bounds-checking policy for `pop_front`, as for
/// [`crate::PtrRange`]. Safe constructors always produce [`Checked`]
/// sequences; [`Unchecked`] ones only come from
/// [`NullTerminated::from_ptr_unchecked`].
pub struct NullTerminated<'a, T, P: CheckPolicy = Checked> {
    current: *const T,
    _marker: PhantomData<(&'a T, P)>,
}

impl<'a, T: Default + PartialEq> NullTerminated<'a, T, Checked> {
    /// Sequence starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point into a block that is valid for `'a` and holds a
    /// `T::default()` at or after `ptr`.
    pub unsafe fn from_ptr(ptr: *const T) -> Self {
        Self::at(ptr)
    }

    /// Sequence over `block` up to its first sentinel.
    ///
    /// Panics with [`Violation::MissingTerminator`] if `block` has none.
    pub fn from_slice(block: &'a [T]) -> Self {
        if !block.contains(&T::default()) {
            contract::fail(Violation::MissingTerminator)
        }
        Self::at(block.as_ptr())
    }
}

impl<'a> NullTerminated<'a, u8, Checked> {
    /// Bytes of `text`, excluding its NUL
    pub fn from_cstr(text: &'a CStr) -> Self {
        Self::from_slice(text.to_bytes_with_nul())
    }
}

impl<'a, T: Default + PartialEq> NullTerminated<'a, T, Unchecked> {
    /// Sequence starting at `ptr` that skips checks in release builds.
    ///
    /// # Safety
    ///
    /// Same as [`NullTerminated::from_ptr`]; in addition the caller must
    /// never pop the sequence once it is empty.
    pub unsafe fn from_ptr_unchecked(ptr: *const T) -> Self {
        Self::at(ptr)
    }
}

impl<'a, T, P: CheckPolicy> NullTerminated<'a, T, P> {
    fn at(ptr: *const T) -> Self {
        Self {
            current: ptr,
            _marker: PhantomData,
        }
    }

    /// Current position
    pub fn as_ptr(&self) -> *const T {
        self.current
    }
}

impl<'a, T: Default + PartialEq, P: CheckPolicy> Sequence for NullTerminated<'a, T, P> {
    type Item = &'a T;

    #[inline]
    fn is_empty(&self) -> bool {
        // SAFETY: the position never moves past the sentinel, which is live
        // for `'a`.
        unsafe { *self.current == T::default() }
    }

    #[inline]
    fn front(&self) -> &'a T {
        // SAFETY: see `is_empty`.
        unsafe { &*self.current }
    }

    #[inline]
    fn pop_front(&mut self) {
        P::check(!self.is_empty(), || Violation::Exhausted { op: "pop_front" });
        // SAFETY: the current element is not the sentinel, so one more
        // element exists.
        self.current = unsafe { self.current.add(1) };
    }
}

impl<'a, T: Default + PartialEq, P: CheckPolicy> ForwardSequence for NullTerminated<'a, T, P> {
    #[inline]
    fn save(&self) -> Self {
        *self
    }
}

impl<'a, T, P: CheckPolicy> Clone for NullTerminated<'a, T, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, P: CheckPolicy> Copy for NullTerminated<'a, T, P> {}

impl<'a, T, P: CheckPolicy> fmt::Debug for NullTerminated<'a, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NullTerminated")
            .field("current", &self.current)
            .field("policy", &P::default())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceExt;

    #[test]
    fn stops_at_first_sentinel() {
        let block = [7u32, 8, 0, 9, 0];
        let seq = NullTerminated::from_slice(&block);
        assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![7, 8]);
    }

    #[test]
    fn reads_c_strings() {
        let text = CStr::from_bytes_with_nul(b"hey\0").expect("valid C string");
        let bytes: Vec<u8> = NullTerminated::from_cstr(text).iter().copied().collect();
        assert_eq!(bytes, b"hey");
    }

    #[test]
    fn sentinel_first_is_empty() {
        let block = [0i64, 1, 2];
        assert!(NullTerminated::from_slice(&block).is_empty());
    }

    #[test]
    fn save_copies_position() {
        let block = *b"ab\0";
        let mut seq = NullTerminated::from_slice(&block);
        let saved = seq.save();
        seq.pop_front();
        assert_eq!(*saved.front(), b'a');
        assert_eq!(*seq.front(), b'b');
    }

    #[test]
    fn unchecked_reads_like_checked() {
        let block = [4u16, 5, 6, 0];
        // SAFETY: the block is terminated and drained through `iter`, which
        // stops at the sentinel.
        let unchecked = unsafe { NullTerminated::from_ptr_unchecked(block.as_ptr()) };
        assert!(unchecked.iter().eq(NullTerminated::from_slice(&block).iter()));
    }

    #[test]
    #[should_panic(expected = "pop_front called on an exhausted sequence")]
    fn pop_at_sentinel_panics() {
        let block = [0u8];
        let mut seq = NullTerminated::from_slice(&block);
        seq.pop_front();
    }

    #[test]
    #[should_panic(expected = "block does not contain a terminating sentinel")]
    fn unterminated_block_is_rejected() {
        let block = [1u8, 2, 3];
        NullTerminated::from_slice(&block);
    }
}
