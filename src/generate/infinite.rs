//! Unbounded arithmetic sequence

use num_traits::{Num, NumCast};

use crate::contract::{self, Violation};
use crate::sequence::{ForwardSequence, RandomAccessSequence, Sequence};

/// `start, start + 1, start + 2, ...` without end
///
/// Never empty. Consumers bound it themselves, for example with
/// `.iter().take(n)`. Advancing past the largest value of `N` follows
/// Rust's usual overflow behaviour for `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Infinite<N> {
    current: N,
}

/// Count up from zero
pub fn infinite<N: Num + Copy>() -> Infinite<N> {
    infinite_from(N::zero())
}

/// Count up from `start`
pub fn infinite_from<N: Num + Copy>(start: N) -> Infinite<N> {
    Infinite { current: start }
}

impl<N: Num + Copy> Sequence for Infinite<N> {
    type Item = N;

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn front(&self) -> N {
        self.current
    }

    #[inline]
    fn pop_front(&mut self) {
        self.current = self.current + N::one();
    }
}

impl<N: Num + Copy> ForwardSequence for Infinite<N> {
    #[inline]
    fn save(&self) -> Self {
        *self
    }
}

impl<N: Num + NumCast + Copy> RandomAccessSequence for Infinite<N> {
    /// `front() + index`, computed without advancing
    fn at(&self, index: usize) -> N {
        match <N as NumCast>::from(index) {
            Some(offset) => self.current + offset,
            None => contract::fail(Violation::UnrepresentableOffset { index }),
        }
    }
}
