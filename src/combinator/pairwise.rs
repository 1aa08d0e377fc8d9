//! Pairwise combinator
//!
//! `pairwise(f, r)` is `map(zip(r, r.drop(1)))` with `f` spread over each
//! pair: element `i` of the output is `f(r[i], r[i + 1])`.

use std::fmt;

use super::Zip;
use crate::sequence::{ForwardSequence, RandomAccessSequence, Sequence, SequenceExt, SizedSequence};

/// Sequence of `f(a, b)` over adjacent elements `a`, `b` of a sequence
///
/// One element shorter than its input; empty for inputs of length 0 or 1.
/// `f` is called every time an element is read.
#[derive(Clone)]
pub struct Pairwise<S, F> {
    pairs: Zip<S, S>,
    f: F,
}

impl<S: ForwardSequence, F> Pairwise<S, F> {
    /// Combine adjacent elements of `seq` through `f`
    pub fn new(f: F, seq: S) -> Self {
        let ahead = seq.save().drop_front(1);
        Self {
            pairs: Zip::new(seq, ahead),
            f,
        }
    }
}

/// Combine adjacent elements of `seq` through `f`
pub fn pairwise<S, F, R>(f: F, seq: S) -> Pairwise<S, F>
where
    S: ForwardSequence,
    F: Fn(S::Item, S::Item) -> R,
{
    Pairwise::new(f, seq)
}

impl<S, F, R> Sequence for Pairwise<S, F>
where
    S: Sequence,
    F: Fn(S::Item, S::Item) -> R,
{
    type Item = R;

    fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn front(&self) -> R {
        let (a, b) = self.pairs.front();
        (self.f)(a, b)
    }

    fn pop_front(&mut self) {
        self.pairs.pop_front()
    }
}

impl<S, F, R> ForwardSequence for Pairwise<S, F>
where
    S: ForwardSequence,
    F: Fn(S::Item, S::Item) -> R + Clone,
{
    fn save(&self) -> Self {
        Self {
            pairs: self.pairs.save(),
            f: self.f.clone(),
        }
    }
}

impl<S, F, R> RandomAccessSequence for Pairwise<S, F>
where
    S: RandomAccessSequence,
    F: Fn(S::Item, S::Item) -> R,
{
    fn at(&self, index: usize) -> R {
        let (a, b) = self.pairs.at(index);
        (self.f)(a, b)
    }
}

impl<S, F, R> SizedSequence for Pairwise<S, F>
where
    S: SizedSequence,
    F: Fn(S::Item, S::Item) -> R,
{
    fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Pairwise<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pairwise")
            .field("pairs", &self.pairs)
            .finish_non_exhaustive()
    }
}
