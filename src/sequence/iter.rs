//! Bridges between sequences and [`Iterator`]

use std::fmt;

use super::{BidirectionalSequence, ForwardSequence, Sequence};
use crate::contract;

/// Iterator draining a sequence front to back
#[derive(Debug, Clone)]
pub struct Iter<S> {
    seq: S,
}

impl<S: Sequence> Iter<S> {
    pub(crate) fn new(seq: S) -> Self {
        Self { seq }
    }

    /// The sequence as it stands after the elements consumed so far
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for Iter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.seq.is_empty() {
            return None;
        }
        let item = self.seq.front();
        self.seq.pop_front();
        Some(item)
    }
}

impl<S: BidirectionalSequence> DoubleEndedIterator for Iter<S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.seq.is_empty() {
            return None;
        }
        let item = self.seq.back();
        self.seq.pop_back();
        Some(item)
    }
}

/// Sequence reading from an [`Iterator`]
///
/// The iterator is pulled one element ahead so `is_empty` and `front` can be
/// answered through `&self`.
pub struct FromIter<I: Iterator> {
    iter: I,
    head: Option<I::Item>,
}

/// Wrap any iterable into a [`FromIter`] sequence
pub fn from_iter<I: IntoIterator>(iterable: I) -> FromIter<I::IntoIter> {
    let mut iter = iterable.into_iter();
    let head = iter.next();
    FromIter { iter, head }
}

impl<I> Sequence for FromIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn front(&self) -> Self::Item {
        match &self.head {
            Some(item) => item.clone(),
            None => contract::fail(contract::Violation::Exhausted { op: "front" }),
        }
    }

    fn pop_front(&mut self) {
        contract::require_non_empty(self.head.is_some(), "pop_front");
        self.head = self.iter.next();
    }
}

impl<I> ForwardSequence for FromIter<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn save(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            head: self.head.clone(),
        }
    }
}

impl<I> fmt::Debug for FromIter<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromIter")
            .field("head", &self.head)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_iter_round_trips_through_iter() {
        let seq = from_iter(vec!["a", "b", "c"]);
        assert_eq!(Iter::new(seq).collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn from_iter_save_is_independent() {
        let mut seq = from_iter(1..4);
        let saved = seq.save();
        seq.pop_front();
        assert_eq!(seq.front(), 2);
        assert_eq!(saved.front(), 1);
    }

    #[test]
    #[should_panic(expected = "front called on an exhausted sequence")]
    fn front_of_drained_iterator_panics() {
        let seq = from_iter(std::iter::empty::<u8>());
        seq.front();
    }
}
