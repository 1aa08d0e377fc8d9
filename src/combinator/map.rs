use std::fmt;

use crate::sequence::{
    BidirectionalSequence, ForwardSequence, RandomAccessSequence, Sequence, SizedSequence,
};

/// Applies a function to each element as it is read
///
/// Nothing is cached: reading the same front twice calls the function twice.
#[derive(Clone)]
pub struct Map<S, F> {
    seq: S,
    f: F,
}

impl<S, F> Map<S, F> {
    /// Map `seq` through `f`
    pub fn new(seq: S, f: F) -> Self {
        Self { seq, f }
    }
}

impl<S, F, R> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
{
    type Item = R;

    fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    fn front(&self) -> R {
        (self.f)(self.seq.front())
    }

    fn pop_front(&mut self) {
        self.seq.pop_front()
    }
}

impl<S, F, R> ForwardSequence for Map<S, F>
where
    S: ForwardSequence,
    F: Fn(S::Item) -> R + Clone,
{
    fn save(&self) -> Self {
        Self {
            seq: self.seq.save(),
            f: self.f.clone(),
        }
    }
}

impl<S, F, R> BidirectionalSequence for Map<S, F>
where
    S: BidirectionalSequence,
    F: Fn(S::Item) -> R + Clone,
{
    fn back(&self) -> R {
        (self.f)(self.seq.back())
    }

    fn pop_back(&mut self) {
        self.seq.pop_back()
    }
}

impl<S, F, R> RandomAccessSequence for Map<S, F>
where
    S: RandomAccessSequence,
    F: Fn(S::Item) -> R,
{
    fn at(&self, index: usize) -> R {
        (self.f)(self.seq.at(index))
    }
}

impl<S, F, R> SizedSequence for Map<S, F>
where
    S: SizedSequence,
    F: Fn(S::Item) -> R,
{
    fn len(&self) -> usize {
        self.seq.len()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("seq", &self.seq).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PtrRange;
    use crate::sequence::SequenceExt;

    #[test]
    fn maps_both_ends() {
        let data = [1, 2, 3];
        let squares = Map::new(PtrRange::new(&data), |x: &i32| x * x);
        assert_eq!(squares.front(), 1);
        assert_eq!(squares.back(), 9);
        assert_eq!(squares.at(1), 4);
        assert_eq!(squares.iter().rev().collect::<Vec<_>>(), vec![9, 4, 1]);
    }
}
