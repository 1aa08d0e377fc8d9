use crate::sequence::{ForwardSequence, RandomAccessSequence, Sequence, SizedSequence};

/// Lockstep walk over two sequences, ending with the shorter one
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A: Sequence, B: Sequence> Zip<A, B> {
    /// Zip `a` with `b`
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn is_empty(&self) -> bool {
        self.a.is_empty() || self.b.is_empty()
    }

    fn front(&self) -> Self::Item {
        (self.a.front(), self.b.front())
    }

    fn pop_front(&mut self) {
        self.a.pop_front();
        self.b.pop_front();
    }
}

impl<A: ForwardSequence, B: ForwardSequence> ForwardSequence for Zip<A, B> {
    fn save(&self) -> Self {
        Self {
            a: self.a.save(),
            b: self.b.save(),
        }
    }
}

impl<A, B> RandomAccessSequence for Zip<A, B>
where
    A: RandomAccessSequence,
    B: RandomAccessSequence,
{
    fn at(&self, index: usize) -> Self::Item {
        (self.a.at(index), self.b.at(index))
    }
}

impl<A: SizedSequence, B: SizedSequence> SizedSequence for Zip<A, B> {
    fn len(&self) -> usize {
        self.a.len().min(self.b.len())
    }
}
