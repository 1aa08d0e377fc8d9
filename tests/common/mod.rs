#![allow(dead_code)]

use std::cell::Cell;

use lazyseq::{Sequence, SequenceExt};

/// Drain a sequence of references into a vector of copies.
pub fn drain_copied<'a, S, T>(seq: S) -> Vec<T>
where
    S: Sequence<Item = &'a T>,
    T: Copy + 'a,
{
    seq.iter().copied().collect()
}

/// Counter shared between a test and the closures it hands out.
#[derive(Debug, Default)]
pub struct CallCounter(Cell<usize>);

impl CallCounter {
    pub fn bump(&self) -> usize {
        self.0.set(self.0.get() + 1);
        self.0.get()
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}
