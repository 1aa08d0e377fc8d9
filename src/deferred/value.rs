//! Single-element sequence evaluated on read

use std::fmt;

use crate::contract;
use crate::sequence::{
    BidirectionalSequence, ForwardSequence, RandomAccessSequence, Sequence, SizedSequence,
};

/// One element produced by calling a function
///
/// Each read of the front (or back, or index 0) calls `producer` again, so an
/// impure producer is observed at read time rather than at wrap time. After
/// one pop the sequence is empty for good.
#[derive(Clone)]
pub struct DeferredValue<F> {
    producer: F,
    consumed: bool,
}

/// Sequence whose only element is `producer()`, evaluated when read
pub fn deferred_value<T, F: Fn() -> T>(producer: F) -> DeferredValue<F> {
    DeferredValue {
        producer,
        consumed: false,
    }
}

impl<F, T> DeferredValue<F>
where
    F: Fn() -> T,
{
    #[track_caller]
    fn evaluate(&self, op: &'static str) -> T {
        contract::require_non_empty(!self.consumed, op);
        (self.producer)()
    }

    #[track_caller]
    fn consume(&mut self, op: &'static str) {
        contract::require_non_empty(!self.consumed, op);
        self.consumed = true;
    }
}

impl<F, T> Sequence for DeferredValue<F>
where
    F: Fn() -> T,
{
    type Item = T;

    fn is_empty(&self) -> bool {
        self.consumed
    }

    fn front(&self) -> T {
        self.evaluate("front")
    }

    fn pop_front(&mut self) {
        self.consume("pop_front")
    }
}

impl<F, T> ForwardSequence for DeferredValue<F>
where
    F: Fn() -> T + Clone,
{
    /// Copy sharing the unevaluated producer; each copy evaluates on its own
    fn save(&self) -> Self {
        self.clone()
    }
}

impl<F, T> BidirectionalSequence for DeferredValue<F>
where
    F: Fn() -> T + Clone,
{
    fn back(&self) -> T {
        self.evaluate("back")
    }

    fn pop_back(&mut self) {
        self.consume("pop_back")
    }
}

impl<F, T> RandomAccessSequence for DeferredValue<F>
where
    F: Fn() -> T,
{
    fn at(&self, index: usize) -> T {
        contract::require_index(index, self.len());
        (self.producer)()
    }
}

impl<F, T> SizedSequence for DeferredValue<F>
where
    F: Fn() -> T,
{
    fn len(&self) -> usize {
        usize::from(!self.consumed)
    }
}

impl<F> fmt::Debug for DeferredValue<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredValue")
            .field("consumed", &self.consumed)
            .finish_non_exhaustive()
    }
}
