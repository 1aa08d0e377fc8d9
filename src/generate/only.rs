use crate::contract::{self, Violation};
use crate::sequence::{
    BidirectionalSequence, ForwardSequence, RandomAccessSequence, Sequence, SizedSequence,
};

/// Sequence of exactly one already evaluated value
///
/// See [`crate::deferred::DeferredValue`] for the variant that evaluates on
/// read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Only<T> {
    value: Option<T>,
}

/// Sequence holding just `value`
pub fn only<T: Clone>(value: T) -> Only<T> {
    Only { value: Some(value) }
}

impl<T: Clone> Only<T> {
    fn get(&self, op: &'static str) -> T {
        match &self.value {
            Some(value) => value.clone(),
            None => contract::fail(Violation::Exhausted { op }),
        }
    }

    fn take(&mut self, op: &'static str) {
        contract::require_non_empty(self.value.take().is_some(), op)
    }
}

impl<T: Clone> Sequence for Only<T> {
    type Item = T;

    fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    fn front(&self) -> T {
        self.get("front")
    }

    fn pop_front(&mut self) {
        self.take("pop_front")
    }
}

impl<T: Clone> ForwardSequence for Only<T> {
    fn save(&self) -> Self {
        self.clone()
    }
}

impl<T: Clone> BidirectionalSequence for Only<T> {
    fn back(&self) -> T {
        self.get("back")
    }

    fn pop_back(&mut self) {
        self.take("pop_back")
    }
}

impl<T: Clone> RandomAccessSequence for Only<T> {
    fn at(&self, index: usize) -> T {
        contract::require_index(index, self.len());
        self.get("at")
    }
}

impl<T: Clone> SizedSequence for Only<T> {
    fn len(&self) -> usize {
        usize::from(self.value.is_some())
    }
}
