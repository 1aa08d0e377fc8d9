//! Sequence constructed on first touch

use std::cell::Cell;
use std::fmt;

use once_cell::unsync::OnceCell;

use crate::contract::{self, Violation};
use crate::sequence::{
    BidirectionalSequence, ForwardSequence, RandomAccessSequence, Sequence, SizedSequence,
};

/// Sequence whose construction is postponed until it is first used
///
/// The constructor runs exactly once, on the first capability query
/// (`is_empty`, `front`, `pop_front`, or any of the optional ones), and every
/// operation afterwards is forwarded to the constructed sequence. Any side
/// effect of the constructor, such as snapshotting a collection, therefore
/// happens at first touch, after whatever earlier pipeline stages have run by
/// then.
pub struct Deferred<S, F> {
    construct: Cell<Option<F>>,
    seq: OnceCell<S>,
}

/// Defer building a sequence with `construct` until it is first touched
pub fn deferred<S, F>(construct: F) -> Deferred<S, F>
where
    S: Sequence,
    F: FnOnce() -> S,
{
    Deferred {
        construct: Cell::new(Some(construct)),
        seq: OnceCell::new(),
    }
}

impl<S, F> Deferred<S, F>
where
    F: FnOnce() -> S,
{
    /// Whether the constructor has already run
    pub fn is_constructed(&self) -> bool {
        self.seq.get().is_some()
    }

    fn ready(seq: S) -> Self {
        Self {
            construct: Cell::new(None),
            seq: OnceCell::from(seq),
        }
    }

    #[track_caller]
    fn force(&self) -> &S {
        self.seq.get_or_init(|| match self.construct.take() {
            Some(construct) => {
                tracing::trace!("constructing deferred sequence");
                construct()
            }
            None => contract::fail(Violation::ReentrantConstruction),
        })
    }

    #[track_caller]
    fn force_mut(&mut self) -> &mut S {
        self.force();
        match self.seq.get_mut() {
            Some(seq) => seq,
            None => contract::fail(Violation::ReentrantConstruction),
        }
    }
}

impl<S, F> Sequence for Deferred<S, F>
where
    S: Sequence,
    F: FnOnce() -> S,
{
    type Item = S::Item;

    fn is_empty(&self) -> bool {
        self.force().is_empty()
    }

    fn front(&self) -> S::Item {
        self.force().front()
    }

    fn pop_front(&mut self) {
        self.force_mut().pop_front()
    }
}

impl<S, F> ForwardSequence for Deferred<S, F>
where
    S: ForwardSequence,
    F: FnOnce() -> S,
{
    /// Constructs `self` if needed and copies the constructed sequence.
    ///
    /// The copy never runs a constructor of its own.
    fn save(&self) -> Self {
        Self::ready(self.force().save())
    }
}

impl<S, F> BidirectionalSequence for Deferred<S, F>
where
    S: BidirectionalSequence,
    F: FnOnce() -> S,
{
    fn back(&self) -> S::Item {
        self.force().back()
    }

    fn pop_back(&mut self) {
        self.force_mut().pop_back()
    }
}

impl<S, F> RandomAccessSequence for Deferred<S, F>
where
    S: RandomAccessSequence,
    F: FnOnce() -> S,
{
    fn at(&self, index: usize) -> S::Item {
        self.force().at(index)
    }
}

impl<S, F> SizedSequence for Deferred<S, F>
where
    S: SizedSequence,
    F: FnOnce() -> S,
{
    fn len(&self) -> usize {
        self.force().len()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Deferred<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("seq", &self.seq.get())
            .finish_non_exhaustive()
    }
}
