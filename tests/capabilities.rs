//! Compile-time capability checks
//!
//! Each adapter is instantiated against the capability traits it promises.
//! These tests pass as soon as they compile; the bodies only exercise
//! emptiness, never element access.

use std::ffi::CStr;

use lazyseq::{
    deferred, deferred_value, empty, from_iter, infinite, only, pairwise, BidirectionalSequence,
    Checked, Empty, ForwardSequence, Infinite, NullTerminated, PtrRange, RandomAccessSequence,
    Sequence, SizedSequence, Unchecked,
};

fn requires_input<S: Sequence>(_: &S) {}
fn requires_forward<S: ForwardSequence>(_: &S) {}
fn requires_bidirectional<S: BidirectionalSequence>(_: &S) {}
fn requires_random_access<S: RandomAccessSequence>(_: &S) {}
fn requires_sized<S: SizedSequence>(_: &S) {}

fn requires_everything<S>(seq: &S)
where
    S: BidirectionalSequence + RandomAccessSequence + SizedSequence,
{
    requires_input(seq);
    requires_forward(seq);
    requires_bidirectional(seq);
    requires_random_access(seq);
    requires_sized(seq);
}

#[test]
fn empty_satisfies_every_capability_for_any_element() {
    requires_everything(&empty::<u8>());
    requires_everything(&empty::<String>());
    requires_everything(&Empty::<Vec<Box<dyn Fn()>>>::default());
    assert!(empty::<()>().is_empty());
    assert_eq!(empty::<f32>().len(), 0);
}

#[test]
fn pointer_ranges_are_fully_capable() {
    let block = [1u64, 2, 3];
    requires_everything(&PtrRange::<u64, Checked>::new(&block));
    // SAFETY: nothing is read from the range.
    requires_everything(&unsafe { PtrRange::<u64, Unchecked>::new_unchecked(&block) });
}

#[test]
fn null_terminated_is_forward_only() {
    let text = CStr::from_bytes_with_nul(b"abc\0").expect("valid C string");
    let seq = NullTerminated::from_cstr(text);
    requires_input(&seq);
    requires_forward(&seq);
    assert!(!seq.is_empty());
}

#[test]
fn infinite_is_forward_and_random_access() {
    let seq: Infinite<i32> = infinite();
    requires_forward(&seq);
    requires_random_access(&seq);
    assert!(!seq.is_empty());
}

#[test]
fn single_value_sequences_are_fully_capable() {
    requires_everything(&deferred_value(|| 1));
    requires_everything(&only('z'));
}

#[test]
fn deferred_construction_forwards_capabilities() {
    let seq = deferred(empty::<u8>);
    requires_everything(&seq);
    assert!(!seq.is_constructed());

    requires_forward(&deferred(|| from_iter(0..3)));
}

#[test]
fn pairwise_keeps_random_access_and_size() {
    let block = [1, 2, 3];
    let seq = pairwise(|a: &i32, b: &i32| a + b, PtrRange::new(&block));
    requires_forward(&seq);
    requires_random_access(&seq);
    requires_sized(&seq);
}
