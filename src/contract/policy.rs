//! Compile-time bounds-checking policies
//!
//! A policy is a zero-sized type parameter. `ENABLED` is an associated
//! constant, so the branch it guards disappears after monomorphisation.

use std::fmt::Debug;

/// Selects whether a sequence verifies its preconditions
pub trait CheckPolicy: Copy + Debug + Default + 'static {
    /// Whether checks are compiled into release builds
    const ENABLED: bool;

    /// Verify `cond`, failing with `violation` if it does not hold.
    ///
    /// `violation` is only built on the failure path.
    #[inline]
    #[track_caller]
    fn check(cond: bool, violation: impl FnOnce() -> super::Violation) {
        if (Self::ENABLED || cfg!(debug_assertions)) && !cond {
            super::fail(violation())
        }
    }
}

/// Always verify preconditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checked;

/// Verify preconditions in debug builds only.
///
/// Release builds perform no check at all; breaking a precondition is then
/// undefined behaviour. Sequences using this policy can only be created
/// through `unsafe` constructors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unchecked;

impl CheckPolicy for Checked {
    const ENABLED: bool = true;
}

impl CheckPolicy for Unchecked {
    const ENABLED: bool = false;
}
