//! Sequences over borrowed blocks of memory
//!
//! Both sequences here alias a block owned elsewhere; the lifetime `'a`
//! ties them to that block so they can never outlive it.

mod pair;
mod terminated;

pub use pair::PtrRange;
pub use terminated::NullTerminated;
