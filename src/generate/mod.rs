//! Sequences that produce their own elements
//!
//! None of these borrow anything: an infinite count, the empty identity and a
//! single eagerly evaluated value.

mod empty;
mod infinite;
mod only;

pub use empty::{empty, Empty};
pub use infinite::{infinite, infinite_from, Infinite};
pub use only::{only, Only};
