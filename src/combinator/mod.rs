//! Sequences built from other sequences

mod map;
mod pairwise;
mod zip;

pub use map::Map;
pub use pairwise::{pairwise, Pairwise};
pub use zip::Zip;
