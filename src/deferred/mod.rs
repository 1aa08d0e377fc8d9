//! Deferred evaluation and deferred construction
//!
//! [`DeferredValue`] postpones computing its single element until it is read
//! (and recomputes it on every read). [`Deferred`] postpones building a whole
//! sequence until it is first touched, and builds it exactly once.
//!
//! Both move side effects from wrap time to first-touch time. A pipeline that
//! relies on one stage seeing another stage's side effects is correct only if
//! the consumer touches the stages in that order; nothing here enforces it.

mod construction;
mod value;

pub use construction::{deferred, Deferred};
pub use value::{deferred_value, DeferredValue};
