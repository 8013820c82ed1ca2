//! Reactive state for component internals.
//!
//! Components are rendered once per mount; anything that changes
//! afterwards lives in a [`Signal`] and flows to the host surface through
//! watchers.

mod signal;

pub use signal::{Signal, WatchGuard};
