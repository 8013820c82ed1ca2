//! Singleton pattern: one backing instance behind many mount points.
//!
//! [`Shared`] wraps a component so that any number of call sites can
//! mount it while exactly one rendered instance exists, created when the
//! first call site mounts and destroyed when the last one unmounts.

mod shared;

pub use shared::{shared, Shared};
