//! Bridge pattern: an abstraction decoupled from the UI that draws it.

mod link;

pub use link::Link;
