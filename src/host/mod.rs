//! Host surface support.
//!
//! The document is the mutable surface that rendered output attaches to,
//! playing the role `document.body` plays in a browser host: a flat list
//! of containers in attach order, each holding text nodes.

mod document;
mod error;

pub use document::{ContainerId, Document, NodeId};
pub use error::HostError;
