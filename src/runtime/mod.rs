//! Runtime support for the component layer.
//!
//! This module provides the ambient host environment: the document that
//! mounted components attach to, and execution scopes for isolating it.

mod context;

pub use context::UiRuntime;
