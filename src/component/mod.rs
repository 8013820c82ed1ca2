//! Declarative units and their mount lifecycle.
//!
//! A [`Component`] describes what to render; [`mount`] puts one on the
//! host surface and returns a [`MountHandle`] that unmounts it again.
//! Everything that happens between those two points goes through the
//! [`Scope`] handed to the component's render.

mod component;

pub use component::{mount, mount_in, mount_into, Component, MountHandle, Scope};
