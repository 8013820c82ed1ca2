//! # Motif
//!
//! Classic object-oriented design patterns, each demonstrated on a small
//! declarative component runtime.
//!
//! ## Runtime (the substrate the patterns run on)
//!
//! - [`Component`] - Declarative units rendered once per mount point
//! - [`Signal<T>`](Signal) - Reactive values backing component state
//! - [`Document`] - Host surface that rendered output attaches to
//! - [`mount`] / [`MountHandle`] - Call-site lifecycle, unmount via RAII
//!
//! ## Patterns
//!
//! - [`Shared`] (singleton) - Multiplexes any number of mount points onto
//!   exactly one backing instance, created on first mount and destroyed
//!   on last unmount
//! - [`Mediator`] - Broadcasts to registered participants in order
//! - [`Link`] (bridge) - Splits navigation from the UI that draws it
//! - [`Originator`] (memento) - Snapshot and restore state
//! - [`Wizard`] (command) - Advances through steps via commands

pub mod bridge;
pub mod command;
pub mod component;
pub mod host;
pub mod mediator;
pub mod memento;
pub mod runtime;
pub mod signal;
pub mod singleton;

// Re-export main types for convenience
pub use bridge::Link;
pub use command::Wizard;
pub use component::{mount, mount_in, mount_into, Component, MountHandle, Scope};
pub use host::{ContainerId, Document, HostError, NodeId};
pub use mediator::{Mediator, Participant};
pub use memento::Originator;
pub use signal::{Signal, WatchGuard};
pub use singleton::{shared, Shared};
