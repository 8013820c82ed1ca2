//! Memento pattern: snapshot and restore component state.

mod memento;

pub use memento::Originator;
