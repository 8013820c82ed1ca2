//! Mediator pattern: one broadcast point for loosely coupled colleagues.

mod mediator;

pub use mediator::{Mediator, Participant};
