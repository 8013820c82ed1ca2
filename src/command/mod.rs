//! Command pattern: step advancement issued as activations.

mod wizard;

pub use wizard::Wizard;
