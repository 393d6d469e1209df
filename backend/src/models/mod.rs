//! Typed domain model for launch records and dashboard selections.

pub mod launch;
pub mod macros;
pub mod selection;

pub use launch::*;
pub use selection::*;
