//! Domain layer
//!
//! Pure rules with no knowledge of the terminal or the runtime.

pub mod counter;
