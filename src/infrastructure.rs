//! Infrastructure layer
//!
//! Everything that touches the outside world: the terminal, the command line
//! and configuration files.

pub mod cli;
pub mod config;
pub mod tui;
