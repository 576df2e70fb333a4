//! Presentation layer
//!
//! Layout, ratatui widgets, stateless components and the UI-facing parts of
//! the configuration (keybindings and styles).

pub mod components;
pub mod config;
pub mod layout;
pub mod widgets;
