//! # tvremote - Television remote TUI
//!
//! Two television widgets, each with a channel (1-10) and a volume (0-10)
//! that move one step per button press and saturate at their bounds.
//! Built on ratatui with an Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **Domain** (`domain`): the saturating counter rule
//! - **Model** (`model`): one television instance, the status bar
//! - **State** (`core::state`): everything the view needs
//! - **Message** (`core::msg`, `core::raw_msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects, including the render request
//! - **View** (`presentation`): layout, widgets and components
//!
//! ## Example Usage
//!
//! ```rust
//! use tvremote::{
//!     core::{msg::Msg, state::AppState, update::update},
//!     model::television::{Message, Television},
//! };
//!
//! let state = AppState::new(vec![
//!     Television::new("Samsung", "X1000"),
//!     Television::new("LG", "OLED55"),
//! ]);
//!
//! let (state, commands) = update(
//!     Msg::Television { index: 0, message: Message::ChannelUp },
//!     state,
//! );
//!
//! assert_eq!(state.televisions[0].channel(), 2);
//! assert_eq!(state.televisions[1].channel(), 1);
//! assert!(!commands.is_empty());
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, update::update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
