//! Core Elm-style architecture
//!
//! - **State** (`state`): everything the view needs
//! - **Message** (`msg`, `raw_msg`): what happened, before and after translation
//! - **Update** (`update`): pure transition from message to new state
//! - **Command** (`cmd`): side effects requested by the update

pub mod cmd;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
