//! Reusable ratatui widgets

pub mod status_bar;
pub mod television;

pub use status_bar::StatusBarWidget;
pub use television::TelevisionWidget;
