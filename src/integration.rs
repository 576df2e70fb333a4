//! Integration layer
//!
//! Glue between the pure core and the terminal: message queues, the render
//! path and the main event loop.

pub mod app_runner;
pub mod renderer;
pub mod runtime;
