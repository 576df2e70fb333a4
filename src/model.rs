//! Self-contained UI models
//!
//! Each model owns its data and changes only through `update(Message)`.

pub mod status_bar;
pub mod television;
