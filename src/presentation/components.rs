//! Stateless components rendering from `AppState`

pub mod home;

pub use home::Home;
