pub mod system;
pub mod ui;

use crate::{infrastructure::config::Config, model::television::Television};

pub use system::SystemState;
pub use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Independent widget instances, in configuration order
    pub televisions: Vec<Television>,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new(televisions: Vec<Television>) -> Self {
        Self {
            televisions,
            ..Default::default()
        }
    }

    /// One television per configured label record
    pub fn new_with_config(config: Config) -> Self {
        let televisions = config
            .televisions
            .iter()
            .map(|tv| Television::new(tv.brand.clone(), tv.model.clone()))
            .collect();
        Self {
            televisions,
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn television(&self, index: usize) -> Option<&Television> {
        self.televisions.get(index)
    }

    pub fn focused_television(&self) -> Option<&Television> {
        self.television(self.ui.focused)
    }
}
