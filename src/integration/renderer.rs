use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{core::state::AppState, infrastructure::tui, presentation::components::home::Home};

#[derive(Debug, Default)]
pub struct Renderer {
    home: Home,
}

impl Renderer {
    pub fn new() -> Self {
        Self { home: Home::new() }
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| {
            let area = f.area();
            self.home.view(state, f, area);
        };
        guard.draw(&mut draw)?;
        Ok(())
    }
}
