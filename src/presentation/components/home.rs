//! Home screen
//!
//! All televisions side by side with the status bar underneath.

use ratatui::prelude::*;

use crate::core::state::AppState;
use crate::presentation::{
    config::{Action, KeyBindings},
    layout,
    widgets::{StatusBarWidget, TelevisionWidget},
};

/// Home component
///
/// Stateless: everything it draws comes from the `AppState` passed to `view`.
#[derive(Debug, Clone, Default)]
pub struct Home;

impl Home {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let (televisions_area, status_area) = layout::screen(area);
        let styles = &state.config.config.styles;

        let columns = layout::televisions(televisions_area, state.televisions.len());
        for (index, (television, rect)) in state.televisions.iter().zip(columns).enumerate() {
            let widget =
                TelevisionWidget::new(television, styles).focused(index == state.ui.focused);
            frame.render_widget(widget, rect);
        }

        let hints = key_hints(&state.config.config.keybindings);
        frame.render_widget(
            StatusBarWidget::new(&state.system.status_bar, hints, styles),
            status_area,
        );
    }
}

/// Short help line built from the first key bound to each action
pub fn key_hints(keybindings: &KeyBindings) -> String {
    [
        (Action::ChannelUp, "ch+"),
        (Action::ChannelDown, "ch-"),
        (Action::VolumeUp, "vol+"),
        (Action::VolumeDown, "vol-"),
        (Action::FocusNext, "next tv"),
        (Action::Quit, "quit"),
    ]
    .into_iter()
    .filter_map(|(action, label)| {
        keybindings
            .keys_for(action)
            .first()
            .map(|key| format!("{key}: {label}"))
    })
    .collect::<Vec<_>>()
    .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{config::Config, tui::test::TestTui, tui::TuiLike};
    use color_eyre::eyre::Result;

    #[test]
    fn test_key_hints_from_defaults() -> Result<()> {
        let config = Config::defaults()?;
        let hints = key_hints(&config.keybindings);
        assert!(hints.contains("k: ch+"));
        assert!(hints.contains("tab: next tv"));
        assert!(hints.contains("ctrl-c: quit"));
        Ok(())
    }

    #[test]
    fn test_key_hints_skip_unbound_actions() {
        assert_eq!(key_hints(&KeyBindings::default()), "");
    }

    #[test]
    fn test_view_renders_every_television() -> Result<()> {
        let state = AppState::new_with_config(Config::defaults()?);
        let home = Home::new();
        let mut tui = TestTui::new(80, 24)?;
        let mut draw = |frame: &mut Frame<'_>| {
            let area = frame.area();
            home.view(&state, frame, area);
        };
        tui.draw(&mut draw)?;

        let contents = tui.contents();
        assert!(contents.contains("Samsung TV - Model X1000"));
        assert!(contents.contains("LG TV - Model OLED55"));
        assert_eq!(contents.matches("Channel: 1").count(), 2);
        assert_eq!(contents.matches("Volume: 5").count(), 2);
        assert!(tui.rows()[23].contains("ch+"));
        Ok(())
    }
}
