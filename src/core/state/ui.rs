use crate::core::{cmd::Cmd, msg::ui::UiMsg};

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Index of the television receiving keyboard triggers
    pub focused: usize,
}

impl UiState {
    /// Focus update; `count` is the number of televisions on screen.
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg, count: usize) -> Vec<Cmd> {
        if count == 0 {
            return vec![];
        }

        let next = match msg {
            UiMsg::FocusNext => (self.focused + 1) % count,
            UiMsg::FocusPrevious => (self.focused + count - 1) % count,
            UiMsg::Focus(index) if index < count => index,
            UiMsg::Focus(index) => {
                log::warn!("Ignoring focus on missing television {index}");
                self.focused
            }
        };

        if next == self.focused {
            vec![]
        } else {
            self.focused = next;
            vec![Cmd::RequestRender]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_focus_next_wraps() {
        let mut ui = UiState::default();
        assert_eq!(ui.update(UiMsg::FocusNext, 2), vec![Cmd::RequestRender]);
        assert_eq!(ui.focused, 1);
        ui.update(UiMsg::FocusNext, 2);
        assert_eq!(ui.focused, 0);
    }

    #[test]
    fn test_focus_previous_wraps() {
        let mut ui = UiState::default();
        ui.update(UiMsg::FocusPrevious, 3);
        assert_eq!(ui.focused, 2);
    }

    #[test]
    fn test_focus_same_index_requests_nothing() {
        let mut ui = UiState::default();
        assert!(ui.update(UiMsg::Focus(0), 2).is_empty());
        assert!(ui.update(UiMsg::FocusNext, 1).is_empty());
    }

    #[test]
    fn test_focus_out_of_range_is_ignored() {
        let mut ui = UiState::default();
        assert!(ui.update(UiMsg::Focus(5), 2).is_empty());
        assert_eq!(ui.focused, 0);
        assert!(ui.update(UiMsg::FocusNext, 0).is_empty());
    }
}
