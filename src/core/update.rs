use crate::{
    core::cmd::Cmd,
    core::msg::{system::SystemMsg, Msg},
    core::state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Ui(ui_msg) => {
            let count = state.televisions.len();
            let commands = state.ui.update(ui_msg, count);
            (state, commands)
        }

        Msg::Television { index, message } => {
            if index >= state.televisions.len() {
                log::warn!("Dropping {message} for missing television {index}");
                return (state, vec![]);
            }
            let television = &mut state.televisions[index];

            let changed = television.update(message);
            log::debug!(
                "{} {message}: channel={} volume={} changed={changed}",
                television.title(),
                television.channel(),
                television.volume()
            );

            // A fresh trigger supersedes any stale status message
            let mut commands = state.system.update(SystemMsg::ClearStatusMessage);
            if changed {
                commands.push(Cmd::RequestRender);
            }
            commands.dedup();
            (state, commands)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::msg::ui::UiMsg,
        model::television::{Message, Television},
    };
    use pretty_assertions::assert_eq;

    fn two_televisions() -> AppState {
        AppState::new(vec![
            Television::new("Samsung", "X1000"),
            Television::new("LG", "OLED55"),
        ])
    }

    fn trigger(index: usize, message: Message) -> Msg {
        Msg::Television { index, message }
    }

    #[test]
    fn test_trigger_requests_render() {
        let (state, cmds) = update(trigger(0, Message::ChannelUp), two_televisions());
        assert_eq!(state.televisions[0].channel(), 2);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_saturated_trigger_requests_nothing() {
        let (state, cmds) = update(trigger(0, Message::ChannelDown), two_televisions());
        assert_eq!(state.televisions[0].channel(), 1);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_trigger_only_touches_addressed_television() {
        let mut state = two_televisions();
        for msg in [
            trigger(0, Message::VolumeUp),
            trigger(0, Message::VolumeUp),
            trigger(1, Message::ChannelUp),
        ] {
            state = update(msg, state).0;
        }

        assert_eq!(
            (state.televisions[0].channel(), state.televisions[0].volume()),
            (1, 7)
        );
        assert_eq!(
            (state.televisions[1].channel(), state.televisions[1].volume()),
            (2, 5)
        );
    }

    #[test]
    fn test_trigger_for_missing_television_is_ignored() {
        let (state, cmds) = update(trigger(7, Message::ChannelUp), two_televisions());
        assert!(cmds.is_empty());
        assert_eq!(state.televisions[0].channel(), 1);
        assert_eq!(state.televisions[1].channel(), 1);
    }

    #[test]
    fn test_trigger_clears_error_message() {
        let (state, _) = update(
            Msg::System(SystemMsg::ShowError("boom".to_string())),
            two_televisions(),
        );
        assert!(state.system.status_bar.message().is_some());

        // Even a saturated trigger clears it, and that alone asks for a render
        let (state, cmds) = update(trigger(0, Message::ChannelDown), state);
        assert!(state.system.status_bar.message().is_none());
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_focus_delegates_to_ui_state() {
        let (state, cmds) = update(Msg::Ui(UiMsg::FocusNext), two_televisions());
        assert_eq!(state.ui.focused, 1);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }
}
