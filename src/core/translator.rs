use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    model::television::Message,
    presentation::{
        config::Action,
        layout::{self, Hit},
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![
            Msg::System(SystemMsg::Resume),
            Msg::System(SystemMsg::UpdateStatusMessage {
                label: "Info".to_string(),
                message: "Resumed".to_string(),
            }),
        ],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on key bindings
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    state
        .config
        .config
        .keybindings
        .action_for(&key)
        .map(|action| translate_action_to_msg(action, state))
        .unwrap_or_default()
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    let remote = |message| {
        if state.focused_television().is_some() {
            vec![Msg::Television {
                index: state.ui.focused,
                message,
            }]
        } else {
            vec![]
        }
    };

    match action {
        Action::ChannelUp => remote(Message::ChannelUp),
        Action::ChannelDown => remote(Message::ChannelDown),
        Action::VolumeUp => remote(Message::VolumeUp),
        Action::VolumeDown => remote(Message::VolumeDown),
        Action::FocusNext => vec![Msg::Ui(UiMsg::FocusNext)],
        Action::FocusPrevious => vec![Msg::Ui(UiMsg::FocusPrevious)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
    }
}

/// A left click focuses the television under the cursor and, when it lands
/// on a button, fires that button's trigger
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    match layout::hit_test(
        state.system.viewport,
        state.televisions.len(),
        mouse.column,
        mouse.row,
    ) {
        Some(Hit::Button(index, message)) => vec![
            Msg::Ui(UiMsg::Focus(index)),
            Msg::Television { index, message },
        ],
        Some(Hit::Television(index)) => vec![Msg::Ui(UiMsg::Focus(index))],
        None => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        infrastructure::config::Config,
        model::television::Television,
    };
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    fn state() -> AppState {
        let config = Config::defaults().unwrap_or_default();
        let mut state = AppState::new_with_config(config);
        state.system.viewport = Rect::new(0, 0, 80, 24);
        state
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn click(column: u16, row: u16) -> RawMsg {
        RawMsg::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    #[test]
    fn test_system_events() {
        let state = state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(10, 5), &state),
            vec![Msg::System(SystemMsg::Resize(10, 5))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Error("x".to_string()), &state),
            vec![Msg::System(SystemMsg::ShowError("x".to_string()))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resume, &state),
            vec![
                Msg::System(SystemMsg::Resume),
                Msg::System(SystemMsg::UpdateStatusMessage {
                    label: "Info".to_string(),
                    message: "Resumed".to_string(),
                }),
            ]
        );
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let state = AppState::default();
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(raw, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[test]
    fn test_keys_address_focused_television() {
        let mut state = state();
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Up), &state),
            vec![Msg::Television {
                index: 0,
                message: Message::ChannelUp
            }]
        );

        state.ui.focused = 1;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Left), &state),
            vec![Msg::Television {
                index: 1,
                message: Message::VolumeDown
            }]
        );
    }

    #[test]
    fn test_focus_keys() {
        let state = state();
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Tab), &state),
            vec![Msg::Ui(UiMsg::FocusNext)]
        );
        assert_eq!(
            translate_raw_to_domain(
                RawMsg::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
                &state
            ),
            vec![Msg::Ui(UiMsg::FocusPrevious)]
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let state = state();
        assert!(translate_raw_to_domain(key(KeyCode::Char('x')), &state).is_empty());
    }

    #[test]
    fn test_trigger_keys_without_televisions_do_nothing() {
        let mut state = AppState::new(vec![]);
        state.config.config = Config::defaults().unwrap_or_default();
        assert!(translate_raw_to_domain(key(KeyCode::Up), &state).is_empty());
    }

    #[test]
    fn test_click_on_button_focuses_and_triggers() {
        let state = state();
        let (area, _) = layout::screen(state.system.viewport);
        let second = layout::televisions(area, 2)[1];
        let button = layout::television(second).button(Message::VolumeUp);

        assert_eq!(
            translate_raw_to_domain(click(button.x + 1, button.y), &state),
            vec![
                Msg::Ui(UiMsg::Focus(1)),
                Msg::Television {
                    index: 1,
                    message: Message::VolumeUp
                },
            ]
        );
    }

    #[test]
    fn test_click_elsewhere_only_focuses() {
        let state = state();
        assert_eq!(
            translate_raw_to_domain(click(50, 1), &state),
            vec![Msg::Ui(UiMsg::Focus(1))]
        );
        assert!(translate_raw_to_domain(click(50, 23), &state).is_empty());
    }

    #[test]
    fn test_other_mouse_events_are_ignored() {
        let state = AppState::new(vec![Television::new("Samsung", "X1000")]);
        let raw = RawMsg::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::empty(),
        });
        assert!(translate_raw_to_domain(raw, &state).is_empty());
    }
}
