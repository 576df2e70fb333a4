use ratatui::layout::Rect;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::system::SystemMsg,
    },
    model::status_bar::{Message as StatusBarMessage, StatusBar},
};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// Last known terminal size, used for mouse hit-testing
    pub viewport: Rect,
    pub status_bar: StatusBar,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![Cmd::Tui(TuiCommand::Suspend)]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                // The runner redraws as part of executing the resize
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            // Status management
            SystemMsg::UpdateStatusMessage { label, message } => {
                self.update_status_bar(StatusBarMessage::MessageChanged { label, message })
            }

            SystemMsg::ClearStatusMessage => {
                self.update_status_bar(StatusBarMessage::MessageCleared)
            }

            SystemMsg::ShowError(error) => {
                self.update_status_bar(StatusBarMessage::ErrorMessageChanged {
                    label: "Error".to_string(),
                    message: error,
                })
            }
        }
    }

    fn update_status_bar(&mut self, message: StatusBarMessage) -> Vec<Cmd> {
        if self.status_bar.update(message) {
            vec![Cmd::RequestRender]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);
        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut system = SystemState::default();
        assert_eq!(
            system.update(SystemMsg::Suspend),
            vec![Cmd::Tui(TuiCommand::Suspend)]
        );
        assert!(system.should_suspend);

        assert_eq!(system.update(SystemMsg::Resume), vec![Cmd::RequestRender]);
        assert!(!system.should_suspend);
    }

    #[test]
    fn test_resize_records_viewport() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::Resize(100, 40));
        assert_eq!(system.viewport, Rect::new(0, 0, 100, 40));
        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 100,
                height: 40
            })]
        );
    }

    #[test]
    fn test_show_error_then_clear() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::ShowError("boom".to_string()));
        assert_eq!(cmds, vec![Cmd::RequestRender]);
        assert_eq!(
            system.status_bar.message(),
            &Some("[ERR: Error] boom".to_string())
        );

        assert_eq!(
            system.update(SystemMsg::ClearStatusMessage),
            vec![Cmd::RequestRender]
        );
        assert!(system.update(SystemMsg::ClearStatusMessage).is_empty());
    }

    #[test]
    fn test_status_message() {
        let mut system = SystemState::default();
        system.update(SystemMsg::UpdateStatusMessage {
            label: "Info".to_string(),
            message: "Resumed".to_string(),
        });
        assert_eq!(
            system.status_bar.message(),
            &Some("[Info] Resumed".to_string())
        );
        assert!(!system.status_bar.is_error());
    }
}
