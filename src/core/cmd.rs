use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the app runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
    Suspend,
}

/// Side effects requested by `update`
///
/// `RequestRender` is the change notification from state to view: it is only
/// emitted when something visible actually changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    Tui(TuiCommand),
    RequestRender,
}
