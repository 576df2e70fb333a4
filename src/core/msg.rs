use serde::{Deserialize, Serialize};

pub mod system;
pub mod ui;

use crate::model::television;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages processed by `update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Ui(UiMsg),
    /// A trigger addressed to one television instance
    Television {
        index: usize,
        message: television::Message,
    },
}
