use serde::{Deserialize, Serialize};

/// Focus movement between television instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    FocusNext,
    FocusPrevious,
    Focus(usize),
}
