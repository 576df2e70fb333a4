#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    MessageChanged { label: String, message: String },
    ErrorMessageChanged { label: String, message: String },
    MessageCleared,
}

/// Single-line status shown under the televisions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    message: Option<String>,
    is_error: bool,
}

impl StatusBar {
    pub fn message(&self) -> &Option<String> {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    fn set_message(&mut self, label: String, message: String) {
        let normalized_message = message.replace('\n', " ");
        self.message = Some(format!("[{label}] {normalized_message}"));
    }

    /// Returns whether the displayed text changed
    pub fn update(&mut self, message: Message) -> bool {
        let before = self.clone();
        match message {
            Message::MessageChanged { label, message } => {
                self.set_message(label, message);
                self.is_error = false;
            }
            Message::ErrorMessageChanged { label, message } => {
                self.set_message(format!("ERR: {label}"), message);
                self.is_error = true;
            }
            Message::MessageCleared => {
                self.message = None;
                self.is_error = false;
            }
        }
        *self != before
    }
}
