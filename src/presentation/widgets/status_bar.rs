use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::model::status_bar::StatusBar;
use crate::presentation::config::Styles;

/// One-line bar: the current status message, or key hints when idle
#[derive(Debug, Clone)]
pub struct StatusBarWidget<'a> {
    status_bar: &'a StatusBar,
    hints: String,
    styles: &'a Styles,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(status_bar: &'a StatusBar, hints: String, styles: &'a Styles) -> Self {
        Self {
            status_bar,
            hints,
            styles,
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (text, style) = match self.status_bar.message() {
            Some(message) if self.status_bar.is_error() => {
                (message.clone(), self.styles.style("error"))
            }
            Some(message) => (message.clone(), self.styles.style("status")),
            None => (self.hints, self.styles.style("status")),
        };
        Paragraph::new(Line::from(text)).style(style).render(area, buf);
    }
}
