use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use crate::model::television::Television;
use crate::presentation::{config::Styles, layout};

/// Bordered panel with the screen readout and the four buttons
#[derive(Debug, Clone)]
pub struct TelevisionWidget<'a> {
    television: &'a Television,
    focused: bool,
    styles: &'a Styles,
}

impl<'a> TelevisionWidget<'a> {
    pub fn new(television: &'a Television, styles: &'a Styles) -> Self {
        Self {
            television,
            focused: false,
            styles,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TelevisionWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = layout::television(area);

        let mut block = Block::bordered()
            .title(Line::from(self.television.title()).style(self.styles.style("title")))
            .title_alignment(Alignment::Center);
        if self.focused {
            block = block
                .border_type(BorderType::Thick)
                .border_style(self.styles.style("focused"));
        }
        block.render(layout.block, buf);

        let screen = vec![
            Line::from(format!("Channel: {}", self.television.channel())),
            Line::from(format!("Volume: {}", self.television.volume())),
        ];
        Paragraph::new(screen)
            .style(self.styles.style("screen"))
            .alignment(Alignment::Center)
            .render(layout.screen, buf);

        Line::from("Channel Control".bold())
            .centered()
            .render(layout.channel_heading, buf);
        Line::from("Volume Control".bold())
            .centered()
            .render(layout.volume_heading, buf);

        let button_style = self.styles.style("button");
        for (message, rect) in layout.buttons {
            buf.set_style(rect, button_style);
            Line::from(message.to_string())
                .centered()
                .render(rect, buf);
        }
    }
}
