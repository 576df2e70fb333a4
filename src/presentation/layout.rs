//! Screen geometry shared by rendering and mouse hit-testing
//!
//! Every function here is pure, so a click can be resolved against the same
//! rectangles the widgets were drawn into.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::widgets::Block;

use crate::model::television::Message;

/// Rectangles of one rendered television
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelevisionLayout {
    pub block: Rect,
    pub screen: Rect,
    pub channel_heading: Rect,
    pub volume_heading: Rect,
    pub buttons: [(Message, Rect); 4],
}

impl TelevisionLayout {
    pub fn button(&self, message: Message) -> Rect {
        self.buttons
            .iter()
            .find(|(m, _)| *m == message)
            .map(|(_, rect)| *rect)
            .unwrap_or_default()
    }
}

/// What a mouse position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Television(usize),
    Button(usize, Message),
}

/// Split the whole frame into the television row and the status line
pub fn screen(area: Rect) -> (Rect, Rect) {
    let [televisions, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    (televisions, status)
}

/// Equal-width columns, one per television
pub fn televisions(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return vec![];
    }
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    let constraints = (0..count).map(|_| Constraint::Ratio(1, count));
    Layout::horizontal(constraints).split(area).to_vec()
}

pub fn television(area: Rect) -> TelevisionLayout {
    let inner = Block::bordered().inner(area);
    let [screen, _, channel_heading, channel_buttons, _, volume_heading, volume_buttons, _] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

    let pair = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).spacing(1);
    let [channel_up, channel_down] = pair.areas(channel_buttons);
    let [volume_up, volume_down] = pair.areas(volume_buttons);

    TelevisionLayout {
        block: area,
        screen,
        channel_heading,
        volume_heading,
        buttons: [
            (Message::ChannelUp, channel_up),
            (Message::ChannelDown, channel_down),
            (Message::VolumeUp, volume_up),
            (Message::VolumeDown, volume_down),
        ],
    }
}

/// Resolve a terminal cell against the layout of `count` televisions drawn
/// into `viewport`
pub fn hit_test(viewport: Rect, count: usize, column: u16, row: u16) -> Option<Hit> {
    let position = Position::new(column, row);
    let (area, _) = screen(viewport);

    televisions(area, count)
        .into_iter()
        .enumerate()
        .find(|(_, rect)| rect.contains(position))
        .map(|(index, rect)| {
            television(rect)
                .buttons
                .iter()
                .find(|(_, button)| button.contains(position))
                .map_or(Hit::Television(index), |(message, _)| {
                    Hit::Button(index, *message)
                })
        })
}
