use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::counter::{BoundedCounter, Direction};

pub const CHANNEL_MIN: i32 = 1;
pub const CHANNEL_MAX: i32 = 10;
pub const CHANNEL_INITIAL: i32 = 1;
pub const VOLUME_MIN: i32 = 0;
pub const VOLUME_MAX: i32 = 10;
pub const VOLUME_INITIAL: i32 = 5;

/// The four remote-control triggers of a television
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Message {
    #[strum(to_string = "Channel Up")]
    ChannelUp,
    #[strum(to_string = "Channel Down")]
    ChannelDown,
    #[strum(to_string = "Volume Up")]
    VolumeUp,
    #[strum(to_string = "Volume Down")]
    VolumeDown,
}

impl Message {
    pub const ALL: [Message; 4] = [
        Message::ChannelUp,
        Message::ChannelDown,
        Message::VolumeUp,
        Message::VolumeDown,
    ];
}

/// One television widget instance
///
/// `brand` and `model` are fixed for the lifetime of the instance; channel
/// and volume only move through [`Television::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Television {
    brand: String,
    model: String,
    channel: BoundedCounter,
    volume: BoundedCounter,
}

impl Television {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            channel: BoundedCounter::new(CHANNEL_INITIAL, CHANNEL_MIN, CHANNEL_MAX),
            volume: BoundedCounter::new(VOLUME_INITIAL, VOLUME_MIN, VOLUME_MAX),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn channel(&self) -> i32 {
        self.channel.value()
    }

    pub fn volume(&self) -> i32 {
        self.volume.value()
    }

    pub fn title(&self) -> String {
        format!("{} TV - Model {}", self.brand, self.model)
    }

    /// Apply a trigger; returns whether anything visible changed
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::ChannelUp => self.channel.step(Direction::Up),
            Message::ChannelDown => self.channel.step(Direction::Down),
            Message::VolumeUp => self.volume.step(Direction::Up),
            Message::VolumeDown => self.volume.step(Direction::Down),
        }
    }
}
