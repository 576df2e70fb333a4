//! Saturating bounded counter
//!
//! Values move one step at a time inside a closed interval. A step past
//! either bound is a no-op rather than a wrap or an error.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Direction of a single counter step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// Apply one step to `current`, saturating at `min` and `max`.
///
/// Total over all integer inputs: the increment only happens when
/// `current < max`, so it cannot overflow. Values outside `[min, max]` are
/// not validated; callers only feed back values this function produced.
pub fn apply(current: i32, direction: Direction, min: i32, max: i32) -> i32 {
    match direction {
        Direction::Up if current < max => current + 1,
        Direction::Down if current > min => current - 1,
        _ => current,
    }
}

/// A value paired with the interval it lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedCounter {
    value: i32,
    min: i32,
    max: i32,
}

impl BoundedCounter {
    pub const fn new(value: i32, min: i32, max: i32) -> Self {
        Self { value, min, max }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn is_at_min(&self) -> bool {
        self.value <= self.min
    }

    pub fn is_at_max(&self) -> bool {
        self.value >= self.max
    }

    /// Move one step; returns whether the value changed
    pub fn step(&mut self, direction: Direction) -> bool {
        let next = apply(self.value, direction, self.min, self.max);
        let changed = next != self.value;
        self.value = next;
        changed
    }
}
