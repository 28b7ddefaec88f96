//! Commands issued by the decision-maker, one per frame.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, SpeedLevel};

/// The decision for one frame: push along `direction` at effort `speed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub direction: Direction,
    pub speed: SpeedLevel,
}

impl Command {
    pub fn new(direction: Direction, speed: SpeedLevel) -> Self {
        Self { direction, speed }
    }

    /// No-effort command: both axes coast under drag this frame.
    pub fn coast() -> Self {
        Self {
            direction: Direction::default(),
            speed: SpeedLevel::L0,
        }
    }
}
