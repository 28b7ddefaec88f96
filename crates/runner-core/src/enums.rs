//! Closed domain enumerations. All dispatch over these is exhaustive matching.

use serde::{Deserialize, Serialize};

use crate::constants::DRAG_ACTIVATION_THRESHOLD;

/// Compass direction of commanded effort.
///
/// Each direction pushes along exactly one axis; the perpendicular axis is
/// left to drag for that frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    #[default]
    East,
    South,
    West,
}

impl Direction {
    /// Sign of the commanded force along this direction's axis:
    /// +1 for North/East, -1 for South/West.
    pub fn axis_sign(self) -> i32 {
        match self {
            Direction::North | Direction::East => 1,
            Direction::South | Direction::West => -1,
        }
    }

    /// True when the powered axis is vertical (North/South).
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// True when the powered axis is horizontal (East/West).
    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }
}

/// Discrete effort tier. Each tier carries a fixed acceleration magnitude.
///
/// L1 sits exactly at the drag activation threshold, so from a standstill it
/// produces no net motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpeedLevel {
    /// No effort — both axes coast under drag.
    #[default]
    L0,
    /// Too weak to overcome static drag from rest.
    L1,
    L2,
    L3,
    /// Max effort. Terminal speed √480 ≈ 21.9 where drag cancels it exactly.
    L4,
}

impl SpeedLevel {
    /// Acceleration magnitude for this tier (m/s², always non-negative).
    pub fn acceleration(self) -> f64 {
        match self {
            SpeedLevel::L0 => 0.0,
            SpeedLevel::L1 => DRAG_ACTIVATION_THRESHOLD,
            SpeedLevel::L2 => 2.0,
            SpeedLevel::L3 => 3.0,
            SpeedLevel::L4 => 4.0,
        }
    }
}

/// Session outcome. `InProgress` is the only non-terminal active state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No frame has been evaluated yet.
    #[default]
    NotStarted,
    InProgress,
    /// The 10 minute session budget ran out.
    TimedOut,
    /// The runner left the arena.
    OutOfBounds,
    /// Every target was captured.
    Completed,
}

impl Outcome {
    /// Terminal outcomes end the session; no further frames are evaluated.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Outcome::TimedOut | Outcome::OutOfBounds | Outcome::Completed
        )
    }
}
