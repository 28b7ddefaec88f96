//! Simulation-owned state: the runner, the arena, and the running report.

use serde::{Deserialize, Serialize};

use crate::enums::Outcome;
use crate::types::Point;

/// The controllable agent. Owned exclusively by the engine, which mutates it
/// in place each frame; decision-makers only ever see clones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Runner {
    /// Signed horizontal velocity. Positive = moving East.
    pub horizontal: f64,
    /// Signed vertical velocity. Positive = moving North.
    pub vertical: f64,
    pub position: Point,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            horizontal: 0.0,
            vertical: 0.0,
            position: Point::new(1, 1),
        }
    }
}

impl Runner {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

/// Bounded rectangular arena with an ordered set of stationary targets.
/// Bounds are fixed at construction; targets are fixed once a session starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    /// Maximum corner. The arena spans (0, 0)..bounds, all edges exclusive.
    bounds: Point,
    targets: Vec<Point>,
}

impl Arena {
    pub fn new(bounds: Point) -> Self {
        Self {
            bounds,
            targets: Vec::new(),
        }
    }

    pub fn add_target(&mut self, x: i32, y: i32) {
        self.targets.push(Point::new(x, y));
    }

    pub fn targets(&self) -> &[Point] {
        &self.targets
    }

    pub fn width(&self) -> i32 {
        self.bounds.x
    }

    pub fn height(&self) -> i32 {
        self.bounds.y
    }

    /// Strict containment: positions exactly on a boundary line are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x > 0 && p.x < self.bounds.x && p.y > 0 && p.y < self.bounds.y
    }
}

/// Running result of a session, updated once per frame by the outcome
/// tracker. Never reset after reaching a terminal outcome — re-running
/// requires a fresh session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    captured: Vec<Point>,
    elapsed_millis: u64,
    pub outcome: Outcome,
}

impl RunReport {
    /// Captured targets in capture order, de-duplicated.
    pub fn captured(&self) -> &[Point] {
        &self.captured
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_millis
    }

    /// Zero the clock and mark the session in progress.
    pub fn start(&mut self) {
        self.elapsed_millis = 0;
        self.outcome = Outcome::InProgress;
    }

    pub fn add_elapsed(&mut self, millis: u64) {
        self.elapsed_millis += millis;
    }

    /// Record a capture. Capturing the same target twice is a no-op.
    pub fn record_capture(&mut self, target: Point) {
        if !self.captured.contains(&target) {
            self.captured.push(target);
        }
    }

    pub fn is_captured(&self, target: Point) -> bool {
        self.captured.contains(&target)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }
}
