//! Scenario definitions — built-in training courses and JSON-loadable specs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use runner_core::state::{Arena, Runner};
use runner_core::types::Point;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario")]
    Parse(#[from] serde_json::Error),
    #[error("arena bounds must be positive, got {0}x{1}")]
    InvalidBounds(i32, i32),
    #[error("start position ({0}, {1}) is outside the arena")]
    StartOutsideArena(i32, i32),
    #[error("target ({0}, {1}) is outside the arena")]
    TargetOutsideArena(i32, i32),
}

/// Declarative course description. Deserializes from JSON:
/// `{"bounds": {"x": 500, "y": 500}, "targets": [{"x": 200, "y": 200}]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub bounds: Point,
    /// Runner spawn point; the reference courses all start at (1, 1).
    #[serde(default = "default_start")]
    pub start: Point,
    pub targets: Vec<Point>,
}

fn default_start() -> Point {
    Point::new(1, 1)
}

impl ScenarioSpec {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the spec and build the live arena and runner.
    pub fn build(&self) -> Result<(Arena, Runner), ScenarioError> {
        if self.bounds.x <= 0 || self.bounds.y <= 0 {
            return Err(ScenarioError::InvalidBounds(self.bounds.x, self.bounds.y));
        }

        let mut arena = Arena::new(self.bounds);
        if !arena.contains(self.start) {
            return Err(ScenarioError::StartOutsideArena(self.start.x, self.start.y));
        }
        for target in &self.targets {
            if !arena.contains(*target) {
                return Err(ScenarioError::TargetOutsideArena(target.x, target.y));
            }
            arena.add_target(target.x, target.y);
        }

        Ok((arena, Runner::at(self.start)))
    }
}

/// Single target, straight-line run across a 500x500 arena.
pub fn straight_course() -> ScenarioSpec {
    ScenarioSpec {
        bounds: Point::new(500, 500),
        start: default_start(),
        targets: vec![Point::new(200, 200)],
    }
}

/// Six-target tour of a 500x500 arena.
pub fn tour_course() -> ScenarioSpec {
    ScenarioSpec {
        bounds: Point::new(500, 500),
        start: default_start(),
        targets: vec![
            Point::new(100, 200),
            Point::new(150, 120),
            Point::new(350, 300),
            Point::new(370, 240),
            Point::new(100, 370),
            Point::new(400, 100),
        ],
    }
}
