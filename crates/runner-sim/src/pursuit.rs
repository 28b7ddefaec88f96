//! Reference controller: greedy axis-at-a-time pursuit.
//!
//! Chases the head of an explicit worklist of remaining targets, settling
//! the horizontal axis before the vertical one. Because drag is the only
//! brake, the controller coasts as soon as its stopping distance covers
//! the remaining error instead of powering all the way in. Exists to
//! exercise the full session loop; it is not a planner.

use std::collections::VecDeque;

use runner_core::command::Command;
use runner_core::constants::DRAG_ACTIVATION_THRESHOLD;
use runner_core::enums::{Direction, SpeedLevel};
use runner_core::state::{Arena, Runner};
use runner_core::types::Point;

use crate::engine::Controller;

/// Worklist-driven chase controller. The remaining targets are fixed at
/// construction from the arena, in arena order.
#[derive(Debug)]
pub struct Pursuit {
    worklist: VecDeque<Point>,
}

impl Pursuit {
    pub fn new(arena: &Arena) -> Self {
        Self {
            worklist: arena.targets().iter().copied().collect(),
        }
    }

    /// Targets not yet reached by this controller.
    pub fn remaining(&self) -> usize {
        self.worklist.len()
    }

    /// Worst-case coasting distance before drag brings speed `v` to rest.
    /// Uses the activation threshold as the minimum deceleration.
    fn stopping_distance(speed: f64) -> f64 {
        speed * speed / (2.0 * DRAG_ACTIVATION_THRESHOLD)
    }

    /// Effort tier for the remaining error on the chased axis.
    fn effort_for(distance: i32) -> SpeedLevel {
        if distance > 50 {
            SpeedLevel::L4
        } else if distance > 20 {
            SpeedLevel::L3
        } else {
            SpeedLevel::L2
        }
    }

    /// One-axis decision: coast when already braking into the target,
    /// otherwise push toward it.
    fn chase_axis(error: i32, speed: f64, positive: Direction, negative: Direction) -> Command {
        let toward = speed * error as f64 > 0.0;
        if toward && Self::stopping_distance(speed) >= error.abs() as f64 {
            return Command::coast();
        }

        let direction = if error > 0 { positive } else { negative };
        Command::new(direction, Self::effort_for(error.abs()))
    }
}

impl Controller for Pursuit {
    fn decide(&mut self, runner: Runner, _arena: Arena) -> Command {
        while let Some(&target) = self.worklist.front() {
            let dx = target.x - runner.position.x;
            let dy = target.y - runner.position.y;

            // Adjacent on both axes counts as reached; move on.
            if dx.abs() < 2 && dy.abs() < 2 {
                self.worklist.pop_front();
                continue;
            }

            return if dx.abs() >= 2 {
                Self::chase_axis(dx, runner.horizontal, Direction::East, Direction::West)
            } else {
                Self::chase_axis(dy, runner.vertical, Direction::North, Direction::South)
            };
        }

        Command::coast()
    }
}
