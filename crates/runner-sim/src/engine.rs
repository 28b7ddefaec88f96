//! Simulation engine — step orchestration and the session loop.
//!
//! `SimulationEngine` owns the runner, the arena, and the running report.
//! One `step` advances physics for a single fixed frame and feeds the
//! result to the outcome tracker. The session loop is caller-driven:
//! the engine only stops when the report reaches a terminal outcome.

use log::debug;

use runner_core::command::Command;
use runner_core::constants::{CAPTURE_RADIUS, FRAME_MILLIS, SESSION_TIMEOUT_MILLIS};
use runner_core::state::{Arena, RunReport, Runner};

use crate::{outcome, physics};

/// Configuration for a simulation session. Defaults match the reference
/// tuning; tests override individual fields.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Duration of one frame in milliseconds.
    pub frame_millis: u64,
    /// Session budget in milliseconds.
    pub timeout_millis: u64,
    /// Point-to-segment distance below which a target is captured.
    pub capture_radius: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_millis: FRAME_MILLIS,
            timeout_millis: SESSION_TIMEOUT_MILLIS,
            capture_radius: CAPTURE_RADIUS,
        }
    }
}

impl SimConfig {
    /// Frame duration in seconds, as used by the kinematics.
    pub fn frame_secs(&self) -> f64 {
        self.frame_millis as f64 / 1000.0
    }
}

/// External decision-maker. Receives owned clones of the live state each
/// frame, so nothing it does can touch simulation-owned fields. It may
/// keep internal memory across calls but must not rely on object identity
/// between them.
pub trait Controller {
    fn decide(&mut self, runner: Runner, arena: Arena) -> Command;
}

/// Side-effect-only frame hook (visualization, logging), invoked once per
/// step after outcome evaluation. Must not block the loop indefinitely.
pub trait FrameObserver {
    fn on_frame(&mut self, runner: &Runner, command: Command, arena: &Arena);
}

/// Observer that traces every frame through the `log` facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl FrameObserver for LogObserver {
    fn on_frame(&mut self, runner: &Runner, command: Command, _arena: &Arena) {
        debug!(
            "frame: pos=({}, {}) v=({:.3}, {:.3}) command={:?} {:?}",
            runner.position.x,
            runner.position.y,
            runner.horizontal,
            runner.vertical,
            command.direction,
            command.speed,
        );
    }
}

/// The simulation engine. Owns all live session state.
pub struct SimulationEngine {
    runner: Runner,
    arena: Arena,
    report: RunReport,
    config: SimConfig,
    observer: Option<Box<dyn FrameObserver>>,
}

impl SimulationEngine {
    /// Create an engine with default configuration.
    pub fn new(arena: Arena, runner: Runner) -> Self {
        Self::with_config(arena, runner, SimConfig::default())
    }

    pub fn with_config(arena: Arena, runner: Runner, config: SimConfig) -> Self {
        Self {
            runner,
            arena,
            report: RunReport::default(),
            config,
            observer: None,
        }
    }

    /// Attach a frame observer. At most one is active at a time.
    pub fn attach_observer(&mut self, observer: Box<dyn FrameObserver>) {
        self.observer = Some(observer);
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn report(&self) -> &RunReport {
        &self.report
    }

    /// Advance the session by one frame: snapshot the pre-step position,
    /// integrate physics in place, then update the report. The only
    /// per-frame entry point.
    pub fn step(&mut self, command: Command) -> &RunReport {
        let position_before = self.runner.position;

        physics::advance(&mut self.runner, command, self.config.frame_secs());
        outcome::evaluate(
            &mut self.report,
            position_before,
            &self.runner,
            &self.arena,
            &self.config,
        );

        if let Some(observer) = self.observer.as_mut() {
            observer.on_frame(&self.runner, command, &self.arena);
        }

        &self.report
    }

    /// Drive a full session with the given controller: hand it clones of
    /// the live state, execute the command it returns, repeat until the
    /// outcome is terminal. The timeout guarantees termination.
    pub fn run(&mut self, controller: &mut dyn Controller) -> &RunReport {
        while !self.report.is_over() {
            let command = controller.decide(self.runner.clone(), self.arena.clone());
            self.step(command);
        }

        debug!(
            "session over: {:?} after {} ms, {} targets captured",
            self.report.outcome,
            self.report.elapsed_millis(),
            self.report.captured().len(),
        );
        &self.report
    }
}
