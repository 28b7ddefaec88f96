//! Outcome tracking: clock, boundary violation, path-based captures.

use log::{debug, info};

use runner_core::enums::Outcome;
use runner_core::state::{Arena, RunReport, Runner};
use runner_core::types::Point;

use crate::engine::SimConfig;

/// Update the running report for one completed frame.
///
/// Checks run in order and short-circuit on the first terminal condition:
/// timeout, then containment, then captures along the travelled segment.
/// Captures use point-to-segment distance so a fast runner cannot skip
/// over a target between frame boundaries.
pub fn evaluate(
    report: &mut RunReport,
    position_before: Point,
    runner: &Runner,
    arena: &Arena,
    config: &SimConfig,
) {
    if report.outcome == Outcome::NotStarted {
        report.start();
    }

    report.add_elapsed(config.frame_millis);

    if report.elapsed_millis() > config.timeout_millis {
        report.outcome = Outcome::TimedOut;
        debug!("session timed out after {} ms", report.elapsed_millis());
        return;
    }

    if !arena.contains(runner.position) {
        report.outcome = Outcome::OutOfBounds;
        debug!(
            "runner left the arena at ({}, {})",
            runner.position.x, runner.position.y
        );
        return;
    }

    capture_targets_on_path(report, position_before, runner.position, arena, config);

    if all_targets_captured(report, arena) {
        report.outcome = Outcome::Completed;
        info!(
            "all {} targets captured in {} ms",
            arena.targets().len(),
            report.elapsed_millis()
        );
    }
}

/// Record every target lying within the capture radius of the segment the
/// runner travelled this frame. Re-capturing is a no-op.
fn capture_targets_on_path(
    report: &mut RunReport,
    from: Point,
    to: Point,
    arena: &Arena,
    config: &SimConfig,
) {
    for &target in arena.targets() {
        let passing_distance = target.distance_to_segment(from, to);
        if passing_distance < config.capture_radius && !report.is_captured(target) {
            info!("target captured at ({}, {})", target.x, target.y);
            report.record_capture(target);
        }
    }
}

fn all_targets_captured(report: &RunReport, arena: &Arena) -> bool {
    arena.targets().iter().all(|t| report.is_captured(*t))
}
