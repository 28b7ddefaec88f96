//! Motion model: per-axis constant-acceleration kinematics with drag.
//!
//! Commanded effort accelerates the runner along one axis; a drag force
//! whose magnitude grows quadratically with speed opposes motion on both
//! axes at all times. Drag only ever decelerates toward rest — the
//! overshoot clamps below keep a large timestep from reversing direction.

use runner_core::command::Command;
use runner_core::constants::DRAG_ACTIVATION_THRESHOLD;
use runner_core::enums::SpeedLevel;
use runner_core::state::Runner;

/// Drag acceleration for the current axis speed. Always opposes the
/// movement direction; zero at rest.
///
/// Magnitude: 1.6 + v²/200. At max effort (4.0 m/s²) this cancels the
/// commanded acceleration at v = √480 ≈ 21.9, the design speed ceiling.
pub fn drag_acceleration(speed: f64) -> f64 {
    if speed == 0.0 {
        return 0.0;
    }
    let magnitude = DRAG_ACTIVATION_THRESHOLD + speed * speed / 200.0;
    -speed.signum() * magnitude
}

/// Net acceleration on the powered axis: commanded effort plus drag.
///
/// From a standstill the full quadratic drag is not yet acting, only the
/// activation threshold is. Effort at or below the threshold therefore
/// produces no motion at all; stronger effort launches against the
/// threshold rate.
///
/// `axis_sign` must be -1 or +1; anything else is a caller bug.
pub fn effective_acceleration(speed: f64, axis_sign: i32, level: SpeedLevel) -> f64 {
    assert!(
        axis_sign == -1 || axis_sign == 1,
        "axis sign must be -1 or +1, got {axis_sign}"
    );

    let commanded = axis_sign as f64 * level.acceleration();
    if speed == 0.0 {
        if level.acceleration() <= DRAG_ACTIVATION_THRESHOLD {
            return 0.0;
        }
        commanded - axis_sign as f64 * DRAG_ACTIVATION_THRESHOLD
    } else {
        commanded + drag_acceleration(speed)
    }
}

/// Displacement over `dt` seconds under constant acceleration, rounded to
/// the nearest integer distance unit: round(v·t + a·t²/2).
pub fn displacement(speed: f64, acceleration: f64, dt: f64) -> i32 {
    (speed * dt + 0.5 * acceleration * dt * dt).round() as i32
}

/// Drag-only displacement with overshoot compensation: drag brings the
/// runner to a stop, it never pushes through it into reverse.
pub fn coasting_displacement(speed: f64, dt: f64) -> i32 {
    let naive = displacement(speed, drag_acceleration(speed), dt);
    if reverses(speed, naive as f64) {
        0
    } else {
        naive
    }
}

/// New axis speed after `dt` seconds: v + a·t. Velocity stays
/// continuous-valued; only displacement is rounded.
pub fn new_speed(speed: f64, acceleration: f64, dt: f64) -> f64 {
    speed + acceleration * dt
}

/// Drag-only speed update with the same overshoot clamp as
/// [`coasting_displacement`]: the sign of the velocity never flips.
pub fn coasting_speed(speed: f64, dt: f64) -> f64 {
    let naive = new_speed(speed, drag_acceleration(speed), dt);
    if reverses(speed, naive) {
        0.0
    } else {
        naive
    }
}

/// A drag-driven result is invalid if it starts from rest or opposes the
/// current movement direction.
fn reverses(speed: f64, result: f64) -> bool {
    speed == 0.0 || (speed < 0.0 && result > 0.0) || (speed > 0.0 && result < 0.0)
}

/// Advance the runner one frame in place: translate the position, then
/// update both axis velocities.
///
/// The axis aligned with the command receives effective (powered)
/// acceleration; the perpendicular axis coasts under drag. At L0 both axes
/// coast. Displacements are computed from the pre-step velocities before
/// either velocity is touched.
pub fn advance(runner: &mut Runner, command: Command, dt: f64) {
    let (dx, dy) = frame_displacement(runner, command, dt);
    let (horizontal, vertical) = frame_velocities(runner, command, dt);

    runner.position.translate(dx, dy);
    runner.horizontal = horizontal;
    runner.vertical = vertical;
}

fn frame_displacement(runner: &Runner, command: Command, dt: f64) -> (i32, i32) {
    if command.speed == SpeedLevel::L0 {
        (
            coasting_displacement(runner.horizontal, dt),
            coasting_displacement(runner.vertical, dt),
        )
    } else if command.direction.is_vertical() {
        let accel =
            effective_acceleration(runner.vertical, command.direction.axis_sign(), command.speed);
        (
            coasting_displacement(runner.horizontal, dt),
            displacement(runner.vertical, accel, dt),
        )
    } else {
        let accel =
            effective_acceleration(runner.horizontal, command.direction.axis_sign(), command.speed);
        (
            displacement(runner.horizontal, accel, dt),
            coasting_displacement(runner.vertical, dt),
        )
    }
}

fn frame_velocities(runner: &Runner, command: Command, dt: f64) -> (f64, f64) {
    if command.speed == SpeedLevel::L0 {
        (
            coasting_speed(runner.horizontal, dt),
            coasting_speed(runner.vertical, dt),
        )
    } else if command.direction.is_vertical() {
        let accel =
            effective_acceleration(runner.vertical, command.direction.axis_sign(), command.speed);
        (
            coasting_speed(runner.horizontal, dt),
            new_speed(runner.vertical, accel, dt),
        )
    } else {
        let accel =
            effective_acceleration(runner.horizontal, command.direction.axis_sign(), command.speed);
        (
            new_speed(runner.horizontal, accel, dt),
            coasting_speed(runner.vertical, dt),
        )
    }
}
