//! Simulation constants and tuning parameters.

/// Acceleration the runner must exceed to start moving from rest (m/s²).
/// Below this, commanded effort is cancelled entirely by static drag.
pub const DRAG_ACTIVATION_THRESHOLD: f64 = 1.6;

/// Duration of one simulation frame in milliseconds.
pub const FRAME_MILLIS: u64 = 500;

/// Seconds per frame.
pub const FRAME_SECS: f64 = FRAME_MILLIS as f64 / 1000.0;

/// Maximum point-to-segment distance at which a target counts as captured.
pub const CAPTURE_RADIUS: f64 = 2.0;

/// A session cannot run forever — hard timeout of 10 minutes.
pub const SESSION_TIMEOUT_MILLIS: u64 = 10 * 60 * 1000;

/// Speed ceiling where max effort (4.0 m/s²) exactly cancels drag.
/// Solving 4.0 = 1.6 + v²/200 gives v = √480 ≈ 21.9089.
pub const TERMINAL_SPEED: f64 = 21.908902300206643;
