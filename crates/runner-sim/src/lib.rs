//! Simulation engine for the runner training course.
//!
//! Advances the runner one fixed 500 ms frame at a time under a
//! drag-dominated motion model, tracks captures along the travelled path,
//! and reports the session outcome. Completely headless, enabling
//! deterministic testing.

pub mod engine;
pub mod outcome;
pub mod physics;
pub mod pursuit;
pub mod scenario;

pub use engine::{Controller, FrameObserver, SimConfig, SimulationEngine};
pub use runner_core as core;
