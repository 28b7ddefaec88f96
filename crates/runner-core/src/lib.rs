//! Core types and definitions for the runner simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! geometry, domain enums, commands, simulation state, and constants.
//! It has no dependency on the engine or any runtime framework.

pub mod command;
pub mod constants;
pub mod enums;
pub mod state;
pub mod types;
