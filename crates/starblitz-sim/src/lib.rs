//! Simulation engine for STARBLITZ.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod systems;
pub mod waves;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use starblitz_core as core;
