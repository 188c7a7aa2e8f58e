//! STARBLITZ headless application shell.
//!
//! Wires the simulation engine to a fixed-timestep loop thread and exposes
//! the command channel external collaborators (input, collision detection)
//! talk to the core through.

pub mod game_loop;

pub use starblitz_core as core;
