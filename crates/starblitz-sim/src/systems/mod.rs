//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state — all state lives in components.

pub mod cleanup;
pub mod damage;
pub mod fire_control;
pub mod movement;
pub mod pathing;
pub mod player_control;
pub mod snapshot;
pub mod wave_spawner;
