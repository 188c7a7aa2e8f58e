//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{ActorKind, PathPhase};
use crate::types::{MoveBounds, Position};

/// Stable identity handed to external collaborators.
///
/// Overlap reports and despawn notifications refer to actors by this id,
/// never by raw ECS handles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActorInfo {
    pub id: u32,
    pub kind: ActorKind,
}

/// Hit points for damageable entities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Player movement parameters, fixed at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShipController {
    /// Movement speed in units/s.
    pub move_speed: f32,
    /// Rectangle the ship is clamped to each tick.
    pub bounds: MoveBounds,
}

/// Drives an enemy along an ordered waypoint route at a fixed speed.
///
/// The route and speed are fixed at spawn (wave configuration); the index
/// only ever increases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathFollower {
    pub waypoints: Vec<Position>,
    pub waypoint_index: usize,
    /// Travel speed in units/s.
    pub speed: f32,
    pub phase: PathPhase,
}

/// Weapon parameters for an entity that can open fire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    /// Muzzle speed of spawned projectiles (units/s).
    pub projectile_speed: f32,
    /// Seconds between shots while the fire signal is held.
    pub firing_period_secs: f32,
    /// Damage each projectile carries.
    pub damage: i32,
}

/// An active repeat-fire task. Present exactly while the fire signal is
/// held; removing the component is immediate cancellation.
///
/// Fires at cycle start: a shot is spawned whenever the cooldown reaches
/// zero, then the cooldown is re-armed with the period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireSession {
    pub period_ticks: u32,
    pub cooldown_ticks: u32,
}

/// Enemy return-fire task: counts down, shoots, re-arms with a seeded
/// random delay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AutoFire {
    pub cooldown_ticks: u32,
}

/// Harm dealt to whatever this entity overlaps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DamageDealer {
    pub amount: i32,
}

/// Marks the player-controlled ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Marks a waypoint-following enemy ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyShip;

/// Marks a projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;
