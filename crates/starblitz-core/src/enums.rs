//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What kind of actor an entity is, for external consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    /// The player-controlled ship.
    Player,
    /// A waypoint-following enemy ship.
    Enemy,
    /// A projectile fired by the player.
    PlayerShot,
    /// A projectile fired by an enemy.
    EnemyShot,
}

/// Waypoint traversal phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathPhase {
    /// Moving toward the current waypoint.
    #[default]
    Traveling,
    /// Route exhausted — awaiting despawn by cleanup.
    Completed,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Every scheduled enemy has spawned and none remain alive.
    Victory,
    /// The player ship was destroyed.
    Defeat,
}

/// Visual effect kinds the simulation asks the frontend to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Death explosion at a destroyed ship's position.
    Explosion,
    /// Brief flash where a projectile connected.
    HitFlash,
}
