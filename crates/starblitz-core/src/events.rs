//! Events emitted by the simulation for the frontend to act on.
//!
//! These are the simulation's outgoing side-effect requests: spawn a
//! visual/audio effect, drop a render proxy, transition the outer game
//! state. They are drained into each tick's snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::{ActorKind, EffectKind};

/// Discrete events produced during a tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave began spawning.
    WaveStarted { wave_number: u32 },
    /// A projectile was spawned (play the shot sound).
    ProjectileFired {
        shooter: u32,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
    },
    /// An actor took damage (flash feedback).
    ActorHit { id: u32, remaining_health: i32 },
    /// Play a visual effect at a position.
    EffectSpawn { kind: EffectKind, x: f32, y: f32 },
    /// An actor left the simulation — drop its external proxy.
    EntityDespawned { id: u32, kind: ActorKind },
    /// The player ship was destroyed. Emitted exactly once.
    GameOver,
    /// All waves cleared with the player alive.
    MissionComplete { points: u32 },
}
