//! Game state snapshot — the complete visible state published each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{ActorKind, GamePhase};
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub actors: Vec<ActorView>,
    pub score: ScoreView,
    /// Events produced during this tick, in emission order.
    pub events: Vec<GameEvent>,
}

/// A visible actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorView {
    pub id: u32,
    pub kind: ActorKind,
    pub position: Position,
    /// Present only for damageable actors.
    pub health: Option<i32>,
    pub max_health: Option<i32>,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_destroyed: u32,
    pub enemies_total: u32,
    pub shots_fired: u32,
    pub points: u32,
}
