//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use starblitz_core::components::{ActorInfo, Health};
use starblitz_core::enums::GamePhase;
use starblitz_core::events::GameEvent;
use starblitz_core::state::{ActorView, GameStateSnapshot, ScoreView};
use starblitz_core::types::{Position, SimTime};

use crate::engine::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let mut actors: Vec<ActorView> = world
        .query::<(&ActorInfo, &Position, Option<&Health>)>()
        .iter()
        .map(|(_, (info, pos, health))| ActorView {
            id: info.id,
            kind: info.kind,
            position: *pos,
            health: health.map(|h| h.current),
            max_health: health.map(|h| h.max),
        })
        .collect();

    // Sorted for deterministic serialization.
    actors.sort_by_key(|a| a.id);

    GameStateSnapshot {
        time: *time,
        phase,
        actors,
        score: ScoreView {
            enemies_destroyed: score.enemies_destroyed,
            enemies_total: score.enemies_total,
            shots_fired: score.shots_fired,
            points: score.points,
        },
        events,
    }
}
