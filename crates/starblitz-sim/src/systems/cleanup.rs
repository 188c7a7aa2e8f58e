//! Cleanup system: removes entities whose route is finished or that have
//! left the play area.
//!
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use starblitz_core::components::{ActorInfo, EnemyShip, PathFollower, Projectile};
use starblitz_core::constants::OOB_MARGIN;
use starblitz_core::enums::PathPhase;
use starblitz_core::events::GameEvent;
use starblitz_core::types::{Position, Viewport};

/// Despawn completed path followers and off-screen projectiles.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    viewport: &Viewport,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    // Enemies that exhausted their waypoint route.
    for (entity, (follower, _enemy)) in world.query_mut::<(&PathFollower, &EnemyShip)>() {
        if follower.phase == PathPhase::Completed {
            despawn_buffer.push(entity);
        }
    }

    // Projectiles beyond the viewport margin (the off-screen shredder).
    for (entity, (pos, _projectile)) in world.query_mut::<(&Position, &Projectile)>() {
        if !viewport.contains_with_margin(pos.0, OOB_MARGIN) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        if let Ok(info) = world.get::<&ActorInfo>(entity).map(|i| *i) {
            events.push(GameEvent::EntityDespawned {
                id: info.id,
                kind: info.kind,
            });
        }
        let _ = world.despawn(entity);
    }
}
