//! Damage resolution system.
//!
//! Consumes the tick's queued overlap reports. For each report, every side
//! that has `Health` takes the counterpart's `DamageDealer` amount; a hit
//! raises an `ActorHit` notification, and health reaching zero triggers
//! the death transition exactly once — the entity leaves the live set
//! immediately, so later reports against the same id are no-ops.
//! Projectiles are shredded after landing their hit.

use hecs::{Entity, World};

use starblitz_core::components::{ActorInfo, DamageDealer, Health, Projectile};
use starblitz_core::constants::ENEMY_SCORE_VALUE;
use starblitz_core::enums::{ActorKind, EffectKind};
use starblitz_core::events::GameEvent;
use starblitz_core::types::Position;

use crate::engine::ScoreState;

/// What the resolver observed this tick.
pub struct DamageOutcome {
    /// The player ship was destroyed — the engine raises game over.
    pub player_destroyed: bool,
}

/// Resolve all queued overlap reports.
pub fn run(
    world: &mut World,
    overlaps: &mut Vec<(u32, u32)>,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> DamageOutcome {
    let mut outcome = DamageOutcome {
        player_destroyed: false,
    };

    let reports: Vec<(u32, u32)> = overlaps.drain(..).collect();
    for (first, second) in reports {
        resolve_pair(world, first, second, score, events, &mut outcome);
    }

    outcome
}

/// Look up a live entity by its external actor id.
fn find_actor(world: &World, id: u32) -> Option<Entity> {
    let mut query = world.query::<&ActorInfo>();
    query
        .iter()
        .find(|(_, info)| info.id == id)
        .map(|(entity, _)| entity)
}

fn resolve_pair(
    world: &mut World,
    first_id: u32,
    second_id: u32,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    outcome: &mut DamageOutcome,
) {
    // Stale or unknown ids mean the actor already despawned — absorb silently.
    let (Some(first), Some(second)) = (find_actor(world, first_id), find_actor(world, second_id))
    else {
        return;
    };

    // Read both damage amounts up front: the overlap is simultaneous, so
    // one side dying must not cancel the other side's hit.
    let damage_to_second = world.get::<&DamageDealer>(first).map(|d| d.amount).ok();
    let damage_to_first = world.get::<&DamageDealer>(second).map(|d| d.amount).ok();

    let mut first_dealt = false;
    let mut second_dealt = false;
    if let Some(amount) = damage_to_second {
        first_dealt = apply_damage(world, second, amount, score, events, outcome);
    }
    if let Some(amount) = damage_to_first {
        second_dealt = apply_damage(world, first, amount, score, events, outcome);
    }

    if first_dealt {
        shred_projectile(world, first, events);
    }
    if second_dealt {
        shred_projectile(world, second, events);
    }
}

/// Subtract `amount` from the target's health. Returns whether the hit
/// landed (the target is damageable).
fn apply_damage(
    world: &mut World,
    target: Entity,
    amount: i32,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    outcome: &mut DamageOutcome,
) -> bool {
    let Ok(info) = world.get::<&ActorInfo>(target).map(|i| *i) else {
        return false;
    };
    let remaining = {
        let Ok(mut health) = world.get::<&mut Health>(target) else {
            return false;
        };
        health.current -= amount;
        health.current
    };

    events.push(GameEvent::ActorHit {
        id: info.id,
        remaining_health: remaining,
    });

    if remaining <= 0 {
        destroy_ship(world, target, info, score, events, outcome);
    }
    true
}

/// The death transition: remove from the live set first, then announce.
fn destroy_ship(
    world: &mut World,
    target: Entity,
    info: ActorInfo,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    outcome: &mut DamageOutcome,
) {
    let position = world.get::<&Position>(target).map(|p| *p).unwrap_or_default();
    let _ = world.despawn(target);

    events.push(GameEvent::EffectSpawn {
        kind: EffectKind::Explosion,
        x: position.0.x,
        y: position.0.y,
    });
    events.push(GameEvent::EntityDespawned {
        id: info.id,
        kind: info.kind,
    });

    match info.kind {
        ActorKind::Enemy => {
            score.enemies_destroyed += 1;
            score.points += ENEMY_SCORE_VALUE;
        }
        ActorKind::Player => {
            outcome.player_destroyed = true;
        }
        _ => {}
    }
}

/// A projectile is spent once its damage lands.
fn shred_projectile(world: &mut World, entity: Entity, events: &mut Vec<GameEvent>) {
    if world.get::<&Projectile>(entity).is_err() {
        return;
    }
    let Ok(info) = world.get::<&ActorInfo>(entity).map(|i| *i) else {
        return;
    };
    let position = world.get::<&Position>(entity).map(|p| *p).unwrap_or_default();
    let _ = world.despawn(entity);

    events.push(GameEvent::EffectSpawn {
        kind: EffectKind::HitFlash,
        x: position.0.x,
        y: position.0.y,
    });
    events.push(GameEvent::EntityDespawned {
        id: info.id,
        kind: info.kind,
    });
}
