//! Fire control system — runs repeat-fire sessions and enemy return fire.
//!
//! A `FireSession` is a cooperative periodic task: it fires at cycle
//! start (cooldown zero), re-arms with its period, and counts down one
//! tick at a time. The session component is inserted on fire-press and
//! removed on release, so cancellation is immediate — a cycle that has
//! not started never fires.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starblitz_core::components::{ActorInfo, AutoFire, EnemyShip, FireSession, Weapon};
use starblitz_core::constants::*;
use starblitz_core::enums::ActorKind;
use starblitz_core::events::GameEvent;
use starblitz_core::types::{Position, Velocity};

use crate::engine::ScoreState;
use crate::world_setup;

/// A projectile spawn queued during component iteration.
struct ShotRequest {
    shooter: u32,
    kind: ActorKind,
    origin: Vec2,
    velocity: Vec2,
    damage: i32,
}

/// Run all firing tasks for one tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    counter: &mut u32,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    let mut shots: Vec<ShotRequest> = Vec::new();

    // Active fire sessions: fire at cycle start, then cool down.
    for (_entity, (pos, weapon, session, info)) in
        world.query_mut::<(&Position, &Weapon, &mut FireSession, &ActorInfo)>()
    {
        if session.cooldown_ticks > 0 {
            session.cooldown_ticks -= 1;
        }
        if session.cooldown_ticks == 0 {
            shots.push(ShotRequest {
                shooter: info.id,
                kind: ActorKind::PlayerShot,
                origin: pos.0,
                velocity: Vec2::new(0.0, weapon.projectile_speed),
                damage: weapon.damage,
            });
            session.cooldown_ticks = session.period_ticks;
        }
    }

    // Enemy return fire: countdown, shoot downward, re-arm with a random delay.
    for (_entity, (pos, auto, info, _enemy)) in
        world.query_mut::<(&Position, &mut AutoFire, &ActorInfo, &EnemyShip)>()
    {
        if auto.cooldown_ticks > 0 {
            auto.cooldown_ticks -= 1;
            continue;
        }
        shots.push(ShotRequest {
            shooter: info.id,
            kind: ActorKind::EnemyShot,
            origin: pos.0,
            velocity: Vec2::new(0.0, -ENEMY_PROJECTILE_SPEED),
            damage: ENEMY_SHOT_DAMAGE,
        });
        auto.cooldown_ticks =
            rng.gen_range(secs_to_ticks(ENEMY_SHOT_MIN_PERIOD)..=secs_to_ticks(ENEMY_SHOT_MAX_PERIOD));
    }

    for shot in shots {
        world_setup::spawn_projectile(
            world,
            counter,
            shot.kind,
            Position(shot.origin),
            Velocity(shot.velocity),
            shot.damage,
        );
        if shot.kind == ActorKind::PlayerShot {
            score.shots_fired += 1;
        }
        events.push(GameEvent::ProjectileFired {
            shooter: shot.shooter,
            x: shot.origin.x,
            y: shot.origin.y,
            vx: shot.velocity.x,
            vy: shot.velocity.y,
        });
    }
}
