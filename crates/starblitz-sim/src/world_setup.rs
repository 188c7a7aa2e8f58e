//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship, enemy ships, and projectiles with
//! appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starblitz_core::components::*;
use starblitz_core::constants::*;
use starblitz_core::enums::{ActorKind, PathPhase};
use starblitz_core::types::{MoveBounds, Position, Velocity, Viewport};

use crate::waves::WaveConfig;

/// Allocate the next externally-visible actor id.
fn next_id(counter: &mut u32) -> u32 {
    let id = *counter;
    *counter += 1;
    id
}

/// Spawn the player ship at the bottom center of the viewport.
///
/// The move boundary is computed here, once, from the viewport and the
/// padding margin — never per frame.
pub fn spawn_player(world: &mut World, viewport: &Viewport, counter: &mut u32) -> hecs::Entity {
    let bounds = MoveBounds::from_viewport(viewport, PLAYER_PADDING);
    let spawn = Position::new(
        (viewport.min.x + viewport.max.x) / 2.0,
        viewport.min.y + PLAYER_PADDING,
    );

    world.spawn((
        PlayerShip,
        ActorInfo {
            id: next_id(counter),
            kind: ActorKind::Player,
        },
        spawn,
        Health {
            current: PLAYER_MAX_HEALTH,
            max: PLAYER_MAX_HEALTH,
        },
        ShipController {
            move_speed: PLAYER_MOVE_SPEED,
            bounds,
        },
        Weapon {
            projectile_speed: PLAYER_PROJECTILE_SPEED,
            firing_period_secs: PLAYER_FIRING_PERIOD,
            damage: PLAYER_SHOT_DAMAGE,
        },
    ))
}

/// Spawn one enemy at the first waypoint of a wave's route.
///
/// The route and speed are fixed here for the entity's lifetime. The
/// return-fire timer starts with a random delay so a wave doesn't volley
/// in lockstep.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &WaveConfig,
    counter: &mut u32,
) -> hecs::Entity {
    let spawn = config.waypoints[0];

    world.spawn((
        EnemyShip,
        ActorInfo {
            id: next_id(counter),
            kind: ActorKind::Enemy,
        },
        spawn,
        Health {
            current: config.enemy_health,
            max: config.enemy_health,
        },
        PathFollower {
            waypoints: config.waypoints.clone(),
            waypoint_index: 0,
            speed: config.move_speed,
            phase: PathPhase::Traveling,
        },
        DamageDealer {
            amount: ENEMY_CONTACT_DAMAGE,
        },
        AutoFire {
            cooldown_ticks: rng
                .gen_range(secs_to_ticks(ENEMY_SHOT_MIN_PERIOD)..=secs_to_ticks(ENEMY_SHOT_MAX_PERIOD)),
        },
    ))
}

/// Spawn a projectile with a fixed velocity and damage payload.
pub fn spawn_projectile(
    world: &mut World,
    counter: &mut u32,
    kind: ActorKind,
    position: Position,
    velocity: Velocity,
    damage: i32,
) -> u32 {
    let id = next_id(counter);
    world.spawn((
        Projectile,
        ActorInfo { id, kind },
        position,
        velocity,
        DamageDealer { amount: damage },
    ));
    id
}
