//! Waypoint follower system.
//!
//! Each tick an enemy moves toward its current waypoint by at most
//! `speed * DT`, clamped to the remaining distance so it never overshoots.
//! Arrival sets the position exactly to the waypoint — equality is
//! structural, never a float coincidence. Leftover step budget carries
//! into the next leg, so a waypoint reached mid-tick does not stall the
//! ship for a frame. A follower whose route is exhausted goes to
//! `Completed` and is despawned by cleanup.

use hecs::World;

use starblitz_core::components::{EnemyShip, PathFollower};
use starblitz_core::constants::DT;
use starblitz_core::enums::PathPhase;
use starblitz_core::types::Position;

/// Advance one follower by one tick's worth of travel.
/// Pure — exposed for direct testing.
pub fn step(pos: &mut Position, follower: &mut PathFollower) {
    if follower.phase != PathPhase::Traveling {
        return;
    }

    let mut budget = follower.speed * DT;
    loop {
        let target = follower.waypoints[follower.waypoint_index];
        let delta = target.0 - pos.0;
        let dist = delta.length();

        if dist > budget {
            pos.0 += delta / dist * budget;
            return;
        }

        // Arrived: land exactly on the waypoint and advance.
        pos.0 = target.0;
        budget -= dist;
        follower.waypoint_index += 1;
        if follower.waypoint_index == follower.waypoints.len() {
            follower.phase = PathPhase::Completed;
            return;
        }
    }
}

/// Run waypoint traversal for all traveling enemies.
pub fn run(world: &mut World) {
    for (_entity, (pos, follower, _enemy)) in
        world.query_mut::<(&mut Position, &mut PathFollower, &EnemyShip)>()
    {
        step(pos, follower);
    }
}
