//! Player movement system.
//!
//! Converts the frame's normalized input vector into a position delta and
//! clamps the result to the ship's move bounds, each axis independently.

use glam::Vec2;
use hecs::World;

use starblitz_core::components::{PlayerShip, ShipController};
use starblitz_core::constants::DT;
use starblitz_core::types::Position;

/// Apply the current input vector to the player ship.
pub fn run(world: &mut World, move_input: Vec2) {
    for (_entity, (pos, ctl, _player)) in
        world.query_mut::<(&mut Position, &ShipController, &PlayerShip)>()
    {
        let next = pos.0 + move_input * ctl.move_speed * DT;
        pos.0 = ctl.bounds.clamp(next);
    }
}
