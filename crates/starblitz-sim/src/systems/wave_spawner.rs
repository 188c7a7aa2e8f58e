//! Wave spawning system — spawns enemies according to the mission schedule.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use starblitz_core::events::GameEvent;

use crate::waves::WaveSchedule;
use crate::world_setup;

/// Check the schedule and spawn any due enemies, one per wave per tick,
/// staggered by the wave's spawn interval.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut WaveSchedule,
    counter: &mut u32,
    current_tick: u64,
    events: &mut Vec<GameEvent>,
) {
    for (index, wave) in schedule.waves.iter_mut().enumerate() {
        if wave.spawned >= wave.config.enemy_count || current_tick < wave.next_spawn_tick {
            continue;
        }
        if wave.spawned == 0 {
            events.push(GameEvent::WaveStarted {
                wave_number: index as u32 + 1,
            });
        }
        world_setup::spawn_enemy(world, rng, &wave.config, counter);
        wave.spawned += 1;
        wave.next_spawn_tick = current_tick + wave.config.spawn_stagger_ticks;
    }
}
