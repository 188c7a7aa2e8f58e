//! Wave configuration and scheduling.
//!
//! A `WaveConfig` is the external "wave/path configuration" input: an
//! ordered waypoint route plus enemy tuning, validated at construction.
//! A `WaveSchedule` strings wave entries onto the mission timeline.

use starblitz_core::constants::*;
use starblitz_core::types::Position;

/// Validated configuration for one enemy wave.
#[derive(Debug, Clone)]
pub struct WaveConfig {
    /// Ordered waypoint route. Enemies spawn at the first waypoint.
    pub waypoints: Vec<Position>,
    /// How many enemies this wave spawns.
    pub enemy_count: u32,
    /// Ticks between enemy spawns within the wave.
    pub spawn_stagger_ticks: u64,
    /// Travel speed in units/s.
    pub move_speed: f32,
    /// Hit points per enemy.
    pub enemy_health: i32,
}

impl WaveConfig {
    /// Build a wave config, failing fast on invalid parameters rather than
    /// letting a bad wave limp through the simulation.
    pub fn new(
        waypoints: Vec<Position>,
        enemy_count: u32,
        spawn_stagger_secs: f32,
        move_speed: f32,
        enemy_health: i32,
    ) -> Result<Self, String> {
        if waypoints.is_empty() {
            return Err("wave path must contain at least one waypoint".into());
        }
        if enemy_count == 0 {
            return Err("wave must spawn at least one enemy".into());
        }
        if spawn_stagger_secs <= 0.0 {
            return Err(format!(
                "spawn stagger must be positive, got {spawn_stagger_secs}"
            ));
        }
        if move_speed <= 0.0 {
            return Err(format!("move speed must be positive, got {move_speed}"));
        }
        if enemy_health <= 0 {
            return Err(format!("enemy health must be positive, got {enemy_health}"));
        }
        Ok(Self {
            waypoints,
            enemy_count,
            spawn_stagger_ticks: secs_to_ticks(spawn_stagger_secs) as u64,
            move_speed,
            enemy_health,
        })
    }
}

/// A wave placed on the mission timeline.
#[derive(Debug, Clone)]
pub struct WaveEntry {
    /// Tick at which this wave starts spawning.
    pub start_tick: u64,
    pub config: WaveConfig,
    /// Enemies spawned so far.
    pub spawned: u32,
    /// Tick at which the next enemy is due.
    pub next_spawn_tick: u64,
}

impl WaveEntry {
    pub fn new(start_tick: u64, config: WaveConfig) -> Self {
        Self {
            start_tick,
            config,
            spawned: 0,
            next_spawn_tick: start_tick,
        }
    }
}

/// The complete wave schedule for a mission.
#[derive(Debug, Clone, Default)]
pub struct WaveSchedule {
    pub waves: Vec<WaveEntry>,
}

impl WaveSchedule {
    /// Default 3-wave mission: a straight dive, a lateral sweep, and a
    /// zig-zag, with escalating start times.
    pub fn default_mission() -> Self {
        let top = VIEW_HEIGHT + 1.0;
        let stagger = secs_to_ticks(WAVE_SPAWN_STAGGER) as u64;

        let dive = WaveConfig {
            waypoints: vec![Position::new(8.0, top), Position::new(8.0, -1.0)],
            enemy_count: WAVE_ENEMY_COUNT,
            spawn_stagger_ticks: stagger,
            move_speed: ENEMY_MOVE_SPEED,
            enemy_health: ENEMY_MAX_HEALTH,
        };

        let sweep = WaveConfig {
            waypoints: vec![
                Position::new(-1.0, 9.0),
                Position::new(17.0, 9.0),
                Position::new(17.0, 6.0),
                Position::new(-1.0, 6.0),
            ],
            enemy_count: WAVE_ENEMY_COUNT,
            spawn_stagger_ticks: stagger,
            move_speed: ENEMY_MOVE_SPEED,
            enemy_health: ENEMY_MAX_HEALTH,
        };

        let zigzag = WaveConfig {
            waypoints: vec![
                Position::new(2.0, top),
                Position::new(14.0, 8.0),
                Position::new(2.0, 5.0),
                Position::new(14.0, 2.0),
                Position::new(8.0, -1.0),
            ],
            enemy_count: WAVE_ENEMY_COUNT,
            spawn_stagger_ticks: stagger,
            move_speed: ENEMY_MOVE_SPEED * 1.5,
            enemy_health: ENEMY_MAX_HEALTH,
        };

        Self {
            waves: vec![
                WaveEntry::new(0, dive),
                WaveEntry::new(WAVE_INTERVAL_TICKS, sweep),
                WaveEntry::new(WAVE_INTERVAL_TICKS * 2, zigzag),
            ],
        }
    }

    /// Total number of enemies across all waves.
    pub fn total_enemies(&self) -> u32 {
        self.waves.iter().map(|w| w.config.enemy_count).sum()
    }

    /// Whether every scheduled enemy has spawned.
    pub fn all_spawned(&self) -> bool {
        self.waves.iter().all(|w| w.spawned >= w.config.enemy_count)
    }

    /// Reset spawn progress (used when a mission restarts).
    pub fn reset(&mut self) {
        for wave in &mut self.waves {
            wave.spawned = 0;
            wave.next_spawn_tick = wave.start_tick;
        }
    }
}
