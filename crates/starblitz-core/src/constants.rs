//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Convert a duration in seconds to whole ticks (rounded).
pub fn secs_to_ticks(secs: f32) -> u32 {
    (secs * TICK_RATE as f32).round() as u32
}

// --- World / viewport ---

/// Default viewport width in world units.
pub const VIEW_WIDTH: f32 = 16.0;

/// Default viewport height in world units.
pub const VIEW_HEIGHT: f32 = 12.0;

/// Inset from the viewport edges applied to the player's move bounds.
pub const PLAYER_PADDING: f32 = 1.0;

/// Margin beyond the viewport before a projectile is shredded.
pub const OOB_MARGIN: f32 = 1.0;

// --- Player ship ---

pub const PLAYER_MAX_HEALTH: i32 = 200;
pub const PLAYER_MOVE_SPEED: f32 = 10.0;
pub const PLAYER_PROJECTILE_SPEED: f32 = 10.0;
/// Seconds between shots while the fire signal is held.
pub const PLAYER_FIRING_PERIOD: f32 = 0.2;
pub const PLAYER_SHOT_DAMAGE: i32 = 100;

// --- Enemy ships ---

pub const ENEMY_MAX_HEALTH: i32 = 100;
pub const ENEMY_MOVE_SPEED: f32 = 2.0;
/// Damage dealt by ramming the player.
pub const ENEMY_CONTACT_DAMAGE: i32 = 100;
pub const ENEMY_PROJECTILE_SPEED: f32 = 6.0;
pub const ENEMY_SHOT_DAMAGE: i32 = 100;
/// Enemy return-fire re-arms with a random delay in this range (seconds).
pub const ENEMY_SHOT_MIN_PERIOD: f32 = 0.2;
pub const ENEMY_SHOT_MAX_PERIOD: f32 = 3.0;
/// Points credited per enemy destroyed.
pub const ENEMY_SCORE_VALUE: u32 = 150;

// --- Waves ---

/// Enemies per wave in the default mission.
pub const WAVE_ENEMY_COUNT: u32 = 5;
/// Seconds between enemy spawns within one wave.
pub const WAVE_SPAWN_STAGGER: f32 = 0.5;
/// Ticks between wave start times in the default mission (8 seconds).
pub const WAVE_INTERVAL_TICKS: u64 = 480;
