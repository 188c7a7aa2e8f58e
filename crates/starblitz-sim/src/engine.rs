//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes queued commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless (no frontend dependency), enabling deterministic testing.
//!
//! Scheduling is single-threaded and cooperative: one `tick()` per frame,
//! systems in a fixed order, fire sessions stepped by the same scheduler.
//! Within a tick, movement runs before overlap delivery, which runs
//! before damage resolution.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starblitz_core::commands::SimCommand;
use starblitz_core::components::{FireSession, PlayerShip, Weapon};
use starblitz_core::constants::secs_to_ticks;
use starblitz_core::enums::GamePhase;
use starblitz_core::events::GameEvent;
use starblitz_core::state::GameStateSnapshot;
use starblitz_core::types::{SimTime, Viewport};

use crate::systems;
use crate::waves::WaveSchedule;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// World-space camera rectangle the player boundary derives from.
    pub viewport: Viewport,
    /// Mission wave schedule.
    pub schedule: WaveSchedule,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::default(),
            schedule: WaveSchedule::default_mission(),
        }
    }
}

/// Running mission tally.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub enemies_destroyed: u32,
    pub enemies_total: u32,
    pub shots_fired: u32,
    pub points: u32,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    next_actor_id: u32,
    command_queue: VecDeque<SimCommand>,
    overlap_queue: Vec<(u32, u32)>,
    pending_events: Vec<GameEvent>,
    despawn_buffer: Vec<hecs::Entity>,
    schedule: WaveSchedule,
    score: ScoreState,
    move_input: Vec2,
    viewport: Viewport,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_actor_id: 0,
            command_queue: VecDeque::new(),
            overlap_queue: Vec::new(),
            pending_events: Vec::new(),
            despawn_buffer: Vec::new(),
            schedule: config.schedule,
            score: ScoreState::default(),
            move_input: Vec2::ZERO,
            viewport: config.viewport,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.pending_events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.score, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the current score tally.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Spawn a bare projectile (for tests that script collisions directly).
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        kind: starblitz_core::enums::ActorKind,
        position: starblitz_core::types::Position,
        velocity: starblitz_core::types::Velocity,
        damage: i32,
    ) -> u32 {
        world_setup::spawn_projectile(
            &mut self.world,
            &mut self.next_actor_id,
            kind,
            position,
            velocity,
            damage,
        )
    }

    /// External id of the player ship, if alive.
    #[cfg(test)]
    pub fn player_id(&self) -> Option<u32> {
        let mut query = self
            .world
            .query::<(&PlayerShip, &starblitz_core::components::ActorInfo)>();
        query.iter().next().map(|(_, (_, info))| info.id)
    }

    /// External ids of all live enemies.
    #[cfg(test)]
    pub fn enemy_ids(&self) -> Vec<u32> {
        let mut query = self.world.query::<(
            &starblitz_core::components::EnemyShip,
            &starblitz_core::components::ActorInfo,
        )>();
        let mut ids: Vec<u32> = query.iter().map(|(_, (_, info))| info.id).collect();
        ids.sort_unstable();
        ids
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::StartMission => {
                if matches!(
                    self.phase,
                    GamePhase::MainMenu | GamePhase::Victory | GamePhase::Defeat
                ) {
                    self.world = World::new();
                    self.schedule.reset();
                    self.score = ScoreState {
                        enemies_total: self.schedule.total_enemies(),
                        ..Default::default()
                    };
                    self.time = SimTime::default();
                    self.move_input = Vec2::ZERO;
                    self.overlap_queue.clear();
                    world_setup::spawn_player(
                        &mut self.world,
                        &self.viewport,
                        &mut self.next_actor_id,
                    );
                    self.phase = GamePhase::Active;
                }
            }
            SimCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            SimCommand::SetMoveInput { x, y } => {
                self.move_input = Vec2::new(x, y);
            }
            SimCommand::FirePressed => self.press_fire(),
            SimCommand::FireReleased => self.release_fire(),
            SimCommand::ReportOverlap { first, second } => {
                self.overlap_queue.push((first, second));
            }
        }
    }

    /// Start a repeat-fire session on the player ship.
    /// A no-op if one is already active — at most one live session per entity.
    fn press_fire(&mut self) {
        let player = {
            let mut query = self.world.query::<(&PlayerShip, &Weapon)>();
            query
                .iter()
                .next()
                .map(|(entity, (_, weapon))| (entity, weapon.firing_period_secs))
        };
        let Some((entity, period_secs)) = player else {
            return;
        };
        if self.world.get::<&FireSession>(entity).is_ok() {
            return;
        }
        let _ = self.world.insert_one(
            entity,
            FireSession {
                period_ticks: secs_to_ticks(period_secs),
                cooldown_ticks: 0,
            },
        );
    }

    /// Cancel the active fire session immediately. A no-op when idle.
    fn release_fire(&mut self) {
        let player = {
            let mut query = self.world.query::<&PlayerShip>();
            query.iter().next().map(|(entity, _)| entity)
        };
        if let Some(entity) = player {
            let _ = self.world.remove_one::<FireSession>(entity);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.schedule,
            &mut self.next_actor_id,
            self.time.tick,
            &mut self.pending_events,
        );
        // 2. Player movement (clamped to bounds)
        systems::player_control::run(&mut self.world, self.move_input);
        // 3. Enemy waypoint traversal
        systems::pathing::run(&mut self.world);
        // 4. Projectile integration
        systems::movement::run(&mut self.world);
        // 5. Weapons (fire sessions + enemy return fire)
        systems::fire_control::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_actor_id,
            &mut self.score,
            &mut self.pending_events,
        );
        // 6. Damage resolution — overlap delivery happens after movement
        let outcome = systems::damage::run(
            &mut self.world,
            &mut self.overlap_queue,
            &mut self.score,
            &mut self.pending_events,
        );
        if outcome.player_destroyed {
            self.phase = GamePhase::Defeat;
            self.pending_events.push(GameEvent::GameOver);
        }
        // 7. Cleanup (finished routes, off-screen projectiles)
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &self.viewport,
            &mut self.pending_events,
        );

        self.check_mission_complete();
    }

    /// Victory once every scheduled enemy has spawned and none survive.
    fn check_mission_complete(&mut self) {
        if self.phase != GamePhase::Active || !self.schedule.all_spawned() {
            return;
        }
        let enemies_alive = {
            let mut query = self.world.query::<&starblitz_core::components::EnemyShip>();
            query.iter().next().is_some()
        };
        if enemies_alive {
            return;
        }
        self.phase = GamePhase::Victory;
        self.pending_events.push(GameEvent::MissionComplete {
            points: self.score.points,
        });
    }
}
