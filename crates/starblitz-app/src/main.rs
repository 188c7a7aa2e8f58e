//! Headless demo driver.
//!
//! Plays one scripted mission against the simulation core, acting as all
//! three external collaborators at once: the input source (autopilot
//! steering + fire signal), the collision detector (circle overlap on the
//! published snapshots, debounced to at-most-once per pair), and the event
//! consumer (events are printed as JSON lines).

use std::collections::HashSet;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use starblitz_app::game_loop::{spawn_game_loop, GameLoopCommand};
use starblitz_core::commands::SimCommand;
use starblitz_core::enums::{ActorKind, GamePhase};
use starblitz_core::state::GameStateSnapshot;
use starblitz_sim::engine::SimConfig;

/// Overlap distance used by the demo's collision collaborator.
const HIT_RADIUS: f32 = 0.6;

/// Wall-clock safety limit for the demo mission.
const MISSION_TIME_LIMIT: Duration = Duration::from_secs(120);

fn main() {
    env_logger::init();

    let latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>> = Arc::new(Mutex::new(None));
    let (event_tx, event_rx) = mpsc::channel();
    let cmd_tx = spawn_game_loop(SimConfig::default(), latest_snapshot.clone(), event_tx);

    let send = |cmd: SimCommand| {
        let _ = cmd_tx.send(GameLoopCommand::Sim(cmd));
    };

    log::info!("starting demo mission");
    send(SimCommand::StartMission);
    send(SimCommand::FirePressed);

    let started = Instant::now();
    let mut reported: HashSet<(u32, u32)> = HashSet::new();
    let mut final_snapshot = None;

    while started.elapsed() < MISSION_TIME_LIMIT {
        // Print every event the sim raised since the last pass.
        while let Ok(event) = event_rx.try_recv() {
            match serde_json::to_string(&event) {
                Ok(json) => println!("{json}"),
                Err(err) => log::error!("failed to encode event: {err}"),
            }
        }

        let snapshot = {
            let lock = latest_snapshot.lock().expect("snapshot lock poisoned");
            lock.clone()
        };
        let Some(snapshot) = snapshot else {
            std::thread::sleep(Duration::from_millis(5));
            continue;
        };

        if matches!(snapshot.phase, GamePhase::Victory | GamePhase::Defeat) {
            final_snapshot = Some(snapshot);
            break;
        }

        steer(&snapshot, &send);
        detect_collisions(&snapshot, &mut reported, &send);

        std::thread::sleep(Duration::from_millis(16));
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);

    match final_snapshot {
        Some(snapshot) => {
            log::info!(
                "mission ended: {:?} — {} enemies destroyed, {} shots, {} points",
                snapshot.phase,
                snapshot.score.enemies_destroyed,
                snapshot.score.shots_fired,
                snapshot.score.points
            );
        }
        None => log::warn!("mission hit the demo time limit"),
    }
}

/// Autopilot: chase the horizontal position of the lowest enemy.
fn steer(snapshot: &GameStateSnapshot, send: &impl Fn(SimCommand)) {
    let Some(player) = snapshot.actors.iter().find(|a| a.kind == ActorKind::Player) else {
        return;
    };
    let target = snapshot
        .actors
        .iter()
        .filter(|a| a.kind == ActorKind::Enemy)
        .min_by(|a, b| a.position.0.y.total_cmp(&b.position.0.y));

    let x = match target {
        Some(enemy) => (enemy.position.0.x - player.position.0.x).clamp(-1.0, 1.0),
        None => 0.0,
    };
    send(SimCommand::SetMoveInput { x, y: 0.0 });
}

/// The demo's collision collaborator: circle overlap against opposing
/// actors (shots hit ships, enemy hulls ram the player), reported at most
/// once per pair.
fn detect_collisions(
    snapshot: &GameStateSnapshot,
    reported: &mut HashSet<(u32, u32)>,
    send: &impl Fn(SimCommand),
) {
    for actor in &snapshot.actors {
        let target_kind = match actor.kind {
            ActorKind::PlayerShot => ActorKind::Enemy,
            ActorKind::EnemyShot | ActorKind::Enemy => ActorKind::Player,
            ActorKind::Player => continue,
        };
        for target in snapshot.actors.iter().filter(|a| a.kind == target_kind) {
            if actor.position.distance_to(&target.position) > HIT_RADIUS {
                continue;
            }
            if reported.insert((actor.id, target.id)) {
                log::debug!("overlap: {} -> {}", actor.id, target.id);
                send(SimCommand::ReportOverlap {
                    first: actor.id,
                    second: target.id,
                });
            }
        }
    }
}
