#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::SimCommand;
    use crate::constants::{secs_to_ticks, TICK_RATE};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{MoveBounds, Position, SimTime, Velocity, Viewport};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_actor_kind_serde() {
        let variants = vec![
            ActorKind::Player,
            ActorKind::Enemy,
            ActorKind::PlayerShot,
            ActorKind::EnemyShot,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ActorKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::MainMenu,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::Victory,
            GamePhase::Defeat,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify SimCommand round-trips through serde (tagged union).
    #[test]
    fn test_sim_command_serde() {
        let commands = vec![
            SimCommand::StartMission,
            SimCommand::Pause,
            SimCommand::Resume,
            SimCommand::SetMoveInput { x: -0.5, y: 1.0 },
            SimCommand::FirePressed,
            SimCommand::FireReleased,
            SimCommand::ReportOverlap {
                first: 3,
                second: 11,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: SimCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since SimCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Commands carry an externally-visible "type" tag.
    #[test]
    fn test_sim_command_tagged() {
        let json = serde_json::to_string(&SimCommand::FirePressed).unwrap();
        assert_eq!(json, r#"{"type":"FirePressed"}"#);
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::WaveStarted { wave_number: 1 },
            GameEvent::ProjectileFired {
                shooter: 0,
                x: 8.0,
                y: 1.0,
                vx: 0.0,
                vy: 10.0,
            },
            GameEvent::ActorHit {
                id: 4,
                remaining_health: 50,
            },
            GameEvent::EffectSpawn {
                kind: EffectKind::Explosion,
                x: 2.0,
                y: 3.0,
            },
            GameEvent::EntityDespawned {
                id: 4,
                kind: ActorKind::Enemy,
            },
            GameEvent::GameOver,
            GameEvent::MissionComplete { points: 2250 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-6);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        // TICK_RATE ticks = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_secs_to_ticks() {
        assert_eq!(secs_to_ticks(0.2), 12);
        assert_eq!(secs_to_ticks(1.0), TICK_RATE);
        assert_eq!(secs_to_ticks(0.0), 0);
    }

    /// The boundary calculator insets the viewport by the padding on every side.
    #[test]
    fn test_move_bounds_from_viewport() {
        let viewport = Viewport::new(Vec2::ZERO, Vec2::new(16.0, 12.0));
        let bounds = MoveBounds::from_viewport(&viewport, 1.0);
        assert_eq!(bounds.x_min, 1.0);
        assert_eq!(bounds.x_max, 15.0);
        assert_eq!(bounds.y_min, 1.0);
        assert_eq!(bounds.y_max, 11.0);
    }

    /// Each axis clamps independently.
    #[test]
    fn test_move_bounds_clamp() {
        let viewport = Viewport::new(Vec2::ZERO, Vec2::new(16.0, 12.0));
        let bounds = MoveBounds::from_viewport(&viewport, 1.0);

        let inside = Vec2::new(8.0, 6.0);
        assert_eq!(bounds.clamp(inside), inside);

        let past_right = Vec2::new(20.0, 6.0);
        assert_eq!(bounds.clamp(past_right), Vec2::new(15.0, 6.0));

        let past_both = Vec2::new(-3.0, 50.0);
        assert_eq!(bounds.clamp(past_both), Vec2::new(1.0, 11.0));
    }

    #[test]
    fn test_viewport_margin_containment() {
        let viewport = Viewport::default();
        assert!(viewport.contains_with_margin(Vec2::new(8.0, 6.0), 0.0));
        assert!(viewport.contains_with_margin(Vec2::new(-0.5, 6.0), 1.0));
        assert!(!viewport.contains_with_margin(Vec2::new(-2.0, 6.0), 1.0));
        assert!(!viewport.contains_with_margin(Vec2::new(8.0, 13.5), 1.0));
    }
}
