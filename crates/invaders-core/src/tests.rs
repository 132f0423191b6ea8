use glam::Vec3;

use crate::commands::InputEvent;
use crate::components::PlayerShip;
use crate::constants::*;
use crate::enums::{HitCause, RoundPhase};
use crate::events::GameEvent;
use crate::state::{GameStateSnapshot, TargetView};
use crate::types::{Aabb, ParseTargetIdError, ProjectileId, Ray, SimTime, TargetId};

#[test]
fn test_target_id_display_and_parse() {
    let id = TargetId::new(2, 1);
    assert_eq!(id.to_string(), "2-1");
    assert_eq!("2-1".parse::<TargetId>().unwrap(), id);
    assert_eq!("4-2".parse::<TargetId>().unwrap(), TargetId::new(4, 2));
}

#[test]
fn test_target_id_rejects_garbage() {
    for bad in ["", "2", "2-", "-1", "a-b", "2-1-0", "300-1"] {
        assert_eq!(
            bad.parse::<TargetId>(),
            Err(ParseTargetIdError(bad.to_string())),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn test_target_id_serializes_as_string() {
    let json = serde_json::to_string(&TargetId::new(3, 0)).unwrap();
    assert_eq!(json, "\"3-0\"");

    let err = serde_json::from_str::<TargetId>("\"nope\"");
    assert!(err.is_err());
}

#[test]
fn test_target_id_orders_column_major() {
    let mut ids = vec![
        TargetId::new(1, 0),
        TargetId::new(0, 2),
        TargetId::new(0, 0),
        TargetId::new(1, 1),
    ];
    ids.sort();
    let names: Vec<String> = ids.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["0-0", "0-2", "1-0", "1-1"]);
}

#[test]
fn test_input_event_wire_format() {
    let fire: InputEvent = serde_json::from_str(r#"{"type":"Fire"}"#).unwrap();
    assert_eq!(fire, InputEvent::Fire);

    let hit: InputEvent =
        serde_json::from_str(r#"{"type":"PointerHit","target":"2-1"}"#).unwrap();
    assert_eq!(
        hit,
        InputEvent::PointerHit {
            target: TargetId::new(2, 1)
        }
    );

    let ray: InputEvent = serde_json::from_str(
        r#"{"type":"PointerRay","origin":[0.0,0.0,10.0],"direction":[0.0,0.0,-1.0]}"#,
    )
    .unwrap();
    assert_eq!(
        ray,
        InputEvent::PointerRay {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::NEG_Z,
        }
    );

    assert!(serde_json::from_str::<InputEvent>(r#"{"type":"Jump"}"#).is_err());
}

#[test]
fn test_game_event_tagged() {
    let event = GameEvent::TargetDestroyed {
        id: TargetId::new(2, 1),
        cause: HitCause::Pointer,
        score: 100,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "TargetDestroyed");
    assert_eq!(json["id"], "2-1");
    assert_eq!(json["cause"], "Pointer");
    assert_eq!(json["score"], 100);
}

#[test]
fn test_snapshot_default_and_shape() {
    let snap = GameStateSnapshot::default();
    assert_eq!(snap.phase, RoundPhase::Playing);
    assert!(!snap.terminal);
    assert_eq!(snap.score, 0);

    let snap = GameStateSnapshot {
        targets: vec![TargetView {
            id: TargetId::new(0, 0),
            position: TARGET_GRID_ORIGIN,
            yaw: 0.0,
        }],
        ..Default::default()
    };
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["targets"][0]["id"], "0-0");
    assert_eq!(json["targets"][0]["position"][0], -4.0);
    assert_eq!(json["targets"][0]["position"][1], 3.0);
    assert_eq!(json["targets"][0]["position"][2], -5.0);
}

#[test]
fn test_projectile_id_transparent() {
    assert_eq!(serde_json::to_string(&ProjectileId(7)).unwrap(), "7");
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    time.advance(0.5);
    time.advance(0.25);
    assert_eq!(time.tick, 2);
    assert!((time.elapsed_secs - 0.75).abs() < 1e-9);
}

#[test]
fn test_aabb_bounds_and_ray_at() {
    let b = Aabb::cube(Vec3::new(1.0, 2.0, 3.0), 0.5);
    assert_eq!(b.min(), Vec3::new(0.5, 1.5, 2.5));
    assert_eq!(b.max(), Vec3::new(1.5, 2.5, 3.5));

    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn test_player_starts_centered() {
    assert_eq!(PlayerShip::default().position, PLAYER_START);
    assert_eq!(PLAYER_START.x, 0.0);
}

#[test]
fn test_grid_spans_player_range() {
    let last_column = TARGET_GRID_ORIGIN.x + f32::from(TARGET_GRID_COLUMNS - 1) * TARGET_GRID_SPACING;
    assert_eq!(TARGET_GRID_ORIGIN.x, -PLAYER_X_BOUND);
    assert_eq!(last_column, PLAYER_X_BOUND);
}
