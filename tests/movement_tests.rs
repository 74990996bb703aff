//! Movement tests - per-update displacement and facing

use iso_rpg::core::{displacement, facing_for, World, WorldConfig};
use iso_rpg::types::{Direction, GridPos, MoveIntent, PLAYER_SPEED};

const EPS: f32 = 1e-5;

fn magnitude(p: GridPos) -> f32 {
    (p.x * p.x + p.y * p.y).sqrt()
}

#[test]
fn test_single_step_right() {
    let mut world = World::default();
    world.update(MoveIntent::new(1.0, 0.0), 16);

    let actor = world.actor();
    assert!((actor.pos().x - 5.2).abs() < EPS);
    assert!((actor.pos().y - 5.0).abs() < EPS);
    assert_eq!(actor.facing(), Direction::Right);
    assert!(actor.is_moving());
}

#[test]
fn test_zero_intent_leaves_actor_still() {
    let mut world = World::default();
    world.update(MoveIntent::NONE, 16);

    let actor = world.actor();
    assert_eq!(actor.pos(), GridPos::new(5.0, 5.0));
    assert_eq!(actor.facing(), Direction::Down);
    assert!(!actor.is_moving());
}

#[test]
fn test_moving_clears_when_keys_released() {
    let mut world = World::default();
    world.update(MoveIntent::new(0.0, -1.0), 16);
    assert!(world.actor().is_moving());
    assert_eq!(world.actor().facing(), Direction::Up);

    world.update(MoveIntent::NONE, 16);
    assert!(!world.actor().is_moving());
    // Facing is kept from the last move.
    assert_eq!(world.actor().facing(), Direction::Up);
}

#[test]
fn test_diagonal_matches_straight_speed() {
    let straight = magnitude(displacement(MoveIntent::new(1.0, 0.0), PLAYER_SPEED));
    for intent in [
        MoveIntent::new(1.0, 1.0),
        MoveIntent::new(-1.0, 1.0),
        MoveIntent::new(1.0, -1.0),
        MoveIntent::new(-1.0, -1.0),
    ] {
        let diag = magnitude(displacement(intent, PLAYER_SPEED));
        assert!((diag - straight).abs() < EPS, "{:?}", intent);
    }
}

#[test]
fn test_diagonal_tie_faces_vertically() {
    assert_eq!(facing_for(1.0, 1.0), Direction::Down);
    assert_eq!(facing_for(-1.0, -1.0), Direction::Up);

    let mut world = World::default();
    world.update(MoveIntent::new(1.0, 1.0), 16);
    assert_eq!(world.actor().facing(), Direction::Down);
}

#[test]
fn test_facing_follows_dominant_axis() {
    assert_eq!(facing_for(-0.5, 0.1), Direction::Left);
    assert_eq!(facing_for(0.5, -0.1), Direction::Right);
    assert_eq!(facing_for(0.1, -0.5), Direction::Up);
}

#[test]
fn test_movement_is_unbounded() {
    let mut world = World::default();
    for _ in 0..100 {
        world.update(MoveIntent::new(-1.0, 0.0), 16);
    }
    // 5.0 - 100 * 0.2 = -15.0: the actor walks off the grid freely.
    assert!((world.actor().pos().x + 15.0).abs() < 1e-3);
    assert_eq!(world.snapshot().tile, None);
}

#[test]
fn test_movement_ignores_frame_time() {
    let mut fast = World::default();
    let mut slow = World::default();
    fast.update(MoveIntent::new(0.0, 1.0), 1);
    slow.update(MoveIntent::new(0.0, 1.0), 500);
    assert_eq!(fast.actor().pos(), slow.actor().pos());
}

#[test]
fn test_configured_speed() {
    let mut world = World::new(WorldConfig::default().with_player_speed(1.0));
    world.update(MoveIntent::new(0.0, 1.0), 16);
    assert!((world.actor().pos().y - 6.0).abs() < EPS);
}

#[test]
fn test_stopped_world_ignores_updates() {
    let mut world = World::default();
    world.stop();
    world.stop();
    world.update(MoveIntent::new(1.0, 0.0), 16);

    assert!(!world.is_running());
    assert_eq!(world.actor().pos(), GridPos::new(5.0, 5.0));
    assert_eq!(world.frame_count(), 0);
}
