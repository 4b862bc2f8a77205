//! Engine integration tests - full sessions driven through the public API

use blockfall::core::{fall_interval_secs, Engine};
use blockfall::types::{GameAction, GameEvent, BOARD_HEIGHT, SPAWN_X, SPAWN_Y};

#[test]
fn test_same_seed_same_session() {
    let mut a = Engine::new(99);
    let mut b = Engine::new(99);

    let script = [
        GameAction::MoveLeft,
        GameAction::RotateCw,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::SoftDrop,
        GameAction::HardDrop,
    ];
    for action in script {
        a.handle(action);
        b.handle(action);
        a.advance(0.2);
        b.advance(0.2);
    }

    assert_eq!(a.current(), b.current());
    assert_eq!(a.next(), b.next());
    assert_eq!(a.held(), b.held());
    assert_eq!(a.score(), b.score());
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_hard_drop_session_runs_to_game_over() {
    // Dropping every piece in place must eventually top out the board
    let mut engine = Engine::new(7);
    let mut locks = 0u32;
    let mut saw_game_over = false;

    for _ in 0..1000 {
        engine.handle(GameAction::HardDrop);
        let events: Vec<GameEvent> = engine.drain_events().collect();
        for event in events {
            match event {
                GameEvent::Locked => locks += 1,
                GameEvent::GameOver(score) => {
                    saw_game_over = true;
                    assert_eq!(score, engine.score());
                }
                _ => {}
            }
        }
        if engine.game_over() {
            break;
        }
    }

    assert!(saw_game_over, "session never topped out");
    assert!(locks > 5, "too few locks before game over: {}", locks);

    // A dead session stays inert
    let piece = engine.current();
    assert!(!engine.handle(GameAction::HardDrop));
    assert!(!engine.advance(60.0));
    assert_eq!(engine.current(), piece);
}

#[test]
fn test_every_spawn_uses_catalog_defaults() {
    let mut engine = Engine::new(4242);
    for _ in 0..50 {
        assert_eq!(engine.current().x, SPAWN_X);
        assert_eq!(engine.current().y, SPAWN_Y);
        assert_eq!(engine.current().rotation, 0);
        engine.handle(GameAction::HardDrop);
        engine.drain_events().count();
        if engine.game_over() {
            break;
        }
    }
}

#[test]
fn test_gravity_matches_published_interval() {
    let mut engine = Engine::new(3);
    let interval = fall_interval_secs(engine.level());
    let y = engine.current().y;

    // Just under the interval: no step
    assert!(!engine.advance(interval - 0.01));
    assert_eq!(engine.current().y, y);

    // Crossing it: exactly one step
    assert!(engine.advance(0.02));
    assert_eq!(engine.current().y, y + 1);
}

#[test]
fn test_soft_drop_does_not_lock() {
    // Soft drop stops at the last valid row; the lock comes from gravity
    let mut engine = Engine::new(11);
    for _ in 0..BOARD_HEIGHT {
        engine.handle(GameAction::SoftDrop);
    }
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.current().y, engine.ghost_y());

    assert!(engine.advance(fall_interval_secs(engine.level())));
    assert_eq!(engine.board().occupied_count(), 4);
}

#[test]
fn test_hold_round_trip_preserves_kinds() {
    let mut engine = Engine::new(21);
    let first = engine.current().kind;
    let second = engine.next().kind;

    assert!(engine.handle(GameAction::Hold));
    assert_eq!(engine.held().map(|p| p.kind), Some(first));
    assert_eq!(engine.current().kind, second);

    // Blocked until the next lock
    assert!(!engine.handle(GameAction::Hold));

    engine.handle(GameAction::HardDrop);
    let promoted = engine.current().kind;
    assert!(engine.handle(GameAction::Hold));
    assert_eq!(engine.current().kind, first);
    assert_eq!(engine.held().map(|p| p.kind), Some(promoted));
}

#[test]
fn test_ghost_never_above_piece() {
    let mut engine = Engine::new(17);
    for _ in 0..30 {
        assert!(engine.ghost_y() >= engine.current().y);
        for (_, y) in engine.ghost_cells() {
            assert!(y >= 0);
            assert!(y < BOARD_HEIGHT as i8);
        }
        engine.handle(GameAction::HardDrop);
        engine.drain_events().count();
        if engine.game_over() {
            break;
        }
    }
}

#[test]
fn test_score_and_level_are_monotone() {
    let mut engine = Engine::new(8);
    let mut prev_score = 0;
    let mut prev_level = 1;
    let mut prev_lines = 0;

    for _ in 0..500 {
        engine.handle(GameAction::MoveLeft);
        engine.handle(GameAction::HardDrop);
        engine.drain_events().count();

        assert!(engine.score() >= prev_score);
        assert!(engine.level() >= prev_level);
        assert!(engine.lines() >= prev_lines);
        assert_eq!(engine.level(), 1 + engine.lines() / 10);
        prev_score = engine.score();
        prev_level = engine.level();
        prev_lines = engine.lines();

        if engine.game_over() {
            break;
        }
    }
}
