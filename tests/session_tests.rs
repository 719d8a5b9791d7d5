//! Session timing tests - the spawn/despawn/countdown schedulers driven
//! end-to-end through the public API, no test hooks.

use tui_whack::core::GameState;
use tui_whack::types::{
    GameConfig, HoleState, Phase, GAME_DURATION_SECS, MOLE_SHOW_MS, SPAWN_INTERVAL_MS,
    WHACK_CLEAR_MS,
};

/// Index of the first unstruck mole on the board, if any.
fn mole_index(state: &GameState) -> Option<usize> {
    state
        .snapshot()
        .holes
        .iter()
        .position(|hole| *hole == HoleState::Mole)
}

#[test]
fn test_unhit_mole_despawns_at_show_deadline() {
    let mut game = GameState::new(12345);
    game.start();

    game.tick(SPAWN_INTERVAL_MS);
    let index = mole_index(&game).expect("spawn tick should place a mole");

    game.tick(MOLE_SHOW_MS - 1);
    assert_eq!(game.snapshot().holes[index], HoleState::Mole);

    game.tick(1);
    let snap = game.snapshot();
    assert_eq!(snap.holes[index], HoleState::Empty);
    // A miss is not a failure: no points, no penalty.
    assert_eq!(snap.score, 0);
}

#[test]
fn test_whack_scores_then_hole_clears_fast() {
    let mut game = GameState::new(12345);
    game.start();

    game.tick(SPAWN_INTERVAL_MS);
    let index = mole_index(&game).expect("spawn tick should place a mole");

    // Hit lands 200ms into the show window: score is immediate.
    game.tick(200);
    assert!(game.whack(index));
    let snap = game.snapshot();
    assert_eq!(snap.score, 1);
    assert_eq!(snap.holes[index], HoleState::Whacked);

    // 100ms later the squashed mole is gone.
    game.tick(WHACK_CLEAR_MS);
    assert_eq!(game.snapshot().holes[index], HoleState::Empty);
}

#[test]
fn test_double_whack_scores_exactly_once() {
    let mut game = GameState::new(12345);
    game.start();
    game.tick(SPAWN_INTERVAL_MS);
    let index = mole_index(&game).expect("spawn tick should place a mole");

    assert!(game.whack(index));
    assert!(!game.whack(index));
    assert_eq!(game.score(), 1);
}

#[test]
fn test_whack_on_empty_hole_changes_nothing() {
    let mut game = GameState::new(12345);
    game.start();
    game.tick(SPAWN_INTERVAL_MS);
    let occupied = mole_index(&game).expect("spawn tick should place a mole");
    let empty = (0..9).find(|&i| i != occupied).unwrap();

    let before = game.snapshot();
    assert!(!game.whack(empty));
    let after = game.snapshot();

    assert_eq!(before.score, after.score);
    assert_eq!(before.holes, after.holes);
}

#[test]
fn test_saturated_board_skips_spawn_ticks() {
    // Spawns far outpace despawns: the board fills, then spawn ticks are
    // silent no-ops until a deadline frees a hole.
    let config = GameConfig {
        duration_secs: 60,
        spawn_interval_ms: 100,
        mole_show_ms: 60_000,
        whack_clear_ms: WHACK_CLEAR_MS,
    };
    let mut game = GameState::with_config(9, config);
    game.start();

    for _ in 0..9 {
        game.tick(100);
    }
    let full = game.snapshot().holes;
    assert!(full.iter().all(|hole| hole.has_mole()));

    for _ in 0..20 {
        game.tick(100);
    }
    assert_eq!(game.snapshot().holes, full);
}

#[test]
fn test_two_second_session_ends_with_high_score() {
    let config = GameConfig {
        duration_secs: 2,
        spawn_interval_ms: 100,
        ..GameConfig::default()
    };
    let mut game = GameState::with_config(12345, config);
    game.start();
    assert_eq!(game.snapshot().high_score, 0);

    // Rack up three hits inside the first second.
    for _ in 0..3 {
        game.tick(100);
        let index = mole_index(&game).expect("spawn tick should place a mole");
        assert!(game.whack(index));
        game.tick(WHACK_CLEAR_MS);
    }
    assert_eq!(game.score(), 3);

    // First countdown tick: still running.
    game.tick(400);
    assert_eq!(game.time_remaining(), 1);
    assert!(game.is_running());

    // Second countdown tick: session over, high score applied once.
    game.tick(1000);
    let snap = game.snapshot();
    assert!(!snap.running);
    assert_eq!(snap.time_remaining, 0);
    assert_eq!(snap.high_score, 3);
    assert_eq!(game.phase(), Phase::Ended);
}

#[test]
fn test_score_constant_once_ended() {
    let config = GameConfig {
        duration_secs: 1,
        spawn_interval_ms: 200,
        ..GameConfig::default()
    };
    let mut game = GameState::with_config(31337, config);
    game.start();
    game.tick(200);
    let index = mole_index(&game).expect("spawn tick should place a mole");
    game.whack(index);
    game.tick(800);
    assert_eq!(game.phase(), Phase::Ended);

    let score_at_end = game.score();
    for step in 0..50 {
        game.tick(100);
        game.whack(step % 9);
        assert_eq!(game.score(), score_at_end);
    }
}

#[test]
fn test_restart_mid_session_resets_state() {
    let mut game = GameState::new(12345);
    game.start();
    game.tick(SPAWN_INTERVAL_MS);
    let index = mole_index(&game).expect("spawn tick should place a mole");
    game.whack(index);
    game.tick(5000);

    let episode_before = game.episode_id();
    game.start();
    let snap = game.snapshot();

    assert!(snap.running);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.time_remaining, GAME_DURATION_SECS);
    assert!(snap.holes.iter().all(|hole| *hole == HoleState::Empty));
    assert_eq!(snap.episode_id, episode_before + 1);
}

#[test]
fn test_high_score_survives_restart() {
    let config = GameConfig {
        duration_secs: 1,
        spawn_interval_ms: 200,
        ..GameConfig::default()
    };
    let mut game = GameState::with_config(777, config);

    game.start();
    game.tick(200);
    let index = mole_index(&game).expect("spawn tick should place a mole");
    game.whack(index);
    game.tick(800);
    assert_eq!(game.high_score(), 1);

    game.start();
    assert_eq!(game.high_score(), 1);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_hit_always_implies_target() {
    // Busy randomized session: at every observation point, a whacked hole
    // is by definition still occupied, and clears only to empty.
    let config = GameConfig {
        duration_secs: 4,
        spawn_interval_ms: 50,
        mole_show_ms: 130,
        whack_clear_ms: 40,
    };
    let mut game = GameState::with_config(4242, config);
    game.start();

    for step in 0..300 {
        game.tick(16);
        game.whack(step % 9);
        for hole in game.snapshot().holes.iter() {
            if hole.is_whacked() {
                assert!(hole.has_mole());
            }
        }
    }
}
