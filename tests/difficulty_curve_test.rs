//! Difficulty progression over long sessions: fixed steps every 10 points,
//! monotonically non-increasing, floored at MIN_TIME.

use rabbit_click::constants::{MIN_TIME, START_HIDDEN_TIME, START_VISIBLE_TIME, TIME_STEP_PER_10PTS};
use rabbit_click::game::grid::rabbit_rect;
use rabbit_click::game::logic::{handle_click, ClickOutcome};
use rabbit_click::game::types::RabbitGame;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Game mid-round with the rabbit visible at a known hole.
fn playing_game(rng: &mut ChaCha8Rng) -> RabbitGame {
    let mut game = RabbitGame::new();
    game.start_round(rng);
    game
}

/// Force a reveal and land a center hit.
fn force_hit(game: &mut RabbitGame, rng: &mut ChaCha8Rng) {
    game.rabbit_visible = true;
    let (cx, cy) = rabbit_rect(game.current_row, game.current_col).center();
    assert_eq!(
        handle_click(game, cx as u16, cy as u16, rng),
        ClickOutcome::Hit
    );
}

#[test]
fn test_ten_hits_step_both_timers_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut game = playing_game(&mut rng);

    for _ in 0..10 {
        force_hit(&mut game, &mut rng);
    }

    assert_eq!(game.score, 10);
    assert!((game.visible_time - (START_VISIBLE_TIME - TIME_STEP_PER_10PTS)).abs() < 1e-9);
    assert!((game.hidden_time - (START_HIDDEN_TIME - TIME_STEP_PER_10PTS)).abs() < 1e-9);
}

#[test]
fn test_exactly_one_step_per_ten_points() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let mut game = playing_game(&mut rng);

    for score in 1..=60u32 {
        let before = game.visible_time;
        force_hit(&mut game, &mut rng);

        let expected_steps = (score / 10) as f64;
        let expected =
            (START_VISIBLE_TIME - expected_steps * TIME_STEP_PER_10PTS).max(MIN_TIME);
        assert!(
            (game.visible_time - expected).abs() < 1e-9,
            "score {}: visible_time {} != {}",
            score,
            game.visible_time,
            expected
        );

        if score % 10 != 0 {
            assert!((game.visible_time - before).abs() < 1e-9);
        }
    }
}

#[test]
fn test_curve_plateaus_at_floor() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let mut game = playing_game(&mut rng);

    // 1.0s reaches the 0.3s floor at 70 points; play far past it
    for _ in 0..200 {
        force_hit(&mut game, &mut rng);
        assert!(game.visible_time >= MIN_TIME - 1e-12);
        assert!(game.hidden_time >= MIN_TIME - 1e-12);
    }

    assert_eq!(game.score, 200);
    assert!((game.visible_time - MIN_TIME).abs() < 1e-9);
    assert!((game.hidden_time - MIN_TIME).abs() < 1e-9);
}

#[test]
fn test_curve_is_monotone_non_increasing() {
    let mut rng = ChaCha8Rng::seed_from_u64(14);
    let mut game = playing_game(&mut rng);

    let mut last = (game.visible_time, game.hidden_time);
    for _ in 0..150 {
        force_hit(&mut game, &mut rng);
        assert!(game.visible_time <= last.0 + 1e-12);
        assert!(game.hidden_time <= last.1 + 1e-12);
        last = (game.visible_time, game.hidden_time);
    }
}

#[test]
fn test_restart_resets_difficulty() {
    let mut rng = ChaCha8Rng::seed_from_u64(15);
    let mut game = playing_game(&mut rng);

    for _ in 0..40 {
        force_hit(&mut game, &mut rng);
    }
    assert!(game.visible_time < START_VISIBLE_TIME);

    game.start_round(&mut rng);

    assert!((game.visible_time - START_VISIBLE_TIME).abs() < f64::EPSILON);
    assert!((game.hidden_time - START_HIDDEN_TIME).abs() < f64::EPSILON);
    assert_eq!(game.score, 0);
}
