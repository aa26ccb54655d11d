//! Rabbit Click core data structures.
//!
//! A single-screen reaction game: a rabbit pops out of one of 25 holes and
//! the player must click it before it hides. Every 10 points the visible and
//! hidden intervals shrink, down to a floor.

use crate::constants::*;
use crate::game::grid::{FieldRect, FIELD_H, FIELD_W, GRID_COLS, GRID_ROWS};
use rand::Rng;

/// Top-level phase of the session. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Start,
    Play,
    ConfirmQuit,
    GameOver,
}

// ── Button hit-targets (field-local) ────────────────────────────────
//
// Shared by the click logic and the overlay renderer so the painted button
// is exactly the clickable region.

pub const START_BUTTON: FieldRect = FieldRect::new(23.0, 14.0, 15.0, 3.0);
pub const QUIT_BUTTON: FieldRect =
    FieldRect::new(FIELD_W as f64 - 13.0, FIELD_H as f64 - 3.0, 10.0, 3.0);
pub const RESTART_BUTTON: FieldRect = FieldRect::new(23.0, 18.0, 15.0, 3.0);

/// Confirm-quit modal box and its two buttons.
pub const CONFIRM_MODAL: FieldRect = FieldRect::new(15.0, 12.0, 31.0, 9.0);
pub const YES_BUTTON: FieldRect = FieldRect::new(19.0, 17.0, 9.0, 3.0);
pub const NO_BUTTON: FieldRect = FieldRect::new(33.0, 17.0, 9.0, 3.0);

/// Main game state. Single mutable instance owned by the frame loop.
#[derive(Debug, Clone)]
pub struct RabbitGame {
    pub phase: GamePhase,
    pub score: u32,

    /// Seconds the rabbit stays out before hiding. Never below MIN_TIME.
    pub visible_time: f64,
    /// Seconds between reveals. Never below MIN_TIME.
    pub hidden_time: f64,

    pub rabbit_visible: bool,
    pub current_row: usize,
    pub current_col: usize,

    /// Elapsed ms in the current visible/hidden phase.
    pub phase_timer_ms: u64,

    /// Animation timer, independent of the phase timer.
    pub anim_timer_ms: u64,
    /// Current sprite frame (0 or 1).
    pub anim_frame: u32,

    /// Set when the player confirms quitting; the frame loop exits on it.
    pub exit_requested: bool,
}

impl RabbitGame {
    /// Create a fresh session on the title screen.
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Start,
            score: 0,
            visible_time: START_VISIBLE_TIME,
            hidden_time: START_HIDDEN_TIME,
            rabbit_visible: false,
            current_row: 0,
            current_col: 0,
            phase_timer_ms: 0,
            anim_timer_ms: 0,
            anim_frame: 0,
            exit_requested: false,
        }
    }

    /// Begin a round: reset score, timers, and difficulty, pick a hole, and
    /// show the rabbit. Used for both Start and GameOver restarts.
    pub fn start_round<R: Rng>(&mut self, rng: &mut R) {
        self.phase = GamePhase::Play;
        self.score = 0;
        self.visible_time = START_VISIBLE_TIME;
        self.hidden_time = START_HIDDEN_TIME;
        self.choose_new_hole(rng);
        self.rabbit_visible = true;
        self.phase_timer_ms = 0;
        self.anim_timer_ms = 0;
        self.anim_frame = 0;
    }

    /// Pick a hole uniformly at random, re-sampling until it differs from
    /// the current one so the rabbit always moves to a distinct cell.
    pub fn choose_new_hole<R: Rng>(&mut self, rng: &mut R) {
        loop {
            let row = rng.gen_range(0..GRID_ROWS);
            let col = rng.gen_range(0..GRID_COLS);
            if (row, col) != (self.current_row, self.current_col) {
                self.current_row = row;
                self.current_col = col;
                break;
            }
        }
    }
}

impl Default for RabbitGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::{GRID_COLS, GRID_ROWS};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let game = RabbitGame::new();
        assert_eq!(game.phase, GamePhase::Start);
        assert_eq!(game.score, 0);
        assert!((game.visible_time - START_VISIBLE_TIME).abs() < f64::EPSILON);
        assert!((game.hidden_time - START_HIDDEN_TIME).abs() < f64::EPSILON);
        assert!(!game.rabbit_visible);
        assert_eq!(game.phase_timer_ms, 0);
        assert_eq!(game.anim_frame, 0);
        assert!(!game.exit_requested);
    }

    #[test]
    fn test_start_round_resets_everything() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut game = RabbitGame::new();
        game.score = 42;
        game.visible_time = 0.3;
        game.hidden_time = 0.3;
        game.phase_timer_ms = 777;
        game.anim_frame = 1;
        game.phase = GamePhase::GameOver;

        game.start_round(&mut rng);

        assert_eq!(game.phase, GamePhase::Play);
        assert_eq!(game.score, 0);
        assert!((game.visible_time - START_VISIBLE_TIME).abs() < f64::EPSILON);
        assert!((game.hidden_time - START_HIDDEN_TIME).abs() < f64::EPSILON);
        assert!(game.rabbit_visible);
        assert_eq!(game.phase_timer_ms, 0);
        assert_eq!(game.anim_timer_ms, 0);
        assert_eq!(game.anim_frame, 0);
    }

    #[test]
    fn test_choose_new_hole_valid_and_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut game = RabbitGame::new();

        for _ in 0..500 {
            let prev = (game.current_row, game.current_col);
            game.choose_new_hole(&mut rng);
            assert!(game.current_row < GRID_ROWS);
            assert!(game.current_col < GRID_COLS);
            assert_ne!(
                (game.current_row, game.current_col),
                prev,
                "New hole must differ from the previous one"
            );
        }
    }

    #[test]
    fn test_choose_new_hole_reaches_all_cells() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut game = RabbitGame::new();
        let mut seen = [[false; GRID_COLS]; GRID_ROWS];

        for _ in 0..2000 {
            game.choose_new_hole(&mut rng);
            seen[game.current_row][game.current_col] = true;
        }

        let covered = seen.iter().flatten().filter(|&&s| s).count();
        assert_eq!(covered, GRID_ROWS * GRID_COLS, "Selection should cover the whole grid");
    }

    #[test]
    fn test_button_targets_inside_field() {
        for rect in [
            START_BUTTON,
            QUIT_BUTTON,
            RESTART_BUTTON,
            CONFIRM_MODAL,
            YES_BUTTON,
            NO_BUTTON,
        ] {
            assert!(rect.x >= 0.0 && rect.y >= 0.0);
            assert!(rect.x + rect.w <= FIELD_W as f64);
            assert!(rect.y + rect.h <= FIELD_H as f64);
        }
    }

    #[test]
    fn test_confirm_buttons_inside_modal() {
        for rect in [YES_BUTTON, NO_BUTTON] {
            assert!(rect.x >= CONFIRM_MODAL.x);
            assert!(rect.y >= CONFIRM_MODAL.y);
            assert!(rect.x + rect.w <= CONFIRM_MODAL.x + CONFIRM_MODAL.w);
            assert!(rect.y + rect.h <= CONFIRM_MODAL.y + CONFIRM_MODAL.h);
        }
    }

    #[test]
    fn test_yes_no_buttons_disjoint() {
        // No point may land in both buttons.
        assert!(YES_BUTTON.x + YES_BUTTON.w <= NO_BUTTON.x);
    }
}
