//! Game state machine: timers, click routing, and hit detection.

use crate::constants::*;
use crate::game::grid::rabbit_rect;
use crate::game::types::{
    GamePhase, RabbitGame, NO_BUTTON, QUIT_BUTTON, RESTART_BUTTON, START_BUTTON, YES_BUTTON,
};
use rand::Rng;

/// What a click resolved to. The frame loop only needs `ExitConfirmed`;
/// the rest exist for tests and status rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A round began (Start or GameOver restart).
    Started,
    /// The visible rabbit was clicked.
    Hit,
    /// A Play-phase click that was neither the rabbit nor the quit button.
    Miss,
    /// The quit control was clicked; awaiting confirmation.
    QuitRequested,
    /// "No" on the confirm dialog; play resumes.
    Resumed,
    /// "Yes" on the confirm dialog; the process should exit.
    ExitConfirmed,
    /// Click outside every hit-target in a state where that is a no-op.
    Ignored,
}

/// Advance the visibility and animation timers.
///
/// `dt_ms` is milliseconds since the last frame. Only runs during Play, so
/// ConfirmQuit freezes the rabbit in place. Returns true if visible state
/// changed (hide, reveal, or animation toggle).
pub fn tick_game<R: Rng>(game: &mut RabbitGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.phase != GamePhase::Play {
        return false;
    }

    // Clamp dt so a stalled terminal doesn't fast-forward the round
    let dt_ms = dt_ms.min(MAX_TICK_MS);
    if dt_ms == 0 {
        return false;
    }

    game.phase_timer_ms += dt_ms;
    let mut changed = false;

    // Animation toggle, independent of the visibility phase
    if game.rabbit_visible {
        game.anim_timer_ms += dt_ms;
        let frame_interval = 1000 / RABBIT_ANIM_FPS;
        if game.anim_timer_ms >= frame_interval {
            game.anim_timer_ms = 0;
            game.anim_frame = 1 - game.anim_frame;
            changed = true;
        }
    }

    if game.rabbit_visible {
        if game.phase_timer_ms >= (game.visible_time * 1000.0) as u64 {
            game.rabbit_visible = false;
            game.phase_timer_ms = 0;
            changed = true;
        }
    } else if game.phase_timer_ms >= (game.hidden_time * 1000.0) as u64 {
        game.choose_new_hole(rng);
        game.rabbit_visible = true;
        game.phase_timer_ms = 0;
        changed = true;
    }

    changed
}

/// Route a primary-button click at field-local (x, y).
///
/// Total over (phase, target): every combination resolves to an outcome and
/// clicks outside the defined targets in Start/ConfirmQuit/GameOver are
/// no-ops. During Play, any click that is neither the quit control nor the
/// rabbit's inflated hitbox ends the round.
pub fn handle_click<R: Rng>(game: &mut RabbitGame, x: u16, y: u16, rng: &mut R) -> ClickOutcome {
    let (px, py) = (x as f64, y as f64);

    match game.phase {
        GamePhase::Start => {
            if START_BUTTON.contains(px, py) {
                game.start_round(rng);
                ClickOutcome::Started
            } else {
                ClickOutcome::Ignored
            }
        }

        GamePhase::Play => {
            if QUIT_BUTTON.contains(px, py) {
                game.phase = GamePhase::ConfirmQuit;
                return ClickOutcome::QuitRequested;
            }

            if game.rabbit_visible {
                let hitbox =
                    rabbit_rect(game.current_row, game.current_col).inflated(CLICK_TOLERANCE);
                if hitbox.contains(px, py) {
                    register_hit(game);
                    return ClickOutcome::Hit;
                }
            }

            // Miss anywhere, or a click while the rabbit is hidden
            game.phase = GamePhase::GameOver;
            ClickOutcome::Miss
        }

        GamePhase::ConfirmQuit => {
            if YES_BUTTON.contains(px, py) {
                game.exit_requested = true;
                ClickOutcome::ExitConfirmed
            } else if NO_BUTTON.contains(px, py) {
                // Resume with timers exactly where they left off
                game.phase = GamePhase::Play;
                ClickOutcome::Resumed
            } else {
                ClickOutcome::Ignored
            }
        }

        GamePhase::GameOver => {
            if RESTART_BUTTON.contains(px, py) {
                game.start_round(rng);
                ClickOutcome::Started
            } else {
                ClickOutcome::Ignored
            }
        }
    }
}

/// Keyboard quit control: Esc opens the confirm dialog during Play, cancels
/// it during ConfirmQuit, and exits outright from the title and game-over
/// screens.
pub fn handle_escape(game: &mut RabbitGame) {
    match game.phase {
        GamePhase::Play => game.phase = GamePhase::ConfirmQuit,
        GamePhase::ConfirmQuit => game.phase = GamePhase::Play,
        GamePhase::Start | GamePhase::GameOver => game.exit_requested = true,
    }
}

/// Score a successful hit: bump the score, step difficulty every 10th point,
/// and hide the rabbit immediately so the hidden countdown restarts fresh.
fn register_hit(game: &mut RabbitGame) {
    game.score += 1;
    if game.score % 10 == 0 {
        game.visible_time = (game.visible_time - TIME_STEP_PER_10PTS).max(MIN_TIME);
        game.hidden_time = (game.hidden_time - TIME_STEP_PER_10PTS).max(MIN_TIME);
    }
    game.rabbit_visible = false;
    game.phase_timer_ms = 0;
}
