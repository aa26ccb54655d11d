//! Input dispatch for the frame loop.
//!
//! Translates crossterm events into game-logic calls. Only primary-button
//! mouse-down events are meaningful; coordinates are converted from absolute
//! terminal cells to field-local space, and clicks outside the playfield are
//! dropped before they reach the logic layer.

use crate::game::grid::{FIELD_H, FIELD_W};
use crate::game::logic::{handle_click, handle_escape};
use crate::game::types::RabbitGame;
use crossterm::event::{Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the frame loop.
    Continue,
    /// The player confirmed quitting; tear down and exit.
    Exit,
}

/// Dispatch a single terminal event against the game state.
///
/// `origin` is the top-left corner of the centered playfield, as computed by
/// `grid::field_origin` for the current terminal size.
pub fn handle_event<R: Rng>(
    event: &Event,
    game: &mut RabbitGame,
    origin: (u16, u16),
    rng: &mut R,
) -> InputResult {
    match event {
        Event::Key(key) => {
            if key.code == KeyCode::Esc {
                handle_escape(game);
            }
        }
        Event::Mouse(mouse) => {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                if let Some((x, y)) = to_field_coords(mouse, origin) {
                    handle_click(game, x, y, rng);
                }
            }
        }
        _ => {}
    }

    if game.exit_requested {
        InputResult::Exit
    } else {
        InputResult::Continue
    }
}

/// Convert absolute terminal coordinates to field-local ones, or None if the
/// click landed outside the playfield.
fn to_field_coords(mouse: &MouseEvent, origin: (u16, u16)) -> Option<(u16, u16)> {
    let (ox, oy) = origin;
    if mouse.column < ox || mouse.row < oy {
        return None;
    }
    let x = mouse.column - ox;
    let y = mouse.row - oy;
    if x >= FIELD_W || y >= FIELD_H {
        return None;
    }
    Some((x, y))
}
