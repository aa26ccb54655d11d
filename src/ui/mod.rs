//! Terminal rendering. The game core never depends on anything in here.

mod field_scene;
mod overlays;
mod sprites;

use crate::game::grid;
use crate::game::types::{GamePhase, RabbitGame};
use ratatui::Frame;

/// Draw the whole screen for the current phase.
pub fn draw_ui(frame: &mut Frame, game: &RabbitGame) {
    let size = frame.size();
    let origin = grid::field_origin(size.width, size.height);

    field_scene::render_field(frame, origin, game);

    match game.phase {
        GamePhase::Start => overlays::render_start_overlay(frame, origin),
        GamePhase::Play => overlays::render_quit_button(frame, origin),
        GamePhase::ConfirmQuit => {
            overlays::render_quit_button(frame, origin);
            overlays::render_confirm_modal(frame, origin);
        }
        GamePhase::GameOver => overlays::render_game_over(frame, origin, game.score),
    }
}
