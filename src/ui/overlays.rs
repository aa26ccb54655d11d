//! State overlays: title screen, quit confirmation, and game over.
//!
//! Buttons are painted on the exact field-local rectangles the click logic
//! tests against, so what you see is what you can click.

use crate::game::grid::{FieldRect, FIELD_W};
use crate::game::types::{CONFIRM_MODAL, NO_BUTTON, QUIT_BUTTON, RESTART_BUTTON, START_BUTTON, YES_BUTTON};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BUTTON_BG: Color = Color::Rgb(255, 215, 0);
const BUTTON_FG: Color = Color::Black;
const TITLE_FG: Color = Color::Rgb(255, 215, 0);

/// Convert a field-local rectangle to terminal coordinates, clipped to the
/// visible frame.
fn abs_rect(frame: &Frame, origin: (u16, u16), rect: FieldRect) -> Option<Rect> {
    let term = frame.size();
    let x = origin.0 + rect.x as u16;
    let y = origin.1 + rect.y as u16;
    if x >= term.width || y >= term.height {
        return None;
    }
    let w = (rect.w as u16).min(term.width - x);
    let h = (rect.h as u16).min(term.height - y);
    Some(Rect::new(x, y, w, h))
}

/// Paint a clickable yellow button with a centered label.
fn draw_button(frame: &mut Frame, origin: (u16, u16), rect: FieldRect, label: &str) {
    let Some(area) = abs_rect(frame, origin, rect) else {
        return;
    };

    let mut lines = vec![Line::from("")];
    if area.height >= 2 {
        lines.push(Line::from(label));
    }
    let button = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(BUTTON_FG)
                .bg(BUTTON_BG)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(button, area);
}

/// Centered title text on the given field row.
fn draw_title(frame: &mut Frame, origin: (u16, u16), field_row: u16, text: &str) {
    let width = text.chars().count() as u16;
    let rect = FieldRect::new(
        ((FIELD_W.saturating_sub(width)) / 2) as f64,
        field_row as f64,
        width as f64,
        1.0,
    );
    let Some(area) = abs_rect(frame, origin, rect) else {
        return;
    };

    let title = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .bg(Color::Reset)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().fg(TITLE_FG));
    frame.render_widget(Clear, area);
    frame.render_widget(title, area);
}

/// Title screen: game name plus the start button.
pub fn render_start_overlay(frame: &mut Frame, origin: (u16, u16)) {
    draw_title(frame, origin, 9, ":: Rabbit Click ::");
    draw_title(frame, origin, 11, "Click the rabbit before it hides!");
    draw_button(frame, origin, START_BUTTON, "Start");
}

/// Quit control shown during play and while confirming.
pub fn render_quit_button(frame: &mut Frame, origin: (u16, u16)) {
    draw_button(frame, origin, QUIT_BUTTON, "Quit");
}

/// Confirm-quit modal with Yes/No buttons. The rabbit stays frozen behind it.
pub fn render_confirm_modal(frame: &mut Frame, origin: (u16, u16)) {
    let Some(area) = abs_rect(frame, origin, CONFIRM_MODAL) else {
        return;
    };

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Quit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .style(Style::default().bg(Color::Rgb(40, 40, 40)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prompt = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure?",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(prompt, inner);

    draw_button(frame, origin, YES_BUTTON, "Yes");
    draw_button(frame, origin, NO_BUTTON, "No");
}

/// Game-over overlay: final score plus the restart button.
pub fn render_game_over(frame: &mut Frame, origin: (u16, u16), score: u32) {
    draw_title(frame, origin, 10, "GAME OVER");
    draw_title(frame, origin, 12, &format!("Final score: {}", score));
    draw_button(frame, origin, RESTART_BUTTON, "Restart");
}
