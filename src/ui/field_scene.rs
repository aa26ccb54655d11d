//! Playfield rendering: grass, hole grid, rabbit, and HUD.
//!
//! Uses a cell buffer for per-character color control. Grass, holes, and the
//! rabbit are painted into a 2D grid and then stamped row-by-row as
//! Paragraph widgets with run-length styled spans.

use super::sprites;
use crate::constants::{GRASS_SEED, GRASS_TUFTS};
use crate::game::grid::{
    hole_rect, rabbit_rect, FIELD_H, FIELD_W, GRID_COLS, GRID_H, GRID_OFFSET_X, GRID_OFFSET_Y,
    GRID_ROWS, GRID_W,
};
use crate::game::types::{GamePhase, RabbitGame};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Palette ─────────────────────────────────────────────────────────
const GRASS: Color = Color::Rgb(34, 139, 34);
const GRASS_DARK: Color = Color::Rgb(26, 105, 26);
const HOLE_BORDER: Color = Color::Rgb(181, 101, 29);
const HOLE_FILL: Color = Color::Rgb(101, 67, 33);
const HUD_BG: Color = Color::Rgb(20, 20, 20);
const RABBIT_BODY: Color = Color::Rgb(235, 235, 235);

const TUFT_CHARS: [char; 4] = ['\'', '"', ',', '`'];

/// HUD strip height (rows above the grid).
const HUD_ROWS: u16 = 3;

/// Cell in the render buffer with foreground and background colors.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Render the playfield at the given origin, clipped to the terminal.
pub fn render_field(frame: &mut Frame, origin: (u16, u16), game: &RabbitGame) {
    let term = frame.size();
    let render_w = FIELD_W.min(term.width.saturating_sub(origin.0));
    let render_h = FIELD_H.min(term.height.saturating_sub(origin.1));
    if render_w < 10 || render_h < 5 {
        return;
    }

    let mut buffer: Vec<Vec<Cell>> =
        vec![vec![Cell::default(); FIELD_W as usize]; FIELD_H as usize];

    paint_grass(&mut buffer);
    paint_hud(&mut buffer, game);
    paint_holes(&mut buffer);

    if matches!(game.phase, GamePhase::Play | GamePhase::ConfirmQuit) && game.rabbit_visible {
        paint_rabbit(&mut buffer, game);
    }

    // ── Stamp buffer rows to the terminal ─────────────────────────────
    for (row_idx, row_data) in buffer.iter().enumerate().take(render_h as usize) {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter().take(render_w as usize) {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(origin.0, origin.1 + row_idx as u16, render_w, 1);
        frame.render_widget(line, row_area);
    }
}

/// Grass base plus seeded tuft texture. The decor RNG is rebuilt with a
/// fixed seed every frame so the texture is static and reproducible, and
/// gameplay sampling never shifts it.
fn paint_grass(buffer: &mut [Vec<Cell>]) {
    for row in buffer.iter_mut() {
        for cell in row.iter_mut() {
            *cell = Cell {
                ch: ' ',
                fg: GRASS_DARK,
                bg: GRASS,
            };
        }
    }

    let mut decor_rng = ChaCha8Rng::seed_from_u64(GRASS_SEED);
    for _ in 0..GRASS_TUFTS {
        let x = decor_rng.gen_range(0..FIELD_W) as usize;
        let y = decor_rng.gen_range(0..FIELD_H) as usize;
        let ch = TUFT_CHARS[decor_rng.gen_range(0..TUFT_CHARS.len())];

        if y < HUD_ROWS as usize {
            continue;
        }
        let in_grid = (GRID_OFFSET_X as usize..(GRID_OFFSET_X + GRID_W) as usize)
            .contains(&x)
            && (GRID_OFFSET_Y as usize..(GRID_OFFSET_Y + GRID_H) as usize).contains(&y);
        if in_grid {
            continue;
        }

        buffer[y][x].ch = ch;
    }
}

/// Top HUD strip; score is shown only mid-round.
fn paint_hud(buffer: &mut [Vec<Cell>], game: &RabbitGame) {
    for row in buffer.iter_mut().take(HUD_ROWS as usize) {
        for cell in row.iter_mut() {
            *cell = Cell {
                ch: ' ',
                fg: Color::White,
                bg: HUD_BG,
            };
        }
    }

    if matches!(game.phase, GamePhase::Play | GamePhase::ConfirmQuit) {
        let text = format!("Score: {}", game.score);
        let start = (FIELD_W as usize).saturating_sub(text.len()) / 2;
        for (i, ch) in text.chars().enumerate() {
            if start + i < FIELD_W as usize {
                buffer[1][start + i].ch = ch;
            }
        }
    }
}

/// Soil boxes: light-brown ring, dark-brown fill.
fn paint_holes(buffer: &mut [Vec<Cell>]) {
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let cell_rect = hole_rect(row, col);
            let x0 = cell_rect.x as usize;
            let y0 = cell_rect.y as usize;
            let w = cell_rect.w as usize;
            let h = cell_rect.h as usize;

            for dy in 0..h {
                for dx in 0..w {
                    let on_ring = dy == 0 || dy == h - 1 || dx == 0 || dx == w - 1;
                    buffer[y0 + dy][x0 + dx] = Cell {
                        ch: ' ',
                        fg: Color::Reset,
                        bg: if on_ring { HOLE_BORDER } else { HOLE_FILL },
                    };
                }
            }
        }
    }
}

/// Stamp the current sprite frame into the rabbit's hole; spaces are
/// transparent.
fn paint_rabbit(buffer: &mut [Vec<Cell>], game: &RabbitGame) {
    let rect = rabbit_rect(game.current_row, game.current_col);
    let sprite = sprites::rabbit_frame(game.anim_frame);
    let x0 = rect.x as usize;
    let y0 = rect.y as usize;

    for (dy, line) in sprite.iter().enumerate() {
        for (dx, ch) in line.chars().enumerate() {
            if ch != ' ' {
                buffer[y0 + dy][x0 + dx] = Cell {
                    ch,
                    fg: RABBIT_BODY,
                    bg: HOLE_FILL,
                };
            }
        }
    }
}
