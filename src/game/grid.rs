//! Hole grid geometry.
//!
//! The playfield is a fixed-size rectangle of terminal cells, centered in the
//! terminal by the frame loop. All gameplay coordinates are field-local; hit
//! testing runs in f64 so the fractional click tolerance survives the small
//! cell sizes.

/// Grid dimensions (holes).
pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 5;

/// Hole cell size in terminal cells.
pub const CELL_W: u16 = 11;
pub const CELL_H: u16 = 5;

/// Grid placement within the field. The top rows are the HUD strip.
pub const GRID_OFFSET_X: u16 = 3;
pub const GRID_OFFSET_Y: u16 = 4;

pub const GRID_W: u16 = GRID_COLS as u16 * CELL_W;
pub const GRID_H: u16 = GRID_ROWS as u16 * CELL_H;

/// Full playfield size. Leaves a bottom strip for the quit button.
pub const FIELD_W: u16 = 61;
pub const FIELD_H: u16 = 33;

/// Rabbit sprite size, centered inside its hole.
pub const RABBIT_W: u16 = 7;
pub const RABBIT_H: u16 = 3;

/// Axis-aligned rectangle in field-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl FieldRect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Point containment (half-open on the far edges, like cell indexing).
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Symmetric enlargement by a fraction of width/height per side,
    /// keeping the rectangle centered.
    pub fn inflated(&self, frac: f64) -> FieldRect {
        let extra_w = self.w * frac;
        let extra_h = self.h * frac;
        FieldRect::new(
            self.x - extra_w,
            self.y - extra_h,
            self.w + 2.0 * extra_w,
            self.h + 2.0 * extra_h,
        )
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Rectangle of the hole at (row, col).
pub fn hole_rect(row: usize, col: usize) -> FieldRect {
    let x = GRID_OFFSET_X + col as u16 * CELL_W;
    let y = GRID_OFFSET_Y + row as u16 * CELL_H;
    FieldRect::new(x as f64, y as f64, CELL_W as f64, CELL_H as f64)
}

/// Display rectangle of the rabbit sprite, centered in its hole.
pub fn rabbit_rect(row: usize, col: usize) -> FieldRect {
    let cell = hole_rect(row, col);
    let rx = cell.x + ((CELL_W - RABBIT_W) / 2) as f64;
    let ry = cell.y + ((CELL_H - RABBIT_H) / 2) as f64;
    FieldRect::new(rx, ry, RABBIT_W as f64, RABBIT_H as f64)
}

/// Top-left corner of the centered field for a given terminal size.
pub fn field_origin(term_width: u16, term_height: u16) -> (u16, u16) {
    (
        term_width.saturating_sub(FIELD_W) / 2,
        term_height.saturating_sub(FIELD_H) / 2,
    )
}
