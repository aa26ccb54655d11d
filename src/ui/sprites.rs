//! Rabbit sprite frames.
//!
//! Two 7x3 ASCII frames; frame B blinks for a simple idle wiggle. Spaces are
//! transparent when stamped into the field buffer.

pub const RABBIT_FRAME_A: [&str; 3] = [" (\\_/) ", " (o.o) ", " (> <) "];
pub const RABBIT_FRAME_B: [&str; 3] = [" (\\_/) ", " (-.-) ", " (> <) "];

/// Pick the sprite for the current animation frame (0 or 1).
pub fn rabbit_frame(anim_frame: u32) -> &'static [&'static str; 3] {
    if anim_frame == 0 {
        &RABBIT_FRAME_A
    } else {
        &RABBIT_FRAME_B
    }
}
