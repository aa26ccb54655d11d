// Rabbit visibility timing constants (seconds)
pub const START_VISIBLE_TIME: f64 = 1.0;
pub const START_HIDDEN_TIME: f64 = 1.0;
pub const MIN_TIME: f64 = 0.3;
pub const TIME_STEP_PER_10PTS: f64 = 0.1;

// Rabbit animation: simple 2-frame toggle while visible
pub const RABBIT_ANIM_FPS: u64 = 6;

// Fractional enlargement of the rabbit rectangle for forgiving clicks
pub const CLICK_TOLERANCE: f64 = 0.15;

// Frame loop timing
pub const FRAME_POLL_MS: u64 = 16;
pub const MAX_TICK_MS: u64 = 100;

// Grass decor texture (dedicated seeded RNG, separate from gameplay RNG)
pub const GRASS_SEED: u64 = 42;
pub const GRASS_TUFTS: usize = 240;
