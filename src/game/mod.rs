//! Core game modules: grid geometry, state, and the timing/state machine.

pub mod grid;
pub mod logic;
pub mod types;

#[allow(unused_imports)]
pub use logic::{handle_click, handle_escape, tick_game, ClickOutcome};
#[allow(unused_imports)]
pub use types::{GamePhase, RabbitGame};
