//! Rabbit Click - terminal whack-a-rabbit library.
//!
//! Exposes the game's timing/state engine for testing; rendering stays
//! private since it is tightly coupled to the terminal.

// Allow dead code in library - some items are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;

mod ui;

pub use game::{GamePhase, RabbitGame};
