//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. The caller
//! polls the terminal once per frame and feeds each mapped command straight
//! into the simulation.

pub mod map;

pub use brickfall_types as types;

pub use map::{is_restart, map_key, should_quit};
