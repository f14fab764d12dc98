//! Terminal rendering module.
//!
//! Renders the simulation into a character [`Frame`] and flushes it to the
//! terminal. The simulation is only ever read, after a command or tick has
//! completed.
//!
//! - [`board_view`]: pure mapping from cell states to glyphs
//! - [`renderer`]: crossterm output

pub mod board_view;
pub mod frame;
pub mod renderer;

pub use brickfall_core as core;
pub use brickfall_types as types;

pub use board_view::BoardView;
pub use frame::{Frame, Glyph, Tone};
pub use renderer::{encode_frame_into, TerminalRenderer};
