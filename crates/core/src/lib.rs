//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the falling-block engine: the shape catalog, the board,
//! the active piece and the state machine that ties them together. It has no
//! dependencies on terminals or input devices; collaborators feed it
//! [`Command`](types::Command)s and read cell states back.
//!
//! # Module Structure
//!
//! - [`shapes`]: base offsets for the seven kinds and the precomputed rotation table
//! - [`board`]: width × height grid of `Empty` / `Active` / `Locked` cells
//! - [`piece`]: the active piece record and its validity check
//! - [`simulation`]: spawn, commit-or-discard transforms, gravity and lock
//! - [`rng`]: uniform, independent piece draws from a seeded LCG
//! - [`config`]: simulation parameters and their validation
//! - [`snapshot`]: serialisable copy of the simulation state
//!
//! # Rules
//!
//! - Pieces spawn at a fixed anchor, usually just above the visible ceiling
//! - Moves and rotations are tested on a copy and applied only when valid
//! - A blocked downward step locks the piece; the next gravity tick spawns
//! - Full rows collapse after a lock
//! - A blocked spawn ends the game, as does a lock with any cell above the ceiling
//! - No wall kicks, no hold, no scoring
//!
//! # Example
//!
//! ```
//! use brickfall_core::{SimConfig, Simulation};
//! use brickfall_types::{CellState, Command, PieceKind};
//!
//! let mut sim = Simulation::new(SimConfig::default()).unwrap();
//! sim.set_next_kind(PieceKind::T);
//!
//! // The first gravity tick spawns, later ones drop.
//! sim.apply(Command::GravityTick);
//! sim.apply(Command::GravityTick);
//! sim.apply(Command::MoveLeft);
//!
//! assert_eq!(sim.active().unwrap().position(), (3, 19));
//! assert_eq!(sim.board().count(CellState::Active), 3);
//! ```
//!
//! # Timing
//!
//! Call [`Simulation::fixed_update`] at [`FIXED_UPDATE_HZ`](types::FIXED_UPDATE_HZ).
//! Player commands may be applied any number of times between updates.

pub mod board;
pub mod config;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod simulation;
pub mod snapshot;

pub use brickfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{gravity_threshold, ConfigError, SimConfig, MAX_BOARD_EDGE, MIN_BOARD_EDGE};
pub use piece::ActivePiece;
pub use rng::SimpleRng;
pub use shapes::{base_offsets, rotate_offset, Shape, ShapeCatalog};
pub use simulation::{Phase, Simulation, TickOutcome, Transform};
pub use snapshot::{ActiveSnapshot, SimSnapshot};
