//! brickfall (workspace facade crate).
//!
//! Re-exports the workspace crates under `brickfall::{core,input,term,types}`
//! and hosts the command-line configuration shared by the binary.

pub mod cli;

pub use brickfall_core as core;
pub use brickfall_input as input;
pub use brickfall_term as term;
pub use brickfall_types as types;
