use serde::{Deserialize, Serialize};

use crate::piece::ActivePiece;
use crate::simulation::Phase;
use crate::types::{CellState, PieceKind, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        let (x, y) = value.position();
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x,
            y,
        }
    }
}

/// Point-in-time copy of the simulation for external consumers
///
/// `rows[y][x]`, with `rows[0]` the floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimSnapshot {
    pub width: i32,
    pub height: i32,
    pub rows: Vec<Vec<CellState>>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub phase: Phase,
    pub speed: u8,
    pub rows_cleared: u32,
    pub pieces_spawned: u32,
}

impl SimSnapshot {
    pub fn playable(&self) -> bool {
        self.phase != Phase::GameOver
    }
}
