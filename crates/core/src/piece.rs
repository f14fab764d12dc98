//! Piece module - the active falling piece
//!
//! An [`ActivePiece`] is a small `Copy` record: kind, anchor, rotation index
//! and an alive flag. Mutators never validate; the simulation applies them to
//! a copy, asks [`ActivePiece::is_valid`], and only then commits the copy.

use crate::board::Board;
use crate::shapes::ShapeCatalog;
use crate::types::{Direction, Offset, PieceKind, Rotation};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: PieceKind,
    x: i32,
    y: i32,
    rotation: Rotation,
    alive: bool,
}

impl ActivePiece {
    /// Create a live piece at (x, y) in its base orientation
    pub fn spawn(x: i32, y: i32, kind: PieceKind) -> Self {
        Self {
            kind,
            x,
            y,
            rotation: Rotation::North,
            alive: true,
        }
    }

    /// Reinitialise this piece in place, as [`ActivePiece::spawn`]
    pub fn respawn(&mut self, x: i32, y: i32, kind: PieceKind) {
        *self = Self::spawn(x, y, kind);
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Anchor coordinate
    pub fn position(&self) -> Offset {
        (self.x, self.y)
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Absolute occupied cells: anchor + offsets for the current rotation
    pub fn cells(&self, catalog: &ShapeCatalog) -> [Offset; 4] {
        catalog
            .offsets(self.kind, self.rotation)
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Whether every occupied cell is a legal position on `board`
    ///
    /// The side walls and the floor always apply. Cells above the visible
    /// ceiling have not entered the grid yet, so they skip the collision test.
    pub fn is_valid(&self, catalog: &ShapeCatalog, board: &Board) -> bool {
        self.cells(catalog).iter().all(|&(x, y)| {
            if x < 0 || y < 0 || x >= board.width() {
                return false;
            }
            y >= board.height() || !board.is_occupied_for_collision(x, y)
        })
    }

    /// Translate the anchor by one unit (unvalidated)
    pub fn shift(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.x += dx;
        self.y += dy;
    }

    /// Advance the rotation index clockwise (unvalidated)
    ///
    /// The square shape has a single orientation, so this is a no-op for it.
    pub fn rotate(&mut self) {
        if self.kind == PieceKind::O {
            return;
        }
        self.rotation = self.rotation.rotate_cw();
    }

    /// Mark the piece settled; irreversible for this instance
    pub fn lock(&mut self) {
        self.alive = false;
    }
}
