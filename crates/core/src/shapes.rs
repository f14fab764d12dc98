//! Shapes module - tetromino base shapes and the rotation table
//!
//! Each kind is four offsets around a pivot at `(0, 0)`. Rotation variants
//! are derived from the base by repeated clockwise quarter turns
//! `(x, y) -> (y, -x)`, computed once when the catalog is built.

use crate::types::{Offset, PieceKind, Rotation};

/// Shape of a piece - 4 offsets from the piece anchor
pub type Shape = [Offset; 4];

/// Rotation variants of a single kind, indexed by [`Rotation::index`]
pub type RotationSet = [Shape; 4];

/// Base (rotation 0) offsets for a piece kind
pub fn base_offsets(kind: PieceKind) -> Shape {
    match kind {
        // Vertical bar
        PieceKind::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
        PieceKind::O => [(1, 1), (0, 1), (0, 0), (1, 0)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        PieceKind::S => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        PieceKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
        PieceKind::L => [(0, 1), (0, 0), (0, -1), (1, -1)],
        PieceKind::J => [(0, 1), (0, 0), (0, -1), (-1, -1)],
    }
}

/// Clockwise quarter turn around the pivot
#[inline(always)]
pub fn rotate_offset((x, y): Offset) -> Offset {
    (y, -x)
}

fn rotate_shape(shape: &Shape) -> Shape {
    shape.map(rotate_offset)
}

fn rotation_set(kind: PieceKind) -> RotationSet {
    let base = base_offsets(kind);
    // The square never turns.
    if kind == PieceKind::O {
        return [base; 4];
    }

    let mut set = [base; 4];
    for k in 1..4 {
        set[k] = rotate_shape(&set[k - 1]);
    }
    set
}

/// Precomputed rotation table for all seven kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    table: [RotationSet; 7],
}

impl ShapeCatalog {
    /// Build the full table up front
    pub fn new() -> Self {
        Self {
            table: PieceKind::ALL.map(rotation_set),
        }
    }

    /// Offsets for `kind` in orientation `rotation`
    #[inline]
    pub fn offsets(&self, kind: PieceKind, rotation: Rotation) -> &Shape {
        &self.table[kind.index()][rotation.index()]
    }

    /// All four variants for `kind`
    pub fn variants(&self, kind: PieceKind) -> &RotationSet {
        &self.table[kind.index()]
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_base_contains_pivot() {
        for kind in PieceKind::ALL {
            assert!(
                base_offsets(kind).contains(&(0, 0)),
                "{:?} base has no pivot cell",
                kind
            );
        }
    }

    #[test]
    fn test_variant_zero_is_base() {
        let catalog = ShapeCatalog::new();
        for kind in PieceKind::ALL {
            assert_eq!(*catalog.offsets(kind, Rotation::North), base_offsets(kind));
        }
    }

    #[test]
    fn test_each_variant_is_previous_turned() {
        let catalog = ShapeCatalog::new();
        for kind in PieceKind::ALL.into_iter().filter(|k| *k != PieceKind::O) {
            let set = catalog.variants(kind);
            for k in 1..4 {
                assert_eq!(set[k], rotate_shape(&set[k - 1]), "{:?} variant {}", kind, k);
            }
        }
    }

    #[test]
    fn test_rotate_offset_is_clockwise() {
        // Up -> right -> down -> left
        assert_eq!(rotate_offset((0, 1)), (1, 0));
        assert_eq!(rotate_offset((1, 0)), (0, -1));
        assert_eq!(rotate_offset((0, -1)), (-1, 0));
        assert_eq!(rotate_offset((-1, 0)), (0, 1));
    }

    #[test]
    fn test_t_east_variant() {
        let catalog = ShapeCatalog::new();
        assert_eq!(
            *catalog.offsets(PieceKind::T, Rotation::East),
            [(0, 1), (0, 0), (0, -1), (1, 0)]
        );
    }

    #[test]
    fn test_square_variants_identical() {
        let catalog = ShapeCatalog::new();
        let set = catalog.variants(PieceKind::O);
        assert!(set.iter().all(|v| *v == [(1, 1), (0, 1), (0, 0), (1, 0)]));
    }
}
