//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of [`CellState`] stored as a flat
//! row-major array (`y * width + x`). Coordinates use upward `y`: row 0 is the
//! floor and row `height - 1` is the visible ceiling. Rows at or above
//! `height` are never stored; callers must filter them out before touching the
//! grid.

use arrayvec::ArrayVec;

use crate::config::MAX_BOARD_EDGE;
use crate::types::{CellState, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellState>,
}

impl Board {
    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive or exceeds
    /// [`MAX_BOARD_EDGE`].
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be positive, got {width}x{height}"
        );
        assert!(
            width <= MAX_BOARD_EDGE && height <= MAX_BOARD_EDGE,
            "board dimensions must be at most {MAX_BOARD_EDGE}, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![CellState::Empty; (width * height) as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    #[inline(always)]
    fn index_or_panic(&self, x: i32, y: i32) -> usize {
        match self.index(x, y) {
            Some(idx) => idx,
            None => panic!(
                "board access at ({x}, {y}) is outside the {}x{} grid",
                self.width, self.height
            ),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether (x, y) is a stored cell
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// State at (x, y)
    ///
    /// # Panics
    ///
    /// Panics when (x, y) is off the grid, including rows above the ceiling.
    pub fn state(&self, x: i32, y: i32) -> CellState {
        self.cells[self.index_or_panic(x, y)]
    }

    /// Unconditional write at (x, y)
    ///
    /// # Panics
    ///
    /// Panics when (x, y) is off the grid.
    pub fn set_state(&mut self, x: i32, y: i32, state: CellState) {
        let idx = self.index_or_panic(x, y);
        self.cells[idx] = state;
    }

    /// State at (x, y), or `None` when off the grid
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// True iff the cell blocks a falling piece
    ///
    /// Only `Locked` cells collide; `Active` cells belong to the piece that is
    /// being tested.
    pub fn is_occupied_for_collision(&self, x: i32, y: i32) -> bool {
        self.state(x, y) == CellState::Locked
    }

    /// Enumerate every cell as `(x, y, state)`, bottom row first
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, CellState)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &state)| (idx as i32 % width, idx as i32 / width, state))
    }

    /// Row `y` as a slice, left to right
    ///
    /// # Panics
    ///
    /// Panics when `y` is off the grid.
    pub fn row(&self, y: i32) -> &[CellState] {
        assert!(
            y >= 0 && y < self.height,
            "row {y} is outside the {}-row grid",
            self.height
        );
        let start = (y * self.width) as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Number of cells in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Check if a row is completely filled with locked cells
    pub fn is_row_full(&self, y: i32) -> bool {
        if y < 0 || y >= self.height {
            return false;
        }
        self.row(y).iter().all(|&c| c == CellState::Locked)
    }

    /// Clear all full rows and return the row indices that were cleared
    /// (sorted bottom to top)
    ///
    /// Rows above a cleared row fall to fill the gap. Uses a two-pointer pass
    /// with no allocation. A single piece spans at most four rows, so at most
    /// four rows can be full after a lock.
    pub fn clear_full_rows(&mut self) -> ArrayVec<i32, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = self.width as usize;
        let mut write_y = 0usize;

        // Scan from bottom to top
        for read_y in 0..self.height as usize {
            if self.is_row_full(read_y as i32) {
                if cleared_rows.try_push(read_y as i32).is_err() {
                    log::warn!("more than four full rows at once; row {read_y} kept");
                    self.copy_row(read_y, write_y, width);
                    write_y += 1;
                }
            } else {
                self.copy_row(read_y, write_y, width);
                write_y += 1;
            }
        }

        // Clear the vacated rows at the top
        for cell in &mut self.cells[write_y * width..] {
            *cell = CellState::Empty;
        }

        cleared_rows
    }

    #[inline]
    fn copy_row(&mut self, from: usize, to: usize, width: usize) {
        if from != to {
            let src_start = from * width;
            self.cells
                .copy_within(src_start..src_start + width, to * width);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = CellState::Empty;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
