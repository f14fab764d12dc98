//! BoardView: maps a `Simulation` into a character frame.
//!
//! This module is pure (no I/O). It reads the board through the simulation's
//! cell enumeration once per frame, so it always sees a completed commit.

use crate::core::{Phase, Simulation};
use crate::frame::{Frame, Tone};
use crate::types::CellState;

/// Columns between the board frame and the side panel
const PANEL_GAP: u16 = 2;

/// Width reserved for the side panel
const PANEL_WIDTH: u16 = 10;

/// Terminal layout for the board and its side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    show_panel: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            show_panel: true,
        }
    }
}

impl BoardView {
    pub fn without_panel(mut self) -> Self {
        self.show_panel = false;
        self
    }

    /// Frame size needed for `sim`
    pub fn frame_size(&self, sim: &Simulation) -> (u16, u16) {
        let board = sim.board();
        let frame_w = board.width() as u16 * self.cell_w + 2;
        let frame_h = board.height() as u16 + 2;
        if self.show_panel {
            (frame_w + PANEL_GAP + PANEL_WIDTH, frame_h)
        } else {
            (frame_w, frame_h)
        }
    }

    pub fn render(&self, sim: &Simulation) -> Frame {
        let (w, h) = self.frame_size(sim);
        let mut frame = Frame::new(w, h);
        let board_h = sim.board().height() as u16;
        let frame_w = sim.board().width() as u16 * self.cell_w + 2;

        self.draw_border(&mut frame, frame_w, board_h + 2);

        for (x, y, state) in sim.cells() {
            // Screen rows grow downward; board rows grow upward.
            let row = 1 + (board_h - 1 - y as u16);
            let col = 1 + x as u16 * self.cell_w;
            let (glyph, tone) = match state {
                CellState::Empty => (" .", Tone::Empty),
                CellState::Active => ("[]", Tone::Active),
                CellState::Locked => ("##", Tone::Locked),
            };
            frame.put_str(col, row, glyph, tone);
        }

        if self.show_panel {
            self.draw_panel(&mut frame, sim, frame_w + PANEL_GAP);
        }

        if sim.phase() == Phase::GameOver {
            let text = "GAME OVER";
            let col = frame_w.saturating_sub(text.len() as u16) / 2;
            frame.put_str(col, (board_h + 2) / 2, text, Tone::Alert);
        }

        frame
    }

    fn draw_border(&self, frame: &mut Frame, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        frame.put(0, 0, '┌', Tone::Border);
        frame.put(w - 1, 0, '┐', Tone::Border);
        frame.put(0, h - 1, '└', Tone::Border);
        frame.put(w - 1, h - 1, '┘', Tone::Border);

        for dx in 1..w - 1 {
            frame.put(dx, 0, '─', Tone::Border);
            frame.put(dx, h - 1, '─', Tone::Border);
        }
        for dy in 1..h - 1 {
            frame.put(0, dy, '│', Tone::Border);
            frame.put(w - 1, dy, '│', Tone::Border);
        }
    }

    fn draw_panel(&self, frame: &mut Frame, sim: &Simulation, col: u16) {
        let entries = [
            ("NEXT", sim.next_kind().as_str().to_uppercase()),
            ("ROWS", sim.rows_cleared().to_string()),
            ("PIECES", sim.pieces_spawned().to_string()),
            ("SPEED", sim.speed().to_string()),
        ];

        let mut row = 1;
        for (label, value) in entries {
            frame.put_str(col, row, label, Tone::Label);
            frame.put_str(col, row + 1, &value, Tone::Plain);
            row += 3;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimConfig;
    use crate::types::PieceKind;

    #[test]
    fn frame_size_includes_border_and_panel() {
        let sim = Simulation::new(SimConfig::default()).unwrap();
        assert_eq!(BoardView::default().frame_size(&sim), (22 + 12, 22));
        assert_eq!(BoardView::default().without_panel().frame_size(&sim), (22, 22));
    }

    #[test]
    fn floor_row_is_last_board_line() {
        let mut sim = Simulation::new(SimConfig::default().with_spawn(4, 1)).unwrap();
        sim.set_next_kind(PieceKind::O);
        sim.gravity_tick();
        sim.gravity_tick();

        let lines = BoardView::default().without_panel().render(&sim).lines();
        // O anchored at (4, 0): rows 0 and 1, columns 4 and 5.
        assert_eq!(lines[20], "│ . . . .[][] . . . .│");
        assert_eq!(lines[19], "│ . . . .[][] . . . .│");
        assert_eq!(lines[18], "│ . . . . . . . . . .│");
    }

    #[test]
    fn panel_shows_next_kind() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        sim.set_next_kind(PieceKind::Z);
        let lines = BoardView::default().render(&sim).lines();
        assert!(lines[1].ends_with("NEXT"));
        assert!(lines[2].ends_with('Z'));
    }
}
