//! Simulation module - owns the board and the active piece
//!
//! Every piece mutation goes through one commit-or-discard routine
//! ([`Simulation::try_transform`]): copy the committed piece, apply the
//! transform to the copy, validate the copy, and only then erase the old cells
//! and paint the new ones. A failed downward step locks the piece in place;
//! the next gravity tick spawns its replacement.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::{gravity_threshold, ConfigError, SimConfig};
use crate::piece::ActivePiece;
use crate::rng::SimpleRng;
use crate::shapes::ShapeCatalog;
use crate::snapshot::{ActiveSnapshot, SimSnapshot};
use crate::types::{CellState, Command, Direction, Offset, PieceKind, MAX_SPEED_LEVEL};

/// Engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Waiting for the next gravity tick to spawn a piece
    NoActivePiece,
    /// A live piece is in play
    PieceFalling,
    /// The stack reached the ceiling; only [`Simulation::reset`] leaves this
    GameOver,
}

/// A speculative change to the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Shift(Direction),
    Rotate,
}

impl Transform {
    fn apply(self, piece: &mut ActivePiece) {
        match self {
            Transform::Shift(direction) => piece.shift(direction),
            Transform::Rotate => piece.rotate(),
        }
    }
}

/// What a gravity tick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new piece of this kind entered play
    Spawned(PieceKind),
    /// The active piece moved down one row
    Dropped,
    /// The active piece settled; lists the rows that were cleared
    Locked { cleared: ArrayVec<i32, 4> },
    /// The spawn point was blocked, or a piece locked above the ceiling
    GameOver,
    /// Nothing to do (game already over)
    Idle,
}

impl TickOutcome {
    /// Whether the tick changed any state
    pub fn changed(&self) -> bool {
        !matches!(self, TickOutcome::Idle)
    }
}

/// The falling-block simulation context
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    catalog: ShapeCatalog,
    board: Board,
    /// Committed piece. Not alive between a lock and the next spawn.
    piece: ActivePiece,
    next_kind: PieceKind,
    rng: SimpleRng,
    game_over: bool,
    speed: u8,
    tick_counter: u32,
    rows_cleared: u32,
    pieces_spawned: u32,
}

impl Simulation {
    /// Build a simulation, including the full rotation table
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = SimpleRng::new(config.seed);
        let next_kind = rng.next_kind();

        Ok(Self {
            config,
            catalog: ShapeCatalog::new(),
            board: Board::new(config.width, config.height),
            piece: Self::dead_piece(&config),
            next_kind,
            rng,
            game_over: false,
            speed: config.speed,
            tick_counter: 0,
            rows_cleared: 0,
            pieces_spawned: 0,
        })
    }

    fn dead_piece(config: &SimConfig) -> ActivePiece {
        let mut piece = ActivePiece::spawn(config.spawn_x, config.spawn_y, PieceKind::I);
        piece.lock();
        piece
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// State of a board cell (see [`Board::state`] for the bounds contract)
    pub fn cell(&self, x: i32, y: i32) -> CellState {
        self.board.state(x, y)
    }

    /// Every board cell as `(x, y, state)`
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, CellState)> + '_ {
        self.board.cells()
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.piece.is_alive() {
            Phase::PieceFalling
        } else {
            Phase::NoActivePiece
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The piece in play, if any
    pub fn active(&self) -> Option<ActivePiece> {
        (self.phase() == Phase::PieceFalling).then_some(self.piece)
    }

    /// Absolute cells of the piece in play, including rows above the ceiling
    pub fn active_cells(&self) -> Option<[Offset; 4]> {
        self.active().map(|p| p.cells(&self.catalog))
    }

    /// Kind the next spawn will use
    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    /// Override the kind the next spawn will use
    pub fn set_next_kind(&mut self, kind: PieceKind) {
        self.next_kind = kind;
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Change the speed level (clamped to 0..=9)
    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.min(MAX_SPEED_LEVEL);
    }

    /// Fixed updates per gravity step at the current speed
    pub fn gravity_threshold(&self) -> u32 {
        gravity_threshold(self.speed)
    }

    pub fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    /// Total rows cleared since the last reset
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Total pieces spawned since the last reset
    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Apply a command; returns whether anything changed
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_transform(Transform::Shift(Direction::Left)),
            Command::MoveRight => self.try_transform(Transform::Shift(Direction::Right)),
            Command::Rotate => self.try_transform(Transform::Rotate),
            Command::GravityTick => self.gravity_tick().changed(),
        }
    }

    /// Advance the gravity cadence by one fixed update
    ///
    /// Returns the gravity outcome on the update that reaches the threshold.
    pub fn fixed_update(&mut self) -> Option<TickOutcome> {
        if self.game_over {
            return None;
        }
        self.tick_counter += 1;
        if self.tick_counter < self.gravity_threshold() {
            return None;
        }
        self.tick_counter = 0;
        Some(self.gravity_tick())
    }

    /// One gravity step: spawn, drop, or lock
    pub fn gravity_tick(&mut self) -> TickOutcome {
        match self.phase() {
            Phase::GameOver => TickOutcome::Idle,
            Phase::NoActivePiece => self.spawn_next(),
            Phase::PieceFalling => {
                if self.try_transform(Transform::Shift(Direction::Down)) {
                    TickOutcome::Dropped
                } else {
                    self.lock_piece()
                }
            }
        }
    }

    /// Copy, transform, validate, then commit or discard
    ///
    /// Returns false (and changes nothing) when no piece is in play, the
    /// transform leaves the piece as it was, or the transformed copy is not
    /// valid.
    pub fn try_transform(&mut self, transform: Transform) -> bool {
        if self.phase() != Phase::PieceFalling {
            return false;
        }

        let mut candidate = self.piece;
        transform.apply(&mut candidate);
        if candidate == self.piece {
            return false;
        }

        if !candidate.is_valid(&self.catalog, &self.board) {
            log::trace!("rejected {:?} for {:?}", transform, self.piece);
            return false;
        }

        self.commit(candidate);
        true
    }

    /// Replace the committed piece, rewriting its cells on the board
    fn commit(&mut self, next: ActivePiece) {
        self.erase_piece();
        self.piece = next;
        self.paint_piece();
    }

    fn erase_piece(&mut self) {
        let height = self.board.height();
        for (x, y) in self.piece.cells(&self.catalog) {
            if y < height {
                self.board.set_state(x, y, CellState::Empty);
            }
        }
    }

    fn paint_piece(&mut self) {
        let height = self.board.height();
        let state = if self.piece.is_alive() {
            CellState::Active
        } else {
            CellState::Locked
        };
        for (x, y) in self.piece.cells(&self.catalog) {
            if y < height {
                self.board.set_state(x, y, state);
            }
        }
    }

    fn spawn_next(&mut self) -> TickOutcome {
        let kind = self.next_kind;
        let piece = ActivePiece::spawn(self.config.spawn_x, self.config.spawn_y, kind);
        self.next_kind = self.rng.next_kind();

        if !piece.is_valid(&self.catalog, &self.board) {
            self.game_over = true;
            log::info!(
                "spawn of {:?} at ({}, {}) blocked; game over after {} pieces",
                kind,
                self.config.spawn_x,
                self.config.spawn_y,
                self.pieces_spawned
            );
            return TickOutcome::GameOver;
        }

        self.piece = piece;
        self.paint_piece();
        self.pieces_spawned += 1;
        log::debug!("spawned {:?}, next {:?}", kind, self.next_kind);
        TickOutcome::Spawned(kind)
    }

    fn lock_piece(&mut self) -> TickOutcome {
        let mut locked = self.piece;
        locked.lock();
        self.commit(locked);
        log::debug!("locked {:?} at {:?}", locked.kind(), locked.position());

        let height = self.board.height();
        if locked.cells(&self.catalog).iter().any(|&(_, y)| y >= height) {
            self.game_over = true;
            log::info!(
                "{:?} locked above the ceiling at {:?}; game over after {} pieces",
                locked.kind(),
                locked.position(),
                self.pieces_spawned
            );
            return TickOutcome::GameOver;
        }

        let cleared = if self.config.clear_rows {
            self.board.clear_full_rows()
        } else {
            ArrayVec::new()
        };
        if !cleared.is_empty() {
            self.rows_cleared += cleared.len() as u32;
            log::debug!("cleared rows {:?}", cleared.as_slice());
        }

        TickOutcome::Locked { cleared }
    }

    /// Start over on an empty board; the RNG sequence continues
    pub fn reset(&mut self) {
        self.board.clear();
        self.piece = Self::dead_piece(&self.config);
        self.next_kind = self.rng.next_kind();
        self.game_over = false;
        self.tick_counter = 0;
        self.rows_cleared = 0;
        self.pieces_spawned = 0;
    }

    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            rows: (0..self.board.height())
                .map(|y| self.board.row(y).to_vec())
                .collect(),
            active: self.active().map(ActiveSnapshot::from),
            next: self.next_kind,
            phase: self.phase(),
            speed: self.speed,
            rows_cleared: self.rows_cleared,
            pieces_spawned: self.pieces_spawned,
        }
    }
}
