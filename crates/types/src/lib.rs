//! Core types module - shared value types and constants
//!
//! Everything here is plain data with no behaviour beyond conversions, so the
//! simulation engine, the input mapping and the renderer can agree on one
//! vocabulary.
//!
//! # Coordinates
//!
//! Standard Cartesian axes: `x` grows to the right (0..width), `y` grows
//! upward (0..height). Row 0 is the floor. Rows at or above the board height
//! lie above the visible ceiling; pieces spawn there and fall into view.
//!
//! # Gravity cadence
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIXED_UPDATE_HZ` | 50 | Fixed-rate update frequency |
//! | `GRAVITY_THRESHOLD_BASE` | 50 | Updates per gravity step at speed 0 |
//! | `GRAVITY_THRESHOLD_STEP` | 5 | Updates removed per speed level |
//! | `GRAVITY_THRESHOLD_MIN` | 1 | Floor for the threshold |
//!
//! # Examples
//!
//! ```
//! use brickfall_types::{Command, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i32 = 10;

/// Board height in cells (20 visible rows)
pub const BOARD_HEIGHT: i32 = 20;

/// Spawn anchor column
pub const SPAWN_X: i32 = 4;

/// Spawn anchor row (at the visible ceiling, so pieces enter from above)
pub const SPAWN_Y: i32 = 20;

/// Fixed-rate update frequency (50 updates per second)
pub const FIXED_UPDATE_HZ: u32 = 50;

/// Updates between gravity steps at speed level 0
pub const GRAVITY_THRESHOLD_BASE: u32 = 50;

/// Updates removed from the threshold per speed level
pub const GRAVITY_THRESHOLD_STEP: u32 = 5;

/// Lowest allowed gravity threshold
pub const GRAVITY_THRESHOLD_MIN: u32 = 1;

/// Highest speed level
pub const MAX_SPEED_LEVEL: u8 = 9;

/// A relative offset or absolute board coordinate `(x, y)`
pub type Offset = (i32, i32);

/// State of a single board cell
///
/// - **Empty**: vacant
/// - **Active**: covered by the piece currently in play
/// - **Locked**: permanently settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    #[default]
    Empty,
    Active,
    Locked,
}

impl CellState {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CellState::Empty => "empty",
            CellState::Active => "active",
            CellState::Locked => "locked",
        }
    }
}

/// The seven tetromino shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    /// Kind at catalog position `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= 7`. There is no eighth shape; asking for one is a
    /// caller bug.
    pub fn from_index(index: usize) -> Self {
        match Self::ALL.get(index) {
            Some(kind) => *kind,
            None => panic!("piece kind index {index} is outside the 7-shape catalog"),
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use brickfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }
}

/// Rotation index of a piece
///
/// - **North**: base orientation (index 0)
/// - **East**: one clockwise quarter turn (index 1)
/// - **South**: two quarter turns (index 2)
/// - **West**: three quarter turns (index 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise, wrapping West back to North
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for `index`, taken modulo 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// One of the four unit translations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    /// Unit vector `(dx, dy)` with `y` pointing up
    pub fn delta(&self) -> Offset {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Up => (0, 1),
        }
    }
}

/// Requests fed into the simulation
///
/// Player commands come from the input collaborator and apply immediately;
/// `GravityTick` is a single gravity step, normally issued by the fixed-rate
/// timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Spawn, drop one row, or lock
    GravityTick,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// ```
    /// use brickfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("GRAVITYTICK"), Some(Command::GravityTick));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "gravitytick" => Some(Command::GravityTick),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::GravityTick => "gravityTick",
        }
    }
}
