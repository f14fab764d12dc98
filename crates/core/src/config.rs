//! Simulation configuration
//!
//! Board size, spawn point, speed level, RNG seed and whether full rows are
//! cleared after a lock. Values are checked once by [`SimConfig::validate`]
//! when a simulation is built.

use thiserror::Error;

use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_THRESHOLD_BASE, GRAVITY_THRESHOLD_MIN,
    GRAVITY_THRESHOLD_STEP, MAX_SPEED_LEVEL, SPAWN_X, SPAWN_Y,
};

/// Smallest board edge that still fits every piece in every orientation
pub const MIN_BOARD_EDGE: i32 = 4;

/// Largest board edge; keeps cell counts and terminal columns in range
pub const MAX_BOARD_EDGE: i32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be at least {min}x{min}, got {width}x{height}", min = MIN_BOARD_EDGE)]
    BoardTooSmall { width: i32, height: i32 },
    #[error("board must be at most {max}x{max}, got {width}x{height}", max = MAX_BOARD_EDGE)]
    BoardTooLarge { width: i32, height: i32 },
    #[error("spawn column {spawn_x} is outside a board {width} columns wide")]
    SpawnColumnOutOfRange { spawn_x: i32, width: i32 },
    #[error("spawn row {spawn_y} is below the floor")]
    SpawnRowBelowFloor { spawn_y: i32 },
    #[error("speed level {speed} is above the maximum of {max}", max = MAX_SPEED_LEVEL)]
    SpeedOutOfRange { speed: u8 },
}

/// Initial parameters for a [`crate::Simulation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub width: i32,
    pub height: i32,
    pub spawn_x: i32,
    pub spawn_y: i32,
    /// Speed level 0..=9
    pub speed: u8,
    pub seed: u32,
    /// Collapse full rows after each lock
    pub clear_rows: bool,
}

impl SimConfig {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_spawn(mut self, x: i32, y: i32) -> Self {
        self.spawn_x = x;
        self.spawn_y = y;
        self
    }

    pub fn with_speed(mut self, speed: u8) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_clear_rows(mut self, clear_rows: bool) -> Self {
        self.clear_rows = clear_rows;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_BOARD_EDGE || self.height < MIN_BOARD_EDGE {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_BOARD_EDGE || self.height > MAX_BOARD_EDGE {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.spawn_x < 0 || self.spawn_x >= self.width {
            return Err(ConfigError::SpawnColumnOutOfRange {
                spawn_x: self.spawn_x,
                width: self.width,
            });
        }
        if self.spawn_y < 0 {
            return Err(ConfigError::SpawnRowBelowFloor {
                spawn_y: self.spawn_y,
            });
        }
        if self.speed > MAX_SPEED_LEVEL {
            return Err(ConfigError::SpeedOutOfRange { speed: self.speed });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            speed: 0,
            seed: 1,
            clear_rows: true,
        }
    }
}

/// Fixed updates between gravity steps for a speed level
///
/// `BASE - speed * STEP`, never below `GRAVITY_THRESHOLD_MIN`.
pub fn gravity_threshold(speed: u8) -> u32 {
    GRAVITY_THRESHOLD_BASE
        .saturating_sub(u32::from(speed) * GRAVITY_THRESHOLD_STEP)
        .max(GRAVITY_THRESHOLD_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_threshold_by_speed() {
        assert_eq!(gravity_threshold(0), 50);
        assert_eq!(gravity_threshold(1), 45);
        assert_eq!(gravity_threshold(9), 5);
        // Past the table the floor holds.
        assert_eq!(gravity_threshold(10), 1);
        assert_eq!(gravity_threshold(u8::MAX), GRAVITY_THRESHOLD_MIN);
    }

    #[test]
    fn test_rejects_bad_values() {
        let base = SimConfig::default();
        assert_eq!(
            base.with_size(3, 20).validate(),
            Err(ConfigError::BoardTooSmall {
                width: 3,
                height: 20
            })
        );
        assert_eq!(
            base.with_size(10, 40_000).validate(),
            Err(ConfigError::BoardTooLarge {
                width: 10,
                height: 40_000
            })
        );
        assert_eq!(base.with_size(MAX_BOARD_EDGE, MAX_BOARD_EDGE).validate(), Ok(()));
        assert_eq!(
            base.with_spawn(10, 20).validate(),
            Err(ConfigError::SpawnColumnOutOfRange {
                spawn_x: 10,
                width: 10
            })
        );
        assert_eq!(
            base.with_spawn(4, -1).validate(),
            Err(ConfigError::SpawnRowBelowFloor { spawn_y: -1 })
        );
        assert_eq!(
            base.with_speed(10).validate(),
            Err(ConfigError::SpeedOutOfRange { speed: 10 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::SpeedOutOfRange { speed: 12 };
        assert_eq!(err.to_string(), "speed level 12 is above the maximum of 9");
    }
}
