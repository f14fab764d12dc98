//! Command-line and environment configuration for the binary.

use clap::Parser;

use crate::core::SimConfig;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_SPEED_LEVEL};

#[derive(Debug, Clone, Parser)]
#[command(name = "brickfall", version, about = "Falling-block puzzle in the terminal")]
pub struct Cli {
    /// Gravity speed level (0 is slowest)
    #[arg(
        long,
        env = "BRICKFALL_SPEED",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=(MAX_SPEED_LEVEL as i64))
    )]
    pub speed: u8,

    /// RNG seed; defaults to the wall clock
    #[arg(long, env = "BRICKFALL_SEED")]
    pub seed: Option<u32>,

    /// Board width in cells
    #[arg(long, env = "BRICKFALL_WIDTH", default_value_t = BOARD_WIDTH)]
    pub width: i32,

    /// Board height in cells
    #[arg(long, env = "BRICKFALL_HEIGHT", default_value_t = BOARD_HEIGHT)]
    pub height: i32,

    /// Spawn column; defaults to just left of centre
    #[arg(long, env = "BRICKFALL_SPAWN_X")]
    pub spawn_x: Option<i32>,

    /// Spawn row; defaults to the row just above the visible ceiling
    #[arg(long, env = "BRICKFALL_SPAWN_Y")]
    pub spawn_y: Option<i32>,

    /// Leave full rows in place instead of collapsing them
    #[arg(long)]
    pub no_clear_rows: bool,

    /// Run this many fixed updates without a terminal, then print the board
    #[arg(long, value_name = "UPDATES")]
    pub headless: Option<u32>,

    /// Print the headless result as JSON
    #[arg(long, requires = "headless")]
    pub json: bool,
}

impl Cli {
    /// Simulation settings; `fallback_seed` is used when no seed was given
    pub fn sim_config(&self, fallback_seed: u32) -> SimConfig {
        SimConfig::default()
            .with_size(self.width, self.height)
            .with_spawn(
                self.spawn_x.unwrap_or(self.width / 2 - 1),
                self.spawn_y.unwrap_or(self.height),
            )
            .with_speed(self.speed)
            .with_seed(self.seed.unwrap_or(fallback_seed))
            .with_clear_rows(!self.no_clear_rows)
    }
}
