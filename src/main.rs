//! Terminal runner (default binary).
//!
//! Runs the simulation at a fixed 50 Hz update rate, polls the keyboard
//! between updates, and redraws after every poll/update cycle.
//! With `--headless N` it skips the terminal entirely and prints the board
//! after N updates.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use brickfall::cli::Cli;
use brickfall::core::{Simulation, TickOutcome};
use brickfall::input::{is_restart, map_key, should_quit};
use brickfall::term::{BoardView, TerminalRenderer};
use brickfall::types::{Command, FIXED_UPDATE_HZ};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.sim_config(clock_seed());
    log::info!("starting with {:?}", config);
    let mut sim = Simulation::new(config).context("invalid simulation settings")?;

    match cli.headless {
        Some(updates) => run_headless(&mut sim, updates, cli.json),
        None => {
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &mut sim);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run_headless(sim: &mut Simulation, updates: u32, json: bool) -> Result<()> {
    for _ in 0..updates {
        if let Some(TickOutcome::GameOver) = sim.fixed_update() {
            break;
        }
    }

    if json {
        let out = serde_json::to_string_pretty(&sim.snapshot()).context("serialize snapshot")?;
        println!("{out}");
    } else {
        for line in BoardView::default().render(sim).lines() {
            println!("{line}");
        }
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, sim: &mut Simulation) -> Result<()> {
    let view = BoardView::default();
    let update_interval = Duration::from_secs(1) / FIXED_UPDATE_HZ;
    let mut last_update = Instant::now();

    loop {
        term.draw(&view.render(sim))?;

        // Input with timeout until next update.
        let timeout = update_interval
            .checked_sub(last_update.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout).context("poll terminal events")? {
            if let Event::Key(key) = event::read().context("read terminal event")? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if is_restart(key) {
                            sim.reset();
                        } else if let Some(command) = map_key(key) {
                            sim.apply(command);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Held keys keep sliding; rotation only on a fresh press.
                        if let Some(command) = map_key(key).filter(|c| *c != Command::Rotate) {
                            sim.apply(command);
                        }
                    }
                    KeyEventKind::Release => {}
                }
            }
        }

        if last_update.elapsed() >= update_interval {
            last_update = Instant::now();
            sim.fixed_update();
        }
    }
}
