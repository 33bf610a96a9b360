use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};

pub use utils::Pos;
mod utils;

pub use board::{block, glider, Board, BoardError, Cell};
mod board;

pub use sim::{Engine, Frame, Sim, SimCmd, SimHandle, StepOutcome};
mod sim;

pub use view::View;
mod view;

/// Conway's game of life on a bounded square board, drawn in the terminal.
/// Press 'q' to quit early.
#[derive(Debug, Parser)]
struct Args {
    /// Board dimension, in cells.
    #[arg(long, default_value_t = 10)]
    size: usize,
    /// Stop after this many generations if no fixed point is reached first.
    #[arg(long, default_value_t = 100)]
    generations: u64,
    /// Delay between generations, in milliseconds.
    #[arg(long, default_value_t = 200)]
    tick_ms: u64,
    /// Starting pattern placed near the top-left corner.
    #[arg(long, value_enum, default_value = "glider")]
    seed: Seed,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Seed {
    /// Five-cell spaceship that drifts towards the bottom-right corner.
    Glider,
    /// Two-by-two still life; converges after a single step.
    Block,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let seeds = match args.seed {
        Seed::Glider => glider(),
        Seed::Block => block(pos!(1, 1)),
    };
    let engine = Engine::new(args.size, seeds).context("failed to seed the board")?;

    let simulation = Sim::spawn(
        engine,
        Duration::from_millis(args.tick_ms),
        args.generations,
    );
    let view = View::spawn(simulation.handle(), args.generations);

    view.join();
    let engine = simulation.join();
    println!(
        "stopped at generation {} with {} live cells",
        engine.generation(),
        engine.snapshot().actives().len()
    );
    Ok(())
}
