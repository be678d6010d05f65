//! CLI for maze generation

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use maze_carver::random::seeded_rng;
use maze_carver::render::{emoji_string, render_ascii, render_emoji};
use maze_carver::{Cell, MazeGenerator, ShuffleStrategy, StartCell};
use tracing_subscriber::EnvFilter;

/// Perfect maze generator (randomized depth-first search)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cell rows
    #[arg(long, default_value_t = 7)]
    rows: usize,

    /// Number of cell columns
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Start the search from this cell instead of a random one, as `row,col`
    #[arg(long, value_parser = parse_cell)]
    start: Option<Cell>,

    /// Neighbour shuffle
    #[arg(long, value_enum, default_value_t = Shuffle::FullRange)]
    shuffle: Shuffle,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Report the path length from the top-left to the bottom-right cell
    #[arg(long)]
    solve: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Shuffle {
    /// Replay-compatible swap against the whole slice
    FullRange,
    /// Fisher-Yates
    Uniform,
}

impl From<Shuffle> for ShuffleStrategy {
    fn from(value: Shuffle) -> Self {
        match value {
            Shuffle::FullRange => ShuffleStrategy::FullRange,
            Shuffle::Uniform => ShuffleStrategy::Uniform,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Ascii,
    Emoji,
}

fn parse_cell(value: &str) -> anyhow::Result<Cell> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `row,col`, got `{}`", value))?;
    let row = row.trim().parse().context("invalid start row")?;
    let col = col.trim().parse().context("invalid start column")?;
    Ok(Cell::new(row, col))
}

/// Generate maze, print it to stdout
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let start = args.start.map_or(StartCell::Random, StartCell::Fixed);
    let generator = MazeGenerator::new()
        .with_shuffle(args.shuffle.into())
        .with_start(start);
    let mut rng = seeded_rng(args.seed);
    let maze = generator
        .generate(args.rows, args.cols, &mut rng)
        .context("failed to generate maze")?;

    match args.format {
        Format::Ascii => print!("{}", render_ascii(&maze)),
        Format::Emoji => println!("{}", emoji_string(&render_emoji(&maze))),
    }

    if args.solve {
        let goal = Cell::new(maze.rows() - 1, maze.cols() - 1);
        let path = maze
            .path(Cell::new(0, 0), goal)
            .context("goal is not reachable from the top-left cell")?;
        println!("The shortest path is {} steps.", path.len() - 1);
    }
    Ok(())
}
