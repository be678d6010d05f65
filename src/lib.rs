//! Carve perfect mazes with a randomized depth-first search
//!
//! A maze over a `rows × cols` grid is described by which cells were visited
//! and which walls between adjacent cells were opened. The open passages
//! always form a spanning tree, so there is exactly one path between any
//! two cells.
//!
//! # Examples
//! ## Seeded maze
//! ```
//! use maze_carver::{generate, random::seeded_rng, Cell};
//!
//! let mut rng = seeded_rng(Some(7));
//! let maze = generate(7, 10, &mut rng).unwrap();
//!
//! assert_eq!(maze.open_passage_count(), 7 * 10 - 1);
//! assert!(maze.check_spanning_tree().is_ok());
//!
//! let path = maze.path(Cell::new(0, 0), Cell::new(6, 9)).unwrap();
//! assert_eq!(path.first(), Some(&Cell::new(0, 0)));
//! assert_eq!(path.last(), Some(&Cell::new(6, 9)));
//! ```
//!
//! ## Stepping through the carving
//! ```
//! use maze_carver::{random::seeded_rng, CarveStep, MazeGenerator, ShuffleStrategy, StartCell, Cell};
//!
//! let mut rng = seeded_rng(Some(1));
//! let mut carver = MazeGenerator::new()
//!     .with_start(StartCell::Fixed(Cell::new(0, 0)))
//!     .with_shuffle(ShuffleStrategy::Uniform)
//!     .carver(3, 3, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(carver.next(), Some(CarveStep::Start(Cell::new(0, 0))));
//! let carved = carver.by_ref().filter(|step| matches!(step, CarveStep::Carve { .. })).count();
//! assert_eq!(carved, 8);
//! assert!(carver.into_layout().check_spanning_tree().is_ok());
//! ```

pub mod graph;
pub mod layout;
pub mod maze_generator;
pub mod random;
pub mod render;
pub mod shuffle;

pub use graph::LayoutDefect;
pub use layout::{Cell, Direction, MazeLayout, Orientation, Wall};
pub use maze_generator::{generate, CarveStep, Carver, MazeGenerator, StartCell};
pub use random::RandomSource;
pub use shuffle::ShuffleStrategy;

/// Reasons a maze cannot be generated
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// Grid needs at least one row and one column.
    #[error("invalid maze dimensions {rows}x{cols}: rows and columns must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },
    /// Fixed start cell lies outside the grid.
    #[error("start cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    StartOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
