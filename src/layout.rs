//! Cells, directions and the carved passage matrices

use std::fmt;

/// Location of a cell in the maze grid
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring cell in `direction`, if it lies inside a `rows × cols` grid.
    pub fn step(self, direction: Direction, rows: usize, cols: usize) -> Option<Cell> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row + 1, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col + 1),
        };
        (row < rows && col < cols).then_some(Cell { row, col })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Movement from a cell to one of its four neighbours
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Candidate moves in the order they are listed before shuffling.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Orientation of an interior wall
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Orientation {
    /// Lies below `cell`, separating it from the cell one row down.
    Horizontal,
    /// Lies right of `cell`, separating it from the cell one column right.
    Vertical,
}

/// Closed interior wall, anchored at the upper/left cell it borders
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Wall {
    pub cell: Cell,
    pub orientation: Orientation,
}

/// Openings between vertically adjacent cells.
///
/// Row-major `(rows - 1) × cols`: entry `[r][c]` is the wall between cell
/// `(r, c)` and cell `(r + 1, c)`.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct HorizontalPassages(Vec<Vec<bool>>);

impl HorizontalPassages {
    fn closed(rows: usize, cols: usize) -> Self {
        Self(vec![vec![false; cols]; rows.saturating_sub(1)])
    }

    /// Is the wall below cell `(row, col)` open?
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.0
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Raw row-major matrix
    pub fn as_row_major(&self) -> &[Vec<bool>] {
        &self.0
    }

    pub fn open_count(&self) -> usize {
        self.0.iter().flatten().filter(|open| **open).count()
    }

    fn open(&mut self, row: usize, col: usize) {
        self.0[row][col] = true;
    }
}

/// Openings between horizontally adjacent cells.
///
/// Column-major `(cols - 1) × rows`: entry `[c][r]` is the wall between cell
/// `(r, c)` and cell `(r, c + 1)`. The accessors take `(row, col)` like
/// everything else and do the transposition themselves.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct VerticalPassages(Vec<Vec<bool>>);

impl VerticalPassages {
    fn closed(rows: usize, cols: usize) -> Self {
        Self(vec![vec![false; rows]; cols.saturating_sub(1)])
    }

    /// Is the wall right of cell `(row, col)` open?
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.0
            .get(col)
            .and_then(|line| line.get(row))
            .copied()
            .unwrap_or(false)
    }

    /// Raw column-major matrix
    pub fn as_column_major(&self) -> &[Vec<bool>] {
        &self.0
    }

    pub fn open_count(&self) -> usize {
        self.0.iter().flatten().filter(|open| **open).count()
    }

    fn open(&mut self, row: usize, col: usize) {
        self.0[col][row] = true;
    }
}

/// Carved maze: visited cells and open passages.
///
/// Produced by [crate::MazeGenerator]; read-only once handed out.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MazeLayout {
    rows: usize,
    cols: usize,
    visited: Vec<Vec<bool>>,
    horizontal: HorizontalPassages,
    vertical: VerticalPassages,
}

impl MazeLayout {
    /// All cells unvisited and all walls closed.
    pub(crate) fn closed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            visited: vec![vec![false; cols]; rows],
            horizontal: HorizontalPassages::closed(rows, cols),
            vertical: VerticalPassages::closed(rows, cols),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major `rows × cols` matrix of processed cells
    pub fn visited(&self) -> &[Vec<bool>] {
        &self.visited
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited
            .get(cell.row)
            .and_then(|line| line.get(cell.col))
            .copied()
            .unwrap_or(false)
    }

    pub fn horizontal(&self) -> &HorizontalPassages {
        &self.horizontal
    }

    pub fn vertical(&self) -> &VerticalPassages {
        &self.vertical
    }

    /// Is there an open passage between `a` and `b`?
    ///
    /// Order of the cells does not matter. Cells that are not adjacent, or
    /// not inside the grid, are never connected.
    pub fn is_open(&self, a: Cell, b: Cell) -> bool {
        let (first, second) = if (a.row, a.col) <= (b.row, b.col) {
            (a, b)
        } else {
            (b, a)
        };
        if second.row >= self.rows || second.col >= self.cols {
            return false;
        }
        if first.col == second.col && first.row + 1 == second.row {
            self.horizontal.is_open(first.row, first.col)
        } else if first.row == second.row && first.col + 1 == second.col {
            self.vertical.is_open(first.row, first.col)
        } else {
            false
        }
    }

    /// Directions in which `cell` has an open passage
    pub fn open_directions(&self, cell: Cell) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|dir| {
                cell.step(*dir, self.rows, self.cols)
                    .is_some_and(|next| self.is_open(cell, next))
            })
            .collect()
    }

    /// Total number of open passages in both matrices
    pub fn open_passage_count(&self) -> usize {
        self.horizontal.open_count() + self.vertical.open_count()
    }

    /// Interior walls that remain closed.
    ///
    /// The outer border is not included. Horizontal walls come first in
    /// row-major order, then vertical walls in column-major order, the same
    /// order as the underlying matrices.
    pub fn closed_walls(&self) -> impl Iterator<Item = Wall> + '_ {
        let horizontal = self
            .horizontal
            .as_row_major()
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.iter()
                    .enumerate()
                    .filter(|(_, open)| !**open)
                    .map(move |(col, _)| Wall {
                        cell: Cell { row, col },
                        orientation: Orientation::Horizontal,
                    })
            });
        let vertical = self
            .vertical
            .as_column_major()
            .iter()
            .enumerate()
            .flat_map(|(col, line)| {
                line.iter()
                    .enumerate()
                    .filter(|(_, open)| !**open)
                    .map(move |(row, _)| Wall {
                        cell: Cell { row, col },
                        orientation: Orientation::Vertical,
                    })
            });
        horizontal.chain(vertical)
    }

    pub(crate) fn mark_visited(&mut self, cell: Cell) {
        self.visited[cell.row][cell.col] = true;
    }

    /// Open the wall crossed by moving from `from` in `direction`.
    pub(crate) fn open_passage(&mut self, from: Cell, direction: Direction) {
        match direction {
            Direction::Up => self.horizontal.open(from.row - 1, from.col),
            Direction::Down => self.horizontal.open(from.row, from.col),
            Direction::Left => self.vertical.open(from.row, from.col - 1),
            Direction::Right => self.vertical.open(from.row, from.col),
        }
    }
}
