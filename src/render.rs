//! Text renderings of a carved maze

use itertools::Itertools;

use crate::layout::{Cell, MazeLayout};

pub const S_PLAYER: char = '🏃';
pub const S_GOAL: char = '❎';
pub const S_OPEN: char = '🟩';
pub const S_WALL: char = '🟫';

/// Box drawing with `+`, `---` and `|`; the outer border is always closed.
///
/// # Examples
/// ```
/// use maze_carver::{generate, random::seeded_rng, render::render_ascii};
///
/// let maze = generate(1, 2, &mut seeded_rng(Some(0))).unwrap();
/// assert_eq!(render_ascii(&maze), "+---+---+\n|       |\n+---+---+\n");
/// ```
pub fn render_ascii(layout: &MazeLayout) -> String {
    let (rows, cols) = (layout.rows(), layout.cols());
    let mut out = String::new();
    for row in 0..rows {
        out.push('+');
        for col in 0..cols {
            let open = row > 0 && layout.horizontal().is_open(row - 1, col);
            out.push_str(if open { "   +" } else { "---+" });
        }
        out.push('\n');

        out.push('|');
        for col in 0..cols {
            let open = layout.vertical().is_open(row, col);
            out.push_str(if open { "    " } else { "   |" });
        }
        out.push('\n');
    }
    out.push('+');
    out.push_str(&"---+".repeat(cols));
    out.push('\n');
    out
}

/// Square grid of `(2 * rows + 1) × (2 * cols + 1)` emojis.
///
/// Cell `(r, c)` sits at `[2r + 1][2c + 1]`, with the wall to each neighbour
/// in between. The player starts in the top-left cell and the goal is in
/// the bottom-right one; in a single-cell maze the goal is drawn.
pub fn render_emoji(layout: &MazeLayout) -> Vec<Vec<char>> {
    let (rows, cols) = (layout.rows(), layout.cols());
    let mut grid = vec![vec![S_WALL; 2 * cols + 1]; 2 * rows + 1];

    for row in 0..rows {
        for col in 0..cols {
            let (y, x) = (2 * row + 1, 2 * col + 1);
            grid[y][x] = S_OPEN;
            if layout.horizontal().is_open(row, col) {
                grid[y + 1][x] = S_OPEN;
            }
            if layout.vertical().is_open(row, col) {
                grid[y][x + 1] = S_OPEN;
            }
        }
    }

    grid[1][1] = S_PLAYER;
    let goal = Cell::new(rows - 1, cols - 1);
    grid[2 * goal.row + 1][2 * goal.col + 1] = S_GOAL;
    grid
}

/// Join an emoji grid into printable lines
pub fn emoji_string(grid: &[Vec<char>]) -> String {
    grid.iter().map(|row| row.iter().join("")).join("\n")
}
