//! Maze generation

use crate::layout::{Cell, Direction, MazeLayout};
use crate::random::RandomSource;
use crate::shuffle::ShuffleStrategy;
use crate::MazeError;

/// Where the depth-first search begins
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum StartCell {
    /// Draw row, then column, uniformly from the grid.
    #[default]
    Random,
    /// Always start from this cell.
    Fixed(Cell),
}

/// Recursive backtracker maze generator.
///
/// Holds only the options; every call to [Self::generate] builds a fresh
/// layout, so one generator can be shared between independent runs.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct MazeGenerator {
    shuffle: ShuffleStrategy,
    start: StartCell,
}

impl MazeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shuffle(self, shuffle: ShuffleStrategy) -> Self {
        Self { shuffle, ..self }
    }

    pub fn with_start(self, start: StartCell) -> Self {
        Self { start, ..self }
    }

    /// Generate a perfect maze over a `rows × cols` grid
    ///
    /// - `rows`, `cols`: Grid dimensions, both at least 1.
    /// - `rng`: Source for the start cell and the neighbour orders. The
    ///   same draw sequence always yields the same maze.
    ///
    /// Returns error, if a dimension is zero or a fixed start cell lies
    /// outside the grid. Nothing is drawn from `rng` in that case.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<MazeLayout, MazeError> {
        let carver = self.carver(rows, cols, rng)?;
        tracing::debug!(
            rows,
            cols,
            start = ?carver.start,
            shuffle = ?self.shuffle,
            "carving maze"
        );
        let layout = carver.into_layout();
        tracing::debug!(passages = layout.open_passage_count(), "maze carved");
        Ok(layout)
    }

    /// Prepare a step-by-step run of the search.
    ///
    /// The start cell is chosen here; nothing is carved until the returned
    /// [Carver] is advanced.
    pub fn carver<'r, R: RandomSource + ?Sized>(
        &self,
        rows: usize,
        cols: usize,
        rng: &'r mut R,
    ) -> Result<Carver<'r, R>, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimension { rows, cols });
        }
        let start = match self.start {
            StartCell::Random => {
                let row = rng.below(rows);
                let col = rng.below(cols);
                Cell { row, col }
            }
            StartCell::Fixed(cell) if cell.row < rows && cell.col < cols => cell,
            StartCell::Fixed(cell) => {
                return Err(MazeError::StartOutOfBounds {
                    row: cell.row,
                    col: cell.col,
                    rows,
                    cols,
                })
            }
        };
        Ok(Carver {
            layout: MazeLayout::closed(rows, cols),
            stack: Vec::new(),
            start,
            started: false,
            shuffle: self.shuffle,
            rng,
        })
    }
}

/// Generate a maze with a random start cell and the full-range shuffle
pub fn generate<R: RandomSource + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<MazeLayout, MazeError> {
    MazeGenerator::default().generate(rows, cols, rng)
}

/// One unit of progress of the depth-first search
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CarveStep {
    /// Start cell was entered.
    Start(Cell),
    /// Wall between `from` and the newly entered `to` was opened.
    Carve {
        from: Cell,
        to: Cell,
        direction: Direction,
    },
    /// Every neighbour of the cell is done; search returns to the previous cell.
    Backtrack(Cell),
}

/// Search position in one cell
struct Frame {
    cell: Cell,
    /// Shuffled once, when the cell is entered
    directions: [Direction; 4],
    next: usize,
}

/// Depth-first search in progress.
///
/// Uses a heap-allocated stack of frames instead of native recursion, so
/// grid size is bounded by memory rather than call depth. Randomness is
/// drawn in the same order a recursive search would draw it: neighbour
/// order is shuffled the moment a cell is entered.
pub struct Carver<'r, R: RandomSource + ?Sized> {
    layout: MazeLayout,
    stack: Vec<Frame>,
    start: Cell,
    started: bool,
    shuffle: ShuffleStrategy,
    rng: &'r mut R,
}

impl<R: RandomSource + ?Sized> Carver<'_, R> {
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Layout carved so far
    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    /// Cells on the current path from the start cell, start first
    pub fn path(&self) -> impl Iterator<Item = Cell> + '_ {
        self.stack.iter().map(|frame| frame.cell)
    }

    pub fn is_finished(&self) -> bool {
        self.started && self.stack.is_empty()
    }

    /// Run the search to the end and return the finished layout.
    pub fn into_layout(mut self) -> MazeLayout {
        for step in self.by_ref() {
            tracing::trace!(?step);
        }
        self.layout
    }

    fn enter(&mut self, cell: Cell) {
        self.layout.mark_visited(cell);
        let mut directions = Direction::ALL;
        self.shuffle.apply(&mut directions, &mut *self.rng);
        self.stack.push(Frame {
            cell,
            directions,
            next: 0,
        });
    }
}

impl<R: RandomSource + ?Sized> Iterator for Carver<'_, R> {
    type Item = CarveStep;

    fn next(&mut self) -> Option<CarveStep> {
        if !self.started {
            self.started = true;
            self.enter(self.start);
            return Some(CarveStep::Start(self.start));
        }

        let (rows, cols) = (self.layout.rows(), self.layout.cols());
        let frame = self.stack.last_mut()?;
        while frame.next < frame.directions.len() {
            let direction = frame.directions[frame.next];
            frame.next += 1;

            let Some(to) = frame.cell.step(direction, rows, cols) else {
                continue;
            };
            if self.layout.is_visited(to) {
                continue;
            }

            let from = frame.cell;
            self.layout.open_passage(from, direction);
            self.enter(to);
            return Some(CarveStep::Carve {
                from,
                to,
                direction,
            });
        }

        let cell = frame.cell;
        self.stack.pop();
        Some(CarveStep::Backtrack(cell))
    }
}

#[cfg(test)]
mod tests {
    use crate::layout::{Cell, Direction};
    use crate::maze_generator::{generate, CarveStep, MazeGenerator, StartCell};
    use crate::random::{seeded_rng, RandomSource};
    use crate::shuffle::ShuffleStrategy;
    use crate::MazeError;

    /// Replays `prefix` once, then repeats `cycle` forever
    struct Scripted {
        prefix: Vec<usize>,
        cycle: Vec<usize>,
        bounds: Vec<usize>,
    }

    impl Scripted {
        fn new(prefix: &[usize], cycle: &[usize]) -> Self {
            Self {
                prefix: prefix.to_vec(),
                cycle: cycle.to_vec(),
                bounds: vec![],
            }
        }
    }

    impl RandomSource for Scripted {
        fn below(&mut self, n: usize) -> usize {
            let drawn = self.bounds.len();
            let value = if drawn < self.prefix.len() {
                self.prefix[drawn]
            } else {
                self.cycle[(drawn - self.prefix.len()) % self.cycle.len()]
            };
            self.bounds.push(n);
            assert!(value < n, "scripted value {value} not below {n}");
            value
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let mut rng = Scripted::new(&[], &[0]);
        for (rows, cols) in [(0, 5), (5, 0), (0, 0)] {
            assert_eq!(
                generate(rows, cols, &mut rng),
                Err(MazeError::InvalidDimension { rows, cols })
            );
        }
        assert!(rng.bounds.is_empty());
    }

    #[test]
    fn fixed_start_outside_grid_is_rejected() {
        let mut rng = seeded_rng(Some(0));
        let res = MazeGenerator::new()
            .with_start(StartCell::Fixed(Cell::new(2, 0)))
            .generate(2, 2, &mut rng);
        assert_eq!(
            res,
            Err(MazeError::StartOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
    }

    #[test]
    fn single_cell_maze() {
        let mut rng = seeded_rng(Some(0));
        let maze = generate(1, 1, &mut rng).unwrap();

        assert_eq!(maze.visited(), &[vec![true]]);
        assert!(maze.horizontal().as_row_major().is_empty());
        assert!(maze.vertical().as_column_major().is_empty());
        assert_eq!(maze.open_passage_count(), 0);
    }

    #[test]
    fn two_by_two_with_identity_shuffle() {
        // start (0, 0), then every full-range shuffle keeps Up, Down, Left, Right
        let mut rng = Scripted::new(&[0, 0], &[3, 2, 1, 0]);
        let mut carver = MazeGenerator::new().carver(2, 2, &mut rng).unwrap();
        let steps: Vec<CarveStep> = carver.by_ref().collect();
        let maze = carver.into_layout();

        assert_eq!(
            steps,
            vec![
                CarveStep::Start(Cell::new(0, 0)),
                CarveStep::Carve {
                    from: Cell::new(0, 0),
                    to: Cell::new(1, 0),
                    direction: Direction::Down
                },
                CarveStep::Carve {
                    from: Cell::new(1, 0),
                    to: Cell::new(1, 1),
                    direction: Direction::Right
                },
                CarveStep::Carve {
                    from: Cell::new(1, 1),
                    to: Cell::new(0, 1),
                    direction: Direction::Up
                },
                CarveStep::Backtrack(Cell::new(0, 1)),
                CarveStep::Backtrack(Cell::new(1, 1)),
                CarveStep::Backtrack(Cell::new(1, 0)),
                CarveStep::Backtrack(Cell::new(0, 0)),
            ]
        );

        assert_eq!(maze.visited(), &[vec![true, true], vec![true, true]]);
        assert_eq!(maze.horizontal().as_row_major(), &[vec![true, true]]);
        assert_eq!(maze.vertical().as_column_major(), &[vec![false, true]]);
        assert_eq!(maze.open_passage_count(), 3);
        assert!(maze.check_spanning_tree().is_ok());
        assert_eq!(rng.bounds.len(), 2 + 4 * 4);
    }

    #[test]
    fn draws_start_row_then_column_then_shuffles() {
        let mut rng = Scripted::new(&[2, 4], &[0]);
        let maze = generate(3, 5, &mut rng).unwrap();

        assert_eq!(&rng.bounds[..2], &[3, 5]);
        assert!(rng.bounds[2..].iter().all(|n| *n == 4));
        // one full-range shuffle per cell
        assert_eq!(rng.bounds.len(), 2 + 4 * 15);
        assert!(maze.check_spanning_tree().is_ok());
    }

    #[test]
    fn fixed_start_draws_only_for_shuffles() {
        let mut rng = Scripted::new(&[], &[1]);
        let mut carver = MazeGenerator::new()
            .with_start(StartCell::Fixed(Cell::new(1, 2)))
            .with_shuffle(ShuffleStrategy::Uniform)
            .carver(3, 4, &mut rng)
            .unwrap();

        assert_eq!(carver.start(), Cell::new(1, 2));
        assert_eq!(carver.next(), Some(CarveStep::Start(Cell::new(1, 2))));
        drop(carver);
        assert_eq!(rng.bounds, vec![4, 3, 2]);
    }

    #[test]
    fn every_size_yields_spanning_tree() {
        for seed in 0..10 {
            let mut rng = seeded_rng(Some(seed));
            for rows in 1..8 {
                for cols in 1..8 {
                    let maze = generate(rows, cols, &mut rng).unwrap();

                    assert!(maze.visited().iter().flatten().all(|v| *v));
                    assert_eq!(maze.open_passage_count(), rows * cols - 1);
                    assert_eq!(maze.check_spanning_tree(), Ok(()));
                    if rows * cols > 1 {
                        for row in 0..rows {
                            for col in 0..cols {
                                let cell = Cell::new(row, col);
                                assert!(!maze.open_directions(cell).is_empty());
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn uniform_shuffle_yields_spanning_tree() {
        let generator = MazeGenerator::new().with_shuffle(ShuffleStrategy::Uniform);
        for seed in 0..20 {
            let mut rng = seeded_rng(Some(seed));
            let maze = generator.generate(9, 13, &mut rng).unwrap();
            assert_eq!(maze.check_spanning_tree(), Ok(()));
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate(5, 5, &mut seeded_rng(Some(1234))).unwrap();
        let b = generate(5, 5, &mut seeded_rng(Some(1234))).unwrap();

        assert_eq!(a.visited(), b.visited());
        assert_eq!(a.horizontal(), b.horizontal());
        assert_eq!(a.vertical(), b.vertical());
    }

    #[test]
    fn seeds_vary_the_maze() {
        let first = generate(8, 8, &mut seeded_rng(Some(0))).unwrap();
        let differs =
            (1..10).any(|seed| generate(8, 8, &mut seeded_rng(Some(seed))).unwrap() != first);
        assert!(differs);
    }

    #[test]
    fn step_counts_cover_every_cell() {
        let mut rng = seeded_rng(Some(5));
        let carver = MazeGenerator::new().carver(6, 9, &mut rng).unwrap();
        let steps: Vec<CarveStep> = carver.collect();

        let carves = steps
            .iter()
            .filter(|s| matches!(s, CarveStep::Carve { .. }))
            .count();
        let backtracks = steps
            .iter()
            .filter(|s| matches!(s, CarveStep::Backtrack(_)))
            .count();
        assert!(matches!(steps[0], CarveStep::Start(_)));
        assert_eq!(carves, 6 * 9 - 1);
        assert_eq!(backtracks, 6 * 9);
    }

    #[test]
    fn carver_path_tracks_the_stack() {
        let mut rng = seeded_rng(Some(9));
        let mut carver = MazeGenerator::new()
            .with_start(StartCell::Fixed(Cell::new(0, 0)))
            .carver(4, 4, &mut rng)
            .unwrap();
        assert!(!carver.is_finished());

        carver.next();
        carver.next();
        let path: Vec<Cell> = carver.path().collect();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], Cell::new(0, 0));
        assert!(carver.layout().is_open(path[0], path[1]));

        while carver.next().is_some() {}
        assert!(carver.is_finished());
        assert_eq!(carver.path().count(), 0);
    }

    #[test]
    fn large_grid_does_not_recurse() {
        let mut rng = seeded_rng(Some(77));
        let generator = MazeGenerator::new().with_start(StartCell::Fixed(Cell::new(0, 0)));
        let maze = generator.generate(200, 200, &mut rng).unwrap();
        assert_eq!(maze.open_passage_count(), 200 * 200 - 1);
        assert_eq!(maze.check_spanning_tree(), Ok(()));
    }
}
