//! Passage graph: spanning-tree checks and paths between cells

use petgraph::algo::astar;
use petgraph::graph::NodeIndex;
use petgraph::unionfind::UnionFind;
use petgraph::{Graph, Undirected};

use crate::layout::{Cell, MazeLayout};

/// Way in which a layout fails to be a perfect maze
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutDefect {
    #[error("cell {0} was never visited")]
    Unvisited(Cell),
    #[error("expected {expected} open passages, found {found}")]
    PassageCount { expected: usize, found: usize },
    #[error("passage between {0} and {1} closes a loop")]
    Cycle(Cell, Cell),
}

impl MazeLayout {
    fn node_of(&self, cell: Cell) -> usize {
        cell.row * self.cols() + cell.col
    }

    fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    /// Open passages as `(upper or left cell, lower or right cell)` pairs
    pub fn open_passages(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        let (rows, cols) = (self.rows(), self.cols());
        let down = (0..rows.saturating_sub(1)).flat_map(move |row| {
            (0..cols)
                .filter(move |col| self.horizontal().is_open(row, *col))
                .map(move |col| (Cell::new(row, col), Cell::new(row + 1, col)))
        });
        let right = (0..rows).flat_map(move |row| {
            (0..cols.saturating_sub(1))
                .filter(move |col| self.vertical().is_open(row, *col))
                .map(move |col| (Cell::new(row, col), Cell::new(row, col + 1)))
        });
        down.chain(right)
    }

    /// Undirected graph with one node per cell and one edge per open passage.
    ///
    /// Weights of the nodes are the `(row, col)` coordinates; node index is
    /// `row * cols + col`.
    pub fn passage_graph(&self) -> Graph<(usize, usize), (), Undirected> {
        let mut graph = Graph::with_capacity(self.cell_count(), self.open_passage_count());
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                graph.add_node((row, col));
            }
        }
        for (a, b) in self.open_passages() {
            graph.add_edge(
                NodeIndex::new(self.node_of(a)),
                NodeIndex::new(self.node_of(b)),
                (),
            );
        }
        graph
    }

    /// Verify that the layout is a perfect maze.
    ///
    /// Every cell must be visited and the open passages must form a spanning
    /// tree: `rows * cols - 1` of them and no loop. Together those also
    /// imply that every cell is reachable.
    pub fn check_spanning_tree(&self) -> Result<(), LayoutDefect> {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let cell = Cell::new(row, col);
                if !self.is_visited(cell) {
                    return Err(LayoutDefect::Unvisited(cell));
                }
            }
        }

        let expected = self.cell_count() - 1;
        let found = self.open_passage_count();
        if found != expected {
            return Err(LayoutDefect::PassageCount { expected, found });
        }

        let mut sets = UnionFind::<usize>::new(self.cell_count());
        for (a, b) in self.open_passages() {
            if !sets.union(self.node_of(a), self.node_of(b)) {
                return Err(LayoutDefect::Cycle(a, b));
            }
        }
        Ok(())
    }

    /// Path through open passages from `from` to `to`, both included.
    ///
    /// Returns `None`, if either cell is outside the grid or no passage
    /// connects them. In a perfect maze the path is unique.
    pub fn path(&self, from: Cell, to: Cell) -> Option<Vec<Cell>> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        let graph = self.passage_graph();
        let goal = NodeIndex::new(self.node_of(to));
        let (_, nodes) = astar(
            &graph,
            NodeIndex::new(self.node_of(from)),
            |node| node == goal,
            |_| 1,
            |node| {
                let (row, col) = graph[node];
                row.abs_diff(to.row) + col.abs_diff(to.col)
            },
        )?;
        Some(
            nodes
                .into_iter()
                .map(|node| {
                    let (row, col) = graph[node];
                    Cell::new(row, col)
                })
                .collect(),
        )
    }
}
