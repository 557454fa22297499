use log::{debug, trace};
use rand::Rng;

use crate::error::MazeError;
use crate::generators::frontier::Frontier;
use crate::generators::{Generator, Passage};
use crate::grids::block_grid::BlockGrid;
use crate::grids::{Cell, Dimensions};

/// Randomized Prim's over a block grid.
///
/// Passage cells sit two apart, the cell between two of them is the wall that
/// gets knocked out when they are joined. Only cells sharing the start's
/// parity on both axes can ever be reached, so on an even width the last
/// column stays solid (same for rows).
pub struct RandPrims<R: Rng> {
    grid: BlockGrid,
    frontier: Frontier,
    rng: R,
    start: Cell,
    opened: Vec<Cell>,
    passages: Vec<Passage>,
    pub done: bool,
}

impl<R: Rng> RandPrims<R> {
    pub fn new(dims: Dimensions, start: Cell, rng: R) -> Result<Self, MazeError> {
        if !dims.contains(start) {
            return Err(MazeError::StartOutOfBounds {
                start,
                width: dims.width,
                height: dims.height,
            });
        }

        let mut grid = BlockGrid::with_dims(dims);
        grid.open_cell(start);

        let mut frontier = Frontier::new();
        for cell in grid.closed_neighbors_of(start) {
            frontier.insert(cell);
        }

        debug!(
            "seeding {}x{} maze at {} with {} frontier cells",
            dims.width,
            dims.height,
            start,
            frontier.len()
        );

        Ok(Self {
            done: frontier.is_empty(),
            grid,
            frontier,
            rng,
            start,
            opened: vec![start],
            passages: Vec::new(),
        })
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Passage cells in the order they were opened, start first.
    pub fn opened(&self) -> &[Cell] {
        &self.opened
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn into_parts(self) -> (BlockGrid, Vec<Cell>, Vec<Passage>) {
        (self.grid, self.opened, self.passages)
    }

    #[cfg(test)]
    fn replace_frontier(&mut self, cells: &[Cell]) {
        self.frontier = Frontier::new();
        for &cell in cells {
            self.frontier.insert(cell);
        }
        self.done = self.frontier.is_empty();
    }
}

impl<R: Rng> Generator for RandPrims<R> {
    fn step_generation(&mut self) -> Result<Option<Passage>, MazeError> {
        let cell = match self.frontier.sample(&mut self.rng) {
            Some(cell) => cell,
            None => {
                self.done = true;
                return Ok(None);
            }
        };

        // open cells never close again, so whatever queued this one is still there
        let candidates = self.grid.open_neighbors_of(cell);
        if candidates.is_empty() {
            return Err(MazeError::FrontierConsistency { cell });
        }
        let parent = candidates[self.rng.gen_range(0, candidates.len())];

        let wall = self.grid.carve_between(cell, parent)?;
        self.grid.open_cell(cell);

        for neighbor in self.grid.closed_neighbors_of(cell) {
            self.frontier.insert(neighbor);
        }
        self.frontier.remove(cell);

        let passage = Passage { cell, parent, wall };
        trace!(
            "carved {} -> {} through {}, {} left in frontier",
            parent,
            cell,
            wall,
            self.frontier.len()
        );
        self.opened.push(cell);
        self.passages.push(passage);
        self.done = self.frontier.is_empty();

        Ok(Some(passage))
    }

    fn generate_maze(&mut self) -> Result<&BlockGrid, MazeError> {
        while !self.done {
            self.step_generation()?;
        }

        Ok(&self.grid)
    }

    fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
