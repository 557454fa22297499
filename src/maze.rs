use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::generators::prim::RandPrims;
use crate::generators::{Generator, Passage};
use crate::goal::find_goal;
use crate::grids::block_grid::BlockGrid;
use crate::grids::Cell;

/// A finished maze, read-only from here on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: BlockGrid,
    start: Cell,
    goal: Cell,
    opened: Vec<Cell>,
    passages: Vec<Passage>,
}

impl Maze {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// False for anything outside the grid.
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.grid.is_open(Cell::new(x, y))
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal_cell(&self) -> Cell {
        self.goal
    }

    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    /// Passage cells in carving order, start first.
    pub fn opened(&self) -> &[Cell] {
        &self.opened
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }
}

/// Generates a maze from `start`, seeded when `seed` is given.
pub fn generate(
    width: i64,
    height: i64,
    seed: Option<u64>,
    start: Cell,
) -> Result<Maze, MazeError> {
    let config = MazeConfig {
        width,
        height,
        seed,
        start,
    };
    generate_from_config(&config)
}

pub fn generate_from_config(config: &MazeConfig) -> Result<Maze, MazeError> {
    // validate before touching the os rng
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_with_rng(config, rng)
}

/// Same as [`generate_from_config`] but with a caller supplied random source,
/// `config.seed` is ignored.
pub fn generate_with_rng<R: Rng>(config: &MazeConfig, rng: R) -> Result<Maze, MazeError> {
    let dims = config.validate()?;

    info!(
        "generating {}x{} maze from {} (seed {:?})",
        dims.width, dims.height, config.start, config.seed
    );

    let mut prims = RandPrims::new(dims, config.start, rng)?;
    prims.generate_maze()?;
    let (grid, opened, passages) = prims.into_parts();
    let goal = find_goal(&grid)?;

    info!(
        "maze done: {} passage cells, {} carved walls, goal at {}",
        opened.len(),
        passages.len(),
        goal
    );

    Ok(Maze {
        grid,
        start: config.start,
        goal,
        opened,
        passages,
    })
}
