pub mod frontier;
pub mod prim;

use crate::error::MazeError;
use crate::grids::block_grid::BlockGrid;
use crate::grids::Cell;

/// One carving step: `cell` joined the maze through `wall`, attached to the
/// already open `parent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passage {
    pub cell: Cell,
    pub parent: Cell,
    pub wall: Cell,
}

pub trait Generator {
    /// Carves a single frontier cell. `Ok(None)` once nothing is left.
    fn step_generation(&mut self) -> Result<Option<Passage>, MazeError>;
    fn generate_maze(&mut self) -> Result<&BlockGrid, MazeError>;
    fn grid(&self) -> &BlockGrid;
    fn is_done(&self) -> bool;
}
