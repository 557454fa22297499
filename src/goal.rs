use std::ops::Range;

use log::debug;

use crate::error::MazeError;
use crate::grids::block_grid::BlockGrid;
use crate::grids::Cell;

/// side length of the corner window searched for a goal
pub const GOAL_SPAN: usize = 3;

/// Far-corner window the goal is picked from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalRegion {
    pub xs: Range<usize>,
    pub ys: Range<usize>,
}

impl GoalRegion {
    /// The last [`GOAL_SPAN`] columns and rows, clipped to the grid.
    pub fn far_corner(grid: &BlockGrid) -> Self {
        let (width, height) = (grid.width(), grid.height());
        Self {
            xs: width.saturating_sub(GOAL_SPAN)..width,
            ys: height.saturating_sub(GOAL_SPAN)..height,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.xs.contains(&cell.x) && self.ys.contains(&cell.y)
    }

    /// Row-major, `y` outer and `x` inner.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let xs = self.xs.clone();
        self.ys
            .clone()
            .flat_map(move |y| xs.clone().map(move |x| Cell::new(x, y)))
    }
}

/// First open cell of the far-corner region.
pub fn find_goal(grid: &BlockGrid) -> Result<Cell, MazeError> {
    let region = GoalRegion::far_corner(grid);
    let goal = region.cells().find(|cell| grid.is_open(*cell));

    match goal {
        Some(goal) => {
            debug!("goal placed at {}", goal);
            Ok(goal)
        }
        None => Err(MazeError::NoGoalCandidate {
            width: grid.width(),
            height: grid.height(),
        }),
    }
}
