use std::fmt;

use crate::grids::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// width or height was zero or negative
    InvalidDimension { width: i64, height: i64 },
    /// start cell lies outside the grid
    StartOutOfBounds { start: Cell, width: usize, height: usize },
    /// a frontier cell had no open neighbour to attach to
    FrontierConsistency { cell: Cell },
    /// tried to carve between cells that are not two apart on one axis
    InvalidCarveGeometry { from: Cell, to: Cell },
    /// nothing open inside the goal search region
    NoGoalCandidate { width: usize, height: usize },
}

impl MazeError {
    /// Internal invariant violations, as opposed to bad input.
    pub fn is_bug(&self) -> bool {
        match self {
            MazeError::FrontierConsistency { .. } | MazeError::InvalidCarveGeometry { .. } => true,
            _ => false,
        }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { width, height } => {
                write!(f, "invalid maze dimensions {}x{}, both must be positive", width, height)
            }
            MazeError::StartOutOfBounds {
                start,
                width,
                height,
            } => write!(f, "start cell {} is outside the {}x{} grid", start, width, height),
            MazeError::FrontierConsistency { cell } => {
                write!(f, "frontier cell {} has no open neighbour", cell)
            }
            MazeError::InvalidCarveGeometry { from, to } => write!(
                f,
                "cannot carve between {} and {}, cells must be two apart on one axis",
                from, to
            ),
            MazeError::NoGoalCandidate { width, height } => {
                write!(f, "no open cell in the goal region of the {}x{} grid", width, height)
            }
        }
    }
}

impl std::error::Error for MazeError {}
