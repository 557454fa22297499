use crate::error::MazeError;
use crate::grids::{Cell, Dimensions};

pub const DEFAULT_DIMS: (i64, i64) = (30, 20);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: i64,
    pub height: i64,
    /// `None` draws a seed from the OS
    pub seed: Option<u64>,
    pub start: Cell,
}

impl MazeConfig {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = start;
        self
    }

    /// Checked dimensions, making sure the start fits inside them.
    pub fn validate(&self) -> Result<Dimensions, MazeError> {
        let dims = Dimensions::new(self.width, self.height)?;
        if !dims.contains(self.start) {
            return Err(MazeError::StartOutOfBounds {
                start: self.start,
                width: dims.width,
                height: dims.height,
            });
        }

        Ok(dims)
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMS.0,
            height: DEFAULT_DIMS.1,
            seed: None,
            start: Cell::new(0, 0),
        }
    }
}

#[cfg(test)]
mod test_config {
    use super::*;

    #[test]
    fn defaults() {
        let config = MazeConfig::default();
        assert_eq!((config.width, config.height), (30, 20));
        assert_eq!(config.seed, None);
        assert_eq!(config.start, Cell::new(0, 0));
    }

    #[test]
    fn validate_checks_dimensions_then_start() {
        assert!(matches!(
            MazeConfig::new(0, 10).validate(),
            Err(MazeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            MazeConfig::new(4, 4).with_start(Cell::new(1, 4)).validate(),
            Err(MazeError::StartOutOfBounds { .. })
        ));
        assert_eq!(
            MazeConfig::new(4, 6).with_seed(1).validate(),
            Ok(Dimensions {
                width: 4,
                height: 6
            })
        );
    }
}
