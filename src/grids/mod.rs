pub mod block_grid;

use std::convert::TryFrom;

use crate::error::MazeError;

/// distance between two passage cells, the wall cell sits halfway
pub const STEP: usize = 2;

/// largest grid we agree to allocate
pub const MAX_CELLS: usize = 1 << 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    /// Checks raw (possibly negative) input sizes. Anything non-positive or
    /// over [`MAX_CELLS`] cells is rejected before allocating.
    pub fn new(width: i64, height: i64) -> Result<Self, MazeError> {
        let invalid = MazeError::InvalidDimension { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }

        let (w, h) = match (usize::try_from(width), usize::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(invalid),
        };
        match w.checked_mul(h) {
            Some(area) if area <= MAX_CELLS => Ok(Self {
                width: w,
                height: h,
            }),
            _ => Err(invalid),
        }
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Cell `distance` away in `direction`, `None` if that would leave the
    /// positive quadrant. Upper bounds are the grid's job.
    pub fn offset(self, direction: Direction, distance: usize) -> Option<Cell> {
        let Cell { x, y } = self;
        match direction {
            Direction::North => y.checked_add(distance).map(|y| Cell::new(x, y)),
            Direction::South => y.checked_sub(distance).map(|y| Cell::new(x, y)),
            Direction::East => x.checked_add(distance).map(|x| Cell::new(x, y)),
            Direction::West => x.checked_sub(distance).map(|x| Cell::new(x, y)),
        }
    }

    /// The single cell halfway between two passage cells.
    ///
    /// Both cells have to share one axis and be exactly [`STEP`] apart on the
    /// other, anything else means the caller picked a bogus pair.
    pub fn midpoint(self, other: Cell) -> Result<Cell, MazeError> {
        let dx = self.x.max(other.x) - self.x.min(other.x);
        let dy = self.y.max(other.y) - self.y.min(other.y);

        match (dx, dy) {
            (0, STEP) => Ok(Cell::new(self.x, self.y.min(other.y) + 1)),
            (STEP, 0) => Ok(Cell::new(self.x.min(other.x) + 1, self.y)),
            _ => Err(MazeError::InvalidCarveGeometry {
                from: self,
                to: other,
            }),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::North,
            1 => Direction::South,
            2 => Direction::East,
            3 => Direction::West,
            _ => unreachable!(),
        }
    }
}

/// (is_wall, coords) of a cell next to another one
pub type Neighbor = (bool, Cell);

/// The up to four in-bounds cells one [`STEP`] away from some cell.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub north: Option<Neighbor>,
    pub south: Option<Neighbor>,
    pub east: Option<Neighbor>,
    pub west: Option<Neighbor>,

    counter: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            north: None,
            south: None,
            east: None,
            west: None,
            counter: 0,
        }
    }

    pub fn set(&mut self, direction: Direction, neighbor: Option<Neighbor>) {
        match direction {
            Direction::North => self.north = neighbor,
            Direction::South => self.south = neighbor,
            Direction::East => self.east = neighbor,
            Direction::West => self.west = neighbor,
        }
    }

    pub fn get(&self, direction: Direction) -> Option<Neighbor> {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Neighborhood {
    type Item = (Neighbor, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < Direction::ALL.len() {
            let direction = Direction::from(self.counter);
            self.counter += 1;

            if let Some(neighbor) = self.get(direction) {
                return Some((neighbor, direction));
            }
        }

        None
    }
}

#[cfg(test)]
mod test_grids {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            Dimensions::new(0, 10),
            Err(MazeError::InvalidDimension {
                width: 0,
                height: 10
            })
        );
        assert!(Dimensions::new(-1, 5).is_err());
        assert!(Dimensions::new(5, -3).is_err());
        assert!(Dimensions::new(i64::MAX, i64::MAX).is_err());
        assert!(Dimensions::new(i64::MAX, 1).is_err());
        assert!(Dimensions::new(1 << 16, 1 << 15).is_err());
        assert!(Dimensions::new(1 << 15, 1 << 15).is_ok());
        assert_eq!(
            Dimensions::new(3, 7),
            Ok(Dimensions {
                width: 3,
                height: 7
            })
        );
    }

    #[test]
    fn offsets_stay_in_the_positive_quadrant() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.offset(Direction::South, STEP), None);
        assert_eq!(origin.offset(Direction::West, STEP), None);
        assert_eq!(origin.offset(Direction::North, STEP), Some(Cell::new(0, 2)));
        assert_eq!(origin.offset(Direction::East, STEP), Some(Cell::new(2, 0)));
    }

    #[test]
    fn midpoint_of_aligned_cells() {
        assert_eq!(
            Cell::new(2, 4).midpoint(Cell::new(2, 2)),
            Ok(Cell::new(2, 3))
        );
        assert_eq!(
            Cell::new(0, 6).midpoint(Cell::new(2, 6)),
            Ok(Cell::new(1, 6))
        );
    }

    #[test]
    fn midpoint_rejects_bad_geometry() {
        let diagonal = Cell::new(0, 0).midpoint(Cell::new(2, 2));
        assert_eq!(
            diagonal,
            Err(MazeError::InvalidCarveGeometry {
                from: Cell::new(0, 0),
                to: Cell::new(2, 2)
            })
        );
        assert!(Cell::new(0, 0).midpoint(Cell::new(0, 4)).is_err());
        assert!(Cell::new(3, 3).midpoint(Cell::new(3, 3)).is_err());
        assert!(Cell::new(1, 0).midpoint(Cell::new(2, 0)).is_err());
    }

    #[test]
    fn neighborhood_iterates_in_direction_order() {
        let mut neighbors = Neighborhood::new();
        neighbors.set(Direction::West, Some((true, Cell::new(0, 2))));
        neighbors.set(Direction::North, Some((false, Cell::new(2, 4))));

        let seen: Vec<_> = neighbors.map(|(_, dir)| dir).collect();
        assert_eq!(seen, vec![Direction::North, Direction::West]);
    }
}
