use crate::error::MazeError;
use crate::grids::{Cell, Dimensions, Direction, Neighborhood, STEP};

/// Wall/passage grid where every cell is a whole block.
///
/// `true` is a wall, `false` is an open passage. Stored row-major, so
/// `(x, y)` lives at `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    pub dims: Dimensions,

    pub cells: Vec<bool>,
}

impl BlockGrid {
    /// Fresh grid with every cell closed.
    pub fn with_dims(dims: Dimensions) -> Self {
        Self {
            cells: vec![true; dims.area()],
            dims,
        }
    }

    #[inline]
    fn index_of(&self, cell: Cell) -> usize {
        (self.dims.width * cell.y) + cell.x
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.dims.contains(cell)
    }

    /// Out of bounds reads as a wall.
    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        !self.contains(cell) || self.cells[self.index_of(cell)]
    }

    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        !self.is_wall(cell)
    }

    // returns previous state
    pub fn set_cell(&mut self, cell: Cell, wall: bool) -> bool {
        let index = self.index_of(cell);
        let prev = self.cells[index];
        self.cells[index] = wall;

        prev
    }

    pub fn open_cell(&mut self, cell: Cell) -> bool {
        self.set_cell(cell, false)
    }

    /// Knocks out the wall between two passage cells and returns it.
    pub fn carve_between(&mut self, one: Cell, two: Cell) -> Result<Cell, MazeError> {
        let wall = one.midpoint(two)?;
        self.open_cell(wall);

        Ok(wall)
    }

    /// In-bounds cells one passage step away, tagged with their wall state.
    pub fn get_neighborhood_of(&self, cell: Cell) -> Neighborhood {
        let mut neighbors = Neighborhood::new();

        for &direction in Direction::ALL.iter() {
            let neighbor = cell
                .offset(direction, STEP)
                .filter(|n| self.contains(*n))
                .map(|n| (self.is_wall(n), n));
            neighbors.set(direction, neighbor);
        }

        neighbors
    }

    pub fn open_neighbors_of(&self, cell: Cell) -> Vec<Cell> {
        self.get_neighborhood_of(cell)
            .filter(|((wall, _), _)| !*wall)
            .map(|((_, n), _)| n)
            .collect()
    }

    pub fn closed_neighbors_of(&self, cell: Cell) -> Vec<Cell> {
        self.get_neighborhood_of(cell)
            .filter(|((wall, _), _)| *wall)
            .map(|((_, n), _)| n)
            .collect()
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|wall| !**wall).count()
    }

    /// Every cell in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> {
        let Dimensions { width, height } = self.dims;
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}
