use std::collections::HashMap;

use rand::Rng;

use crate::grids::Cell;

/// Set of cells that also supports O(1) uniform sampling.
///
/// Members live in a dense vec, `slots` maps each member to its index.
/// Removal swaps the last member into the hole so the vec stays dense.
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    cells: Vec<Cell>,
    slots: HashMap<Cell, usize>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.slots.contains_key(&cell)
    }

    /// returns false if the cell was already queued
    pub fn insert(&mut self, cell: Cell) -> bool {
        if self.contains(cell) {
            return false;
        }

        self.slots.insert(cell, self.cells.len());
        self.cells.push(cell);
        true
    }

    pub fn remove(&mut self, cell: Cell) -> bool {
        let index = match self.slots.remove(&cell) {
            Some(index) => index,
            None => return false,
        };

        self.cells.swap_remove(index);
        if let Some(moved) = self.cells.get(index) {
            self.slots.insert(*moved, index);
        }

        true
    }

    /// Uniform pick over the whole current membership.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<Cell> {
        if self.is_empty() {
            return None;
        }

        let index = rng.gen_range(0, self.cells.len());
        Some(self.cells[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod test_frontier {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn keeps_set_semantics() {
        let mut frontier = Frontier::new();
        assert!(frontier.insert(Cell::new(0, 2)));
        assert!(frontier.insert(Cell::new(2, 0)));
        assert!(!frontier.insert(Cell::new(0, 2)));
        assert_eq!(frontier.len(), 2);

        assert!(frontier.remove(Cell::new(0, 2)));
        assert!(!frontier.remove(Cell::new(0, 2)));
        assert!(!frontier.contains(Cell::new(0, 2)));
        assert!(frontier.contains(Cell::new(2, 0)));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn swap_remove_keeps_lookup_in_sync() {
        let mut frontier = Frontier::new();
        for x in 0..5 {
            frontier.insert(Cell::new(x * 2, 0));
        }

        // last member moves into slot 0
        frontier.remove(Cell::new(0, 0));
        assert_eq!(frontier.iter().next(), Some(&Cell::new(8, 0)));

        assert!(frontier.remove(Cell::new(8, 0)));
        assert!(frontier.remove(Cell::new(4, 0)));
        let left: Vec<_> = frontier.iter().copied().collect();
        assert_eq!(left.len(), 2);
        assert!(left.contains(&Cell::new(2, 0)));
        assert!(left.contains(&Cell::new(6, 0)));
    }

    #[test]
    fn sample_of_empty_is_none() {
        let frontier = Frontier::new();
        assert_eq!(frontier.sample(&mut StepRng::new(0, 0)), None);
    }

    #[test]
    fn sample_reaches_every_member() {
        let mut frontier = Frontier::new();
        for y in 0..4 {
            frontier.insert(Cell::new(0, y * 2));
        }

        let mut rng = StdRng::seed_from_u64(7);
        let mut hits = HashMap::new();
        for _ in 0..2000 {
            let cell = frontier.sample(&mut rng).unwrap();
            *hits.entry(cell).or_insert(0usize) += 1;
        }

        // includes the last member, each should land near 500
        assert_eq!(hits.len(), 4);
        assert!(hits.values().all(|count| *count > 350));
    }
}
