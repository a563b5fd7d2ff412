//! Sparse world storage: a hash set of living cells.
//! Dead cells are implicit, so memory scales with the population rather than
//! the spanned area, and coordinates can roam the whole lattice.

use std::collections::HashSet;

use super::Cell;

/// The set of living cells, unordered and duplicate-free.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct World {
    cells: HashSet<Cell>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the given cell is alive
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Bring a cell to life; re-inserting a living cell changes nothing
    pub fn insert(&mut self, cell: Cell) {
        self.cells.insert(cell);
    }

    /// Number of living cells
    #[inline]
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the living cells in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// The neighbors of `cell` that are currently alive
    pub fn living_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors().into_iter().filter(move |n| self.contains(*n))
    }

    /// The whole world shifted by the given offset
    pub fn translated(&self, dx: i64, dy: i64) -> World {
        self.iter().map(|cell| cell.translated(dx, dy)).collect()
    }

    /// Seed a `width` x `height` region anchored at the origin, each cell
    /// alive with probability `density`. Used by benchmarks.
    pub fn soup(width: i64, height: i64, density: f64) -> World {
        use rand::Rng;
        let mut rng = rand::rng();
        let density = density.clamp(0.0, 1.0);

        let mut world = World::new();
        for y in 0..height {
            for x in 0..width {
                if rng.random_bool(density) {
                    world.insert(Cell::new(x, y));
                }
            }
        }
        world
    }
}

impl FromIterator<Cell> for World {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i64, i64)> for World {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(|(x, y)| Cell::new(x, y)).collect()
    }
}
