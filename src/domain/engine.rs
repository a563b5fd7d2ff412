//! Generation stepping over the sparse world.
//!
//! Each step scans the bounding box grown by one cell in every direction.
//! Births only appear adjacent to a living cell, so nothing outside that
//! rectangle can change, and scan cost tracks the pattern's span instead of
//! a fixed board size.

use itertools::Itertools;

use super::{Bounds, Cell, World, will_be_alive};

/// No arrangement of fewer cells can produce a birth, so below this the
/// world dies outright.
const MIN_VIABLE_POPULATION: usize = 3;

/// Advance the world by one generation.
pub fn evolve(world: &World) -> World {
    if world.population() < MIN_VIABLE_POPULATION {
        return World::new();
    }

    let scan = Bounds::of(world).grow(1);
    (scan.bottom_left.y..=scan.top_right.y)
        .cartesian_product(scan.bottom_left.x..=scan.top_right.x)
        .map(|(y, x)| Cell::new(x, y))
        .filter(|&cell| will_be_alive(world, cell))
        .collect()
}

/// Advance the world by one generation, evaluating scan rows in parallel.
/// Produces exactly the same world as [`evolve`].
pub fn evolve_parallel(world: &World) -> World {
    use rayon::prelude::*;

    if world.population() < MIN_VIABLE_POPULATION {
        return World::new();
    }

    let scan = Bounds::of(world).grow(1);
    let rows: Vec<i64> = (scan.bottom_left.y..=scan.top_right.y).collect();

    // Evaluate each scan row independently
    let row_births: Vec<Vec<Cell>> = rows
        .into_par_iter()
        .map(|y| {
            (scan.bottom_left.x..=scan.top_right.x)
                .map(|x| Cell::new(x, y))
                .filter(|&cell| will_be_alive(world, cell))
                .collect()
        })
        .collect();

    row_births.into_iter().flatten().collect()
}
