//! The birth/survival rule evaluated against a sparse world.

use super::{Cell, World};

/// Decide whether `cell` lives in the next generation: exactly three living
/// neighbors always mean life, exactly two sustain a cell that is already
/// alive, anything else dies.
pub fn will_be_alive(world: &World, cell: Cell) -> bool {
    let living = world.living_neighbors(cell).count();

    if living == 3 {
        return true;
    }
    if living == 2 && world.contains(cell) {
        return true;
    }
    false
}
