//! Text rendering: a world becomes a grid of glyphs spanning its bounding
//! box, highest row first.

use itertools::Itertools;

use crate::domain::{Bounds, Cell, World};

/// Glyph for a living cell
pub const LIVING_GLYPH: char = '▣';

/// Glyph for a dead cell
pub const DEAD_GLYPH: char = '▢';

/// The glyph for one cell of the world
pub fn glyph(world: &World, cell: Cell) -> char {
    if world.contains(cell) {
        LIVING_GLYPH
    } else {
        DEAD_GLYPH
    }
}

/// Render the world as rows of space-separated glyphs covering its bounding
/// box, top row first, every row newline-terminated. An empty world renders
/// as an empty string, a singleton as its lone glyph.
pub fn render(world: &World) -> String {
    if world.is_empty() {
        return String::new();
    }
    if world.population() == 1 {
        return LIVING_GLYPH.to_string();
    }

    let bounds = Bounds::of(world);
    let mut out = String::new();
    for y in (bounds.bottom_left.y..=bounds.top_right.y).rev() {
        let row = (bounds.bottom_left.x..=bounds.top_right.x)
            .map(|x| glyph(world, Cell::new(x, y)))
            .join(" ");
        out.push_str(&row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_tracks_membership() {
        let world: World = [(0, 0)].into_iter().collect();
        assert_eq!(glyph(&world, Cell::new(0, 0)), LIVING_GLYPH);
        assert_eq!(glyph(&world, Cell::new(1, 0)), DEAD_GLYPH);
    }

    #[test]
    fn test_empty_world_renders_nothing() {
        assert_eq!(render(&World::new()), "");
    }

    #[test]
    fn test_singleton_renders_one_glyph() {
        let world: World = [(-9, 14)].into_iter().collect();
        assert_eq!(render(&world), "▣");
    }

    #[test]
    fn test_square_renders_two_rows() {
        let square: World = [(1, 1), (2, 1), (1, 2), (2, 2)].into_iter().collect();
        assert_eq!(render(&square), "▣ ▣\n▣ ▣\n");
    }

    #[test]
    fn test_rows_run_top_down() {
        // Bounding box corners sit on zero coordinates
        let world: World = [(0, 0), (2, 1), (1, 2)].into_iter().collect();
        assert_eq!(render(&world), "▢ ▣ ▢\n▢ ▢ ▣\n▣ ▢ ▢\n");
    }

    #[test]
    fn test_blinker_orientations() {
        let horizontal: World = [(0, 0), (1, 0), (2, 0)].into_iter().collect();
        assert_eq!(render(&horizontal), "▣ ▣ ▣\n");

        let vertical: World = [(1, -1), (1, 0), (1, 1)].into_iter().collect();
        assert_eq!(render(&vertical), "▣\n▣\n▣\n");
    }
}
