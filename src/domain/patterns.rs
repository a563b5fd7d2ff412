use std::str::FromStr;

use thiserror::Error;

use super::World;

/// The built-in seed patterns, selectable by name on the command line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pattern {
    RPentomino,
    Glider,
    Square,
}

/// Error returned when a pattern name has no table entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pattern `{0}`")]
pub struct UnknownPatternError(pub String);

impl Pattern {
    /// Every built-in pattern
    pub const fn all() -> [Pattern; 3] {
        [Pattern::RPentomino, Pattern::Glider, Pattern::Square]
    }

    /// The name the command line selects this pattern by
    pub const fn name(self) -> &'static str {
        match self {
            Pattern::RPentomino => "rpentomino",
            Pattern::Glider => "glider",
            Pattern::Square => "square",
        }
    }

    /// Short description
    pub const fn description(self) -> &'static str {
        match self {
            Pattern::RPentomino => "Methuselah - grows chaotically for over 1000 generations",
            Pattern::Glider => "Spaceship next to a still-life block (period 4)",
            Pattern::Square => "Still life",
        }
    }

    /// The seed coordinates of this pattern
    pub const fn seed(self) -> &'static [(i64, i64)] {
        match self {
            Pattern::RPentomino => &[
                (3, 2),
                (2, 3), (3, 3),
                (3, 4), (4, 4),
            ],
            Pattern::Glider => &[
                // Still-life block
                (-2, -2), (-1, -2),
                (-2, -1), (-1, -1),
                // The ship itself
                (1, 1), (2, 1), (3, 1),
                (3, 2),
                (2, 3),
            ],
            Pattern::Square => &[
                (1, 1), (2, 1),
                (1, 2), (2, 2),
            ],
        }
    }

    /// A fresh world seeded with this pattern
    pub fn world(self) -> World {
        self.seed().iter().copied().collect()
    }
}

impl FromStr for Pattern {
    type Err = UnknownPatternError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Pattern::all()
            .into_iter()
            .find(|pattern| pattern.name() == name)
            .ok_or_else(|| UnknownPatternError(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evolve;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!("rpentomino".parse(), Ok(Pattern::RPentomino));
        assert_eq!("glider".parse(), Ok(Pattern::Glider));
        assert_eq!("square".parse(), Ok(Pattern::Square));

        for pattern in Pattern::all() {
            assert_eq!(pattern.name().parse(), Ok(pattern));
        }
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert_eq!(
            Pattern::from_str("blinker"),
            Err(UnknownPatternError("blinker".to_string()))
        );
        // Lookup is case sensitive
        assert!(Pattern::from_str("Glider").is_err());
        assert!(Pattern::from_str("").is_err());
    }

    #[test]
    fn test_seed_tables() {
        let rpentomino: World = [(3, 2), (2, 3), (3, 3), (3, 4), (4, 4)].into_iter().collect();
        assert_eq!(Pattern::RPentomino.world(), rpentomino);
        assert_eq!(Pattern::RPentomino.world().population(), 5);

        assert_eq!(Pattern::Glider.world().population(), 9);
        assert_eq!(Pattern::Square.world().population(), 4);
    }

    #[test]
    fn test_square_is_a_still_life() {
        let square = Pattern::Square.world();
        assert_eq!(evolve(&square), square);
    }

    #[test]
    fn test_shipped_glider_is_block_plus_ship() {
        // The block stays put while the ship walks one step diagonally
        // every four generations.
        let block: World = [(-2, -2), (-1, -2), (-2, -1), (-1, -1)].into_iter().collect();
        let ship: World = [(1, 1), (2, 1), (3, 1), (3, 2), (2, 3)].into_iter().collect();

        let mut world = Pattern::Glider.world();
        for _ in 0..4 {
            world = evolve(&world);
        }

        let moved_ship = ship.translated(1, -1);
        let expected: World = block.iter().chain(moved_ship.iter()).collect();
        assert_eq!(world, expected);
    }
}
