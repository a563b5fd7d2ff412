use super::{Cell, World};

/// The tightest axis-aligned rectangle around a set of cells, tracked by its
/// extreme corners.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bounds {
    pub top_right: Cell,
    pub bottom_left: Cell,
}

impl Bounds {
    /// Corners of the smallest rectangle enclosing every living cell.
    /// An empty world collapses to the origin, a singleton to that cell.
    pub fn of(world: &World) -> Self {
        let mut cells = world.iter();
        let Some(first) = cells.next() else {
            return Self {
                top_right: Cell::new(0, 0),
                bottom_left: Cell::new(0, 0),
            };
        };

        let seed = Self {
            top_right: first,
            bottom_left: first,
        };
        cells.fold(seed, |bounds, cell| Self {
            top_right: Cell::new(
                bounds.top_right.x.max(cell.x),
                bounds.top_right.y.max(cell.y),
            ),
            bottom_left: Cell::new(
                bounds.bottom_left.x.min(cell.x),
                bounds.bottom_left.y.min(cell.y),
            ),
        })
    }

    /// The same rectangle pushed outward by `margin` on every side
    pub const fn grow(self, margin: i64) -> Self {
        Self {
            top_right: self.top_right.translated(margin, margin),
            bottom_left: self.bottom_left.translated(-margin, -margin),
        }
    }

    /// Number of columns spanned
    pub const fn width(self) -> i64 {
        self.top_right.x - self.bottom_left.x + 1
    }

    /// Number of rows spanned
    pub const fn height(self) -> i64 {
        self.top_right.y - self.bottom_left.y + 1
    }
}
