/// A position on the unbounded integer lattice.
/// The world stores living cells only, so a cell is just its coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    /// Create a cell at the given coordinates
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The eight Moore neighbors, in fixed row-major order over the
    /// surrounding 3x3 block with the center excluded.
    pub const fn neighbors(self) -> [Cell; 8] {
        let Cell { x, y } = self;
        [
            Cell::new(x - 1, y - 1),
            Cell::new(x, y - 1),
            Cell::new(x + 1, y - 1),
            Cell::new(x - 1, y),
            Cell::new(x + 1, y),
            Cell::new(x - 1, y + 1),
            Cell::new(x, y + 1),
            Cell::new(x + 1, y + 1),
        ]
    }

    /// This cell shifted by the given offset
    #[inline]
    pub const fn translated(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}
