use std::collections::HashSet;

/// Cell is one coordinate on the unbounded Life plane.
/// A cell carries no state of its own: it is alive exactly when it is in the live set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

/// The set of currently alive cells. Unordered, unique by coordinate.
pub type LiveSet = HashSet<Cell, ahash::RandomState>;

/// Offsets of the 8 Moore-neighborhood positions
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translate the cell by (dx, dy)
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Iterate the 8 cells adjacent to this one
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Conway's survival rule (S23): a live cell stays alive with 2 or 3 neighbors
pub const fn survives(neighbors: u8) -> bool {
    matches!(neighbors, 2 | 3)
}

/// Conway's birth rule (B3): exactly 3 neighbors bring a cell to life
pub const fn is_born(neighbors: u8) -> bool {
    neighbors == 3
}
