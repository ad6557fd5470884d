//! Translation between world cells and screen positions.
//!
//! Whole-unit pans are committed into the live cells themselves, so the
//! pan offset passed here only contributes its remainder modulo the scale.
//! A screen position covers a `scale x scale` block of world cells and maps
//! to the top-left cell of that block.

use std::fmt;

use super::{Cell, LiveSet};

/// Ratio of world units to screen units. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScaleUnit(u32);

impl ScaleUnit {
    pub const ONE: ScaleUnit = ScaleUnit(1);

    /// Returns `None` for zero
    pub const fn new(units: u32) -> Option<Self> {
        if units == 0 { None } else { Some(Self(units)) }
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    const fn as_i64(self) -> i64 {
        self.0 as i64
    }
}

impl Default for ScaleUnit {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for ScaleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:1", self.0)
    }
}

/// A position on the display, in screen cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ScreenCoord {
    pub x: i64,
    pub y: i64,
}

impl ScreenCoord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Convert a screen position to the world cell under it
pub fn screen_to_world(pos: ScreenCoord, dx: i64, dy: i64, scale: ScaleUnit) -> Cell {
    let s = scale.as_i64();
    Cell::new(
        pos.x * s + dx.rem_euclid(s),
        pos.y * s + dy.rem_euclid(s),
    )
}

/// Convert a world cell to the screen position that displays it
pub fn world_to_screen(cell: Cell, dx: i64, dy: i64, scale: ScaleUnit) -> ScreenCoord {
    let s = scale.as_i64();
    ScreenCoord::new(
        (cell.x - dx.rem_euclid(s)).div_euclid(s),
        (cell.y - dy.rem_euclid(s)).div_euclid(s),
    )
}

/// Translate every cell by (-dx, -dy): moving the view one way moves the content the other.
pub fn pan_cells(live: &LiveSet, dx: i64, dy: i64) -> LiveSet {
    live.iter().map(|cell| cell.offset(-dx, -dy)).collect()
}
