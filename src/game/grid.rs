use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::action::Direction;

/// A cell coordinate on the board, in pixel units snapped to the cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Off-board marker used for freshly grown segments
    pub const SENTINEL: Position = Position { x: -1, y: -1 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position at grid column/row `(col, row)` for the given cell size
    pub fn from_cell(col: i32, row: i32, cell_size: i32) -> Self {
        Self::new(col * cell_size, row * cell_size)
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn stepped(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * cell_size, dy * cell_size)
    }

    /// Two equally sized cells overlap iff this cell's min corner lies inside
    /// `[other, other + size)` on both axes.
    pub fn overlaps(&self, other: Position, cell_size: i32) -> bool {
        (other.x..other.x + cell_size).contains(&self.x)
            && (other.y..other.y + cell_size).contains(&self.y)
    }
}

/// Board geometry shared by all position math
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub cell_size: i32,
    pub width: i32,
    pub height: i32,
    /// Columns an apple may be placed in
    pub interior_columns: RangeInclusive<i32>,
    /// Rows an apple may be placed in
    pub interior_rows: RangeInclusive<i32>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cell_size: 40,
            width: 1000,
            height: 800,
            interior_columns: 1..=23,
            interior_rows: 1..=19,
        }
    }
}

impl Board {
    /// Inclusive bounds check: `[0, width] x [0, height]`
    pub fn contains(&self, pos: Position) -> bool {
        (0..=self.width).contains(&pos.x) && (0..=self.height).contains(&pos.y)
    }

    /// Number of cell columns a renderer needs, edge cells included
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size + 1
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size + 1
    }

    /// Whether `pos` lies inside the interior placement area
    pub fn in_interior(&self, pos: Position) -> bool {
        pos.x % self.cell_size == 0
            && pos.y % self.cell_size == 0
            && self.interior_columns.contains(&(pos.x / self.cell_size))
            && self.interior_rows.contains(&(pos.y / self.cell_size))
    }
}
