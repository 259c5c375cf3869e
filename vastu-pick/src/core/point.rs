//! Grid coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer cell address, `row` first.
///
/// Serialized as a two-element array `[row, col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct GridCoord {
    /// Row index (0 = top)
    pub row: i32,
    /// Column index (0 = left)
    pub col: i32,
}

impl GridCoord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by `(d_row, d_col)`.
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Manhattan distance in cells.
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Straight-line distance between cell centres.
    #[inline]
    pub fn distance(&self, other: &GridCoord) -> f32 {
        let dr = (other.row - self.row) as f32;
        let dc = (other.col - self.col) as f32;
        (dr * dr + dc * dc).sqrt()
    }

    /// True if the two cells share an edge (4-connectivity).
    #[inline]
    pub fn is_adjacent(&self, other: &GridCoord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<[i32; 2]> for GridCoord {
    fn from([row, col]: [i32; 2]) -> Self {
        Self::new(row, col)
    }
}

impl From<GridCoord> for [i32; 2] {
    fn from(coord: GridCoord) -> Self {
        [coord.row, coord.col]
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
