//! Cell classification.

use std::fmt;

/// Kind of a warehouse grid cell.
///
/// The numeric codes match the warehouse description format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellKind {
    /// Floor a picker may stand on and move through
    #[default]
    Navigable = 0,
    /// Impassable cell
    Obstacle = 1,
    /// Shelf column, reached from an adjacent anchor cell
    Shelf = 2,
}

impl CellKind {
    /// Decode a description cell code. Returns `None` for unknown codes.
    #[inline]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(CellKind::Navigable),
            1 => Some(CellKind::Obstacle),
            2 => Some(CellKind::Shelf),
            _ => None,
        }
    }

    /// Description cell code.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Check if a picker can walk on this cell.
    #[inline]
    pub fn is_navigable(self) -> bool {
        self == CellKind::Navigable
    }

    /// Check if this cell blocks line of sight.
    #[inline]
    pub fn is_obstacle(self) -> bool {
        self == CellKind::Obstacle
    }

    /// Check if this cell is a shelf column.
    #[inline]
    pub fn is_shelf(self) -> bool {
        self == CellKind::Shelf
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Navigable => "navigable",
            CellKind::Obstacle => "obstacle",
            CellKind::Shelf => "shelf",
        };
        f.write_str(name)
    }
}
