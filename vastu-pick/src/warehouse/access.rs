//! Shelf access side rule.
//!
//! Aisles are lettered A..G. Shelves in odd-positioned aisles (A, C, E, G)
//! face down and are reached from the cell below; shelves in even-positioned
//! aisles (B, D, F) face up and are reached from the cell above. This follows
//! the physical layout the warehouse descriptions are drawn from.

/// Fixed global aisle ordering.
pub const AISLE_ORDER: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

/// Which neighbour of a shelf cell a picker stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessSide {
    /// Cell at `row + 1`
    Below,
    /// Cell at `row - 1`
    Above,
}

impl AccessSide {
    /// Access side for an aisle letter, `None` outside A..G.
    pub fn for_aisle(aisle: &str) -> Option<Self> {
        let position = AISLE_ORDER.iter().position(|&a| a == aisle)? + 1;
        if position % 2 == 1 {
            Some(AccessSide::Below)
        } else {
            Some(AccessSide::Above)
        }
    }

    /// Row offset from the shelf to its access cell.
    #[inline]
    pub fn row_offset(self) -> i32 {
        match self {
            AccessSide::Below => 1,
            AccessSide::Above => -1,
        }
    }
}
