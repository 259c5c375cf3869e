//! Core types for the VastuPick library.
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`GridCoord`]: Integer `(row, col)` cell address
//!
//! ### Grid Cells
//! - [`CellKind`]: Navigable, Obstacle or Shelf
//!
//! ### Stock
//! - [`ItemId`]: Identity of an item, assigned at load time
//! - [`ColumnTag`]: Name of one shelf column, e.g. `"A-3"`
//! - [`ShelfLocation`]: Aisle / column / row descriptor of an item
//! - [`Item`]: A pickable item (book) with its location

mod cell;
mod item;
mod point;

pub use cell::CellKind;
pub use item::{ColumnTag, Item, ItemId, ShelfLocation};
pub use point::GridCoord;
