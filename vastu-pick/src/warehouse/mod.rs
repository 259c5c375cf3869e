//! Warehouse model: grid, source cell, shelf columns and stock.
//!
//! A [`Warehouse`] is validated once at construction and read-only after.
//! Column tags and shelf cells form a bijection, so both directions of the
//! lookup are unique.

mod access;

pub use access::{AISLE_ORDER, AccessSide};

use std::collections::{BTreeMap, HashMap};

use crate::core::{CellKind, ColumnTag, GridCoord, Item, ItemId, ShelfLocation};
use crate::error::{LookupError, Result, ValidationError};
use crate::grid::Grid;

/// Item fields as they appear in a description, before an id is assigned.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemDescriptor {
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Shelf location
    pub location: ShelfLocation,
}

impl ItemDescriptor {
    /// Create a new descriptor.
    pub fn new(title: impl Into<String>, author: impl Into<String>, location: ShelfLocation) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            location,
        }
    }
}

/// Immutable warehouse.
#[derive(Clone, Debug)]
pub struct Warehouse {
    grid: Grid,
    source: GridCoord,
    total_columns: usize,
    columns: BTreeMap<ColumnTag, GridCoord>,
    column_at: HashMap<GridCoord, ColumnTag>,
    items: Vec<Item>,
}

impl Warehouse {
    /// Build and validate a warehouse.
    ///
    /// Checks that exactly `total_columns` tags are mapped, that no two tags
    /// share a cell, and that every mapped cell is a shelf. Items receive
    /// ids in the order given. The source cell kind is checked at planning
    /// time.
    pub fn new(
        grid: Grid,
        source: GridCoord,
        total_columns: usize,
        columns: impl IntoIterator<Item = (ColumnTag, GridCoord)>,
        items: impl IntoIterator<Item = ItemDescriptor>,
    ) -> Result<Self> {
        let columns: BTreeMap<ColumnTag, GridCoord> = columns.into_iter().collect();

        if columns.len() != total_columns {
            return Err(ValidationError::ColumnCountMismatch {
                declared: total_columns,
                actual: columns.len(),
            }
            .into());
        }

        let mut column_at: HashMap<GridCoord, ColumnTag> = HashMap::with_capacity(columns.len());
        for (tag, &coord) in &columns {
            let kind = grid.checked_kind(coord)?;
            if !kind.is_shelf() {
                return Err(ValidationError::ColumnNotOnShelf {
                    tag: tag.clone(),
                    coord,
                    kind,
                }
                .into());
            }
            if let Some(first) = column_at.insert(coord, tag.clone()) {
                return Err(ValidationError::DuplicateColumnCell {
                    coord,
                    first,
                    second: tag.clone(),
                }
                .into());
            }
        }

        let items = items
            .into_iter()
            .enumerate()
            .map(|(idx, desc)| Item {
                id: ItemId(idx),
                title: desc.title,
                author: desc.author,
                location: desc.location,
            })
            .collect();

        Ok(Self {
            grid,
            source,
            total_columns,
            columns,
            column_at,
            items,
        })
    }

    /// The cell grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell every pick path starts and ends at.
    #[inline]
    pub fn source(&self) -> GridCoord {
        self.source
    }

    /// Declared `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Declared number of shelf columns.
    #[inline]
    pub fn total_columns(&self) -> usize {
        self.total_columns
    }

    /// All column tags and their shelf cells, ordered by tag.
    pub fn columns(&self) -> impl Iterator<Item = (&ColumnTag, GridCoord)> {
        self.columns.iter().map(|(tag, &coord)| (tag, coord))
    }

    /// All items in id order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id.
    pub fn item(&self, id: ItemId) -> Result<&Item> {
        self.items
            .get(id.0)
            .ok_or_else(|| LookupError::UnknownItem(id).into())
    }

    /// Column tag owning a shelf cell, `None` for any other cell.
    pub fn column_tag_at(&self, coord: GridCoord) -> Option<&ColumnTag> {
        self.column_at.get(&coord)
    }

    /// Shelf cell of a column tag.
    pub fn column_cell(&self, tag: &ColumnTag) -> Option<GridCoord> {
        self.columns.get(tag).copied()
    }

    /// Shelf cell holding an item.
    pub fn item_location(&self, id: ItemId) -> Result<GridCoord> {
        let item = self.item(id)?;
        let tag = item.column_tag();
        self.column_cell(&tag)
            .ok_or_else(|| LookupError::UnmappedColumn { item: id, tag }.into())
    }

    /// Navigable cell a shelf is accessed from.
    ///
    /// The side is fixed by the aisle letter of the shelf's column tag, see
    /// [`AccessSide`].
    pub fn anchor_cell(&self, shelf: GridCoord) -> Result<GridCoord> {
        let kind = self.grid.checked_kind(shelf)?;
        if !kind.is_shelf() {
            return Err(ValidationError::WrongCellKind {
                role: "shelf",
                coord: shelf,
                expected: CellKind::Shelf,
                actual: kind,
            }
            .into());
        }

        let tag = self
            .column_tag_at(shelf)
            .ok_or(ValidationError::UntaggedShelf(shelf))?;
        let side = AccessSide::for_aisle(tag.aisle())
            .ok_or_else(|| ValidationError::UnknownAisle(tag.clone()))?;

        let anchor = shelf.offset(side.row_offset(), 0);
        match self.grid.get(anchor) {
            Some(k) if k.is_navigable() => Ok(anchor),
            _ => Err(ValidationError::InvalidAnchor { shelf, anchor }.into()),
        }
    }

    /// Cell a picker stands on when serving a stop: the source itself, or a
    /// shelf's anchor cell.
    pub fn stop_anchor(&self, stop: GridCoord) -> Result<GridCoord> {
        if stop == self.source {
            Ok(stop)
        } else {
            self.anchor_cell(stop)
        }
    }
}
