//! Warehouse description documents (JSON, version "2.0").
//!
//! ## Format
//!
//! ```json
//! {
//!   "version": "2.0",
//!   "warehouseLayout": {
//!     "sourceCell": [0, 0],
//!     "numRows": 5, "numCols": 5,
//!     "navigationGrid": [[0, 0, 0, 0, 0], ...],
//!     "totalNumColumnsInGrid": 1,
//!     "columnTagsToNavigationGridCoordinates": { "A-1": [2, 2] }
//!   },
//!   "books": [
//!     { "book": { "title": "Dune", "author": "Frank Herbert" },
//!       "location": { "aisle": "A", "column": 1, "row": 3 } }
//!   ]
//! }
//! ```
//!
//! The version is checked before the rest of the document is decoded, so a
//! document from another format revision reports a version mismatch rather
//! than a missing field.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{ColumnTag, GridCoord, ShelfLocation};
use crate::error::{FormatError, Result};
use crate::grid::Grid;
use crate::warehouse::{ItemDescriptor, Warehouse};

/// Supported warehouse description version.
pub const WAREHOUSE_FORMAT_VERSION: &str = "2.0";

/// Whole warehouse description document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseDocument {
    /// Format version
    pub version: String,
    /// Grid, source and column map
    pub warehouse_layout: LayoutDocument,
    /// Stocked items
    pub books: Vec<BookEntry>,
}

/// `warehouseLayout` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    /// Source cell `[row, col]`
    pub source_cell: GridCoord,
    /// Declared row count
    pub num_rows: usize,
    /// Declared column count
    pub num_cols: usize,
    /// Cell codes, row-major
    pub navigation_grid: Vec<Vec<i64>>,
    /// Declared number of shelf columns
    pub total_num_columns_in_grid: usize,
    /// Column tag to shelf cell
    pub column_tags_to_navigation_grid_coordinates: BTreeMap<String, GridCoord>,
}

/// One `books` entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    /// Title and author
    pub book: BookDocument,
    /// Shelf location
    pub location: ShelfLocation,
}

/// Title and author of a book entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookDocument {
    /// Title
    pub title: String,
    /// Author
    pub author: String,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: String,
}

impl WarehouseDocument {
    /// Validate and build the warehouse this document describes.
    pub fn into_warehouse(self) -> Result<Warehouse> {
        let layout = self.warehouse_layout;
        let grid = Grid::from_codes(layout.num_rows, layout.num_cols, &layout.navigation_grid)?;

        let columns = layout
            .column_tags_to_navigation_grid_coordinates
            .into_iter()
            .map(|(tag, coord)| (ColumnTag::new(tag), coord));

        let items = self.books.into_iter().map(|entry| ItemDescriptor {
            title: entry.book.title,
            author: entry.book.author,
            location: entry.location,
        });

        Warehouse::new(
            grid,
            layout.source_cell,
            layout.total_num_columns_in_grid,
            columns,
            items,
        )
    }
}

impl From<&Warehouse> for WarehouseDocument {
    fn from(warehouse: &Warehouse) -> Self {
        let grid = warehouse.grid();
        Self {
            version: WAREHOUSE_FORMAT_VERSION.to_string(),
            warehouse_layout: LayoutDocument {
                source_cell: warehouse.source(),
                num_rows: grid.rows(),
                num_cols: grid.cols(),
                navigation_grid: grid.to_codes(),
                total_num_columns_in_grid: warehouse.total_columns(),
                column_tags_to_navigation_grid_coordinates: warehouse
                    .columns()
                    .map(|(tag, coord)| (tag.as_str().to_string(), coord))
                    .collect(),
            },
            books: warehouse
                .items()
                .iter()
                .map(|item| BookEntry {
                    book: BookDocument {
                        title: item.title.clone(),
                        author: item.author.clone(),
                    },
                    location: item.location.clone(),
                })
                .collect(),
        }
    }
}

/// Parse and validate a warehouse description.
pub fn parse_warehouse(json: &str) -> Result<Warehouse> {
    let probe: VersionProbe = serde_json::from_str(json)?;
    if probe.version != WAREHOUSE_FORMAT_VERSION {
        return Err(FormatError::VersionMismatch {
            expected: WAREHOUSE_FORMAT_VERSION.to_string(),
            found: probe.version,
        }
        .into());
    }

    let document: WarehouseDocument = serde_json::from_str(json)?;
    document.into_warehouse()
}

/// Read a warehouse description from any reader.
pub fn read_warehouse<R: Read>(reader: &mut R) -> Result<Warehouse> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    parse_warehouse(&json)
}

/// Load a warehouse description file.
pub fn load_warehouse(path: &Path) -> Result<Warehouse> {
    let mut file = std::fs::File::open(path)?;
    let warehouse = read_warehouse(&mut file)?;

    let (rows, cols) = warehouse.dimensions();
    info!(
        path = %path.display(),
        rows,
        cols,
        columns = warehouse.total_columns(),
        items = warehouse.items().len(),
        "Loaded warehouse"
    );

    Ok(warehouse)
}
