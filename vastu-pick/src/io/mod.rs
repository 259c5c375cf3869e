//! Document I/O.
//!
//! - **Warehouse descriptions**: JSON input validated into a [`Warehouse`](crate::Warehouse)
//! - **Pick-path files**: JSON output consumed by renderers and audits
//!
//! ## Loading a Warehouse
//!
//! ```rust,ignore
//! use vastu_pick::io::load_warehouse;
//! use std::path::Path;
//!
//! let warehouse = load_warehouse(Path::new("data/warehouse.json"))?;
//! ```
//!
//! ## Saving Pick Paths
//!
//! ```rust,ignore
//! use vastu_pick::io::{PathType, PickPathFile, save_pick_paths};
//!
//! let record = plan.to_record(&warehouse, 1, PathType::Optimal)?;
//! save_pick_paths(&PickPathFile::new(vec![record]), Path::new("pick-paths.json"))?;
//! ```

pub mod pick_path_format;
pub mod warehouse_format;

pub use pick_path_format::{
    ItemAndLocation, ItemRecord, PICK_PATH_FORMAT_VERSION, PathType, PickPathFile,
    PickPathInformation, PickPathRecord, PickStepRecord, load_pick_paths, read_pick_paths,
    save_pick_paths, write_pick_paths,
};
pub use warehouse_format::{
    BookDocument, BookEntry, LayoutDocument, WAREHOUSE_FORMAT_VERSION, WarehouseDocument,
    load_warehouse, parse_warehouse, read_warehouse,
};
