//! Pick-path result documents (JSON, version "2.0").
//!
//! Field names are camelCase. Each step's cell list starts at the previous
//! stop and ends at the next one; the last step returns to the source and
//! has a `null` target.

use std::io::{BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GridCoord, Item, ItemId};
use crate::error::{FormatError, Result};
use crate::planning::PlannedPickPath;
use crate::warehouse::Warehouse;

/// Supported pick-path file version.
pub const PICK_PATH_FORMAT_VERSION: &str = "2.0";

/// Top-level pick-path file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickPathFile {
    /// Format version
    pub version: String,
    /// Planned paths
    pub pick_paths: Vec<PickPathRecord>,
}

impl PickPathFile {
    /// Wrap records in a current-version file.
    pub fn new(pick_paths: Vec<PickPathRecord>) -> Self {
        Self {
            version: PICK_PATH_FORMAT_VERSION.to_string(),
            pick_paths,
        }
    }
}

/// How the visiting order was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathType {
    /// Exact tour solver
    Optimal,
    /// Request order baseline
    Naive,
}

/// One planned path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickPathRecord {
    /// Caller-chosen identifier
    pub path_id: usize,
    /// Solver family
    pub path_type: PathType,
    /// Items and steps
    pub pick_path_information: PickPathInformation,
}

/// Body of a [`PickPathRecord`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickPathInformation {
    /// Items in request order
    pub unordered_items_and_locations: Vec<ItemAndLocation>,
    /// Items in visiting order
    pub ordered_items_and_locations: Vec<ItemAndLocation>,
    /// Steps, numbered from 1
    pub ordered_pick_path: Vec<PickStepRecord>,
}

/// An item and its shelf cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemAndLocation {
    /// Item summary
    pub item: ItemRecord,
    /// Shelf cell `[row, col]`
    pub location: GridCoord,
}

/// Item summary written to pick-path files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Display tag `"{aisle}-{column}-{row}"`
    pub tag: String,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            author: item.author.clone(),
            tag: item.display_tag(),
        }
    }
}

/// One step of a pick path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickStepRecord {
    /// 1-based step number
    pub step_number: usize,
    /// Waypoints from the previous stop to the next
    pub cell_by_cell_path_to_target: Vec<GridCoord>,
    /// Item picked at the end of the step, `null` on the return to source
    pub target_item_and_location: Option<ItemAndLocation>,
}

impl PickPathRecord {
    /// Build the record for a planned path.
    pub fn from_plan(
        warehouse: &Warehouse,
        plan: &PlannedPickPath,
        path_id: usize,
        path_type: PathType,
    ) -> Result<Self> {
        let entry = |id: ItemId, location: GridCoord| -> Result<ItemAndLocation> {
            Ok(ItemAndLocation {
                item: ItemRecord::from(warehouse.item(id)?),
                location,
            })
        };

        let unordered = plan
            .picks
            .iter()
            .map(|&(id, loc)| entry(id, loc))
            .collect::<Result<Vec<_>>>()?;
        let ordered = plan
            .ordered_items()
            .map(|(id, loc)| entry(id, loc))
            .collect::<Result<Vec<_>>>()?;

        let steps = plan
            .steps
            .iter()
            .map(|step| -> Result<PickStepRecord> {
                Ok(PickStepRecord {
                    step_number: step.number,
                    cell_by_cell_path_to_target: step.path.clone(),
                    target_item_and_location: step
                        .target
                        .map(|id| entry(id, step.destination))
                        .transpose()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            path_id,
            path_type,
            pick_path_information: PickPathInformation {
                unordered_items_and_locations: unordered,
                ordered_items_and_locations: ordered,
                ordered_pick_path: steps,
            },
        })
    }
}

/// Write a pick-path file as pretty JSON.
pub fn write_pick_paths<W: Write>(file: &PickPathFile, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, file)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Save a pick-path file.
pub fn save_pick_paths(file: &PickPathFile, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(std::fs::File::create(path)?);
    write_pick_paths(file, &mut writer)?;
    writer.flush()?;

    info!(path = %path.display(), paths = file.pick_paths.len(), "Saved pick paths");
    Ok(())
}

/// Read a pick-path file, checking its version.
pub fn read_pick_paths<R: Read>(reader: &mut R) -> Result<PickPathFile> {
    let file: PickPathFile = serde_json::from_reader(reader)?;
    if file.version != PICK_PATH_FORMAT_VERSION {
        return Err(FormatError::VersionMismatch {
            expected: PICK_PATH_FORMAT_VERSION.to_string(),
            found: file.version,
        }
        .into());
    }
    Ok(file)
}

/// Load a pick-path file from disk.
pub fn load_pick_paths(path: &Path) -> Result<PickPathFile> {
    let mut file = std::fs::File::open(path)?;
    read_pick_paths(&mut file)
}
