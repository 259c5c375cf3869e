//! Error types for VastuPick.
//!
//! Every failure aborts the whole planning request. Errors are grouped in the
//! four families a caller needs to tell apart: malformed input documents,
//! rejected input values, unresolvable items, and failed post-computation
//! cross-checks.

use thiserror::Error;

use crate::core::{CellKind, ColumnTag, GridCoord, ItemId};

/// Top-level error type.
#[derive(Error, Debug)]
pub enum PickError {
    /// Input document could not be read as a warehouse or pick-path file.
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Input values break a structural rule.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A requested item has no resolvable shelf location.
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// A post-computation cross-check failed.
    #[error("Invariant violated: {0}")]
    Invariant(#[from] InvariantError),

    /// File could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PickError {
    fn from(e: serde_json::Error) -> Self {
        PickError::Format(FormatError::Malformed(e.to_string()))
    }
}

/// Document-level errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The `version` field does not match the supported format.
    #[error("unsupported format version {found:?} (expected {expected:?})")]
    VersionMismatch {
        /// Supported version
        expected: String,
        /// Version found in the document
        found: String,
    },

    /// JSON could not be decoded into the expected document shape.
    #[error("malformed document: {0}")]
    Malformed(String),
}

/// Input values rejected before any routing happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Number of matrix rows differs from the declared row count.
    #[error("grid has {actual} rows but {declared} were declared")]
    RowCountMismatch {
        /// Declared row count
        declared: usize,
        /// Rows present in the matrix
        actual: usize,
    },

    /// A matrix row has the wrong length.
    #[error("grid row {row} has {actual} cells but {declared} columns were declared")]
    RowLengthMismatch {
        /// Offending row index
        row: usize,
        /// Declared column count
        declared: usize,
        /// Cells present in the row
        actual: usize,
    },

    /// A cell code outside {0, 1, 2}.
    #[error("unknown cell code {code} at {coord}")]
    UnknownCellCode {
        /// Cell position
        coord: GridCoord,
        /// Raw code
        code: i64,
    },

    /// Column-tag map size differs from the declared column count.
    #[error("{actual} column tags mapped but {declared} columns were declared")]
    ColumnCountMismatch {
        /// Declared total column count
        declared: usize,
        /// Tags present in the map
        actual: usize,
    },

    /// Two column tags point at the same cell.
    #[error("column tags {first} and {second} both map to {coord}")]
    DuplicateColumnCell {
        /// Shared cell
        coord: GridCoord,
        /// First tag seen
        first: ColumnTag,
        /// Second tag seen
        second: ColumnTag,
    },

    /// A column tag maps to a cell that is not a shelf.
    #[error("column tag {tag} maps to {coord}, which is {kind} rather than a shelf")]
    ColumnNotOnShelf {
        /// Offending tag
        tag: ColumnTag,
        /// Mapped cell
        coord: GridCoord,
        /// Actual cell kind
        kind: CellKind,
    },

    /// A coordinate lies outside the grid.
    #[error("{coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// Offending coordinate
        coord: GridCoord,
        /// Grid rows
        rows: usize,
        /// Grid columns
        cols: usize,
    },

    /// A cell has the wrong kind for the role it plays.
    #[error("{role} {coord} must be {expected}, found {actual}")]
    WrongCellKind {
        /// What the cell is used as (source, target, ...)
        role: &'static str,
        /// Offending coordinate
        coord: GridCoord,
        /// Required kind
        expected: CellKind,
        /// Actual kind
        actual: CellKind,
    },

    /// Clear-shot endpoints must be navigable or shelf cells.
    #[error("clear-shot endpoint {coord} is an obstacle")]
    ObstacleEndpoint {
        /// Offending coordinate
        coord: GridCoord,
    },

    /// Beam radius must be strictly positive.
    #[error("beam radius must be positive, got {0}")]
    NonPositiveBeamRadius(f32),

    /// Beam radius wide enough to block a move between adjacent cells.
    #[error("beam radius must be below {max}, got {radius}")]
    BeamRadiusTooWide {
        /// Requested radius
        radius: f32,
        /// Exclusive upper bound
        max: f32,
    },

    /// More distinct locations than the tour solver can handle.
    #[error("{count} distinct pick locations exceed the limit of {max}")]
    TooManyLocations {
        /// Requested distinct locations
        count: usize,
        /// Configured ceiling
        max: usize,
    },

    /// The same target location was passed twice to the tour builder.
    #[error("target location {0} listed more than once")]
    DuplicateTarget(GridCoord),

    /// The same item was requested twice.
    #[error("item {0} requested more than once")]
    DuplicateItem(ItemId),

    /// No navigable route between two cells.
    #[error("no route from {from} to {to}")]
    Unreachable {
        /// Route start
        from: GridCoord,
        /// Route end
        to: GridCoord,
    },

    /// A shelf cell without a column tag.
    #[error("shelf cell {0} has no column tag")]
    UntaggedShelf(GridCoord),

    /// Aisle letter outside the fixed A..G ordering.
    #[error("column tag {0} has an aisle outside A..G")]
    UnknownAisle(ColumnTag),

    /// The access cell implied by the aisle rule is unusable.
    #[error("shelf {shelf} is accessed from {anchor}, which is not a navigable cell")]
    InvalidAnchor {
        /// Shelf cell
        shelf: GridCoord,
        /// Computed access cell
        anchor: GridCoord,
    },

    /// Planner configuration value out of range.
    #[error("invalid planner configuration: {0}")]
    InvalidConfig(String),
}

/// Item resolution errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// No item with this id exists.
    #[error("no item with id {0}")]
    UnknownItem(ItemId),

    /// The item's column tag is not in the column map.
    #[error("item {item} is stored in column {tag}, which has no shelf cell")]
    UnmappedColumn {
        /// Item id
        item: ItemId,
        /// Column tag derived from the item location
        tag: ColumnTag,
    },
}

/// Failed cross-checks on computed results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantError {
    /// Tour does not start and end at the source.
    #[error("tour must start and end at source {origin}, got {first:?} .. {last:?}")]
    TourEndpoints {
        /// Source cell
        origin: GridCoord,
        /// First node of the tour
        first: Option<GridCoord>,
        /// Last node of the tour
        last: Option<GridCoord>,
    },

    /// Tour visits a node that is not in the tour graph.
    #[error("tour visits {0}, which is not a tour-graph node")]
    TourUnknownNode(GridCoord),

    /// Tour is not a permutation of the tour-graph nodes.
    #[error("tour visits {visited} of {expected} target locations exactly once")]
    TourCoverage {
        /// Target nodes in the graph
        expected: usize,
        /// Target nodes visited exactly once
        visited: usize,
    },

    /// Expanded stop sequence has the wrong length.
    #[error("expanded order has {actual} stops, expected {expected}")]
    StopCount {
        /// items + 2
        expected: usize,
        /// Stops produced
        actual: usize,
    },

    /// A requested item never appears in the expanded order.
    #[error("item {0} missing from the expanded order")]
    ItemNotCovered(ItemId),

    /// A step does not begin or end where it should.
    #[error("step {step} should run {expected_start} -> {expected_end}, got {actual_start:?} -> {actual_end:?}")]
    StepEndpoints {
        /// Step number (1-based)
        step: usize,
        /// Previous stop
        expected_start: GridCoord,
        /// Next stop
        expected_end: GridCoord,
        /// First cell of the step
        actual_start: Option<GridCoord>,
        /// Last cell of the step
        actual_end: Option<GridCoord>,
    },

    /// Step count differs from stop transitions.
    #[error("pick path has {actual} steps, expected {expected}")]
    StepCount {
        /// stops - 1
        expected: usize,
        /// Steps produced
        actual: usize,
    },

    /// Assembled travel exceeds the solver's reported tour cost.
    #[error("assembled travel {travel:.3} exceeds tour cost {tour_cost:.3}")]
    CostBound {
        /// Euclidean path length minus shelf steps
        travel: f32,
        /// Cost reported by the tour solver
        tour_cost: f32,
    },
}

/// Result alias for VastuPick operations.
pub type Result<T> = std::result::Result<T, PickError>;
