//! # VastuPick
//!
//! Pick-path planning for grid-modelled warehouses.
//!
//! ## Overview
//!
//! A warehouse is a rectangular grid of typed cells:
//!
//! - **Navigable** - Aisle floor a picker may stand on
//! - **Obstacle** - Walls, pillars and anything else impassable
//! - **Shelf** - One shelf column, reached from an adjacent anchor cell
//!
//! Given a set of items to pick, the planner builds a small complete graph
//! over the distinct shelf locations, hands it to a [`TourSolver`], and turns
//! the returned visiting order into a step-by-step route that starts and ends
//! at the source cell.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_pick::{PickPlanner, PlannerConfig, ItemId};
//! use vastu_pick::io::load_warehouse;
//! use std::path::Path;
//!
//! let warehouse = load_warehouse(Path::new("data/warehouse.json"))?;
//! let planner = PickPlanner::new(&warehouse, PlannerConfig::default())?;
//!
//! let plan = planner.plan(&[ItemId(3), ItemId(17)], &my_solver)?;
//! println!("{} steps, {:.2} cells travelled", plan.steps.len(), plan.path_length);
//! ```
//!
//! ## Pipeline
//!
//! ```text
//!   Warehouse ──► TraversalGraph ──┬──► TourGraph ──► TourSolver
//!                                  │                      │
//!                                  │                 visiting order
//!                                  │                      ▼
//!                                  │                 reconcile()
//!                                  │                      │
//!                                  └──► Dijkstra ──► PathSimplifier ──► PickStep[]
//! ```
//!
//! ## Coordinate System
//!
//! Cells are addressed by `(row, col)` with row 0 at the top of the grid.
//! "Below" a cell means `row + 1`.

#![warn(missing_docs)]

// Core types
pub mod core;

// Grid storage
pub mod grid;

// Warehouse model (grid + column tags + items)
pub mod warehouse;

// Planner configuration
pub mod config;

// Error types
pub mod error;

// Routing algorithms
pub mod planning;

// Warehouse and pick-path documents
pub mod io;

// Re-export commonly used types
pub use core::{CellKind, ColumnTag, GridCoord, Item, ItemId, ShelfLocation};

pub use grid::{CellCounts, Grid};

pub use warehouse::{AccessSide, ItemDescriptor, Warehouse};

pub use config::PlannerConfig;

pub use error::{FormatError, InvariantError, LookupError, PickError, Result, ValidationError};

pub use planning::{
    GridRoute, PathSimplifier, PickPlanner, PickStep, PlannedPickPath, Stop, Tour, TourGraph,
    TourSolver, TraversalGraph, is_clear_shot,
};
