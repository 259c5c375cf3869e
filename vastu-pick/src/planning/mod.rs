//! Routing algorithms.
//!
//! - [`TraversalGraph`]: navigable-cell graph with deterministic Dijkstra
//! - [`is_clear_shot`]: obstacle-buffered line of sight between two cells
//! - [`TourGraph`] / [`TourSolver`]: input and seam for the tour-order solver
//! - [`PathSimplifier`]: greedy clear-shot waypoint reduction
//! - [`reconcile`] / [`assemble`]: stop expansion and step assembly
//! - [`PickPlanner`]: the whole pipeline for one request

mod assembler;
mod planner;
mod reconcile;
mod simplifier;
mod tour;
mod traversal;
mod visibility;

pub use assembler::{PickStep, assemble, path_length, verify_cost, verify_endpoints};
pub use planner::{PickPlanner, PlannedPickPath};
pub use reconcile::{Stop, reconcile};
pub use simplifier::PathSimplifier;
pub use tour::{Tour, TourGraph, TourSolver, build_tour_graph, validate_tour};
pub use traversal::{GridRoute, TraversalGraph};
pub use visibility::{is_clear_shot, point_segment_distance};
