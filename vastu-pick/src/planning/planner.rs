//! End-to-end pick-path planning for one warehouse.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::core::{GridCoord, ItemId};
use crate::error::{Result, ValidationError};
use crate::io::{PathType, PickPathRecord};
use crate::warehouse::Warehouse;

use super::assembler::{PickStep, assemble, path_length, verify_cost, verify_endpoints};
use super::reconcile::{Stop, reconcile};
use super::simplifier::PathSimplifier;
use super::tour::{Tour, TourSolver, build_tour_graph, validate_tour};
use super::traversal::TraversalGraph;

/// Result of one planning request.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedPickPath {
    /// Start and end cell
    pub source: GridCoord,
    /// Requested items with their shelf cells, in request order
    pub picks: Vec<(ItemId, GridCoord)>,
    /// Tour over distinct locations returned by the solver
    pub tour: Tour,
    /// Expanded stop sequence, source sentinels included
    pub stops: Vec<Stop>,
    /// One step per stop transition
    pub steps: Vec<PickStep>,
    /// Total straight-line length of all step waypoints
    pub path_length: f32,
}

impl PlannedPickPath {
    /// Cost reported by the tour solver.
    #[inline]
    pub fn tour_cost(&self) -> f32 {
        self.tour.cost
    }

    /// Items in visiting order.
    pub fn ordered_items(&self) -> impl Iterator<Item = (ItemId, GridCoord)> + '_ {
        self.stops
            .iter()
            .filter_map(|s| s.item.map(|item| (item, s.location)))
    }

    /// Output record for a pick-path file.
    pub fn to_record(
        &self,
        warehouse: &Warehouse,
        path_id: usize,
        path_type: PathType,
    ) -> Result<PickPathRecord> {
        PickPathRecord::from_plan(warehouse, self, path_id, path_type)
    }
}

/// Plans pick paths over one warehouse.
///
/// The traversal graph is built once in [`PickPlanner::new`] and shared by
/// every request.
pub struct PickPlanner<'a> {
    warehouse: &'a Warehouse,
    traversal: TraversalGraph<'a>,
    config: PlannerConfig,
}

impl<'a> PickPlanner<'a> {
    /// Create a planner, validating the configuration.
    pub fn new(warehouse: &'a Warehouse, config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            warehouse,
            traversal: TraversalGraph::build(warehouse.grid()),
            config,
        })
    }

    /// Create a planner with default configuration.
    pub fn with_defaults(warehouse: &'a Warehouse) -> Result<Self> {
        Self::new(warehouse, PlannerConfig::default())
    }

    /// Warehouse being planned over.
    #[inline]
    pub fn warehouse(&self) -> &'a Warehouse {
        self.warehouse
    }

    /// Shared traversal graph.
    #[inline]
    pub fn traversal(&self) -> &TraversalGraph<'a> {
        &self.traversal
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a pick path for `items`.
    ///
    /// Fails without a partial result if any item is unknown or repeated,
    /// the request spans too many distinct shelves, a shelf cannot be
    /// reached, or the solver breaks the tour contract.
    pub fn plan(&self, items: &[ItemId], solver: &dyn TourSolver) -> Result<PlannedPickPath> {
        let source = self.warehouse.source();

        let mut seen = HashSet::with_capacity(items.len());
        let mut picks = Vec::with_capacity(items.len());
        for &item in items {
            if !seen.insert(item) {
                return Err(ValidationError::DuplicateItem(item).into());
            }
            picks.push((item, self.warehouse.item_location(item)?));
        }

        let mut targets: Vec<GridCoord> = Vec::new();
        for &(_, location) in &picks {
            if !targets.contains(&location) {
                targets.push(location);
            }
        }

        let graph = build_tour_graph(
            self.warehouse,
            &self.traversal,
            &targets,
            self.config.max_tour_locations,
        )?;

        let tour = if targets.is_empty() {
            graph.tour_from_indices(&[0, 0])
        } else {
            solver.solve(&graph)?
        };
        validate_tour(&graph, &tour)?;
        debug!(
            solver = solver.name(),
            locations = targets.len(),
            cost = tour.cost,
            "Tour solved"
        );

        let stops = reconcile(source, &picks, &tour.order)?;

        let simplifier = PathSimplifier::new(self.warehouse.grid(), self.config.beam_radius)?;
        let steps = assemble(self.warehouse, &self.traversal, &simplifier, &stops)?;
        verify_endpoints(&stops, &steps)?;

        if self.config.verify_cost {
            verify_cost(&steps, picks.len(), tour.cost, self.config.cost_tolerance)?;
        }

        let length = path_length(&steps);
        info!(
            items = picks.len(),
            locations = targets.len(),
            steps = steps.len(),
            tour_cost = tour.cost,
            path_length = length,
            "Planned pick path"
        );

        Ok(PlannedPickPath {
            source,
            picks,
            tour,
            stops,
            steps,
            path_length: length,
        })
    }
}
