//! Tour input and the solver seam.
//!
//! A [`TourGraph`] is the complete graph over the source and the distinct
//! target shelves of one request. Edge weights are shortest-path distances
//! between the anchor cells the picker stands on. The graph is handed to a
//! [`TourSolver`], whose answer is checked with [`validate_tour`] before use.

use std::collections::HashSet;

use tracing::debug;

use crate::core::{CellKind, GridCoord};
use crate::error::{InvariantError, Result, ValidationError};
use crate::warehouse::Warehouse;

use super::traversal::TraversalGraph;

/// Complete weighted graph over the source (node 0) and target shelves.
#[derive(Clone, Debug, PartialEq)]
pub struct TourGraph {
    nodes: Vec<GridCoord>,
    weights: Vec<Vec<f32>>,
}

impl TourGraph {
    /// Number of nodes including the source.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the source is node 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The source cell.
    #[inline]
    pub fn source(&self) -> GridCoord {
        self.nodes[0]
    }

    /// All node cells, source first, then targets in first-seen order.
    #[inline]
    pub fn nodes(&self) -> &[GridCoord] {
        &self.nodes
    }

    /// Target shelf cells.
    #[inline]
    pub fn targets(&self) -> &[GridCoord] {
        &self.nodes[1..]
    }

    /// Node cell by index.
    #[inline]
    pub fn node(&self, index: usize) -> GridCoord {
        self.nodes[index]
    }

    /// Index of a node cell.
    pub fn index_of(&self, coord: GridCoord) -> Option<usize> {
        self.nodes.iter().position(|&n| n == coord)
    }

    /// Symmetric edge weight between two node indices.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f32 {
        self.weights[i][j]
    }

    /// Weight matrix rows.
    #[inline]
    pub fn weights(&self) -> &[Vec<f32>] {
        &self.weights
    }

    /// Build a [`Tour`] from a closed sequence of node indices, summing the
    /// edge weights along it.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn tour_from_indices(&self, indices: &[usize]) -> Tour {
        let cost = indices.windows(2).map(|w| self.weight(w[0], w[1])).sum();
        Tour {
            order: indices.iter().map(|&i| self.nodes[i]).collect(),
            cost,
        }
    }
}

/// Closed visiting order returned by a solver.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    /// Cells from the source back to the source, each target once
    pub order: Vec<GridCoord>,
    /// Total weight of the tour
    pub cost: f32,
}

/// Combinatorial tour-order solver.
///
/// Implementations receive a complete graph of at most
/// [`MAX_TOUR_LOCATIONS`](crate::config::MAX_TOUR_LOCATIONS) targets plus the
/// source, and return a closed tour starting and ending at node 0.
pub trait TourSolver {
    /// Short solver name for logs.
    fn name(&self) -> &str;

    /// Compute a visiting order.
    fn solve(&self, graph: &TourGraph) -> Result<Tour>;
}

/// Build the tour input for a request.
///
/// `targets` must be distinct shelf cells. The source must be navigable.
pub fn build_tour_graph(
    warehouse: &Warehouse,
    traversal: &TraversalGraph<'_>,
    targets: &[GridCoord],
    max_locations: usize,
) -> Result<TourGraph> {
    let grid = warehouse.grid();
    let source = warehouse.source();

    let source_kind = grid.checked_kind(source)?;
    if !source_kind.is_navigable() {
        return Err(ValidationError::WrongCellKind {
            role: "source",
            coord: source,
            expected: CellKind::Navigable,
            actual: source_kind,
        }
        .into());
    }

    if targets.len() > max_locations {
        return Err(ValidationError::TooManyLocations {
            count: targets.len(),
            max: max_locations,
        }
        .into());
    }

    let mut seen = HashSet::with_capacity(targets.len());
    for &target in targets {
        let kind = grid.checked_kind(target)?;
        if !kind.is_shelf() {
            return Err(ValidationError::WrongCellKind {
                role: "target",
                coord: target,
                expected: CellKind::Shelf,
                actual: kind,
            }
            .into());
        }
        if !seen.insert(target) {
            return Err(ValidationError::DuplicateTarget(target).into());
        }
    }

    let mut nodes = Vec::with_capacity(targets.len() + 1);
    nodes.push(source);
    nodes.extend_from_slice(targets);

    let anchors = nodes
        .iter()
        .map(|&n| warehouse.stop_anchor(n))
        .collect::<Result<Vec<_>>>()?;

    let n = nodes.len();
    let mut weights = vec![vec![0.0; n]; n];
    for i in 0..n {
        let dists = traversal.distances_from(anchors[i], &anchors[i + 1..])?;
        for (offset, d) in dists.into_iter().enumerate() {
            let j = i + 1 + offset;
            weights[i][j] = d;
            weights[j][i] = d;
        }
    }

    debug!(targets = targets.len(), "Built tour graph");

    Ok(TourGraph { nodes, weights })
}

/// Check a solver's answer against the tour contract.
///
/// The order must start and end at the source and visit every target
/// exactly once in between.
pub fn validate_tour(graph: &TourGraph, tour: &Tour) -> Result<()> {
    let source = graph.source();
    let first = tour.order.first().copied();
    let last = if tour.order.len() >= 2 {
        tour.order.last().copied()
    } else {
        None
    };

    if first != Some(source) || last != Some(source) {
        return Err(InvariantError::TourEndpoints {
            origin: source,
            first,
            last,
        }
        .into());
    }

    let interior = &tour.order[1..tour.order.len() - 1];
    let mut counts = vec![0usize; graph.len()];
    for &cell in interior {
        let idx = graph
            .index_of(cell)
            .ok_or(InvariantError::TourUnknownNode(cell))?;
        counts[idx] += 1;
    }

    let expected = graph.len() - 1;
    let visited = counts[1..].iter().filter(|&&c| c == 1).count();
    if visited != expected || interior.len() != expected {
        return Err(InvariantError::TourCoverage { expected, visited }.into());
    }

    Ok(())
}
