//! Step assembly and post-assembly cross-checks.
//!
//! Each step walks from one stop to the next: shortest route between the two
//! anchor cells, reduced by the [`PathSimplifier`], with the shelf cells
//! spliced onto either end. Anchors stay in the path so every shelf is
//! entered and left from its aisle side.

use crate::core::{GridCoord, ItemId};
use crate::error::{InvariantError, Result};
use crate::warehouse::Warehouse;

use super::reconcile::Stop;
use super::simplifier::PathSimplifier;
use super::traversal::TraversalGraph;

/// One leg of a pick path.
#[derive(Clone, Debug, PartialEq)]
pub struct PickStep {
    /// 1-based position in the path
    pub number: usize,
    /// Waypoints from the previous stop to this step's stop
    pub path: Vec<GridCoord>,
    /// Item picked at the end of the step, `None` for the return to source
    pub target: Option<ItemId>,
    /// Stop cell the step ends at
    pub destination: GridCoord,
}

impl PickStep {
    /// Straight-line length of the waypoint sequence.
    pub fn length(&self) -> f32 {
        self.path.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }
}

/// Turn a stop sequence into steps.
pub fn assemble(
    warehouse: &Warehouse,
    traversal: &TraversalGraph<'_>,
    simplifier: &PathSimplifier<'_>,
    stops: &[Stop],
) -> Result<Vec<PickStep>> {
    let mut steps = Vec::with_capacity(stops.len().saturating_sub(1));

    for (idx, pair) in stops.windows(2).enumerate() {
        let (from, to) = (pair[0].location, pair[1].location);
        let from_anchor = warehouse.stop_anchor(from)?;
        let to_anchor = warehouse.stop_anchor(to)?;

        let route = traversal.shortest_path(from_anchor, to_anchor)?;
        let waypoints = simplifier.simplify(&route.cells)?;

        let mut path = Vec::with_capacity(waypoints.len() + 2);
        if from != from_anchor {
            path.push(from);
        }
        path.extend(waypoints);
        if to != to_anchor {
            path.push(to);
        }

        steps.push(PickStep {
            number: idx + 1,
            path,
            target: pair[1].item,
            destination: to,
        });
    }

    Ok(steps)
}

/// Check that every step runs from its previous stop to its next stop.
pub fn verify_endpoints(stops: &[Stop], steps: &[PickStep]) -> Result<()> {
    let expected = stops.len().saturating_sub(1);
    if steps.len() != expected {
        return Err(InvariantError::StepCount {
            expected,
            actual: steps.len(),
        }
        .into());
    }

    for (step, pair) in steps.iter().zip(stops.windows(2)) {
        let actual_start = step.path.first().copied();
        let actual_end = step.path.last().copied();
        if actual_start != Some(pair[0].location) || actual_end != Some(pair[1].location) {
            return Err(InvariantError::StepEndpoints {
                step: step.number,
                expected_start: pair[0].location,
                expected_end: pair[1].location,
                actual_start,
                actual_end,
            }
            .into());
        }
    }

    Ok(())
}

/// Total straight-line length of all steps.
pub fn path_length(steps: &[PickStep]) -> f32 {
    steps.iter().map(PickStep::length).sum()
}

/// Compare assembled travel against the tour cost.
///
/// Every picked item adds one unit in and one unit out of its shelf cell,
/// which the tour cost (anchor to anchor) does not include. Returns the
/// travel figure on success.
pub fn verify_cost(steps: &[PickStep], items: usize, tour_cost: f32, tolerance: f32) -> Result<f32> {
    let travel = path_length(steps) - 2.0 * items as f32;
    if travel > tour_cost + tolerance {
        return Err(InvariantError::CostBound { travel, tour_cost }.into());
    }
    Ok(travel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColumnTag, ShelfLocation};
    use crate::error::PickError;
    use crate::grid::Grid;
    use crate::warehouse::ItemDescriptor;
    use approx::assert_relative_eq;

    fn test_warehouse() -> Warehouse {
        let grid = Grid::from_ascii(&[
            ".....", //
            ".....", //
            "..S..", //
            ".....", //
            ".....",
        ])
        .unwrap();
        Warehouse::new(
            grid,
            GridCoord::new(0, 0),
            1,
            vec![(ColumnTag::new("A-1"), GridCoord::new(2, 2))],
            vec![
                ItemDescriptor::new("Dune", "Frank Herbert", ShelfLocation::new("A", 1, 0)),
                ItemDescriptor::new("Emma", "Jane Austen", ShelfLocation::new("A", 1, 1)),
            ],
        )
        .unwrap()
    }

    fn stops(shelf: GridCoord) -> Vec<Stop> {
        vec![
            Stop::sentinel(GridCoord::new(0, 0)),
            Stop {
                location: shelf,
                item: Some(ItemId(0)),
            },
            Stop {
                location: shelf,
                item: Some(ItemId(1)),
            },
            Stop::sentinel(GridCoord::new(0, 0)),
        ]
    }

    #[test]
    fn test_assemble_shared_shelf() {
        let wh = test_warehouse();
        let traversal = TraversalGraph::build(wh.grid());
        let simplifier = PathSimplifier::with_defaults(wh.grid());
        let shelf = GridCoord::new(2, 2);
        let stops = stops(shelf);

        let steps = assemble(&wh, &traversal, &simplifier, &stops).unwrap();
        assert_eq!(steps.len(), 3);
        assert!(verify_endpoints(&stops, &steps).is_ok());

        // Open floor: source straight to the anchor, then onto the shelf
        assert_eq!(steps[0].path, vec![GridCoord::new(0, 0), GridCoord::new(3, 2), shelf]);
        assert_eq!(steps[0].target, Some(ItemId(0)));
        // Second item on the same shelf: step out to the anchor and back
        assert_eq!(steps[1].path, vec![shelf, GridCoord::new(3, 2), shelf]);
        assert_eq!(steps[1].target, Some(ItemId(1)));
        assert_eq!(steps[2].path, vec![shelf, GridCoord::new(3, 2), GridCoord::new(0, 0)]);
        assert_eq!(steps[2].target, None);
        assert_eq!(steps[2].destination, GridCoord::new(0, 0));

        // Tour cost: (0,0) <-> anchor (3,2) is 5 each way
        let travel = verify_cost(&steps, 2, 10.0, 1e-3).unwrap();
        assert!(travel <= 10.0);
        assert_relative_eq!(
            path_length(&steps),
            2.0 * 13.0_f32.sqrt() + 4.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_shelf_to_shelf_along_aisle_keeps_anchors() {
        let grid = Grid::from_ascii(&[
            "........", //
            ".SSSSSS.", //
            "........",
        ])
        .unwrap();
        let columns: Vec<(ColumnTag, GridCoord)> = (1..=6)
            .map(|c| (ColumnTag::from_parts("A", c as u32), GridCoord::new(1, c)))
            .collect();
        let wh = Warehouse::new(
            grid,
            GridCoord::new(2, 0),
            6,
            columns,
            vec![
                ItemDescriptor::new("Dune", "Frank Herbert", ShelfLocation::new("A", 1, 0)),
                ItemDescriptor::new("Emma", "Jane Austen", ShelfLocation::new("A", 6, 0)),
            ],
        )
        .unwrap();
        let traversal = TraversalGraph::build(wh.grid());
        let simplifier = PathSimplifier::with_defaults(wh.grid());

        let (first, last) = (GridCoord::new(1, 1), GridCoord::new(1, 6));
        let stops = vec![
            Stop::sentinel(GridCoord::new(2, 0)),
            Stop {
                location: first,
                item: Some(ItemId(0)),
            },
            Stop {
                location: last,
                item: Some(ItemId(1)),
            },
            Stop::sentinel(GridCoord::new(2, 0)),
        ];
        let steps = assemble(&wh, &traversal, &simplifier, &stops).unwrap();

        assert_eq!(
            steps[1].path,
            vec![first, GridCoord::new(2, 1), GridCoord::new(2, 6), last]
        );
        assert_eq!(
            steps[0].path,
            vec![GridCoord::new(2, 0), GridCoord::new(2, 1), first]
        );
        // No waypoint other than the step's own endpoints is a shelf
        for step in &steps {
            let inner = &step.path[1..step.path.len() - 1];
            assert!(inner.iter().all(|c| wh.grid().cell_kind(*c).is_navigable()));
        }
        assert!(verify_cost(&steps, 2, 12.0, 1e-3).is_ok());
    }

    #[test]
    fn test_cost_bound_violation() {
        let wh = test_warehouse();
        let traversal = TraversalGraph::build(wh.grid());
        let simplifier = PathSimplifier::with_defaults(wh.grid());
        let steps = assemble(&wh, &traversal, &simplifier, &stops(GridCoord::new(2, 2))).unwrap();

        let err = verify_cost(&steps, 2, 1.0, 1e-3).unwrap_err();
        assert!(matches!(
            err,
            PickError::Invariant(InvariantError::CostBound { .. })
        ));
    }

    #[test]
    fn test_endpoint_mismatch() {
        let stops = vec![
            Stop::sentinel(GridCoord::new(0, 0)),
            Stop::sentinel(GridCoord::new(0, 0)),
        ];
        let bad = vec![PickStep {
            number: 1,
            path: vec![GridCoord::new(0, 0), GridCoord::new(0, 1)],
            target: None,
            destination: GridCoord::new(0, 0),
        }];
        assert!(matches!(
            verify_endpoints(&stops, &bad).unwrap_err(),
            PickError::Invariant(InvariantError::StepEndpoints { step: 1, .. })
        ));
        assert!(matches!(
            verify_endpoints(&stops, &[]).unwrap_err(),
            PickError::Invariant(InvariantError::StepCount {
                expected: 1,
                actual: 0
            })
        ));
    }
}
