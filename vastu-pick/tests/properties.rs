//! Exhaustive property checks over small fixtures.

mod common;

use common::{library_warehouse, open_cells, walled_grid};
use vastu_pick::{
    Grid, GridCoord, ItemId, PathSimplifier, TraversalGraph, is_clear_shot, planning::reconcile,
};

const RADII: [f32; 4] = [0.25, 0.5, 0.875, 1.5];

#[test]
fn clear_shot_is_symmetric_and_reflexive() {
    for grid in [walled_grid(), library_warehouse().grid().clone()] {
        let cells = open_cells(&grid);
        for &r in &RADII {
            for (i, &a) in cells.iter().enumerate() {
                assert!(is_clear_shot(&grid, a, a, r).unwrap());
                for &b in &cells[i + 1..] {
                    assert_eq!(
                        is_clear_shot(&grid, a, b, r).unwrap(),
                        is_clear_shot(&grid, b, a, r).unwrap(),
                        "asymmetric shot {a} <-> {b} at r={r}"
                    );
                }
            }
        }
    }
}

#[test]
fn adjacent_navigable_cells_are_one_apart() {
    let warehouse = library_warehouse();
    let grid = warehouse.grid();
    let graph = TraversalGraph::build(grid);

    let mut checked = 0;
    for (a, kind) in grid.iter() {
        if !kind.is_navigable() {
            continue;
        }
        for b in [a.offset(0, 1), a.offset(1, 0)] {
            if grid.get(b).is_some_and(|k| k.is_navigable()) {
                assert_eq!(graph.distance(a, b).unwrap(), 1.0);
                assert_eq!(graph.distance(b, a).unwrap(), 1.0);
                checked += 1;
            }
        }
    }
    assert!(checked > 50);
}

fn check_simplified(grid: &Grid, simplifier: &PathSimplifier<'_>, dense: &[GridCoord]) {
    let out = simplifier.simplify(dense).unwrap();

    assert_eq!(out.first(), dense.first());
    assert_eq!(out.last(), dense.last());
    assert!(out.len() <= dense.len());
    for w in out.windows(2) {
        assert!(
            is_clear_shot(grid, w[0], w[1], simplifier.beam_radius()).unwrap(),
            "no clear shot between waypoints {} and {}",
            w[0],
            w[1]
        );
    }
    assert_eq!(simplifier.simplify(&out).unwrap(), out, "not idempotent");

    if dense.len() <= 3 {
        assert_eq!(out, dense);
    }
}

#[test]
fn simplifier_properties_on_walled_grid() {
    let grid = walled_grid();
    let graph = TraversalGraph::build(&grid);
    let simplifier = PathSimplifier::with_defaults(&grid);

    let cells: Vec<GridCoord> = grid
        .iter()
        .filter(|(_, k)| k.is_navigable())
        .map(|(c, _)| c)
        .collect();
    for &a in &cells {
        for &b in &cells {
            let route = graph.shortest_path(a, b).unwrap();
            check_simplified(&grid, &simplifier, &route.cells);
        }
    }
}

#[test]
fn simplifier_properties_on_library() {
    let warehouse = library_warehouse();
    let grid = warehouse.grid();
    let graph = TraversalGraph::build(grid);

    // Anchor-to-anchor routes between every pair of shelves in two aisles
    let anchors: Vec<GridCoord> = warehouse
        .columns()
        .filter(|(tag, _)| matches!(tag.aisle(), "A" | "D"))
        .map(|(_, shelf)| warehouse.anchor_cell(shelf).unwrap())
        .collect();

    for r in [0.5, 0.875, 0.99] {
        let simplifier = PathSimplifier::new(grid, r).unwrap();
        for &a in &anchors {
            for &b in &anchors {
                let route = graph.shortest_path(a, b).unwrap();
                check_simplified(grid, &simplifier, &route.cells);
            }
        }
    }
}

#[test]
fn reconciler_emits_k_plus_two_stops() {
    let source = GridCoord::new(0, 0);
    let locations: Vec<GridCoord> = (1..=4).map(|c| GridCoord::new(1, c)).collect();

    // k items spread over m <= k locations in a few different patterns
    for k in 1..=8usize {
        for m in 1..=k.min(locations.len()) {
            let picks: Vec<(ItemId, GridCoord)> =
                (0..k).map(|i| (ItemId(i), locations[(i * 7) % m])).collect();

            let mut distinct: Vec<GridCoord> = Vec::new();
            for &(_, loc) in &picks {
                if !distinct.contains(&loc) {
                    distinct.push(loc);
                }
            }
            let mut tour = vec![source];
            tour.extend(distinct.iter().rev());
            tour.push(source);

            let stops = reconcile(source, &picks, &tour).unwrap();
            assert_eq!(stops.len(), k + 2);
            assert_eq!(stops.iter().filter(|s| s.is_sentinel()).count(), 2);
            assert!(stops[0].is_sentinel());
            assert!(stops[k + 1].is_sentinel());

            let mut items: Vec<usize> = stops.iter().filter_map(|s| s.item).map(|id| id.0).collect();
            items.sort_unstable();
            assert_eq!(items, (0..k).collect::<Vec<_>>());
        }
    }
}
