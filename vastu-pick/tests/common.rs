//! Test fixtures for VastuPick.
//!
//! Warehouses, reference tour solvers and small helpers shared by the
//! integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use vastu_pick::io::{BookDocument, BookEntry, LayoutDocument, WAREHOUSE_FORMAT_VERSION, WarehouseDocument};
use vastu_pick::warehouse::AISLE_ORDER;
use vastu_pick::{
    CellKind, ColumnTag, Grid, GridCoord, ItemDescriptor, Result, ShelfLocation, Tour, TourGraph,
    TourSolver, Warehouse,
};

/// Shelf columns per aisle in the library fixture.
pub const COLUMNS_PER_AISLE: i32 = 10;

/// Shelf row of each aisle in the library fixture, A..G.
///
/// A/B share the corridor on row 2, C/D row 5, E/F row 8, G row 11.
pub const AISLE_ROWS: [i32; 7] = [1, 3, 4, 6, 7, 9, 10];

/// 12 x 12 library: seven shelf aisles, cross aisles on columns 0 and 11,
/// and two pillars off the anchor rows. Source at (0, 0).
pub fn library_document() -> WarehouseDocument {
    let rows = 12;
    let cols = 12;
    let mut grid = vec![vec![0i64; cols]; rows];
    let mut columns = BTreeMap::new();

    for (aisle, &row) in AISLE_ORDER.iter().zip(AISLE_ROWS.iter()) {
        for c in 1..=COLUMNS_PER_AISLE {
            grid[row as usize][c as usize] = 2;
            columns.insert(format!("{aisle}-{c}"), GridCoord::new(row, c));
        }
    }
    grid[0][6] = 1;
    grid[5][0] = 1;

    let mut books = Vec::new();
    for i in 0..42u32 {
        let aisle = AISLE_ORDER[(i % 7) as usize];
        books.push(BookEntry {
            book: BookDocument {
                title: format!("Volume {i}"),
                author: format!("Author {}", i % 5),
            },
            location: ShelfLocation::new(aisle, (i * 3) % 10 + 1, i % 4),
        });
    }
    // Two more books sharing column A-3
    for row in [0, 2] {
        books.push(BookEntry {
            book: BookDocument {
                title: format!("Shared {row}"),
                author: "Same Shelf".to_string(),
            },
            location: ShelfLocation::new("A", 3, row),
        });
    }

    WarehouseDocument {
        version: WAREHOUSE_FORMAT_VERSION.to_string(),
        warehouse_layout: LayoutDocument {
            source_cell: GridCoord::new(0, 0),
            num_rows: rows,
            num_cols: cols,
            navigation_grid: grid,
            total_num_columns_in_grid: columns.len(),
            column_tags_to_navigation_grid_coordinates: columns,
        },
        books,
    }
}

/// The library fixture as a validated warehouse.
pub fn library_warehouse() -> Warehouse {
    library_document().into_warehouse().unwrap()
}

/// 5 x 5 open floor with one shelf `A-1` at (2, 2), anchored at (3, 2).
pub fn open_warehouse() -> Warehouse {
    let grid = Grid::from_ascii(&[".....", ".....", "..S..", ".....", "....."]).unwrap();
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

/// 5 x 5 grid with an obstacle wall on column 2, rows 0..=3.
pub fn walled_grid() -> Grid {
    Grid::from_ascii(&[
        "..#..", //
        "..#..", //
        "..#..", //
        "..#..", //
        ".....",
    ])
    .unwrap()
}

/// All non-obstacle cells of a grid.
pub fn open_cells(grid: &Grid) -> Vec<GridCoord> {
    grid.iter()
        .filter(|(_, kind)| *kind != CellKind::Obstacle)
        .map(|(coord, _)| coord)
        .collect()
}

/// Exact solver by exhaustive permutation. Only for small graphs.
pub struct BruteForceSolver;

impl TourSolver for BruteForceSolver {
    fn name(&self) -> &str {
        "brute-force"
    }

    fn solve(&self, graph: &TourGraph) -> Result<Tour> {
        let mut rest: Vec<usize> = (1..graph.len()).collect();
        let mut best: Option<(f32, Vec<usize>)> = None;
        permute(graph, &mut rest, 0, &mut best);

        let (_, order) = best.unwrap_or((0.0, Vec::new()));
        let mut indices = vec![0];
        indices.extend(order);
        indices.push(0);
        Ok(graph.tour_from_indices(&indices))
    }
}

fn permute(graph: &TourGraph, rest: &mut Vec<usize>, k: usize, best: &mut Option<(f32, Vec<usize>)>) {
    if k == rest.len() {
        let mut indices = vec![0];
        indices.extend(rest.iter().copied());
        indices.push(0);
        let cost = graph.tour_from_indices(&indices).cost;
        if best.as_ref().is_none_or(|(c, _)| cost < *c) {
            *best = Some((cost, rest.clone()));
        }
        return;
    }
    for i in k..rest.len() {
        rest.swap(k, i);
        permute(graph, rest, k + 1, best);
        rest.swap(k, i);
    }
}

/// Visits targets in request order.
pub struct RequestOrderSolver;

impl TourSolver for RequestOrderSolver {
    fn name(&self) -> &str {
        "request-order"
    }

    fn solve(&self, graph: &TourGraph) -> Result<Tour> {
        let mut indices: Vec<usize> = (0..graph.len()).collect();
        indices.push(0);
        Ok(graph.tour_from_indices(&indices))
    }
}
