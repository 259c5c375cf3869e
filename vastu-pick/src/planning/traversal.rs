//! Traversal graph over navigable cells.
//!
//! Nodes are the navigable cells in row-major order. Each node links to its
//! navigable 4-neighbours with unit weight, in both directions. The graph is
//! built once per warehouse and only read afterwards.
//!
//! Searches pop the cheapest frontier node first and the lower node index on
//! equal cost, and only replace a predecessor on strict improvement, so a
//! route between two cells never depends on anything but the grid.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::core::{CellKind, GridCoord};
use crate::error::{Result, ValidationError};
use crate::grid::Grid;

/// Neighbour offsets `(d_row, d_col)`: up, down, left, right.
const NEIGHBOURS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Dense cell route from a shortest-path query.
#[derive(Clone, Debug, PartialEq)]
pub struct GridRoute {
    /// Cells from start to goal inclusive, each adjacent to the next
    pub cells: Vec<GridCoord>,
    /// Number of unit moves
    pub cost: f32,
}

impl GridRoute {
    /// Number of cells in the route.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the route has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Move counts and predecessors from one search.
struct SearchTree {
    /// Moves from the start, `u32::MAX` if unreached
    moves: Vec<u32>,
    prev: Vec<Option<usize>>,
}

/// Graph of navigable cells with unit-weight 4-connectivity.
#[derive(Clone, Debug)]
pub struct TraversalGraph<'a> {
    grid: &'a Grid,
    /// Grid flat index -> node index
    node_of: Vec<Option<usize>>,
    /// Node index -> cell
    coords: Vec<GridCoord>,
    /// Node index -> navigable neighbours, in `NEIGHBOURS` order
    edges: Vec<Vec<usize>>,
}

impl<'a> TraversalGraph<'a> {
    /// Build the graph for a grid.
    pub fn build(grid: &'a Grid) -> Self {
        let mut node_of = vec![None; grid.cell_count()];
        let mut coords = Vec::new();

        for (coord, kind) in grid.iter() {
            if kind.is_navigable()
                && let Some(idx) = grid.index(coord)
            {
                node_of[idx] = Some(coords.len());
                coords.push(coord);
            }
        }

        let mut edges: Vec<Vec<usize>> = vec![Vec::new(); coords.len()];
        let mut edge_count = 0;
        for (node, &coord) in coords.iter().enumerate() {
            for (dr, dc) in NEIGHBOURS {
                let neighbor = coord.offset(dr, dc);
                if let Some(other) = grid.index(neighbor).and_then(|idx| node_of[idx]) {
                    edges[node].push(other);
                    edge_count += 1;
                }
            }
        }

        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            nodes = coords.len(),
            edges = edge_count,
            "Built traversal graph"
        );

        Self {
            grid,
            node_of,
            coords,
            edges,
        }
    }

    /// Grid the graph was built from.
    #[inline]
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Number of nodes (navigable cells).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Node index of a cell, `None` unless the cell is navigable.
    #[inline]
    pub fn node_index(&self, coord: GridCoord) -> Option<usize> {
        self.grid.index(coord).and_then(|idx| self.node_of[idx])
    }

    /// Cell of a node index.
    #[inline]
    pub fn coord(&self, node: usize) -> Option<GridCoord> {
        self.coords.get(node).copied()
    }

    /// Neighbours of a cell. Empty for non-navigable cells.
    pub fn neighbors(&self, coord: GridCoord) -> impl Iterator<Item = GridCoord> + '_ {
        self.node_index(coord)
            .map(|node| self.edges[node].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&other| self.coords[other])
    }

    /// Deterministic shortest route between two navigable cells.
    pub fn shortest_path(&self, from: GridCoord, to: GridCoord) -> Result<GridRoute> {
        let start = self.require_node(from, "route start")?;
        let goal = self.require_node(to, "route end")?;

        let tree = self.search(start, Some(goal));
        let moves = tree.moves[goal];
        if moves == u32::MAX {
            return Err(ValidationError::Unreachable { from, to }.into());
        }

        let mut cells = Vec::with_capacity(moves as usize + 1);
        let mut node = goal;
        cells.push(self.coords[node]);
        while let Some(parent) = tree.prev[node] {
            cells.push(self.coords[parent]);
            node = parent;
        }
        cells.reverse();

        Ok(GridRoute {
            cells,
            cost: moves as f32,
        })
    }

    /// Shortest-path distance between two navigable cells.
    pub fn distance(&self, from: GridCoord, to: GridCoord) -> Result<f32> {
        self.shortest_path(from, to).map(|route| route.cost)
    }

    /// Distances from one navigable cell to each of `targets`.
    ///
    /// Runs a single search. Unreachable targets are a validation error.
    pub fn distances_from(&self, from: GridCoord, targets: &[GridCoord]) -> Result<Vec<f32>> {
        let start = self.require_node(from, "route start")?;
        let target_nodes = targets
            .iter()
            .map(|&t| self.require_node(t, "route end"))
            .collect::<Result<Vec<_>>>()?;

        let tree = self.search(start, None);
        target_nodes
            .iter()
            .zip(targets)
            .map(|(&node, &to)| match tree.moves[node] {
                u32::MAX => Err(ValidationError::Unreachable { from, to }.into()),
                moves => Ok(moves as f32),
            })
            .collect()
    }

    /// Unit-cost shortest-path tree from `start`, stopping early at `goal`.
    fn search(&self, start: usize, goal: Option<usize>) -> SearchTree {
        let n = self.coords.len();
        let mut moves = vec![u32::MAX; n];
        let mut prev = vec![None; n];
        moves[start] = 0;

        // Min-heap on (moves, node)
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((0u32, start)));

        while let Some(Reverse((cost, node))) = frontier.pop() {
            if cost > moves[node] {
                continue;
            }
            if goal == Some(node) {
                break;
            }
            for &next in &self.edges[node] {
                if cost + 1 < moves[next] {
                    moves[next] = cost + 1;
                    prev[next] = Some(node);
                    frontier.push(Reverse((cost + 1, next)));
                }
            }
        }

        SearchTree { moves, prev }
    }

    fn require_node(&self, coord: GridCoord, role: &'static str) -> Result<usize> {
        let kind = self.grid.checked_kind(coord)?;
        self.node_index(coord).ok_or_else(|| {
            ValidationError::WrongCellKind {
                role,
                coord,
                expected: CellKind::Navigable,
                actual: kind,
            }
            .into()
        })
    }
}
