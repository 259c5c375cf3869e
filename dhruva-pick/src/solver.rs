//! Tour solvers.
//!
//! - [`HeldKarpSolver`]: exact dynamic program over target subsets
//! - [`InOrderSolver`]: visits targets in request order, the naive baseline

use tracing::debug;
use vastu_pick::{Result, Tour, TourGraph, TourSolver, ValidationError};

/// Exact tour solver, `O(2^n n^2)` in the number of targets.
#[derive(Clone, Debug)]
pub struct HeldKarpSolver {
    /// Largest graph accepted, source included
    max_nodes: usize,
}

impl Default for HeldKarpSolver {
    fn default() -> Self {
        Self { max_nodes: 13 }
    }
}

impl TourSolver for HeldKarpSolver {
    fn name(&self) -> &str {
        "held-karp"
    }

    fn solve(&self, graph: &TourGraph) -> Result<Tour> {
        let n = graph.len();
        if n > self.max_nodes {
            return Err(ValidationError::TooManyLocations {
                count: n.saturating_sub(1),
                max: self.max_nodes - 1,
            }
            .into());
        }
        if n <= 1 {
            return Ok(graph.tour_from_indices(&[0, 0]));
        }

        // Targets are nodes 1..n, bit (j - 1) of a mask marks node j
        let m = n - 1;
        let full = (1usize << m) - 1;
        let mut cost = vec![vec![f32::INFINITY; m]; 1 << m];
        let mut parent = vec![vec![usize::MAX; m]; 1 << m];

        for j in 0..m {
            cost[1 << j][j] = graph.weight(0, j + 1);
        }

        for mask in 1..=full {
            for j in 0..m {
                if mask & (1 << j) == 0 || !cost[mask][j].is_finite() {
                    continue;
                }
                for k in 0..m {
                    if mask & (1 << k) != 0 {
                        continue;
                    }
                    let next = mask | (1 << k);
                    let candidate = cost[mask][j] + graph.weight(j + 1, k + 1);
                    if candidate < cost[next][k] {
                        cost[next][k] = candidate;
                        parent[next][k] = j;
                    }
                }
            }
        }

        let mut last = 0;
        let mut best = f32::INFINITY;
        for j in 0..m {
            let total = cost[full][j] + graph.weight(j + 1, 0);
            if total < best {
                best = total;
                last = j;
            }
        }

        let mut reversed = Vec::with_capacity(m);
        let mut mask = full;
        let mut current = last;
        loop {
            reversed.push(current + 1);
            let prev = parent[mask][current];
            mask &= !(1 << current);
            if prev == usize::MAX {
                break;
            }
            current = prev;
        }

        let mut order = Vec::with_capacity(n + 1);
        order.push(0);
        order.extend(reversed.into_iter().rev());
        order.push(0);

        debug!(targets = m, cost = best, "Held-Karp tour");
        Ok(graph.tour_from_indices(&order))
    }
}

/// Visits targets in the order they were requested.
#[derive(Clone, Copy, Debug, Default)]
pub struct InOrderSolver;

impl TourSolver for InOrderSolver {
    fn name(&self) -> &str {
        "in-order"
    }

    fn solve(&self, graph: &TourGraph) -> Result<Tour> {
        let mut order: Vec<usize> = (0..graph.len()).collect();
        order.push(0);
        Ok(graph.tour_from_indices(&order))
    }
}
