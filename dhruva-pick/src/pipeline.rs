//! Pick-path generation: select items, plan, collect records.

use crate::config::{PickConfig, SolverKind};
use crate::error::Result;
use crate::selection::{choose_items, make_rng};
use crate::solver::{HeldKarpSolver, InOrderSolver};
use tracing::{debug, info};
use vastu_pick::io::{PathType, PickPathFile};
use vastu_pick::{PickPlanner, TourSolver, Warehouse};

/// Plan `path_count` random selections and collect them into a pick-path file.
///
/// Records are numbered from 1. With [`SolverKind::Both`] every selection
/// yields an optimal record followed by a naive one over the same items.
pub fn generate_pick_paths(warehouse: &Warehouse, config: &PickConfig) -> Result<PickPathFile> {
    let planner = PickPlanner::new(warehouse, config.planner.clone())?;
    let held_karp = HeldKarpSolver::default();
    let in_order = InOrderSolver;

    let solvers: Vec<(&dyn TourSolver, PathType)> = match config.selection.solver {
        SolverKind::HeldKarp => vec![(&held_karp, PathType::Optimal)],
        SolverKind::InOrder => vec![(&in_order, PathType::Naive)],
        SolverKind::Both => vec![
            (&held_karp, PathType::Optimal),
            (&in_order, PathType::Naive),
        ],
    };

    let mut rng = make_rng(config.selection.seed);
    let mut records = Vec::new();

    for selection in 0..config.selection.path_count {
        let items = choose_items(
            &mut rng,
            warehouse.items().len(),
            config.selection.items_per_path,
        )?;
        debug!(selection, ?items, "Selected items");

        for &(solver, path_type) in &solvers {
            let plan = planner.plan(&items, solver)?;
            let path_id = records.len() + 1;
            info!(
                "Path {}: {} items via {}, {} steps, tour cost {:.2}, walked {:.2}",
                path_id,
                items.len(),
                solver.name(),
                plan.steps.len(),
                plan.tour_cost(),
                plan.path_length
            );
            records.push(plan.to_record(warehouse, path_id, path_type)?);
        }
    }

    Ok(PickPathFile::new(records))
}
