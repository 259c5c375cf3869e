//! Waypoint reduction by clear-shot shortcutting.

use crate::config::{DEFAULT_BEAM_RADIUS, check_beam_radius};
use crate::core::GridCoord;
use crate::error::Result;
use crate::grid::Grid;

use super::visibility::is_clear_shot;

/// Collapses a dense cell path into the waypoints where it must turn.
pub struct PathSimplifier<'a> {
    grid: &'a Grid,
    beam_radius: f32,
}

impl<'a> PathSimplifier<'a> {
    /// Create a new simplifier.
    ///
    /// The radius must be positive and below
    /// [`MAX_BEAM_RADIUS`](crate::config::MAX_BEAM_RADIUS).
    pub fn new(grid: &'a Grid, beam_radius: f32) -> Result<Self> {
        check_beam_radius(beam_radius)?;
        Ok(Self { grid, beam_radius })
    }

    /// Create with the default beam radius.
    pub fn with_defaults(grid: &'a Grid) -> Self {
        Self {
            grid,
            beam_radius: DEFAULT_BEAM_RADIUS,
        }
    }

    /// Beam radius used for clear-shot checks.
    #[inline]
    pub fn beam_radius(&self) -> f32 {
        self.beam_radius
    }

    /// Simplify a path.
    ///
    /// From the last kept waypoint, jumps to the furthest later cell with a
    /// clear shot and keeps it, until the final cell is reached. Paths with
    /// at most one interior cell are returned unchanged.
    ///
    /// The first and last cells are always kept, and simplifying an already
    /// simplified path returns it unchanged.
    pub fn simplify(&self, path: &[GridCoord]) -> Result<Vec<GridCoord>> {
        if path.len() <= 3 {
            return Ok(path.to_vec());
        }

        let mut waypoints = vec![path[0]];
        let mut i = 0;

        while i < path.len() - 1 {
            // Adjacent cells are the fallback when nothing further is visible
            let mut furthest = i + 1;

            for j in ((i + 2)..path.len()).rev() {
                if is_clear_shot(self.grid, path[i], path[j], self.beam_radius)? {
                    furthest = j;
                    break;
                }
            }

            waypoints.push(path[furthest]);
            i = furthest;
        }

        Ok(waypoints)
    }
}
