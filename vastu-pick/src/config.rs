//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Default clear-shot buffer radius in cells.
pub const DEFAULT_BEAM_RADIUS: f32 = 0.875;

/// Exclusive upper bound on the beam radius.
///
/// Obstacles are at least one cell from any segment joining two adjacent
/// non-obstacle cells, so below this bound every single move is a clear shot.
pub const MAX_BEAM_RADIUS: f32 = 1.0;

/// Hard ceiling on distinct pick locations per tour.
///
/// The tour solver is exponential in this number.
pub const MAX_TOUR_LOCATIONS: usize = 12;

/// Tuning for one [`PickPlanner`](crate::PickPlanner).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Obstacle buffer for the clear-shot test (cells)
    #[serde(default = "default_beam_radius")]
    pub beam_radius: f32,

    /// Distinct target locations accepted per request (1..=12)
    #[serde(default = "default_max_tour_locations")]
    pub max_tour_locations: usize,

    /// Slack allowed when comparing assembled travel with tour cost
    #[serde(default = "default_cost_tolerance")]
    pub cost_tolerance: f32,

    /// Run the travel-vs-tour-cost cross-check after assembly
    #[serde(default = "default_verify_cost")]
    pub verify_cost: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            beam_radius: default_beam_radius(),
            max_tour_locations: default_max_tour_locations(),
            cost_tolerance: default_cost_tolerance(),
            verify_cost: default_verify_cost(),
        }
    }
}

impl PlannerConfig {
    /// Builder-style override of the beam radius.
    pub fn with_beam_radius(mut self, beam_radius: f32) -> Self {
        self.beam_radius = beam_radius;
        self
    }

    /// Builder-style override of the location ceiling.
    pub fn with_max_tour_locations(mut self, max: usize) -> Self {
        self.max_tour_locations = max;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        check_beam_radius(self.beam_radius)?;

        if self.max_tour_locations == 0 || self.max_tour_locations > MAX_TOUR_LOCATIONS {
            return Err(ValidationError::InvalidConfig(format!(
                "max_tour_locations must be in 1..={MAX_TOUR_LOCATIONS}, got {}",
                self.max_tour_locations
            ))
            .into());
        }

        if !(self.cost_tolerance >= 0.0) {
            return Err(ValidationError::InvalidConfig(format!(
                "cost_tolerance must be >= 0, got {}",
                self.cost_tolerance
            ))
            .into());
        }

        Ok(())
    }
}

/// Beam radius must lie in `(0, MAX_BEAM_RADIUS)`.
pub(crate) fn check_beam_radius(radius: f32) -> Result<()> {
    // Also rejects NaN
    if !(radius > 0.0) {
        return Err(ValidationError::NonPositiveBeamRadius(radius).into());
    }
    if radius >= MAX_BEAM_RADIUS {
        return Err(ValidationError::BeamRadiusTooWide {
            radius,
            max: MAX_BEAM_RADIUS,
        }
        .into());
    }
    Ok(())
}

fn default_beam_radius() -> f32 {
    DEFAULT_BEAM_RADIUS
}
fn default_max_tour_locations() -> usize {
    MAX_TOUR_LOCATIONS
}
fn default_cost_tolerance() -> f32 {
    1e-3
}
fn default_verify_cost() -> bool {
    true
}
