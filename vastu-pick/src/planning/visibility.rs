//! Clear-shot test between two cells.
//!
//! A shot from `a` to `b` is clear when every obstacle cell centre lies
//! farther than the beam radius from the segment joining the two cell
//! centres. Shelves and navigable cells never block.

use crate::core::GridCoord;
use crate::error::{Result, ValidationError};
use crate::grid::Grid;

/// Distance from point `p` to the segment `a`-`b`.
///
/// The projection parameter is clamped to [0, 1], so points beyond either
/// end measure to the nearest endpoint.
pub fn point_segment_distance(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;

    let t = if len_sq < f32::EPSILON {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    };

    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

/// Check for an unobstructed straight line between two cells.
///
/// Returns `Ok(true)` iff no obstacle lies within `beam_radius` (inclusive)
/// of the segment. The result does not depend on argument order.
///
/// # Errors
/// - either endpoint outside the grid or an obstacle
/// - `beam_radius` not strictly positive
pub fn is_clear_shot(grid: &Grid, a: GridCoord, b: GridCoord, beam_radius: f32) -> Result<bool> {
    if !(beam_radius > 0.0) {
        return Err(ValidationError::NonPositiveBeamRadius(beam_radius).into());
    }
    for end in [a, b] {
        if grid.checked_kind(end)?.is_obstacle() {
            return Err(ValidationError::ObstacleEndpoint { coord: end }.into());
        }
    }

    if a == b {
        return Ok(true);
    }

    // Fixed endpoint order keeps the float arithmetic identical both ways
    let (p, q) = if a <= b { (a, b) } else { (b, a) };
    let start = (p.row as f32, p.col as f32);
    let end = (q.row as f32, q.col as f32);

    let blocked = grid.iter().any(|(coord, kind)| {
        kind.is_obstacle()
            && point_segment_distance((coord.row as f32, coord.col as f32), start, end)
                <= beam_radius
    });

    Ok(!blocked)
}
