//! Expansion of a location tour back to one stop per item.

use std::collections::{HashMap, HashSet};

use crate::core::{GridCoord, ItemId};
use crate::error::{InvariantError, Result};

/// One stop of a pick path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stop {
    /// Shelf cell, or the source for the two sentinels
    pub location: GridCoord,
    /// Item picked here, `None` for the source sentinels
    pub item: Option<ItemId>,
}

impl Stop {
    /// Source sentinel.
    pub fn sentinel(source: GridCoord) -> Self {
        Self {
            location: source,
            item: None,
        }
    }

    /// Check if this is a source sentinel.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.item.is_none()
    }
}

/// Expand a tour over distinct locations into the full stop sequence.
///
/// Items sharing a location become consecutive stops in request order.
/// The result starts and ends with a source sentinel and holds exactly one
/// stop per item.
pub fn reconcile(
    source: GridCoord,
    picks: &[(ItemId, GridCoord)],
    tour_order: &[GridCoord],
) -> Result<Vec<Stop>> {
    let mut by_location: HashMap<GridCoord, Vec<ItemId>> = HashMap::new();
    for &(item, location) in picks {
        by_location.entry(location).or_default().push(item);
    }

    let interior: &[GridCoord] = match tour_order {
        [_, inner @ .., _] => inner,
        _ => &[],
    };

    let mut stops = Vec::with_capacity(picks.len() + 2);
    stops.push(Stop::sentinel(source));
    for location in interior {
        if let Some(items) = by_location.get(location) {
            stops.extend(items.iter().map(|&item| Stop {
                location: *location,
                item: Some(item),
            }));
        }
    }
    stops.push(Stop::sentinel(source));

    let covered: HashSet<ItemId> = stops.iter().filter_map(|s| s.item).collect();
    if let Some(&(missing, _)) = picks.iter().find(|(item, _)| !covered.contains(item)) {
        return Err(InvariantError::ItemNotCovered(missing).into());
    }

    if stops.len() != picks.len() + 2 {
        return Err(InvariantError::StopCount {
            expected: picks.len() + 2,
            actual: stops.len(),
        }
        .into());
    }

    Ok(stops)
}
