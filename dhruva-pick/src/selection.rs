//! Random item selection

use crate::error::{DhruvaPickError, Result};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use vastu_pick::ItemId;

/// Seeded RNG when `seed` is set, OS-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Draw `count` distinct items out of `total`, in random order.
pub fn choose_items<R: Rng + ?Sized>(rng: &mut R, total: usize, count: usize) -> Result<Vec<ItemId>> {
    if count > total {
        return Err(DhruvaPickError::Selection(format!(
            "cannot pick {} items from a warehouse holding {}",
            count, total
        )));
    }
    Ok(index::sample(rng, total, count).into_iter().map(ItemId).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_distinct_and_in_range() {
        let mut rng = make_rng(Some(42));
        let items = choose_items(&mut rng, 50, 10).unwrap();
        assert_eq!(items.len(), 10);
        assert!(items.iter().all(|id| id.0 < 50));
        let unique: HashSet<_> = items.iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = choose_items(&mut make_rng(Some(7)), 100, 12).unwrap();
        let b = choose_items(&mut make_rng(Some(7)), 100, 12).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_whole_catalogue_and_empty() {
        let mut rng = make_rng(Some(1));
        let mut all = choose_items(&mut rng, 5, 5).unwrap();
        all.sort();
        assert_eq!(all, (0..5).map(ItemId).collect::<Vec<_>>());
        assert!(choose_items(&mut rng, 5, 0).unwrap().is_empty());
    }

    #[test]
    fn test_too_many_requested() {
        let mut rng = make_rng(Some(1));
        let err = choose_items(&mut rng, 3, 4).unwrap_err();
        assert!(matches!(err, DhruvaPickError::Selection(_)));
    }
}
