#![forbid(unsafe_code)]

//! Minimal placement search.

use crate::geometry::collides;
use crate::item::GridItem;

/// Smallest row `y >= candidate.y` at which `candidate` hits none of `obstacles`.
///
/// Each step jumps to the lowest bottom edge among the current colliders. The
/// candidate then sits at or below every obstacle it just hit, so no obstacle
/// is hit twice and the search finishes within `obstacles.len()` steps.
#[must_use]
pub fn find_free_y(candidate: &GridItem, obstacles: &[GridItem]) -> u32 {
    let mut probe = candidate.clone();
    for _ in 0..=obstacles.len() {
        let next = obstacles
            .iter()
            .filter(|obstacle| collides(&probe, obstacle))
            .map(GridItem::bottom)
            .max();
        match next {
            Some(y) => probe.y = y,
            None => return probe.y,
        }
    }
    debug_assert!(
        obstacles.iter().all(|obstacle| !collides(&probe, obstacle)),
        "placement search exceeded its step bound"
    );
    probe.y
}
