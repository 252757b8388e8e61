//! A direction opens once every item it lists has been used. Items that are
//! merely held do not count.

use rw_core::Direction;

/// Whether every item `direction` requires appears in `items_used`.
pub fn is_unlocked(direction: &Direction, items_used: &[String]) -> bool {
    direction
        .items_that_can_be_used
        .iter()
        .all(|key| items_used.contains(key))
}

/// Copy of `direction` with `is_unlocked` recomputed.
pub fn annotate(direction: &Direction, items_used: &[String]) -> Direction {
    Direction {
        is_unlocked: is_unlocked(direction, items_used),
        ..direction.clone()
    }
}

/// Annotate every direction of a room, keeping their order.
pub fn annotate_all(directions: &[Direction], items_used: &[String]) -> Vec<Direction> {
    directions
        .iter()
        .map(|d| annotate(d, items_used))
        .collect()
}
