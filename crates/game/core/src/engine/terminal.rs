//! End-of-round detection.

use core::cmp::Ordering;

use crate::state::{Fighter, Winner};

/// Decides whether the round is over.
///
/// Returns `None` while both fighters stand. Otherwise:
///
/// - exactly one fighter at or below zero health: the other side wins;
/// - both at or below zero: the higher (less negative) remaining health wins,
///   and exactly equal values are a draw ([`Winner::Neither`]).
pub fn judge(left: &Fighter, right: &Fighter) -> Option<Winner> {
    match (left.is_defeated(), right.is_defeated()) {
        (false, false) => None,
        (true, false) => Some(Winner::Right),
        (false, true) => Some(Winner::Left),
        (true, true) => Some(match left.health.cmp(&right.health) {
            Ordering::Greater => Winner::Left,
            Ordering::Less => Winner::Right,
            Ordering::Equal => Winner::Neither,
        }),
    }
}
