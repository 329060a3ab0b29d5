//! Accuracy and critical rolls.

use crate::env::RngOracle;
use crate::state::Fighter;

/// Rolls whether `attacker` lands its attack.
///
/// Succeeds with probability equal to the attacker's accuracy. An accuracy of
/// zero always misses, whatever the random source yields.
pub fn check_hit<R: RngOracle + ?Sized>(attacker: &Fighter, rng: &mut R) -> bool {
    rng.chance(attacker.accuracy)
}

/// Rolls whether a landed attack is critical.
///
/// Uses the attacker's critical rate regardless of which side defends.
pub fn check_crit<R: RngOracle + ?Sized>(attacker: &Fighter, rng: &mut R) -> bool {
    rng.chance(attacker.crit_rate)
}
