//! Damage calculation and application.

/// Factor applied to base damage on a critical hit.
pub const CRIT_MULTIPLIER: i32 = 2;

/// Damage dealt by an attacker with the given base damage.
///
/// ```text
/// damage = base_damage            (regular hit)
/// damage = base_damage * 2        (critical hit)
/// ```
pub fn calculate_damage(base_damage: i32, is_critical: bool) -> i32 {
    if is_critical {
        base_damage.saturating_mul(CRIT_MULTIPLIER)
    } else {
        base_damage
    }
}

/// Subtracts `damage` from `health`.
///
/// Not clamped: health may go negative, and the terminal check of the next
/// tick compares remaining values to break double knockouts.
pub fn apply_damage(health: i32, damage: i32) -> i32 {
    health.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crit_doubles_damage() {
        assert_eq!(calculate_damage(4, false), 4);
        assert_eq!(calculate_damage(4, true), 8);
    }

    #[test]
    fn damage_can_overshoot_zero() {
        assert_eq!(apply_damage(3, 10), -7);
    }
}
