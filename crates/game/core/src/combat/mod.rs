//! Combat resolution system.
//!
//! Resolves one fighter's action against the other: accuracy roll, critical
//! roll, damage application and narration.
//!
//! # Core Functions
//!
//! - `resolve`: Complete action resolution (timer reset, rolls, damage, narrative)
//! - `check_hit`: Accuracy roll
//! - `check_crit`: Critical roll, always driven by the attacker's stats
//! - `calculate_damage` / `apply_damage`: Damage arithmetic

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{CRIT_MULTIPLIER, apply_damage, calculate_damage};
pub use hit::{check_crit, check_hit};
pub use result::{HitOutcome, Resolution, resolve};
