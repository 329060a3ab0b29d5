//! Action resolution and its result types.

use crate::env::RngOracle;
use crate::event::{self, Cue, Cues, EventSink};
use crate::state::{Action, Direction, Fighter, FighterState};

use super::damage::{apply_damage, calculate_damage};
use super::hit::{check_crit, check_hit};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitOutcome {
    Miss,
    Hit,
    Critical,
}

impl HitOutcome {
    pub const fn landed(self) -> bool {
        !matches!(self, Self::Miss)
    }

    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }
}

/// Everything one resolved action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub action: Action,
    pub outcome: HitOutcome,
    /// Damage dealt; `None` on a miss.
    pub damage: Option<i32>,
    pub cues: Cues,
}

/// Resolves `attacker`'s action against `defender`.
///
/// 1. The attacker's timer is reset to `reset_timer`.
/// 2. Accuracy roll; a miss narrates and stops here.
/// 3. Critical roll on the attacker's critical rate.
/// 4. Damage is the attacker's base damage, doubled on a critical.
/// 5. Exactly one narrative line is written to `sink`.
/// 6. Damage is subtracted from the defender; health may go negative.
/// 7. Poses are updated for snapshot readers.
pub fn resolve<R, S>(
    attacker: &mut Fighter,
    defender: &mut Fighter,
    direction: Direction,
    reset_timer: i32,
    rng: &mut R,
    sink: &mut S,
) -> Resolution
where
    R: RngOracle + ?Sized,
    S: EventSink + ?Sized,
{
    let attacker_side = direction.attacker();
    let defender_side = direction.defender();

    attacker.timer = reset_timer;

    let mut cues = Cues::new();

    if !check_hit(attacker, rng) {
        sink.write(event::missed(&attacker.name));
        cues.push(Cue::Attack(attacker_side));
        cues.push(Cue::Dodge(defender_side));
        return Resolution {
            action: Action {
                direction,
                was_hit: false,
                was_crit: false,
            },
            outcome: HitOutcome::Miss,
            damage: None,
            cues,
        };
    }

    let critical = check_crit(attacker, rng);
    let damage = calculate_damage(attacker.damage, critical);

    if critical {
        sink.write(event::crit(&attacker.name, &defender.name, damage));
        cues.push(Cue::Crit(attacker_side));
    } else {
        sink.write(event::hit(&attacker.name, &defender.name, damage));
        cues.push(Cue::Attack(attacker_side));
    }
    cues.push(Cue::Block(defender_side));

    defender.health = apply_damage(defender.health, damage);

    attacker.state = if critical {
        FighterState::Critting
    } else {
        FighterState::Attacking
    };
    defender.state = FighterState::Defending;

    Resolution {
        action: Action {
            direction,
            was_hit: true,
            was_crit: critical,
        },
        outcome: if critical {
            HitOutcome::Critical
        } else {
            HitOutcome::Hit
        },
        damage: Some(damage),
        cues,
    }
}
