use crate::config::DEFAULT_TIMER;

/// Immutable stat preset a fighter is instantiated from.
///
/// The `name` doubles as the display label and must be unique within a roster.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterTemplate {
    pub name: String,
    pub max_health: i32,
    pub damage: i32,
    pub speed: i32,
    /// Probability in `[0, 1]` that an attack lands.
    pub accuracy: f32,
    /// Probability in `[0, 1]` that a landed attack is critical.
    pub crit_rate: f32,
}

impl FighterTemplate {
    pub fn new(
        name: impl Into<String>,
        max_health: i32,
        damage: i32,
        speed: i32,
        accuracy: f32,
        crit_rate: f32,
    ) -> Self {
        Self {
            name: name.into(),
            max_health,
            damage,
            speed,
            accuracy,
            crit_rate,
        }
    }
}

/// Descriptive pose of a fighter for the current tick.
///
/// Overwritten every tick and never consulted by the rules; combat logic
/// reports the same information through [`Cue`](crate::Cue) events.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FighterState {
    #[default]
    Ready,
    Defending,
    Attacking,
    Critting,
    Dying,
}

/// A combatant instance owned by one side of a match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub name: String,
    /// Remaining health. May dip below zero between the blow that kills a
    /// fighter and the terminal check of the following tick.
    pub health: i32,
    pub max_health: i32,
    pub damage: i32,
    pub speed: i32,
    pub accuracy: f32,
    pub crit_rate: f32,
    /// Countdown until the fighter may act; ready once `timer <= 0`.
    pub timer: i32,
    pub state: FighterState,
}

impl Fighter {
    /// Instantiates a fresh fighter at full health with the canonical timer.
    pub fn from_template(template: &FighterTemplate) -> Self {
        Self::with_timer(template, DEFAULT_TIMER)
    }

    /// Instantiates a fresh fighter with an explicit starting timer.
    pub fn with_timer(template: &FighterTemplate, timer: i32) -> Self {
        Self {
            name: template.name.clone(),
            health: template.max_health,
            max_health: template.max_health,
            damage: template.damage,
            speed: template.speed,
            accuracy: template.accuracy,
            crit_rate: template.crit_rate,
            timer,
            state: FighterState::Ready,
        }
    }

    /// Restores health, timer and pose for another round. Identity is kept.
    pub fn restore(&mut self, timer: i32) {
        self.health = self.max_health;
        self.timer = timer;
        self.state = FighterState::Ready;
    }

    pub const fn is_ready(&self) -> bool {
        self.timer <= 0
    }

    pub const fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// The template this fighter was drawn from.
    pub fn template(&self) -> FighterTemplate {
        FighterTemplate {
            name: self.name.clone(),
            max_health: self.max_health,
            damage: self.damage,
            speed: self.speed,
            accuracy: self.accuracy,
            crit_rate: self.crit_rate,
        }
    }

    /// Counts the timer down by the fighter's own speed, saturating at
    /// `i32::MIN` for a fighter left waiting behind a faster one.
    pub(crate) fn tick_timer(&mut self) {
        self.timer = self.timer.saturating_sub(self.speed);
    }
}
