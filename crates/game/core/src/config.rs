/// Initial and post-action value of every fighter's countdown timer.
pub const DEFAULT_TIMER: i32 = 25;

/// Tunable engine parameters.
///
/// The defaults reproduce the canonical rules; overriding them is intended for
/// balance experiments and scenario tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// Value a fighter's timer is set to on creation, on reset and after acting.
    pub default_timer: i32,
}

impl EngineConfig {
    pub const DEFAULT_TIMER: i32 = DEFAULT_TIMER;

    pub const fn new() -> Self {
        Self {
            default_timer: Self::DEFAULT_TIMER,
        }
    }

    pub const fn with_default_timer(default_timer: i32) -> Self {
        Self { default_timer }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
