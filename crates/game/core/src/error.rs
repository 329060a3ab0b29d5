//! Error types surfaced by arena-core.
//!
//! Every roll and every piece of arithmetic in a tick is total, so the only
//! failures are integrity violations in the data a match is built from.

/// Errors produced while building or drawing from a [`Roster`](crate::Roster).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// A roster draw excluded a name that is not part of the catalog.
    ///
    /// Only roster names are ever placed into a match, so this indicates a
    /// corrupted match and the current construction attempt must be aborted.
    #[error("fighter {name:?} not found in roster")]
    NotFound { name: String },

    #[error("roster needs at least {required} fighters, got {actual}")]
    TooSmall { required: usize, actual: usize },

    #[error("fighter {name:?} appears more than once in the roster")]
    DuplicateName { name: String },

    #[error("fighter {name:?} has invalid {field}: {reason}")]
    InvalidTemplate {
        name: String,
        field: &'static str,
        reason: &'static str,
    },
}

impl RosterError {
    /// Returns true when the error means match state can no longer be trusted.
    pub const fn is_integrity_violation(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors produced while assembling a [`MatchState`](crate::MatchState) by hand.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("both sides hold fighter {name:?}; names must be distinct within a match")]
    DuplicateFighter { name: String },
}
