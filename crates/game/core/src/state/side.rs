/// One of the two slots of a match.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Which way an action flows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// The left fighter acts on the right fighter.
    LeftToRight,
    /// The right fighter acts on the left fighter.
    RightToLeft,
}

impl Direction {
    /// Direction of an action initiated by `side`.
    pub const fn from_attacker(side: Side) -> Self {
        match side {
            Side::Left => Self::LeftToRight,
            Side::Right => Self::RightToLeft,
        }
    }

    pub const fn attacker(self) -> Side {
        match self {
            Self::LeftToRight => Side::Left,
            Self::RightToLeft => Side::Right,
        }
    }

    pub const fn defender(self) -> Side {
        self.attacker().opponent()
    }
}

/// Result marker of a round.
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
pub enum Winner {
    /// No winner yet, or the round ended in a draw.
    #[default]
    Neither,
    Left,
    Right,
}

impl Winner {
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Neither => None,
            Self::Left => Some(Side::Left),
            Self::Right => Some(Side::Right),
        }
    }
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Self::Left,
            Side::Right => Self::Right,
        }
    }
}
