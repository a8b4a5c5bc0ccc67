//! Peg identities and horizontal zone classification.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Horizontal distance between neighboring peg centers.
pub const PEG_SPACING: f32 = 10.0;

/// Half-width of a peg's zone.
///
/// Also the distance a disc must travel before a release counts as a move.
pub const ZONE_HALF_WIDTH: f32 = 5.0;

/// One of the three pegs.
///
/// Left sits at `+10`, center at `0`, right at `-10`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Peg {
    /// Left peg (`x = +10`).
    Left,
    /// Center peg (`x = 0`).
    Center,
    /// Right peg (`x = -10`).
    Right,
}

impl Peg {
    /// All pegs in registry order.
    pub const ALL: [Peg; 3] = [Peg::Left, Peg::Center, Peg::Right];

    /// Get label for this peg (for display).
    pub fn label(self) -> &'static str {
        match self {
            Peg::Left => "left",
            Peg::Center => "center",
            Peg::Right => "right",
        }
    }

    /// Slot of this peg in registry storage.
    pub fn index(self) -> usize {
        match self {
            Peg::Left => 0,
            Peg::Center => 1,
            Peg::Right => 2,
        }
    }

    /// Fixed horizontal world position of the peg.
    pub fn center_x(self) -> f32 {
        match self {
            Peg::Left => PEG_SPACING,
            Peg::Center => 0.0,
            Peg::Right => -PEG_SPACING,
        }
    }

    /// Classifies a horizontal position into a peg zone.
    ///
    /// `x >= 5` is left, `x <= -5` is right, anything between is center.
    /// The exact boundaries belong to the outer pegs: `+5` resolves to
    /// left and `-5` to right. NaN falls through to center.
    #[instrument]
    pub fn resolve(x: f32) -> Peg {
        if x >= ZONE_HALF_WIDTH {
            Peg::Left
        } else if x <= -ZONE_HALF_WIDTH {
            Peg::Right
        } else {
            Peg::Center
        }
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
