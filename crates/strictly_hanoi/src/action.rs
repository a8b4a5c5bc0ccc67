//! First-class action types for the puzzle.
//!
//! A drag gesture is captured as a [`MoveSnapshot`] on pick-up and
//! resolved into a [`MoveOutcome`] on release. Rejected operations are
//! reported as [`MoveError`] and never change state.

use crate::disc::DiscId;
use crate::peg::{Peg, ZONE_HALF_WIDTH};
use serde::{Deserialize, Serialize};

/// Ephemeral record of one drag gesture.
///
/// Created on pick-up and consumed on release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveSnapshot {
    /// The disc being dragged.
    pub disc: DiscId,
    /// Horizontal position at pick-up. Locates the source peg.
    pub original_x: f32,
    /// Radius of the dragged disc, cached for the legality check.
    pub radius: f32,
}

impl MoveSnapshot {
    /// Creates a snapshot for a disc picked up at `original_x`.
    pub fn new(disc: DiscId, original_x: f32, radius: f32) -> Self {
        Self {
            disc,
            original_x,
            radius,
        }
    }

    /// Peg the disc was picked up from.
    pub fn source_peg(&self) -> Peg {
        Peg::resolve(self.original_x)
    }

    /// True if a release at `released_x` left the source peg's zone.
    pub fn is_moved(&self, released_x: f32) -> bool {
        (self.original_x - released_x).abs() >= ZONE_HALF_WIDTH
    }
}

/// Whether a drag update moved the disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragOutcome {
    /// The disc followed the pointer.
    Followed,
    /// The disc is buried under others on its peg and stays put.
    Pinned,
}

/// Why a release was sent back to its source peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// The destination's top disc is smaller.
    LargerOnSmaller {
        /// Top disc of the destination peg.
        top: DiscId,
    },
    /// The destination's top disc has the same radius.
    EqualRadius {
        /// Top disc of the destination peg.
        top: DiscId,
    },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::LargerOnSmaller { top } => write!(f, "cannot rest on smaller {}", top),
            Rejection::EqualRadius { top } => write!(f, "cannot rest on same-size {}", top),
        }
    }
}

/// Result of releasing a held disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Released inside its own peg's zone. Only re-layout happened.
    Unmoved {
        /// The released disc.
        disc: DiscId,
        /// Peg it stays on.
        peg: Peg,
    },
    /// Legal move, registry updated.
    Committed {
        /// The moved disc.
        disc: DiscId,
        /// Source peg.
        from: Peg,
        /// Destination peg.
        to: Peg,
    },
    /// Illegal move, disc returned to its source peg.
    Reverted {
        /// The rejected disc.
        disc: DiscId,
        /// Source peg, where the disc now rests again.
        from: Peg,
        /// Peg the disc was dropped on.
        attempted: Peg,
        /// Why the move was rejected.
        reason: Rejection,
    },
}

impl MoveOutcome {
    /// Returns the disc this outcome concerns.
    pub fn disc(&self) -> DiscId {
        match self {
            MoveOutcome::Unmoved { disc, .. }
            | MoveOutcome::Committed { disc, .. }
            | MoveOutcome::Reverted { disc, .. } => *disc,
        }
    }

    /// Returns true if the registry changed.
    pub fn is_committed(&self) -> bool {
        matches!(self, MoveOutcome::Committed { .. })
    }

    /// Returns true if the move was rejected.
    pub fn is_reverted(&self) -> bool {
        matches!(self, MoveOutcome::Reverted { .. })
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Unmoved { disc, peg } => write!(f, "{} stays on {}", disc, peg),
            MoveOutcome::Committed { disc, from, to } => {
                write!(f, "{} moved {} -> {}", disc, from, to)
            }
            MoveOutcome::Reverted {
                disc,
                attempted,
                reason,
                ..
            } => write!(f, "{} rejected on {}: {}", disc, attempted, reason),
        }
    }
}

/// Error for operations rejected before any state change.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum MoveError {
    /// No disc with this id exists.
    #[display("Unknown {}", _0)]
    UnknownDisc(DiscId),

    /// The disc has others on top of it.
    #[display("{} is buried and cannot move", _0)]
    Buried(DiscId),

    /// Another disc is already being dragged.
    #[display("Already holding {}", _0)]
    AlreadyHolding(DiscId),

    /// The named disc is not the one being dragged.
    #[display("{} is not being held", _0)]
    NotHolding(DiscId),

    /// No disc is being dragged.
    #[display("No disc is being held")]
    NothingHeld,

    /// An invariant was violated (postcondition failure).
    ///
    /// Postconditions are only checked in debug builds.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
