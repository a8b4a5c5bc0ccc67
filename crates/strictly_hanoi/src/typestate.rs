//! Phase-specific typestate structs for the move validator.
//!
//! Each phase is its own distinct type. Only [`PuzzleIdle`] can pick a
//! disc up and only [`PuzzleHolding`] can drag or release, so a second
//! pick-up while a disc is in the air does not type-check.

use crate::action::{DragOutcome, MoveError, MoveOutcome, MoveSnapshot, Rejection};
use crate::config::{SetupError, TowerConfig};
use crate::contracts::{Contract, PickUpContract, ReleaseContract};
use crate::disc::DiscId;
use crate::peg::Peg;
use crate::rules::Placement;
use crate::tower::Tower;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Idle Phase
// ─────────────────────────────────────────────────────────────

/// No disc is held. Every disc rests at its committed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleIdle {
    tower: Tower,
}

impl PuzzleIdle {
    /// Builds the starting tower.
    #[instrument(skip(config))]
    pub fn new(config: &TowerConfig) -> Result<Self, SetupError> {
        Ok(Self {
            tower: Tower::new(config)?,
        })
    }

    /// Wraps an existing tower.
    pub fn from_tower(tower: Tower) -> Self {
        Self { tower }
    }

    /// Returns the tower.
    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    /// Consumes the phase and returns the tower.
    pub fn into_tower(self) -> Tower {
        self.tower
    }

    /// Picks a disc up, consuming the idle phase.
    ///
    /// Only the top disc of a peg can be picked up. Snapshots the disc's
    /// committed horizontal position and radius, then rebuilds the
    /// registry while the disc still counts at its old spot. Placement
    /// legality is checked on release.
    #[instrument(skip(self))]
    pub fn pick_up(self, id: DiscId) -> Result<PuzzleHolding, MoveError> {
        PickUpContract::pre(&self.tower, &id)?;

        #[cfg(debug_assertions)]
        let before = self.tower.clone();

        let mut tower = self.tower;
        let disc = tower.disc(id).ok_or(MoveError::UnknownDisc(id))?;
        let snapshot = MoveSnapshot::new(id, disc.position().x, disc.radius());
        tower.rebuild_registry();

        #[cfg(debug_assertions)]
        PickUpContract::post(&before, &tower)?;

        debug!(
            %id,
            original_x = snapshot.original_x,
            radius = snapshot.radius,
            movable = tower.registry().is_top(id),
            "Disc picked up"
        );
        Ok(PuzzleHolding { tower, snapshot })
    }
}

// ─────────────────────────────────────────────────────────────
//  Holding Phase
// ─────────────────────────────────────────────────────────────

/// A disc is in the air.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleHolding {
    tower: Tower,
    snapshot: MoveSnapshot,
}

impl PuzzleHolding {
    /// Returns the tower, including the held disc's in-flight position.
    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    /// Returns the held disc.
    pub fn held(&self) -> DiscId {
        self.snapshot.disc
    }

    /// Returns the pick-up snapshot.
    pub fn snapshot(&self) -> &MoveSnapshot {
        &self.snapshot
    }

    /// True if the held disc is the top of its peg's sequence.
    pub fn is_movable(&self) -> bool {
        self.tower.registry().is_top(self.snapshot.disc)
    }

    /// Moves the held disc to the pointer position.
    ///
    /// Buried discs stay pinned. No legality filtering and no registry
    /// change happen during a drag.
    #[instrument(level = "trace", skip(self), fields(disc = %self.snapshot.disc))]
    pub fn drag(&mut self, target: Point3<f32>) -> DragOutcome {
        if !self.is_movable() {
            return DragOutcome::Pinned;
        }
        match self.tower.disc_mut(self.snapshot.disc) {
            Some(disc) => {
                disc.position = target;
                DragOutcome::Followed
            }
            None => DragOutcome::Pinned,
        }
    }

    /// Releases the held disc where it is, consuming the holding phase.
    ///
    /// A release inside the source zone, or past it on the same side,
    /// only re-lays out. Otherwise the destination is classified against
    /// its top disc: legal drops move the disc in the registry, illegal
    /// drops send it back to its original x. All pegs are re-laid out in
    /// every case.
    #[instrument(skip(self), fields(disc = %self.snapshot.disc))]
    pub fn release(self) -> Released {
        let PuzzleHolding { mut tower, snapshot } = self;
        let id = snapshot.disc;

        #[cfg(debug_assertions)]
        if let Err(e) = ReleaseContract::pre(&tower, &snapshot) {
            tracing::warn!(error = %e, "Release precondition failed");
        }

        #[cfg(debug_assertions)]
        let before = tower.clone();

        let released_x = tower
            .disc(id)
            .map(|disc| disc.position().x)
            .unwrap_or(snapshot.original_x);
        let from = snapshot.source_peg();

        let to = Peg::resolve(released_x);
        let outcome = if !snapshot.is_moved(released_x) || to == from {
            MoveOutcome::Unmoved { disc: id, peg: from }
        } else {
            match tower.registry().top(to) {
                None => {
                    tower.registry_mut().transfer(id, from, to);
                    MoveOutcome::Committed { disc: id, from, to }
                }
                Some(top) => {
                    let top_radius = tower.disc(top).map(|disc| disc.radius());
                    match Placement::classify(snapshot.radius, top_radius) {
                        Placement::OntoEmpty | Placement::OntoLarger => {
                            if let Some(disc) = tower.disc_mut(id) {
                                disc.position.x = to.center_x();
                            }
                            tower.registry_mut().transfer(id, from, to);
                            MoveOutcome::Committed { disc: id, from, to }
                        }
                        Placement::OntoSmaller => {
                            Self::revert(&mut tower, &snapshot);
                            MoveOutcome::Reverted {
                                disc: id,
                                from,
                                attempted: to,
                                reason: Rejection::LargerOnSmaller { top },
                            }
                        }
                        Placement::OntoEqual => {
                            Self::revert(&mut tower, &snapshot);
                            MoveOutcome::Reverted {
                                disc: id,
                                from,
                                attempted: to,
                                reason: Rejection::EqualRadius { top },
                            }
                        }
                    }
                }
            }
        };

        tower.relayout();

        #[cfg(debug_assertions)]
        if let Err(e) = ReleaseContract::post(&before, &tower) {
            tracing::warn!(error = %e, "Release postcondition failed");
        }

        info!(%outcome, "Disc released");
        Released {
            puzzle: PuzzleIdle { tower },
            outcome,
        }
    }

    fn revert(tower: &mut Tower, snapshot: &MoveSnapshot) {
        if let Some(disc) = tower.disc_mut(snapshot.disc) {
            disc.position.x = snapshot.original_x;
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of releasing a disc.
#[derive(Debug, Clone, PartialEq)]
pub struct Released {
    /// The puzzle, back in the idle phase.
    pub puzzle: PuzzleIdle,
    /// What the release did.
    pub outcome: MoveOutcome,
}
