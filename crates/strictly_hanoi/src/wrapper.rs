//! Serializable puzzle wrapper for event-driven callers.

use crate::action::{DragOutcome, MoveError, MoveOutcome};
use crate::config::{SetupError, TowerConfig};
use crate::contracts::{Contract, PickUpContract};
use crate::disc::DiscId;
use crate::tower::Tower;
use crate::typestate::{PuzzleHolding, PuzzleIdle, Released};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// The puzzle in either phase.
///
/// Pointer callbacks arrive one at a time on `&mut self`, so this enum
/// checks at runtime what the typestate checks at compile time.
/// A rejected call returns an error and leaves the puzzle untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnyPuzzle {
    /// No disc held.
    Idle(PuzzleIdle),
    /// A disc is in the air.
    Holding(PuzzleHolding),
}

impl From<PuzzleIdle> for AnyPuzzle {
    fn from(puzzle: PuzzleIdle) -> Self {
        AnyPuzzle::Idle(puzzle)
    }
}

impl From<PuzzleHolding> for AnyPuzzle {
    fn from(puzzle: PuzzleHolding) -> Self {
        AnyPuzzle::Holding(puzzle)
    }
}

impl AnyPuzzle {
    /// Builds the starting puzzle in the idle phase.
    pub fn new(config: &TowerConfig) -> Result<Self, SetupError> {
        Ok(PuzzleIdle::new(config)?.into())
    }

    /// Returns the tower for any phase.
    pub fn tower(&self) -> &Tower {
        match self {
            AnyPuzzle::Idle(puzzle) => puzzle.tower(),
            AnyPuzzle::Holding(puzzle) => puzzle.tower(),
        }
    }

    /// Returns the held disc, if any.
    pub fn held(&self) -> Option<DiscId> {
        match self {
            AnyPuzzle::Idle(_) => None,
            AnyPuzzle::Holding(puzzle) => Some(puzzle.held()),
        }
    }

    /// Returns true if a disc is in the air.
    pub fn is_holding(&self) -> bool {
        matches!(self, AnyPuzzle::Holding(_))
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyPuzzle::Idle(_) => "Pick up a disc".to_string(),
            AnyPuzzle::Holding(puzzle) if puzzle.is_movable() => {
                format!("Holding {}", puzzle.held())
            }
            AnyPuzzle::Holding(puzzle) => {
                format!("{} is buried and cannot move", puzzle.held())
            }
        }
    }

    /// Picks a disc up.
    ///
    /// Rejected while another disc is held, if the disc does not exist,
    /// or if other discs rest on it.
    #[instrument(skip(self))]
    pub fn pick_up(&mut self, id: DiscId) -> Result<(), MoveError> {
        let idle = match self {
            AnyPuzzle::Idle(idle) => idle,
            AnyPuzzle::Holding(holding) => {
                warn!(held = %holding.held(), "Pick-up rejected while holding");
                return Err(MoveError::AlreadyHolding(holding.held()));
            }
        };
        PickUpContract::pre(idle.tower(), &id)?;

        let holding = idle.clone().pick_up(id)?;
        *self = holding.into();
        Ok(())
    }

    /// Moves the held disc to `target`.
    #[instrument(level = "trace", skip(self))]
    pub fn drag(&mut self, id: DiscId, target: Point3<f32>) -> Result<DragOutcome, MoveError> {
        match self {
            AnyPuzzle::Holding(holding) if holding.held() == id => Ok(holding.drag(target)),
            AnyPuzzle::Holding(_) => Err(MoveError::NotHolding(id)),
            AnyPuzzle::Idle(_) => Err(MoveError::NothingHeld),
        }
    }

    /// Releases the held disc and returns what happened.
    #[instrument(skip(self))]
    pub fn release(&mut self, id: DiscId) -> Result<MoveOutcome, MoveError> {
        let holding = match self {
            AnyPuzzle::Holding(holding) if holding.held() == id => holding.clone(),
            AnyPuzzle::Holding(_) => return Err(MoveError::NotHolding(id)),
            AnyPuzzle::Idle(_) => return Err(MoveError::NothingHeld),
        };

        let Released { puzzle, outcome } = holding.release();
        debug!(%outcome, "Release applied");
        *self = puzzle.into();
        Ok(outcome)
    }

    /// Releases whatever is held. Returns `None` when idle.
    pub fn release_held(&mut self) -> Option<MoveOutcome> {
        let id = self.held()?;
        self.release(id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Peg;

    fn puzzle() -> AnyPuzzle {
        AnyPuzzle::new(&TowerConfig::of_size(3)).expect("valid config")
    }

    #[test]
    fn test_second_pick_up_rejected() {
        let mut puzzle = puzzle();
        puzzle.pick_up(DiscId(2)).expect("first pick-up");
        let before = puzzle.clone();

        assert_eq!(puzzle.pick_up(DiscId(1)), Err(MoveError::AlreadyHolding(DiscId(2))));
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_unknown_disc_rejected_without_change() {
        let mut puzzle = puzzle();
        let before = puzzle.clone();

        assert_eq!(puzzle.pick_up(DiscId(9)), Err(MoveError::UnknownDisc(DiscId(9))));
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_drag_and_release_need_held_disc() {
        let mut puzzle = puzzle();
        assert_eq!(
            puzzle.drag(DiscId(2), Point3::new(0.0, 1.0, 0.0)),
            Err(MoveError::NothingHeld)
        );
        assert_eq!(puzzle.release(DiscId(2)), Err(MoveError::NothingHeld));

        puzzle.pick_up(DiscId(2)).expect("pick-up");
        assert_eq!(
            puzzle.drag(DiscId(1), Point3::new(0.0, 1.0, 0.0)),
            Err(MoveError::NotHolding(DiscId(1)))
        );
        assert_eq!(puzzle.release(DiscId(1)), Err(MoveError::NotHolding(DiscId(1))));
        assert_eq!(puzzle.held(), Some(DiscId(2)));
    }

    #[test]
    fn test_full_gesture() {
        let mut puzzle = puzzle();
        puzzle.pick_up(DiscId(2)).expect("pick-up");
        assert_eq!(
            puzzle.drag(DiscId(2), Point3::new(0.5, 6.0, 0.0)),
            Ok(DragOutcome::Followed)
        );
        let outcome = puzzle.release(DiscId(2)).expect("release");

        assert!(outcome.is_committed());
        assert!(!puzzle.is_holding());
        assert_eq!(puzzle.tower().registry().stack(Peg::Center), &[DiscId(2)]);
    }

    #[test]
    fn test_release_held() {
        let mut puzzle = puzzle();
        assert_eq!(puzzle.release_held(), None);

        puzzle.pick_up(DiscId(2)).expect("pick-up");
        assert!(matches!(
            puzzle.release_held(),
            Some(MoveOutcome::Unmoved { .. })
        ));
    }

    #[test]
    fn test_buried_disc_rejected_without_change() {
        let mut puzzle = puzzle();
        let before = puzzle.clone();

        let err = puzzle.pick_up(DiscId(0)).expect_err("disc #0 is at the bottom");
        assert_eq!(err, MoveError::Buried(DiscId(0)));
        assert_eq!(err.to_string(), "disc #0 is buried and cannot move");
        assert_eq!(puzzle, before);
        assert!(!puzzle.is_holding());
    }

    #[test]
    fn test_status_string() {
        let mut puzzle = puzzle();
        assert_eq!(puzzle.status_string(), "Pick up a disc");

        puzzle.pick_up(DiscId(2)).expect("pick-up");
        assert_eq!(puzzle.status_string(), "Holding disc #2");
    }
}
