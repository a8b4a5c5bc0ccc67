//! Contract-based validation for pick-up and release.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{MoveError, MoveSnapshot};
use crate::disc::DiscId;
use crate::invariants::{HanoiInvariants, Invariant, InvariantSet, UniqueMembershipInvariant};
use crate::tower::Tower;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the disc must exist in the tower.
pub struct DiscExists;

impl DiscExists {
    /// Checks that `id` names a disc of `tower`.
    #[instrument(skip(tower))]
    pub fn check(id: DiscId, tower: &Tower) -> Result<(), MoveError> {
        if tower.disc(id).is_none() {
            Err(MoveError::UnknownDisc(id))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the disc must be the top of its peg.
pub struct DiscOnTop;

impl DiscOnTop {
    /// Checks that nothing rests on `id`.
    #[instrument(skip(tower))]
    pub fn check(id: DiscId, tower: &Tower) -> Result<(), MoveError> {
        if tower.registry().is_top(id) {
            Ok(())
        } else {
            Err(MoveError::Buried(id))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Shared postconditions
// ─────────────────────────────────────────────────────────────

fn same_disc_set(before: &Tower, after: &Tower) -> Result<(), MoveError> {
    if before.discs().len() != after.discs().len() {
        warn!(
            before = before.discs().len(),
            after = after.discs().len(),
            "Disc collection changed size"
        );
        return Err(MoveError::InvariantViolation(
            "Postcondition failed: disc collection changed size".to_string(),
        ));
    }
    Ok(())
}

fn invariants_hold(after: &Tower) -> Result<(), MoveError> {
    HanoiInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

// ─────────────────────────────────────────────────────────────
//  Pick-up Contract
// ─────────────────────────────────────────────────────────────

/// Contract for picking a disc up.
///
/// Preconditions:
/// - Disc exists
/// - Disc is the top of its peg
///
/// Postconditions:
/// - No disc created or destroyed
/// - Every disc on exactly one peg after the rebuild
pub struct PickUpContract;

impl Contract<Tower, DiscId> for PickUpContract {
    fn pre(tower: &Tower, id: &DiscId) -> Result<(), MoveError> {
        DiscExists::check(*id, tower)?;
        DiscOnTop::check(*id, tower)
    }

    fn post(before: &Tower, after: &Tower) -> Result<(), MoveError> {
        same_disc_set(before, after)?;
        if !UniqueMembershipInvariant::holds(after) {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                UniqueMembershipInvariant::description()
            )));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Release Contract
// ─────────────────────────────────────────────────────────────

/// Contract for releasing a held disc.
///
/// Preconditions:
/// - The snapshot names an existing disc
///
/// Postconditions:
/// - No disc created or destroyed
/// - Radii strictly decrease on every peg
/// - Every disc on exactly one peg
/// - Every disc settled at its resting position
pub struct ReleaseContract;

impl Contract<Tower, MoveSnapshot> for ReleaseContract {
    fn pre(tower: &Tower, snapshot: &MoveSnapshot) -> Result<(), MoveError> {
        DiscExists::check(snapshot.disc, tower)
    }

    fn post(before: &Tower, after: &Tower) -> Result<(), MoveError> {
        same_disc_set(before, after)?;
        invariants_hold(after)
    }
}
