//! Strictly Hanoi - type-safe Tower of Hanoi disc placement.
//!
//! This crate holds the puzzle rules only: which peg a released disc
//! lands on, whether the move is legal, and how the stacks re-settle.
//! Rendering and pointer input belong to the caller, which feeds world
//! positions in and reads disc positions back out.
//!
//! # Architecture
//!
//! - **Peg Registry**: three bottom-to-top stacks rebuilt from committed positions
//! - **Typestate**: `PuzzleIdle` → `PuzzleHolding` → `PuzzleIdle`
//! - **Wrapper**: `AnyPuzzle` for event-driven callers
//! - **Contracts**: pre/postconditions and composable invariants
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{Peg, Point3, PuzzleIdle, TowerConfig};
//!
//! let puzzle = PuzzleIdle::new(&TowerConfig::default()).expect("default config is valid");
//! let top = puzzle.tower().registry().top(Peg::Left).expect("left peg starts full");
//!
//! let mut held = puzzle.pick_up(top).expect("disc exists");
//! held.drag(Point3::new(-10.0, 3.0, 0.0));
//! let released = held.release();
//!
//! assert!(released.outcome.is_committed());
//! assert_eq!(released.puzzle.tower().registry().stack(Peg::Right), &[top]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod disc;
pub mod invariants;
mod layout;
mod peg;
mod registry;
mod rules;
mod tower;
mod typestate;
mod wrapper;

pub use nalgebra::Point3;

// Crate-level exports - Domain types
pub use disc::{Disc, DiscColor, DiscId};
pub use peg::{Peg, PEG_SPACING, ZONE_HALF_WIDTH};
pub use registry::PegRegistry;
pub use tower::Tower;

// Crate-level exports - Configuration
pub use config::{DiscSpec, SetupError, TowerConfig};

// Crate-level exports - Rules and layout
pub use layout::{relayout, resting_position};
pub use rules::Placement;

// Crate-level exports - Actions
pub use action::{DragOutcome, MoveError, MoveOutcome, MoveSnapshot, Rejection};

// Crate-level exports - State machine
pub use typestate::{PuzzleHolding, PuzzleIdle, Released};
pub use wrapper::AnyPuzzle;

// Crate-level exports - Contracts
pub use contracts::{Contract, DiscExists, DiscOnTop, PickUpContract, ReleaseContract};
pub use invariants::{HanoiInvariants, Invariant, InvariantSet, InvariantViolation};
