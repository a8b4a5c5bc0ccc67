//! Stacking rule for Tower of Hanoi.
//!
//! Pure classification of a drop onto a peg, kept apart from the
//! registry so contracts and the validator share one definition.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a moving disc relates to the top disc of its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Destination peg has no discs.
    OntoEmpty,
    /// Top disc is strictly larger than the moving disc.
    OntoLarger,
    /// Top disc is strictly smaller than the moving disc.
    OntoSmaller,
    /// Top disc has the same radius as the moving disc.
    OntoEqual,
}

impl Placement {
    /// Classifies a drop of a disc with `radius` onto a peg whose top
    /// disc has `top_radius` (`None` for an empty peg).
    #[instrument]
    pub fn classify(radius: f32, top_radius: Option<f32>) -> Self {
        match top_radius {
            None => Placement::OntoEmpty,
            Some(top) if radius < top => Placement::OntoLarger,
            Some(top) if radius > top => Placement::OntoSmaller,
            Some(_) => Placement::OntoEqual,
        }
    }

    /// A placement is legal on an empty peg or onto a strictly larger disc.
    pub fn is_legal(self) -> bool {
        matches!(self, Placement::OntoEmpty | Placement::OntoLarger)
    }
}
