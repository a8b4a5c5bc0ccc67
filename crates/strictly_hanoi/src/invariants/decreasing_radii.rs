//! Decreasing radii invariant: larger discs never rest on smaller ones.

use super::Invariant;
use crate::Tower;
use crate::peg::Peg;

/// Invariant: on every peg, radii strictly decrease from bottom to top.
pub struct DecreasingRadiiInvariant;

impl Invariant<Tower> for DecreasingRadiiInvariant {
    fn holds(tower: &Tower) -> bool {
        Peg::ALL.into_iter().all(|peg| {
            tower
                .radii(peg)
                .windows(2)
                .all(|pair| pair[1] < pair[0])
        })
    }

    fn description() -> &'static str {
        "Disc radii strictly decrease from bottom to top on every peg"
    }
}
