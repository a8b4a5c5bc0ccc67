//! Re-layout: snap every tracked disc to its resting spot.

use crate::disc::Disc;
use crate::peg::Peg;
use crate::registry::PegRegistry;
use nalgebra::Point3;
use tracing::{instrument, trace};

/// Resting position of a disc at a 1-based `level` on a peg.
pub fn resting_position(peg: Peg, level: usize, height: f32, z: f32) -> Point3<f32> {
    Point3::new(peg.center_x(), level as f32 * height, z)
}

/// Re-lays out all three pegs.
///
/// Every disc in a peg's sequence moves to the peg center at
/// `y = level × height`. Discs not tracked by the registry are left
/// where they are. `z` is preserved.
#[instrument(skip_all)]
pub fn relayout(registry: &PegRegistry, discs: &mut [Disc]) {
    for (peg, stack) in registry.iter() {
        for (index, id) in stack.iter().enumerate() {
            let Some(disc) = discs.get_mut(id.index()) else {
                continue;
            };
            let level = index + 1;
            disc.position = resting_position(peg, level, disc.height(), disc.position.z);
            trace!(%id, %peg, level, "Disc settled");
        }
    }
}
