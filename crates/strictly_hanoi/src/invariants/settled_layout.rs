//! Settled layout invariant: every disc rests where its level says.

use super::Invariant;
use crate::Tower;
use crate::layout::resting_position;

/// Invariant: each disc sits at its peg center, `y = level × height`.
///
/// Holds between gestures, after re-layout. A disc in the air breaks it.
pub struct SettledLayoutInvariant;

impl Invariant<Tower> for SettledLayoutInvariant {
    fn holds(tower: &Tower) -> bool {
        tower.registry().iter().all(|(peg, stack)| {
            stack.iter().enumerate().all(|(index, id)| {
                tower.disc(*id).is_some_and(|disc| {
                    let expected =
                        resting_position(peg, index + 1, disc.height(), disc.position().z);
                    disc.position() == expected
                })
            })
        })
    }

    fn description() -> &'static str {
        "Every disc rests at its peg center and stack level"
    }
}
