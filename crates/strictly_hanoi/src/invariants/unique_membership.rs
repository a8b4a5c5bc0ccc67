//! Unique membership invariant: every disc sits on exactly one peg.

use super::Invariant;
use crate::Tower;
use std::collections::HashSet;

/// Invariant: the registry lists every disc exactly once.
pub struct UniqueMembershipInvariant;

impl Invariant<Tower> for UniqueMembershipInvariant {
    fn holds(tower: &Tower) -> bool {
        let registry = tower.registry();
        if registry.len() != tower.discs().len() {
            return false;
        }

        let mut seen = HashSet::new();
        registry
            .iter()
            .flat_map(|(_, stack)| stack.iter())
            .all(|id| tower.disc(*id).is_some() && seen.insert(*id))
    }

    fn description() -> &'static str {
        "Every disc belongs to exactly one peg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Disc, DiscColor, DiscId, Point3, TowerConfig};

    #[test]
    fn test_fresh_tower_holds() {
        let tower = Tower::new(&TowerConfig::default()).expect("valid config");
        assert!(UniqueMembershipInvariant::holds(&tower));
    }

    #[test]
    fn test_spread_tower_holds() {
        let tower = Tower::from_discs(vec![
            Disc::new(DiscId(0), 3.0, 0.8, DiscColor::Red, Point3::new(10.0, 0.8, 0.0)),
            Disc::new(DiscId(1), 2.0, 0.8, DiscColor::Blue, Point3::new(0.0, 0.8, 0.0)),
            Disc::new(DiscId(2), 1.0, 0.8, DiscColor::Green, Point3::new(-10.0, 0.8, 0.0)),
        ]);
        assert!(UniqueMembershipInvariant::holds(&tower));
    }

    #[test]
    fn test_mismatched_ids_violate() {
        // Id 5 is not a collection index, so the registry points nowhere.
        let tower = Tower::from_discs(vec![Disc::new(
            DiscId(5),
            1.0,
            0.8,
            DiscColor::Red,
            Point3::new(10.0, 0.8, 0.0),
        )]);
        assert!(!UniqueMembershipInvariant::holds(&tower));
    }
}
