//! The tower: disc collection plus the Peg Registry that indexes it.

use crate::config::{SetupError, TowerConfig};
use crate::disc::{Disc, DiscId};
use crate::layout::{relayout, resting_position};
use crate::peg::Peg;
use crate::registry::PegRegistry;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Owned puzzle state shared by every phase.
///
/// Discs are never created or destroyed after setup; only their
/// positions change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    discs: Vec<Disc>,
    registry: PegRegistry,
}

impl Tower {
    /// Builds the starting stack described by `config`.
    ///
    /// The first disc in the list rests at level 1 on the start peg.
    #[instrument(skip(config), fields(discs = config.discs().len(), start = %config.start_peg()))]
    pub fn new(config: &TowerConfig) -> Result<Self, SetupError> {
        config.validate()?;

        let height = *config.disc_height();
        let peg = *config.start_peg();
        let discs = config
            .discs()
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                Disc::new(
                    DiscId(index),
                    spec.radius,
                    height,
                    spec.color,
                    resting_position(peg, index + 1, height, 0.0),
                )
            })
            .collect();

        let tower = Self::from_discs(discs);
        info!("Tower built");
        Ok(tower)
    }

    /// Wraps an existing disc collection and indexes it by position.
    ///
    /// Ids are looked up by collection index, so each disc is renumbered
    /// to its place in `discs`.
    pub fn from_discs(mut discs: Vec<Disc>) -> Self {
        for (index, disc) in discs.iter_mut().enumerate() {
            if disc.id.index() != index {
                warn!(given = %disc.id, index, "Disc id does not match its index, renumbering");
                disc.id = DiscId(index);
            }
        }
        let registry = PegRegistry::from_discs(&discs);
        Self { discs, registry }
    }

    /// Returns all discs in collection order.
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    /// Returns a disc by id.
    pub fn disc(&self, id: DiscId) -> Option<&Disc> {
        self.discs.get(id.index())
    }

    /// Returns the Peg Registry.
    pub fn registry(&self) -> &PegRegistry {
        &self.registry
    }

    /// Returns the discs on a peg, bottom to top.
    pub fn stack(&self, peg: Peg) -> impl Iterator<Item = &Disc> {
        self.registry
            .stack(peg)
            .iter()
            .filter_map(|id| self.discs.get(id.index()))
    }

    /// Radii on a peg, bottom to top.
    pub fn radii(&self, peg: Peg) -> Vec<f32> {
        self.stack(peg).map(Disc::radius).collect()
    }

    pub(crate) fn disc_mut(&mut self, id: DiscId) -> Option<&mut Disc> {
        self.discs.get_mut(id.index())
    }

    pub(crate) fn registry_mut(&mut self) -> &mut PegRegistry {
        &mut self.registry
    }

    /// Rebuilds the registry from committed positions.
    pub(crate) fn rebuild_registry(&mut self) {
        self.registry.rebuild(&self.discs);
    }

    /// Snaps every tracked disc to its resting position.
    pub(crate) fn relayout(&mut self) {
        relayout(&self.registry, &mut self.discs);
    }
}
