//! The Peg Registry: three bottom-to-top disc stacks.

use crate::disc::{Disc, DiscId};
use crate::peg::Peg;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Three ordered stacks of disc ids, one per peg, bottom to top.
///
/// A disc's *level* is its index in the stack plus one, so the bottom
/// disc rests at level 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PegRegistry {
    stacks: [Vec<DiscId>; 3],
}

impl PegRegistry {
    /// Creates a registry with three empty stacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from the discs' committed positions.
    pub fn from_discs(discs: &[Disc]) -> Self {
        let mut registry = Self::new();
        registry.rebuild(discs);
        registry
    }

    /// Replaces all three stacks from the discs' horizontal positions.
    ///
    /// Discs are appended in collection order, not sorted by height, so
    /// "top of stack" means whichever disc was appended last.
    #[instrument(skip_all, fields(discs = discs.len()))]
    pub fn rebuild(&mut self, discs: &[Disc]) {
        for stack in &mut self.stacks {
            stack.clear();
        }
        for disc in discs {
            let peg = Peg::resolve(disc.position().x);
            self.stacks[peg.index()].push(disc.id());
        }
        debug!(
            left = self.stacks[0].len(),
            center = self.stacks[1].len(),
            right = self.stacks[2].len(),
            "Registry rebuilt"
        );
    }

    /// Returns the stack on a peg, bottom to top.
    pub fn stack(&self, peg: Peg) -> &[DiscId] {
        &self.stacks[peg.index()]
    }

    /// Returns the last disc in a peg's sequence.
    pub fn top(&self, peg: Peg) -> Option<DiscId> {
        self.stacks[peg.index()].last().copied()
    }

    /// Returns true if the peg holds no discs.
    pub fn is_empty(&self, peg: Peg) -> bool {
        self.stacks[peg.index()].is_empty()
    }

    /// Finds the peg whose sequence contains the disc.
    pub fn peg_of(&self, id: DiscId) -> Option<Peg> {
        Peg::ALL
            .into_iter()
            .find(|peg| self.stacks[peg.index()].contains(&id))
    }

    /// Returns the 1-based level of the disc within its peg.
    pub fn level_of(&self, id: DiscId) -> Option<usize> {
        self.stacks
            .iter()
            .find_map(|stack| stack.iter().position(|d| *d == id))
            .map(|index| index + 1)
    }

    /// Returns true if the disc is the last entry of the sequence holding it.
    pub fn is_top(&self, id: DiscId) -> bool {
        self.peg_of(id).and_then(|peg| self.top(peg)) == Some(id)
    }

    /// Total number of discs across all pegs.
    pub fn len(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Iterates pegs with their stacks in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Peg, &[DiscId])> {
        Peg::ALL
            .into_iter()
            .map(move |peg| (peg, self.stacks[peg.index()].as_slice()))
    }

    /// Moves a disc from one peg's sequence to the top of another's.
    ///
    /// Returns false and leaves the registry untouched if the disc is not
    /// on `from`.
    #[instrument(skip(self))]
    pub fn transfer(&mut self, id: DiscId, from: Peg, to: Peg) -> bool {
        let source = &mut self.stacks[from.index()];
        let Some(index) = source.iter().position(|d| *d == id) else {
            warn!(%id, %from, "Disc not found on source peg, transfer skipped");
            return false;
        };
        source.remove(index);
        self.stacks[to.index()].push(id);
        debug!(%id, %from, %to, "Disc transferred");
        true
    }
}
