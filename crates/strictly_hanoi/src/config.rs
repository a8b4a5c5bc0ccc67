//! Initial tower configuration.

use crate::disc::DiscColor;
use crate::peg::Peg;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One disc of the starting stack, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct DiscSpec {
    /// Disc radius.
    pub radius: f32,
    /// Disc color.
    pub color: DiscColor,
}

/// Starting layout of the puzzle.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct TowerConfig {
    /// Thickness shared by every disc.
    disc_height: f32,

    /// Peg the whole stack starts on.
    start_peg: Peg,

    /// Discs from bottom to top. Radii must strictly decrease.
    discs: Vec<DiscSpec>,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            disc_height: 0.8,
            start_peg: Peg::Left,
            discs: vec![
                DiscSpec::new(4.0, DiscColor::Purple),
                DiscSpec::new(3.0, DiscColor::Yellow),
                DiscSpec::new(2.0, DiscColor::Green),
                DiscSpec::new(1.0, DiscColor::Blue),
                DiscSpec::new(0.5, DiscColor::Red),
            ],
        }
    }
}

impl TowerConfig {
    /// Builds a stack of `count` discs with radii `count, count - 1, ..., 1`.
    ///
    /// Colors cycle through the palette.
    #[instrument]
    pub fn of_size(count: usize) -> Self {
        use strum::IntoEnumIterator;

        let discs = (1..=count)
            .rev()
            .zip(DiscColor::iter().cycle())
            .map(|(radius, color)| DiscSpec::new(radius as f32, color))
            .collect();
        Self {
            discs,
            ..Self::default()
        }
    }

    /// Checks that the configuration can produce a legal starting stack.
    #[instrument(skip(self), fields(discs = self.discs.len()))]
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.discs.is_empty() {
            return Err(SetupError::NoDiscs);
        }
        if !(self.disc_height.is_finite() && self.disc_height > 0.0) {
            return Err(SetupError::InvalidHeight(self.disc_height));
        }
        if let Some(index) = self
            .discs
            .iter()
            .position(|spec| !(spec.radius.is_finite() && spec.radius > 0.0))
        {
            return Err(SetupError::InvalidRadius {
                index,
                radius: self.discs[index].radius,
            });
        }
        if let Some(index) = self
            .discs
            .windows(2)
            .position(|pair| pair[1].radius >= pair[0].radius)
        {
            return Err(SetupError::RadiiNotDecreasing { index: index + 1 });
        }
        Ok(())
    }
}

/// Error building the starting tower.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum SetupError {
    /// The disc list is empty.
    #[display("Tower needs at least one disc")]
    NoDiscs,

    /// Disc height is zero, negative or not finite.
    #[display("Disc height must be positive, got {}", _0)]
    InvalidHeight(f32),

    /// A disc radius is zero, negative or not finite.
    #[display("Disc {} has invalid radius {}", index, radius)]
    InvalidRadius {
        /// Position in the disc list.
        index: usize,
        /// Offending radius.
        radius: f32,
    },

    /// A disc is not strictly smaller than the one below it.
    #[display("Disc {} is not smaller than the disc below it", index)]
    RadiiNotDecreasing {
        /// Position in the disc list.
        index: usize,
    },
}

impl std::error::Error for SetupError {}
