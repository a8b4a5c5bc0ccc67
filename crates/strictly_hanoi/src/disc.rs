//! Core disc types.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Identifies a disc by its index in the tower's disc collection.
///
/// Collection order is creation order, which is also the order the
/// Peg Registry appends discs in when it rebuilds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("disc #{}", _0)]
pub struct DiscId(pub usize);

impl DiscId {
    /// Returns the collection index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Cosmetic disc color.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DiscColor {
    /// Purple.
    Purple,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Red.
    Red,
    /// Cyan.
    Cyan,
    /// Magenta.
    Magenta,
    /// Orange.
    Orange,
}

/// A disc on the tower.
///
/// `position.x` locates the peg zone, `position.y` the stack height.
/// `z` is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub(crate) id: DiscId,
    radius: f32,
    height: f32,
    color: DiscColor,
    pub(crate) position: Point3<f32>,
}

impl Disc {
    /// Creates a disc at the given position.
    pub fn new(id: DiscId, radius: f32, height: f32, color: DiscColor, position: Point3<f32>) -> Self {
        Self {
            id,
            radius,
            height,
            color,
            position,
        }
    }

    /// Returns the disc id.
    pub fn id(&self) -> DiscId {
        self.id
    }

    /// Returns the radius. Decides the stacking rule.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the disc thickness.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the color.
    pub fn color(&self) -> DiscColor {
        self.color
    }

    /// Returns the current world position.
    pub fn position(&self) -> Point3<f32> {
        self.position
    }
}
