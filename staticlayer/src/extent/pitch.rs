//! Placement offsets of a tile within a covering image.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placement of a tile's footprint within a larger covering image.
///
/// `x` and `y` are the normalized offsets of the tile's north-west corner
/// from the image's north-west corner (x grows east, y grows south), and
/// `z` is the tile width expressed as a fraction of the image width.
///
/// The identity pitch `(0, 0, 1)` means the image maps exactly onto the tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Pitch {
    /// Create a pitch from its three components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The pitch of an image that covers a tile exactly.
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}
