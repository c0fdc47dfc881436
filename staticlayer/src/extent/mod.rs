//! Geographic extents.
//!
//! An [`Extent`] is an axis-aligned bounding rectangle tagged with the
//! [`Projection`] its bounds are expressed in. Extents are the only geometry
//! the imagery selector needs: containment decides whether an image covers a
//! tile, dimensions rank covering images, and [`Extent::offset_to_parent`]
//! tells the renderer how to place a tile inside a larger image.
//!
//! # Bounds order
//!
//! Catalog descriptions and config files write extents as four numbers in
//! the order `[west, east, south, north]`. [`Extent::from_bounds`] accepts
//! exactly that layout.
//!
//! ```
//! use staticlayer::extent::{Extent, Projection};
//!
//! let image = Extent::from_bounds(Projection::new("EPSG:2154"), [0.0, 10.0, 0.0, 10.0]).unwrap();
//! let tile = Extent::new(Projection::new("EPSG:2154"), 2.0, 4.0, 2.0, 4.0).unwrap();
//!
//! assert!(tile.is_inside(&image));
//! assert_eq!(image.dimensions(), (10.0, 10.0));
//! ```

mod pitch;
mod projection;

pub use pitch::Pitch;
pub use projection::{Projection, DEFAULT_PROJECTION};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tolerance applied to containment comparisons.
///
/// Tile extents are usually derived by repeated subdivision and may drift
/// from catalog bounds by a few ULPs.
pub const CONTAINMENT_EPSILON: f64 = 1e-9;

/// Errors raised when constructing an extent.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtentError {
    /// A bound is NaN or infinite.
    NonFinite,
    /// West lies east of east, or south lies north of north.
    Inverted {
        west: f64,
        east: f64,
        south: f64,
        north: f64,
    },
    /// The bounds slice did not hold exactly four values.
    WrongArity(usize),
}

impl fmt::Display for ExtentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtentError::NonFinite => write!(f, "Extent bounds must be finite"),
            ExtentError::Inverted {
                west,
                east,
                south,
                north,
            } => write!(
                f,
                "Inverted extent: west={} east={} south={} north={}",
                west, east, south, north
            ),
            ExtentError::WrongArity(n) => {
                write!(f, "Extent needs 4 bounds (west, east, south, north), got {}", n)
            }
        }
    }
}

impl std::error::Error for ExtentError {}

/// An axis-aligned bounding rectangle in a named projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    projection: Projection,
    west: f64,
    east: f64,
    south: f64,
    north: f64,
}

impl Extent {
    /// Create an extent from its four bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ExtentError`] if any bound is not finite or the rectangle
    /// is inverted on either axis. Degenerate (zero-area) extents are allowed.
    pub fn new(
        projection: Projection,
        west: f64,
        east: f64,
        south: f64,
        north: f64,
    ) -> Result<Self, ExtentError> {
        if ![west, east, south, north].iter().all(|v| v.is_finite()) {
            return Err(ExtentError::NonFinite);
        }
        if west > east || south > north {
            return Err(ExtentError::Inverted {
                west,
                east,
                south,
                north,
            });
        }

        Ok(Self {
            projection,
            west,
            east,
            south,
            north,
        })
    }

    /// Create an extent from a `[west, east, south, north]` slice.
    pub fn from_bounds(projection: Projection, bounds: impl AsRef<[f64]>) -> Result<Self, ExtentError> {
        let bounds = bounds.as_ref();
        match bounds {
            &[west, east, south, north] => Self::new(projection, west, east, south, north),
            _ => Err(ExtentError::WrongArity(bounds.len())),
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    /// Bounds in `[west, east, south, north]` order.
    pub fn bounds(&self) -> [f64; 4] {
        [self.west, self.east, self.south, self.north]
    }

    /// Width and height of the rectangle, in projection units.
    #[inline]
    pub fn dimensions(&self) -> (f64, f64) {
        (self.east - self.west, self.north - self.south)
    }

    /// Returns true if this extent lies entirely within `other`.
    ///
    /// Extents in different projections are never inside one another.
    #[inline]
    pub fn is_inside(&self, other: &Extent) -> bool {
        self.projection == other.projection
            && self.west >= other.west - CONTAINMENT_EPSILON
            && self.east <= other.east + CONTAINMENT_EPSILON
            && self.south >= other.south - CONTAINMENT_EPSILON
            && self.north <= other.north + CONTAINMENT_EPSILON
    }

    /// Offset of this extent relative to a (usually covering) parent extent.
    ///
    /// The result is normalized by the parent's size: `x`/`y` locate this
    /// extent's north-west corner inside the parent, `z` is the width ratio.
    /// A parent with zero width or height yields the identity pitch.
    pub fn offset_to_parent(&self, parent: &Extent) -> Pitch {
        let (parent_width, parent_height) = parent.dimensions();
        if parent_width == 0.0 || parent_height == 0.0 {
            return Pitch::identity();
        }

        let (width, _) = self.dimensions();
        Pitch::new(
            (self.west - parent.west) / parent_width,
            (parent.north - self.north) / parent_height,
            width / parent_width,
        )
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [w={}, e={}, s={}, n={}]",
            self.projection, self.west, self.east, self.south, self.north
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext(w: f64, e: f64, s: f64, n: f64) -> Extent {
        Extent::new(Projection::default(), w, e, s, n).unwrap()
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let result = Extent::new(Projection::default(), 10.0, 0.0, 0.0, 10.0);
        assert!(matches!(result, Err(ExtentError::Inverted { .. })));
    }

    #[test]
    fn test_rejects_nan() {
        let result = Extent::new(Projection::default(), f64::NAN, 1.0, 0.0, 1.0);
        assert_eq!(result, Err(ExtentError::NonFinite));
    }

    #[test]
    fn test_from_bounds_wrong_arity() {
        let result = Extent::from_bounds(Projection::default(), [0.0, 1.0, 2.0]);
        assert_eq!(result, Err(ExtentError::WrongArity(3)));
    }

    #[test]
    fn test_from_bounds_order_is_west_east_south_north() {
        let extent = Extent::from_bounds(Projection::default(), [1.0, 5.0, 2.0, 3.0]).unwrap();
        assert_eq!(extent.west(), 1.0);
        assert_eq!(extent.east(), 5.0);
        assert_eq!(extent.south(), 2.0);
        assert_eq!(extent.north(), 3.0);
        assert_eq!(extent.dimensions(), (4.0, 1.0));
    }

    #[test]
    fn test_is_inside() {
        let outer = ext(0.0, 10.0, 0.0, 10.0);
        assert!(ext(3.0, 3.5, 3.0, 3.5).is_inside(&outer));
        assert!(outer.is_inside(&outer), "an extent contains itself");
        assert!(!ext(9.0, 11.0, 3.0, 4.0).is_inside(&outer));
        assert!(!outer.is_inside(&ext(3.0, 3.5, 3.0, 3.5)));
    }

    #[test]
    fn test_is_inside_tolerates_rounding() {
        let outer = ext(0.0, 0.3, 0.0, 1.0);
        let inner = ext(0.1 + 0.2 - 0.3, 0.1 + 0.2, 0.0, 1.0);
        assert!(inner.is_inside(&outer));
    }

    #[test]
    fn test_is_inside_requires_same_projection() {
        let outer = Extent::new(Projection::new("EPSG:3857"), 0.0, 10.0, 0.0, 10.0).unwrap();
        let inner = ext(1.0, 2.0, 1.0, 2.0);
        assert!(!inner.is_inside(&outer));
    }

    #[test]
    fn test_offset_to_parent() {
        let parent = ext(0.0, 10.0, 0.0, 10.0);
        let tile = ext(2.0, 4.0, 6.0, 8.0);
        let pitch = tile.offset_to_parent(&parent);
        assert!((pitch.x - 0.2).abs() < 1e-12);
        assert!((pitch.y - 0.2).abs() < 1e-12);
        assert!((pitch.z - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_offset_to_self_is_identity() {
        let extent = ext(5.0, 7.0, 1.0, 3.0);
        assert_eq!(extent.offset_to_parent(&extent), Pitch::identity());
    }

    #[test]
    fn test_offset_to_degenerate_parent_is_identity() {
        let parent = ext(1.0, 1.0, 0.0, 10.0);
        assert_eq!(ext(1.0, 1.0, 2.0, 3.0).offset_to_parent(&parent), Pitch::identity());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ext(0.0, 10.0, 0.0, 5.0).to_string(),
            "EPSG:4326 [w=0, e=10, s=0, n=5]"
        );
    }
}
