//! Spatial reference identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default projection used when a layer does not declare one.
pub const DEFAULT_PROJECTION: &str = "EPSG:4326";

/// A named spatial reference system such as `EPSG:4326` or `EPSG:2154`.
///
/// Projections are compared by name, ignoring ASCII case, so `epsg:4326`
/// and `EPSG:4326` denote the same reference. No reprojection is ever
/// performed; two extents in different projections are simply unrelated.
///
/// # Example
///
/// ```
/// use staticlayer::extent::Projection;
///
/// let a = Projection::new("EPSG:2154");
/// let b = Projection::new("epsg:2154");
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "EPSG:2154");
/// ```
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Projection(String);

impl Projection {
    /// Create a projection from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The projection name as written.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECTION)
    }
}

impl PartialEq for Projection {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::hash::Hash for Projection {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_ascii_uppercase().hash(state);
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Projection {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
