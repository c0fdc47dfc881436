//! Static image catalogs and best-fit selection.
//!
//! A [`Catalog`] is the immutable, ordered list of images a layer can draw
//! from. It is built once by the [`CatalogLoader`] and shared read-only
//! (`Arc<Catalog>`) by every tile request afterwards.
//!
//! # Best-fit selection
//!
//! [`select_best_fit`] returns the "smallest" image that fully covers a
//! target extent, where smaller means *dominated on both axes*: a covering
//! candidate replaces the running best only if its width **and** its height
//! are both less than or equal to the best's. Two candidates where one is
//! narrower but taller are incomparable, and the first one seen is kept.
//! Selection is therefore sensitive to catalog order, which follows the
//! document order of the catalog description.
//!
//! ```
//! use staticlayer::catalog::{select_best_fit, Catalog, CatalogEntry};
//! use staticlayer::extent::{Extent, Projection};
//!
//! let ext = |b: [f64; 4]| Extent::from_bounds(Projection::default(), b).unwrap();
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::new("img1", ext([0.0, 10.0, 0.0, 10.0])),
//!     CatalogEntry::new("img2", ext([2.0, 4.0, 2.0, 4.0])),
//! ]);
//!
//! let tile = ext([3.0, 3.5, 3.0, 3.5]);
//! assert_eq!(select_best_fit(&catalog, &tile).map(|e| e.image()), Some("img2"));
//! ```

mod entry;
mod loader;

pub use entry::CatalogEntry;
pub use loader::{parse_catalog, CatalogLoader};

use crate::extent::Extent;

/// Ordered, immutable list of catalog entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by image identifier.
    pub fn get(&self, image: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.image() == image)
    }

    /// Returns true if at least one entry fully covers `target`.
    pub fn covers(&self, target: &Extent) -> bool {
        self.entries.iter().any(|e| e.covers(target))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Select the smallest catalog entry that fully covers `target`.
///
/// See the module docs for the exact (order-sensitive) ordering rule.
/// Returns `None` if no entry covers the target.
pub fn select_best_fit<'a>(catalog: &'a Catalog, target: &Extent) -> Option<&'a CatalogEntry> {
    let mut selection: Option<&CatalogEntry> = None;

    for entry in catalog.iter().filter(|e| e.covers(target)) {
        selection = match selection {
            None => Some(entry),
            Some(best) => {
                let (best_w, best_h) = best.dimensions();
                let (w, h) = entry.dimensions();
                if w <= best_w && h <= best_h {
                    Some(entry)
                } else {
                    Some(best)
                }
            }
        };
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extent::Projection;
    use proptest::prelude::*;

    fn ext(bounds: [f64; 4]) -> Extent {
        Extent::from_bounds(Projection::default(), bounds).unwrap()
    }

    fn catalog(entries: &[(&str, [f64; 4])]) -> Catalog {
        Catalog::new(
            entries
                .iter()
                .map(|(image, bounds)| CatalogEntry::new(*image, ext(*bounds)))
                .collect(),
        )
    }

    fn selected<'a>(catalog: &'a Catalog, target: [f64; 4]) -> Option<&'a str> {
        select_best_fit(catalog, &ext(target)).map(|e| e.image())
    }

    #[test]
    fn test_empty_catalog_selects_nothing() {
        assert_eq!(selected(&Catalog::default(), [0.0, 1.0, 0.0, 1.0]), None);
    }

    #[test]
    fn test_single_covering_entry_is_selected() {
        let catalog = catalog(&[
            ("far", [50.0, 60.0, 50.0, 60.0]),
            ("only", [0.0, 10.0, 0.0, 10.0]),
        ]);
        assert_eq!(selected(&catalog, [1.0, 2.0, 1.0, 2.0]), Some("only"));
    }

    #[test]
    fn test_partial_overlap_does_not_qualify() {
        let catalog = catalog(&[("img", [0.0, 10.0, 0.0, 10.0])]);
        assert_eq!(selected(&catalog, [9.0, 11.0, 1.0, 2.0]), None);
    }

    #[test]
    fn test_smaller_on_both_axes_wins() {
        let catalog = catalog(&[
            ("img1", [0.0, 10.0, 0.0, 10.0]),
            ("img2", [2.0, 4.0, 2.0, 4.0]),
        ]);
        assert_eq!(selected(&catalog, [3.0, 3.5, 3.0, 3.5]), Some("img2"));
    }

    #[test]
    fn test_dominance_is_order_independent() {
        // A is 2x2, B is 4x4; A dominates B whichever comes first
        let a = ("a", [0.0, 2.0, 0.0, 2.0]);
        let b = ("b", [0.0, 4.0, 0.0, 4.0]);
        let target = [0.5, 1.0, 0.5, 1.0];

        assert_eq!(selected(&catalog(&[a, b]), target), Some("a"));
        assert_eq!(selected(&catalog(&[b, a]), target), Some("a"));
    }

    #[test]
    fn test_incomparable_candidates_keep_first_seen() {
        // A is 2 wide and 5 tall, B is 5 wide and 2 tall; neither dominates
        let a = ("a", [0.0, 2.0, 0.0, 5.0]);
        let b = ("b", [0.0, 5.0, 0.0, 2.0]);
        let target = [0.5, 1.0, 0.5, 1.0];

        assert_eq!(selected(&catalog(&[a, b]), target), Some("a"));
        assert_eq!(selected(&catalog(&[b, a]), target), Some("b"));
    }

    #[test]
    fn test_equal_dimensions_prefer_later_entry() {
        let catalog = catalog(&[
            ("first", [0.0, 4.0, 0.0, 4.0]),
            ("second", [1.0, 5.0, 1.0, 5.0]),
        ]);
        assert_eq!(selected(&catalog, [2.0, 3.0, 2.0, 3.0]), Some("second"));
    }

    #[test]
    fn test_catalog_covers_and_get() {
        let catalog = catalog(&[("img1", [0.0, 10.0, 0.0, 10.0])]);
        assert!(catalog.covers(&ext([3.0, 3.5, 3.0, 3.5])));
        assert!(!catalog.covers(&ext([20.0, 21.0, 20.0, 21.0])));
        assert!(catalog.get("img1").is_some());
        assert!(catalog.get("img9").is_none());
        assert_eq!(catalog.len(), 1);
    }

    fn bounds_strategy() -> impl Strategy<Value = [f64; 4]> {
        (0.0..100.0f64, 0.0..50.0f64, 0.0..100.0f64, 0.0..50.0f64)
            .prop_map(|(w, dw, s, dn)| [w, w + dw, s, s + dn])
    }

    proptest! {
        #[test]
        fn prop_selection_always_covers_target(
            entries in proptest::collection::vec(bounds_strategy(), 0..12),
            target in bounds_strategy(),
        ) {
            let catalog = Catalog::new(
                entries
                    .iter()
                    .enumerate()
                    .map(|(i, b)| CatalogEntry::new(format!("img{}", i), ext(*b)))
                    .collect(),
            );
            let target = ext(target);

            match select_best_fit(&catalog, &target) {
                Some(entry) => prop_assert!(target.is_inside(entry.extent())),
                None => prop_assert!(!catalog.covers(&target)),
            }
        }
    }
}
