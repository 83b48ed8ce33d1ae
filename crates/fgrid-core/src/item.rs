#![forbid(unsafe_code)]

//! Item storage: the ordered sequence of layout units for one grid.
//!
//! # Invariants
//!
//! 1. Every stored item has finite, strictly positive intrinsic dimensions;
//!    raw entries that fail this are dropped at build time, never stored.
//! 2. Source order is preserved exactly; it determines row membership.
//! 3. `norm_width` always reflects the store's current nominal row height.
//!
//! # Failure Modes
//!
//! None. Unusable source data is skipped silently rather than rejected,
//! and an all-invalid input simply yields an empty store.

use serde::{Deserialize, Serialize};

use crate::geometry::Dimensions;

/// One layout unit with a fixed intrinsic aspect ratio.
///
/// `norm_width` is the width the item would have if its height were
/// rescaled to the nominal row height. The solver works exclusively on
/// normalized widths, so rows of mixed-ratio items can be compared against
/// the container width in one unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectItem {
    size: Dimensions,
    norm_width: f64,
}

impl AspectItem {
    /// Create an item from raw dimensions, normalized against
    /// `nominal_row_height`.
    ///
    /// Returns `None` when the dimensions are unusable (non-finite or
    /// non-positive), matching the skip policy of [`ItemStore::build`].
    #[must_use]
    pub fn new(size: Dimensions, nominal_row_height: f64) -> Option<Self> {
        size.is_valid().then(|| Self {
            size,
            norm_width: size.scaled_width(nominal_row_height),
        })
    }

    /// The intrinsic dimensions this item was declared with.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Dimensions {
        self.size
    }

    /// Width at the nominal row height, aspect ratio preserved.
    #[inline]
    #[must_use]
    pub fn norm_width(&self) -> f64 {
        self.norm_width
    }

    fn rescale(&mut self, nominal_row_height: f64) {
        self.norm_width = self.size.scaled_width(nominal_row_height);
    }
}

/// The ordered item sequence for one layout context.
///
/// Exclusively owns its items; the solver borrows them per pack. The store
/// remembers the nominal row height it normalized against so the items can
/// be rescaled in place when the height is reconfigured, without re-reading
/// the source data.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStore {
    items: Vec<AspectItem>,
    nominal_row_height: f64,
}

impl ItemStore {
    /// Build a store from raw dimension pairs.
    ///
    /// Entries with non-finite (NaN stands in for "non-numeric" source
    /// data) or non-positive components are dropped without error;
    /// survivors keep their source order. `nominal_row_height` must be
    /// positive and finite; callers that accept it from outside validate
    /// it before building (the solver crate does this in its front-end).
    #[must_use]
    pub fn build(raw: impl IntoIterator<Item = Dimensions>, nominal_row_height: f64) -> Self {
        let items = raw
            .into_iter()
            .filter_map(|size| AspectItem::new(size, nominal_row_height))
            .collect();
        Self {
            items,
            nominal_row_height,
        }
    }

    /// Recompute every normalized width for a new nominal row height.
    pub fn rescale(&mut self, nominal_row_height: f64) {
        self.nominal_row_height = nominal_row_height;
        for item in &mut self.items {
            item.rescale(nominal_row_height);
        }
    }

    /// The stored items, in source order.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[AspectItem] {
        &self.items
    }

    /// The nominal row height the items are currently normalized against.
    #[inline]
    #[must_use]
    pub fn nominal_row_height(&self) -> f64 {
        self.nominal_row_height
    }

    /// Number of stored items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_normalizes_widths() {
        let store = ItemStore::build([Dimensions::new(800.0, 400.0)], 250.0);
        assert_eq!(store.len(), 1);
        // 800 * (250 / 400) = 500
        assert_eq!(store.items()[0].norm_width(), 500.0);
        assert_eq!(store.items()[0].size(), Dimensions::new(800.0, 400.0));
    }

    #[test]
    fn build_skips_unusable_entries() {
        let raw = [
            Dimensions::new(400.0, 300.0),
            Dimensions::new(f64::NAN, 300.0),
            Dimensions::new(400.0, 0.0),
            Dimensions::new(-10.0, 300.0),
            Dimensions::new(200.0, 100.0),
        ];
        let store = ItemStore::build(raw, 250.0);
        assert_eq!(store.len(), 2);
        // Survivors keep source order.
        assert_eq!(store.items()[0].size().width, 400.0);
        assert_eq!(store.items()[1].size().width, 200.0);
    }

    #[test]
    fn build_all_invalid_yields_empty_store() {
        let store = ItemStore::build([Dimensions::new(0.0, 0.0)], 250.0);
        assert!(store.is_empty());
    }

    #[test]
    fn rescale_recomputes_norm_widths() {
        let mut store = ItemStore::build([Dimensions::new(800.0, 400.0)], 250.0);
        assert_eq!(store.items()[0].norm_width(), 500.0);

        store.rescale(100.0);
        assert_eq!(store.nominal_row_height(), 100.0);
        // 800 * (100 / 400) = 200
        assert_eq!(store.items()[0].norm_width(), 200.0);
    }
}
