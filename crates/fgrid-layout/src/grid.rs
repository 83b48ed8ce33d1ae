#![forbid(unsafe_code)]

//! Grid front-end: an item store paired with a packer.
//!
//! [`FluidGrid`] is the long-lived object an adapter holds per layout
//! context. It validates the configuration once at construction, owns the
//! filtered item sequence, and recomputes the full layout on every
//! [`update`]. There is no caching, because a different container width
//! generally means a different packing.
//!
//! [`update`]: FluidGrid::update

use fgrid_core::{AspectItem, Dimensions, ItemStore};
use tracing::debug;

use crate::error::Result;
use crate::{Row, RowPacker};

/// A justified fluid grid: ordered items plus packing configuration.
#[derive(Debug, Clone)]
pub struct FluidGrid {
    store: ItemStore,
    packer: RowPacker,
}

impl FluidGrid {
    /// Build a grid from raw dimension pairs and a configured packer.
    ///
    /// Raw entries with unusable dimensions are dropped silently, exactly
    /// as in [`ItemStore::build`].
    ///
    /// # Errors
    ///
    /// Fails fast when the packer carries an invalid nominal row height or
    /// gutter, so a misconfiguration surfaces here rather than on the
    /// first resize.
    pub fn new(raw: impl IntoIterator<Item = Dimensions>, packer: RowPacker) -> Result<Self> {
        packer.validate()?;
        let store = ItemStore::build(raw, packer.row_height);
        debug!(items = store.len(), "grid built");
        Ok(Self { store, packer })
    }

    /// Compute the row layout for the given container width.
    ///
    /// Called once at construction time by the adapter and again on every
    /// (externally debounced) width change.
    ///
    /// # Errors
    ///
    /// [`crate::LayoutError::InvalidContainerWidth`] when the width is
    /// zero, negative, or non-finite.
    pub fn update(&self, container_width: f64) -> Result<Vec<Row>> {
        self.packer.pack(self.store.items(), container_width)
    }

    /// Change the nominal row height and renormalize every stored item.
    ///
    /// # Errors
    ///
    /// [`crate::LayoutError::InvalidRowHeight`] when the height is zero,
    /// negative, or non-finite; the grid is left unchanged in that case.
    pub fn set_row_height(&mut self, row_height: f64) -> Result<()> {
        let packer = self.packer.clone().row_height(row_height);
        packer.validate()?;
        self.packer = packer;
        self.store.rescale(row_height);
        Ok(())
    }

    /// The stored items, in source order.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[AspectItem] {
        self.store.items()
    }

    /// Number of stored items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the grid holds no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutError;

    #[test]
    fn new_filters_and_update_packs() {
        let raw = [
            Dimensions::new(800.0, 400.0),  // norm 500
            Dimensions::new(f64::NAN, 1.0), // dropped
            Dimensions::new(800.0, 400.0),  // norm 500
        ];
        let grid = FluidGrid::new(raw, RowPacker::new()).unwrap();
        assert_eq!(grid.len(), 2);

        let rows = grid.update(1000.0).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].range, 0..2);
        assert_eq!(rows[0].height, 250.0);
    }

    #[test]
    fn new_rejects_invalid_configuration() {
        let result = FluidGrid::new([], RowPacker::new().row_height(f64::NAN));
        assert!(matches!(
            result,
            Err(LayoutError::InvalidRowHeight { .. })
        ));
    }

    #[test]
    fn set_row_height_rescales_items() {
        let mut grid =
            FluidGrid::new([Dimensions::new(800.0, 400.0)], RowPacker::new()).unwrap();
        assert_eq!(grid.items()[0].norm_width(), 500.0);

        grid.set_row_height(100.0).unwrap();
        assert_eq!(grid.items()[0].norm_width(), 200.0);

        // Orphan fallback now follows the new nominal height.
        let rows = grid.update(1000.0).unwrap();
        assert_eq!(rows[0].height, 100.0);
    }

    #[test]
    fn set_row_height_rejects_invalid_and_keeps_state() {
        let mut grid =
            FluidGrid::new([Dimensions::new(800.0, 400.0)], RowPacker::new()).unwrap();
        assert_eq!(
            grid.set_row_height(-5.0),
            Err(LayoutError::InvalidRowHeight { height: -5.0 })
        );
        assert_eq!(grid.items()[0].norm_width(), 500.0);
    }
}
