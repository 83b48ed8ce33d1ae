#![forbid(unsafe_code)]

//! Justified row-packing solver.
//!
//! Given an ordered sequence of [`AspectItem`]s and a container width,
//! [`RowPacker::pack`] partitions the items into rows and resolves a shared
//! height plus per-item widths so that every row except possibly the last
//! fills the container exactly, each item keeping its aspect ratio. The
//! terminal short row (the *orphan*) gets its height from a pluggable
//! [`OrphanPolicy`] instead of the shrink-to-fit ratio.
//!
//! The solver is pure and synchronous: no caching, no scheduling context,
//! no visual-tree types. Feeding it and applying its output is the job of
//! whatever adapter sits above it.

pub use fgrid_core::{AspectItem, Dimensions, ItemStore};

pub mod error;
pub mod grid;
pub mod policy;

pub use error::{LayoutError, Result};
pub use grid::FluidGrid;
pub use policy::{OrphanPolicy, RowStats};

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// One resolved row of a packed layout.
///
/// Rows exist only as the return value of a single [`RowPacker::pack`]
/// call; they are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Contiguous index range into the source item slice.
    pub range: Range<usize>,
    /// Render height shared by every item in the row. Regular rows carry
    /// `floor(ratio * nominal)`, an integral value; orphan rows carry the
    /// policy output unmodified, which may be fractional.
    pub height: f64,
    /// Scale factor applied to normalized widths. At most 1 for regular
    /// rows; unclamped for orphan rows.
    pub ratio: f64,
    /// Resolved pixel width per item, aligned with `range`.
    pub widths: Vec<u32>,
}

impl Row {
    /// Number of items in the row.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Whether the row holds no items. Never true for packer output.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Row-packing configuration, builder style.
///
/// ```
/// use fgrid_core::{Dimensions, ItemStore};
/// use fgrid_layout::RowPacker;
///
/// let packer = RowPacker::new().row_height(250.0).gutter(8.0);
/// let store = ItemStore::build(
///     [Dimensions::new(800.0, 400.0), Dimensions::new(300.0, 400.0)],
///     250.0,
/// );
/// let rows = packer.pack(store.items(), 1200.0).unwrap();
/// assert_eq!(rows.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RowPacker {
    pub(crate) row_height: f64,
    pub(crate) gutter: f64,
    pub(crate) width_fudge: u32,
    pub(crate) orphan_policy: OrphanPolicy,
}

impl Default for RowPacker {
    fn default() -> Self {
        Self {
            row_height: 250.0,
            gutter: 0.0,
            width_fudge: 1,
            orphan_policy: OrphanPolicy::default(),
        }
    }
}

impl RowPacker {
    /// Create a packer with the default configuration: nominal row height
    /// 250, no gutter, width fudge 1, mean-height orphan policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nominal (maximum) row height in pixels. Rows are shrunk
    /// from this height to fit; only orphan rows may exceed it.
    pub fn row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    /// Set the spacing reserved per item, in pixels.
    ///
    /// One gutter is reserved for every item in a row, the last included,
    /// matching the margin-per-item box model this solver was built for.
    pub fn gutter(mut self, gutter: f64) -> Self {
        self.gutter = gutter;
        self
    }

    /// Set the number of pixels subtracted from every resolved item width.
    ///
    /// Defaults to 1, which keeps rounded row totals from overflowing the
    /// container in renderers that round subpixel widths up. Set to 0 for
    /// exact floor widths. Subtraction saturates at zero.
    pub fn width_fudge(mut self, width_fudge: u32) -> Self {
        self.width_fudge = width_fudge;
        self
    }

    /// Set the strategy used for the height of an orphan row.
    pub fn orphan_policy(mut self, orphan_policy: OrphanPolicy) -> Self {
        self.orphan_policy = orphan_policy;
        self
    }

    /// The configured nominal row height.
    #[inline]
    #[must_use]
    pub fn nominal_row_height(&self) -> f64 {
        self.row_height
    }

    /// Check the configured parameters, failing fast on contract
    /// violations.
    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(LayoutError::InvalidRowHeight {
                height: self.row_height,
            });
        }
        if !(self.gutter.is_finite() && self.gutter >= 0.0) {
            return Err(LayoutError::InvalidGutter {
                gutter: self.gutter,
            });
        }
        Ok(())
    }

    /// Partition `items` into rows justified to `container_width`.
    ///
    /// Single linear pass: items accumulate into the current row until the
    /// normalized content width plus reserved gutters reaches the
    /// container width, or the items run out. A closing row is shrunk to
    /// fit (never stretched); a final row that cannot fill the container
    /// takes its height from the orphan policy instead.
    ///
    /// Items must have been normalized against this packer's nominal row
    /// height (see [`ItemStore::build`]). Empty input yields an empty row
    /// list.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidContainerWidth`] when `container_width` is
    /// zero, negative, or non-finite; [`LayoutError::InvalidRowHeight`] /
    /// [`LayoutError::InvalidGutter`] when the packer was configured with
    /// out-of-contract parameters.
    pub fn pack(&self, items: &[AspectItem], container_width: f64) -> Result<Vec<Row>> {
        self.validate()?;
        if !(container_width.is_finite() && container_width > 0.0) {
            return Err(LayoutError::InvalidContainerWidth {
                width: container_width,
            });
        }

        let mut rows = Vec::new();
        let mut heights: Vec<f64> = Vec::new();
        let mut height_total = 0.0_f64;

        let mut row_width = 0.0_f64;
        let mut row_gutter_width = 0.0_f64;
        let mut row_first = 0_usize;

        for (i, item) in items.iter().enumerate() {
            row_width += item.norm_width();
            row_gutter_width += self.gutter;
            let item_is_last = i + 1 == items.len();

            if row_width + row_gutter_width >= container_width || item_is_last {
                // Gutters keep their width regardless of the row height,
                // so they are excluded from the ratio computation.
                let row_max_width = container_width - row_gutter_width;

                let (ratio, height) = if item_is_last && row_max_width / row_width > 1.0 {
                    // Orphan: the row cannot be stretched to fill. Height
                    // comes from the policy and the ratio follows it,
                    // unclamped.
                    let mean_height = if heights.is_empty() {
                        self.row_height
                    } else {
                        height_total / heights.len() as f64
                    };
                    let stats = RowStats {
                        mean_height,
                        heights: &heights,
                        nominal_height: self.row_height,
                    };
                    let height = self.orphan_policy.resolve(&stats);
                    (height / self.row_height, height)
                } else {
                    let ratio = (row_max_width / row_width).clamp(0.0, 1.0);
                    (ratio, (ratio * self.row_height).floor())
                };

                heights.push(height);
                height_total += height;

                let widths = items[row_first..=i]
                    .iter()
                    .map(|item| {
                        ((ratio * item.norm_width()).floor() as u32)
                            .saturating_sub(self.width_fudge)
                    })
                    .collect();

                trace!(
                    row = rows.len(),
                    first = row_first,
                    last = i,
                    ratio,
                    height,
                    "row closed"
                );

                rows.push(Row {
                    range: row_first..i + 1,
                    height,
                    ratio,
                    widths,
                });

                row_width = 0.0;
                row_gutter_width = 0.0;
                row_first = i + 1;
            }
        }

        debug!(
            items = items.len(),
            rows = rows.len(),
            container_width,
            "pack complete"
        );

        Ok(rows)
    }
}
