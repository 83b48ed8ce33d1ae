#![forbid(unsafe_code)]

//! Orphan-row height strategies.
//!
//! The final row of a pack is an *orphan* when its content is narrower
//! than the available width: it cannot be justified by shrinking, so its
//! height comes from a strategy instead of the shrink-to-fit ratio.
//!
//! The strategy is a plain function over [`RowStats`]: it sees the mean
//! and full history of previously resolved row heights plus the nominal
//! row height, and nothing else. No access to packer internals.

use std::fmt;
use std::sync::Arc;

/// Height statistics for the rows closed before the orphan row.
///
/// When no prior rows exist the mean is undefined; the packer substitutes
/// the nominal row height and hands over an empty `heights` slice, so a
/// strategy can detect the degenerate case with `heights.is_empty()`.
#[derive(Debug, Clone, Copy)]
pub struct RowStats<'a> {
    /// Arithmetic mean of the prior row heights, or the nominal row height
    /// when `heights` is empty.
    pub mean_height: f64,
    /// Heights of all previously closed rows, in row order.
    pub heights: &'a [f64],
    /// The configured nominal row height.
    pub nominal_height: f64,
}

/// Strategy for the height of an orphan row.
///
/// Must return a positive, finite height. The resulting row ratio is
/// `height / nominal` and is deliberately not clamped, so a strategy may
/// make orphan rows taller than the nominal row height.
#[derive(Clone)]
pub struct OrphanPolicy {
    f: Arc<dyn Fn(&RowStats<'_>) -> f64 + Send + Sync>,
}

impl OrphanPolicy {
    /// Wrap a custom strategy function.
    #[must_use]
    pub fn new(f: impl Fn(&RowStats<'_>) -> f64 + Send + Sync + 'static) -> Self {
        Self { f: Arc::new(f) }
    }

    /// The default strategy: the mean height of prior rows, rounded to the
    /// nearest whole pixel. With zero prior rows it returns the nominal
    /// row height exactly.
    #[must_use]
    pub fn mean() -> Self {
        Self::new(|stats| {
            if stats.heights.is_empty() {
                stats.nominal_height
            } else {
                stats.mean_height.round()
            }
        })
    }

    /// Always the nominal row height, regardless of prior rows.
    #[must_use]
    pub fn nominal() -> Self {
        Self::new(|stats| stats.nominal_height)
    }

    /// A constant height.
    #[must_use]
    pub fn fixed(height: f64) -> Self {
        Self::new(move |_| height)
    }

    /// Evaluate the strategy.
    #[must_use]
    pub fn resolve(&self, stats: &RowStats<'_>) -> f64 {
        (self.f)(stats)
    }
}

impl Default for OrphanPolicy {
    fn default() -> Self {
        Self::mean()
    }
}

impl fmt::Debug for OrphanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrphanPolicy(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_rounds_to_nearest() {
        let policy = OrphanPolicy::mean();
        let heights = [208.0, 209.0];
        let stats = RowStats {
            mean_height: 208.5,
            heights: &heights,
            nominal_height: 250.0,
        };
        assert_eq!(policy.resolve(&stats), 209.0);
    }

    #[test]
    fn mean_falls_back_to_nominal_without_history() {
        let policy = OrphanPolicy::mean();
        let stats = RowStats {
            mean_height: 250.0,
            heights: &[],
            nominal_height: 250.0,
        };
        assert_eq!(policy.resolve(&stats), 250.0);
    }

    #[test]
    fn fixed_ignores_stats() {
        let policy = OrphanPolicy::fixed(123.0);
        let heights = [500.0];
        let stats = RowStats {
            mean_height: 500.0,
            heights: &heights,
            nominal_height: 250.0,
        };
        assert_eq!(policy.resolve(&stats), 123.0);
    }
}
