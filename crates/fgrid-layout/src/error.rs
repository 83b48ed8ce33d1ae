#![forbid(unsafe_code)]

//! Error types for layout computation.

use thiserror::Error;

/// Convenience alias used throughout the solver.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// A caller contract violation detected before any packing work starts.
///
/// Unusable *item* data is never an error; the store drops it silently.
/// These variants cover the layout parameters, where a bad value would
/// otherwise propagate NaN or negative lengths through every row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("container width must be positive and finite, got {width}")]
    InvalidContainerWidth { width: f64 },

    #[error("nominal row height must be positive and finite, got {height}")]
    InvalidRowHeight { height: f64 },

    #[error("gutter must be non-negative and finite, got {gutter}")]
    InvalidGutter { gutter: f64 },
}
