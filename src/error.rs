use thiserror::Error;

/// Errors raised by image filters and the pipeline that chains them
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// The tile image lacks an operation the pipeline needs
    #[error("{value} does not support {capability}")]
    UnsupportedImage {
        capability: &'static str,
        value: String,
    },

    /// A filter received a raster kind it cannot process
    #[error("{filter} expects a {expected} raster, got {actual}")]
    UnexpectedInput {
        filter: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// Structuring elements must have odd, non-zero dimensions
    #[error("Invalid structuring element: {width}x{height} (dimensions must be odd and non-zero)")]
    InvalidStructuringElement { width: u32, height: u32 },

    /// Pixel data does not match the declared shape
    #[error("Shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

/// Errors that can occur while deciding whether a tile holds tissue
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TissueError {
    /// Error from the filter pipeline, passed through unchanged
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// The tissue pipeline ended on something other than a mask
    #[error("Tissue pipeline must produce a mask, got {actual}")]
    NotAMask { actual: &'static str },

    /// Coverage of a zero-pixel mask is undefined
    #[error("Cannot compute tissue coverage of an empty {width}x{height} mask")]
    EmptyMask { width: u32, height: u32 },

    /// Percent thresholds live on a 0-100 scale
    #[error("Invalid tissue percent: {0} (must be between 0 and 100)")]
    InvalidTissuePercent(f64),
}
