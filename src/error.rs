use thiserror::Error;

/// Errors that can occur during path or sign detection.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DetectError {
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    #[error("failed to write image: {0}")]
    ImageWrite(String),

    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("image width is zero")]
    ZeroWidth,

    /// Edge detection needs a fully opaque buffer.
    #[error("pixel {index} is not fully opaque (alpha {alpha})")]
    InvalidAlphaChannel { index: usize, alpha: u8 },

    #[error("palette needs at least two colours, got {0}")]
    PaletteTooSmall(usize),

    #[error("simplification epsilon must be a non-negative number, got {0}")]
    InvalidEpsilon(f64),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    #[error("detected sign is not a circle ({width}x{height} bounding box)")]
    NonCircularSign { width: u32, height: u32 },

    #[error("converted {actual} points from {expected} indices")]
    ConversionArityMismatch { expected: usize, actual: usize },

    #[error("mean of an empty sequence")]
    EmptyInput,
}
