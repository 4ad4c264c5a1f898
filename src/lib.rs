//! pathsign: raster images → thin-path polylines and sign bitmaps.
//!
//! Two independent, deterministic pipelines prepare images for a
//! downstream classifier:
//!
//! - **path**: bright thin path on a dark background → edge pixels →
//!   one midpoint per row → Ramer–Douglas–Peucker simplified polyline
//! - **sign**: red circular ring → centroid and inscribed radius →
//!   cropped, binarized, inverted square bitmap
//!
//! # Example
//!
//! ```no_run
//! use pathsign::{trace_path, DetectorConfig, ImageFile};
//!
//! let config = DetectorConfig::default();
//! let source = ImageFile::new("path.png", config.palette_size);
//! let detected = trace_path(&source, &config)?;
//! // detected.path contains Vec<kurbo::Point>
//! # Ok::<(), pathsign::DetectError>(())
//! ```

#![forbid(unsafe_code)]

mod bitmap;
mod config;

pub mod conversions;
pub mod edges;
pub mod error;
pub mod palette;
pub mod path;
pub mod prepare;
pub mod rdp;
pub mod render;
pub mod sign;
pub mod source;
pub mod vector;

// Re-export kurbo so downstream users get the same version
// used by DetectedPath.path and DetectedSign.centre.
pub use kurbo;

pub use bitmap::{Pixel, PixelBuffer, Rgb, Rgba};
pub use config::DetectorConfig;
pub use error::DetectError;
pub use path::DetectedPath;
pub use sign::DetectedSign;
pub use source::{ImageFile, InMemory, PixelSource};
pub use vector::Vector;

/// Full path pipeline: source → edges → midpoints → simplified path.
pub fn trace_path(
    source: &impl PixelSource,
    config: &DetectorConfig,
) -> Result<DetectedPath, DetectError> {
    let palette = source.palette()?;
    let buffer = source.pixels()?;
    let (w, h) = buffer.dimensions();
    log::debug!("path: {}x{} px, {} palette colours", w, h, palette.len());

    let detected = path::detect_path(&buffer, &palette, config)?;
    log::info!(
        "path: {} edges, {} midpoints, {} path points (epsilon {})",
        detected.edges.len(),
        detected.midpoints.len(),
        detected.path.len(),
        config.rdp_epsilon,
    );
    Ok(detected)
}

/// Full sign pipeline: source → red ring → cropped sign bitmap.
pub fn extract_sign(
    source: &impl PixelSource,
    config: &DetectorConfig,
) -> Result<DetectedSign, DetectError> {
    let buffer = source.pixels()?;
    let (w, h) = buffer.dimensions();
    log::debug!("sign: {}x{} px", w, h);

    let detected = sign::detect_sign(&buffer, config)?;
    log::info!(
        "sign: {} ring pixels, radius {:.2}, {}x{} bitmap",
        detected.points.len(),
        detected.radius,
        detected.side,
        detected.side,
    );
    Ok(detected)
}
