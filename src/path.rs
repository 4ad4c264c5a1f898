//! Thin-path reconstruction: edges → one midpoint per row → simplified polyline.

use kurbo::{BezPath, Point};

use crate::bitmap::{Pixel, PixelBuffer, Rgb};
use crate::config::DetectorConfig;
use crate::conversions::{mean, pixels_to_rows, single_occupant_rows_to_points};
use crate::edges::detect_edges;
use crate::error::DetectError;
use crate::rdp;

/// Snapshot of one path detection.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedPath {
    /// Thin edge pixels, ascending row-major index.
    pub edges: Vec<Pixel>,
    /// One centreline point per row that has exactly two edges.
    pub midpoints: Vec<Point>,
    /// `midpoints` after RDP simplification.
    pub path: Vec<Point>,
}

impl DetectedPath {
    /// The simplified path as a polyline `BezPath`.
    pub fn to_bezpath(&self) -> BezPath {
        let mut bez = BezPath::new();
        if let Some((&first, rest)) = self.path.split_first() {
            bez.move_to(first);
            for &p in rest {
                bez.line_to(p);
            }
        }
        bez
    }
}

/// Centreline points of a two-edges-per-row pattern.
///
/// Rows with one, three or more edges carry no midpoint.
pub fn row_midpoints(edges: &[Pixel]) -> Result<Vec<Point>, DetectError> {
    let rows = pixels_to_rows(edges);
    let height = rows.keys().next_back().map_or(0, |&y| y as usize + 1);
    let mut midpoint_rows: Vec<Option<f64>> = vec![None; height];
    for (&y, xs) in &rows {
        if let [a, b] = xs.as_slice() {
            midpoint_rows[y as usize] = Some(mean(&[f64::from(*a), f64::from(*b)])?);
        }
    }
    Ok(single_occupant_rows_to_points(&midpoint_rows))
}

/// Reconstruct and simplify a path from already-detected edges.
pub fn path_from_edges(edges: Vec<Pixel>, epsilon: f64) -> Result<DetectedPath, DetectError> {
    let midpoints = row_midpoints(&edges)?;
    let path = rdp::simplify(&midpoints, epsilon)?;
    Ok(DetectedPath {
        edges,
        midpoints,
        path,
    })
}

/// Full path pipeline over one opaque buffer and its palette.
pub fn detect_path(
    buffer: &PixelBuffer,
    palette: &[Rgb],
    config: &DetectorConfig,
) -> Result<DetectedPath, DetectError> {
    let edges = detect_edges(buffer, palette, config)?;
    path_from_edges(edges, config.rdp_epsilon)
}
