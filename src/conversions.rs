//! Pure conversions between pixel indices, points, colours and rows.

use std::collections::BTreeMap;

use kurbo::Point;

use crate::bitmap::{Pixel, Rgb, Rgba};
use crate::error::DetectError;

/// Row-major index → pixel coordinate.
pub fn index_to_pixel(index: usize, width: u32) -> Pixel {
    let width = width as usize;
    Pixel::new((index % width) as u32, (index / width) as u32)
}

/// Pixel coordinate → row-major index.
pub fn pixel_to_index(pixel: Pixel, width: u32) -> usize {
    pixel.y as usize * width as usize + pixel.x as usize
}

/// Convert a batch of row-major indices, checking nothing is lost on the way.
pub fn indices_to_pixels(indices: &[usize], width: u32) -> Result<Vec<Pixel>, DetectError> {
    if indices.is_empty() {
        return Ok(Vec::new());
    }
    if width == 0 {
        return Err(DetectError::ZeroWidth);
    }
    let pixels: Vec<Pixel> = indices.iter().map(|&i| index_to_pixel(i, width)).collect();
    if pixels.len() != indices.len() {
        return Err(DetectError::ConversionArityMismatch {
            expected: indices.len(),
            actual: pixels.len(),
        });
    }
    Ok(pixels)
}

pub fn rgba_to_rgb(rgba: Rgba) -> Rgb {
    [rgba[0], rgba[1], rgba[2]]
}

/// Broadcast-weighted luminance in `[0, 1]`.
pub fn luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.map(f64::from);
    (0.2126 * r + 0.7152 * g + 0.0722 * b) / 255.0
}

/// Group pixels by row: `y → [x, ...]`, keeping input order within a row.
pub fn pixels_to_rows(pixels: &[Pixel]) -> BTreeMap<u32, Vec<u32>> {
    let mut rows: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for p in pixels {
        rows.entry(p.y).or_default().push(p.x);
    }
    rows
}

/// `rows[y] = Some(x)` becomes the point `(x, y)`; absent rows are skipped.
pub fn single_occupant_rows_to_points(rows: &[Option<f64>]) -> Vec<Point> {
    rows.iter()
        .enumerate()
        .filter_map(|(y, x)| x.map(|x| Point::new(x, y as f64)))
        .collect()
}

/// Arithmetic mean. An empty slice has no mean.
pub fn mean(values: &[f64]) -> Result<f64, DetectError> {
    if values.is_empty() {
        return Err(DetectError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}
