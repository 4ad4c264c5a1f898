//! Red-ring sign extraction.
//!
//! Pipeline:
//! 1. Collect strongly red pixels (the ring)
//! 2. Centroid of the ring, and the smallest centroid-to-ring distance
//!    as the radius of the largest circle inside it
//! 3. Crop the disk's bounding box, binarize, invert

use kurbo::Point;

use crate::bitmap::{Pixel, PixelBuffer, Rgb};
use crate::config::DetectorConfig;
use crate::conversions::{index_to_pixel, indices_to_pixels, mean, rgba_to_rgb};
use crate::error::DetectError;
use crate::vector::Vector;

/// Snapshot of one sign detection.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedSign {
    /// Red ring pixels in row-major order.
    pub points: Vec<Pixel>,
    /// Centroid of `points`; usually fractional.
    pub centre: Point,
    /// Distance from `centre` to the nearest ring pixel.
    pub radius: f64,
    /// Side length of the square `sign` bitmap.
    pub side: u32,
    /// Inverted binary bitmap, row-major: 255 where the sign interior is
    /// dark, 0 elsewhere.
    pub sign: Vec<u8>,
}

/// Inclusive pixel bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
}

impl Bounds {
    fn of(pixels: impl Iterator<Item = Pixel>) -> Option<Self> {
        pixels.fold(None, |bounds, p| {
            Some(match bounds {
                None => Bounds {
                    min_x: p.x,
                    min_y: p.y,
                    max_x: p.x,
                    max_y: p.y,
                },
                Some(b) => Bounds {
                    min_x: b.min_x.min(p.x),
                    min_y: b.min_y.min(p.y),
                    max_x: b.max_x.max(p.x),
                    max_y: b.max_y.max(p.y),
                },
            })
        })
    }

    fn width(&self) -> u32 {
        1 + self.max_x - self.min_x
    }

    fn height(&self) -> u32 {
        1 + self.max_y - self.min_y
    }
}

fn is_red(rgb: Rgb, fraction: f64) -> bool {
    let [r, g, b] = rgb.map(f64::from);
    r > (1.0 - fraction) * 255.0 && g < fraction * 255.0 && b < fraction * 255.0
}

/// Locate a red-bordered circular sign and extract its interior.
///
/// Transparency is ignored; only the colour channels are read.
pub fn detect_sign(buffer: &PixelBuffer, config: &DetectorConfig) -> Result<DetectedSign, DetectError> {
    let width = buffer.width();

    let red_indices: Vec<usize> = buffer
        .pixels()
        .iter()
        .enumerate()
        .filter(|&(_, &rgba)| is_red(rgba_to_rgb(rgba), config.red_channel_fraction))
        .map(|(i, _)| i)
        .collect();
    let points = indices_to_pixels(&red_indices, width)?;
    if points.is_empty() {
        return Err(DetectError::DegenerateGeometry("no red pixels"));
    }

    let xs: Vec<f64> = points.iter().map(|p| f64::from(p.x)).collect();
    let ys: Vec<f64> = points.iter().map(|p| f64::from(p.y)).collect();
    let centre = Point::new(mean(&xs)?, mean(&ys)?);
    let centre_vector = Vector::from(centre);

    let radius = points
        .iter()
        .map(|&p| Vector::from(p).distance(centre_vector))
        .fold(f64::INFINITY, f64::min);
    log::debug!(
        "{} red pixels, centre ({:.2}, {:.2}), radius {:.2}",
        points.len(),
        centre.x,
        centre.y,
        radius
    );

    // Grey level inside the disk, None outside it.
    let grey: Vec<Option<f64>> = buffer
        .pixels()
        .iter()
        .enumerate()
        .map(|(i, &rgba)| {
            let p = index_to_pixel(i, width);
            if Vector::from(p).distance(centre_vector) < radius {
                mean(&rgba_to_rgb(rgba).map(f64::from)).map(Some)
            } else {
                Ok(None)
            }
        })
        .collect::<Result<_, _>>()?;

    let bounds = Bounds::of(
        grey.iter()
            .enumerate()
            .filter(|(_, g)| g.is_some())
            .map(|(i, _)| index_to_pixel(i, width)),
    )
    .ok_or(DetectError::DegenerateGeometry("sign interior is empty"))?;

    if bounds.width() != bounds.height() {
        return Err(DetectError::NonCircularSign {
            width: bounds.width(),
            height: bounds.height(),
        });
    }

    let mut sign = Vec::with_capacity((bounds.width() * bounds.height()) as usize);
    for y in bounds.min_y..=bounds.max_y {
        for x in bounds.min_x..=bounds.max_x {
            let binary = match grey[y as usize * width as usize + x as usize] {
                Some(g) if g <= config.binarization_midpoint => 0,
                _ => 255,
            };
            sign.push(255 - binary);
        }
    }

    Ok(DetectedSign {
        points,
        centre,
        radius,
        side: bounds.width(),
        sign,
    })
}
