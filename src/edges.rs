//! Luminance-threshold edge detection.
//!
//! Pixels brighter than a palette-derived threshold are collected in
//! row-major order; the interior of every run of three or more
//! index-adjacent bright pixels is then dropped, leaving a thin edge set.

use crate::bitmap::{Pixel, PixelBuffer, Rgb};
use crate::config::DetectorConfig;
use crate::conversions::{indices_to_pixels, luminance, rgba_to_rgb};
use crate::error::DetectError;

/// Brightest and second-brightest luminance in a palette.
///
/// The first occurrence of the maximum is taken out before the second
/// maximum is searched, so a duplicated maximum gives `(max, max)`.
pub fn two_maxima(luminances: &[f64]) -> Result<(f64, f64), DetectError> {
    if luminances.len() < 2 {
        return Err(DetectError::PaletteTooSmall(luminances.len()));
    }
    let mut max_index = 0;
    for (i, &l) in luminances.iter().enumerate() {
        if l > luminances[max_index] {
            max_index = i;
        }
    }
    let second = luminances
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != max_index)
        .map(|(_, &l)| l)
        .fold(f64::NEG_INFINITY, f64::max);
    Ok((luminances[max_index], second))
}

/// Threshold between the two brightest palette colours.
pub fn luminance_threshold(palette: &[Rgb], config: &DetectorConfig) -> Result<f64, DetectError> {
    let luminances: Vec<f64> = palette.iter().map(|&c| luminance(c)).collect();
    let (max, second) = two_maxima(&luminances)?;
    Ok(second + config.brightness_fraction * (max - second))
}

/// Thin an ascending list of bright indices down to edge indices.
///
/// An index is dropped only when both its predecessor and successor in
/// the list are its immediate row-major neighbours. The adjacency test is
/// purely one-dimensional: the last pixel of a row and the first of the
/// next count as neighbours.
pub fn bright_indices_to_edge_indices(bright: &[usize]) -> Vec<usize> {
    bright
        .iter()
        .enumerate()
        .filter(|&(i, &current)| {
            if i == 0 {
                return true;
            }
            let after_previous = current - bright[i - 1] == 1;
            let before_next = bright.get(i + 1).is_some_and(|&next| next - current == 1);
            !(after_previous && before_next)
        })
        .map(|(_, &index)| index)
        .collect()
}

/// Detect thin bright edges in an opaque buffer.
pub fn detect_edges(
    buffer: &PixelBuffer,
    palette: &[Rgb],
    config: &DetectorConfig,
) -> Result<Vec<Pixel>, DetectError> {
    if let Some((index, rgba)) = buffer
        .pixels()
        .iter()
        .enumerate()
        .find(|(_, rgba)| rgba[3] != 255)
    {
        return Err(DetectError::InvalidAlphaChannel {
            index,
            alpha: rgba[3],
        });
    }

    let threshold = luminance_threshold(palette, config)?;
    log::debug!("luminance threshold {:.4}", threshold);

    let bright: Vec<usize> = buffer
        .pixels()
        .iter()
        .enumerate()
        .filter(|&(_, &rgba)| luminance(rgba_to_rgb(rgba)) > threshold)
        .map(|(i, _)| i)
        .collect();

    let edge_indices = bright_indices_to_edge_indices(&bright);
    log::debug!("{} bright pixels, {} edges", bright.len(), edge_indices.len());

    indices_to_pixels(&edge_indices, buffer.width())
}
