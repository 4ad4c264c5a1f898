//! Classifier input preparation.
//!
//! A downstream classifier expects a fixed-size square of grey levels;
//! the extracted sign is rendered, resampled to that size and flattened.

use image::imageops::{self, FilterType};
use image::GrayImage;

use crate::error::DetectError;
use crate::sign::DetectedSign;

/// Flattened `side × side` grey levels → image.
pub fn sign_to_image(sign: &[u8], side: u32) -> Result<GrayImage, DetectError> {
    let expected = side as usize * side as usize;
    if sign.len() != expected {
        return Err(DetectError::SizeMismatch {
            expected,
            actual: sign.len(),
        });
    }
    GrayImage::from_raw(side, side, sign.to_vec()).ok_or(DetectError::SizeMismatch {
        expected,
        actual: sign.len(),
    })
}

/// Resample a sign bitmap to `width × width` and flatten it row-major.
pub fn prepare_sign(sign: &[u8], side: u32, width: u32) -> Result<Vec<f64>, DetectError> {
    let img = sign_to_image(sign, side)?;
    let resized = imageops::resize(&img, width, width, FilterType::Triangle);
    Ok(resized.pixels().map(|p| f64::from(p.0[0])).collect())
}

impl DetectedSign {
    pub fn to_image(&self) -> Result<GrayImage, DetectError> {
        sign_to_image(&self.sign, self.side)
    }

    /// Classifier-ready grey levels at `width × width`.
    pub fn prepare(&self, width: u32) -> Result<Vec<f64>, DetectError> {
        prepare_sign(&self.sign, self.side, width)
    }
}
