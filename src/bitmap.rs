//! Decoded pixel buffers and integer pixel coordinates.

use image::RgbaImage;

use crate::error::DetectError;

pub type Rgb = [u8; 3];
pub type Rgba = [u8; 4];

/// An integer pixel coordinate (y = 0 is the top row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
}

impl Pixel {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Row-major RGBA pixels with their dimensions.
///
/// The length invariant `pixels.len() == width * height` is checked once
/// at construction; the detectors rely on it.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, DetectError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(DetectError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A buffer filled with one colour.
    pub fn filled(width: u32, height: u32, rgba: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgba; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Overwrite one pixel. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, rgba: Rgba) {
        if x < self.width && y < self.height {
            let i = y as usize * self.width as usize + x as usize;
            self.pixels[i] = rgba;
        }
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(self.pixels[y as usize * self.width as usize + x as usize])
        })
    }
}

impl From<&RgbaImage> for PixelBuffer {
    fn from(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.pixels().map(|p| p.0).collect(),
        }
    }
}
