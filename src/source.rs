//! Where pixels and palettes come from.

use std::path::{Path, PathBuf};

use image::ImageReader;

use crate::bitmap::{PixelBuffer, Rgb};
use crate::error::DetectError;
use crate::palette::extract_palette;

/// A decoded image plus its representative colours.
pub trait PixelSource {
    fn pixels(&self) -> Result<PixelBuffer, DetectError>;
    fn palette(&self) -> Result<Vec<Rgb>, DetectError>;
}

/// An image file decoded with the `image` crate.
#[derive(Debug, Clone)]
pub struct ImageFile {
    path: PathBuf,
    palette_size: usize,
}

impl ImageFile {
    pub fn new(path: impl Into<PathBuf>, palette_size: usize) -> Self {
        Self {
            path: path.into(),
            palette_size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PixelSource for ImageFile {
    fn pixels(&self) -> Result<PixelBuffer, DetectError> {
        let img = ImageReader::open(&self.path)
            .map_err(|e| DetectError::ImageLoad(e.to_string()))?
            .decode()
            .map_err(|e| DetectError::ImageLoad(e.to_string()))?
            .into_rgba8();
        Ok(PixelBuffer::from(&img))
    }

    fn palette(&self) -> Result<Vec<Rgb>, DetectError> {
        Ok(extract_palette(&self.pixels()?, self.palette_size))
    }
}

/// Pixels already in memory, with an explicit palette.
#[derive(Debug, Clone)]
pub struct InMemory {
    pub buffer: PixelBuffer,
    pub palette: Vec<Rgb>,
}

impl InMemory {
    pub fn new(buffer: PixelBuffer, palette: Vec<Rgb>) -> Self {
        Self { buffer, palette }
    }

    /// Use the buffer's own extracted palette.
    pub fn with_extracted_palette(buffer: PixelBuffer, palette_size: usize) -> Self {
        let palette = extract_palette(&buffer, palette_size);
        Self { buffer, palette }
    }
}

impl PixelSource for InMemory {
    fn pixels(&self) -> Result<PixelBuffer, DetectError> {
        Ok(self.buffer.clone())
    }

    fn palette(&self) -> Result<Vec<Rgb>, DetectError> {
        Ok(self.palette.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_load_error() {
        let source = ImageFile::new("does/not/exist.png", 5);
        assert!(matches!(source.pixels(), Err(DetectError::ImageLoad(_))));
        assert!(matches!(source.palette(), Err(DetectError::ImageLoad(_))));
    }

    #[test]
    fn in_memory_extracts_its_palette() {
        let mut buffer = PixelBuffer::filled(3, 1, [0, 0, 0, 255]);
        buffer.set(2, 0, [255, 255, 255, 255]);
        let source = InMemory::with_extracted_palette(buffer.clone(), 5);
        assert_eq!(source.pixels().unwrap(), buffer);
        assert_eq!(source.palette().unwrap(), vec![[0, 0, 0], [255, 255, 255]]);
    }
}
