//! Decoded RGBA source images held fully in memory

use crate::io::error::{Result, StitchError, invalid_parameter};
use image::DynamicImage;
use ndarray::Array3;
use rgb::RGBA8;
use std::path::Path;

/// Row-major RGBA pixel buffer, origin at the top-left
///
/// Stored as a `(height, width, 4)` array of 8-bit channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes (`width * height * 4` of them)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero
    /// - The byte count does not match the dimensions
    pub fn from_rgba(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{width}x{height}"),
                &"image dimensions must be positive",
            ));
        }

        let expected = width * height * 4;
        if bytes.len() != expected {
            return Err(invalid_parameter(
                "bytes",
                &bytes.len(),
                &format!("expected {expected} bytes for a {width}x{height} RGBA image"),
            ));
        }

        let data = Array3::from_shape_vec((height, width, 4), bytes).map_err(|e| {
            invalid_parameter("bytes", &format!("{width}x{height}"), &e)
        })?;
        Ok(Self { data })
    }

    /// Convert a decoded image of any color type to RGBA
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero dimension
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width as usize, height as usize, rgba.into_raw())
    }

    /// Decode an encoded image (PNG, JPEG, ...) from memory
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be decoded or the image is empty
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?;
        Self::from_image(&image)
    }

    /// Load and decode an image file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file at the given path cannot be opened or read
    /// - The file is not a valid image format
    /// - The image has a zero dimension
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let image = image::open(&path_buf).map_err(|e| StitchError::ImageLoad {
            path: path_buf,
            source: e,
        })?;
        Self::from_image(&image)
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Pixel at column `x`, row `y`; transparent black outside the image
    pub fn rgba(&self, x: usize, y: usize) -> RGBA8 {
        let channel = |c: usize| self.data.get((y, x, c)).copied().unwrap_or(0);
        RGBA8::new(channel(0), channel(1), channel(2), channel(3))
    }

    /// Pixel at a flat row-major index
    pub fn rgba_at(&self, index: usize) -> RGBA8 {
        let width = self.width();
        self.rgba(index % width, index / width)
    }
}
