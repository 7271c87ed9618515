//! The RGBA raster buffer shared by every transform.

use thiserror::Error;

/// Number of interleaved samples per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Error types for raster construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    /// The sample buffer does not hold exactly width * height * 4 bytes.
    #[error("Raster {width}x{height} needs {expected} bytes, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// The dimensions describe a buffer larger than the address space.
    #[error("Raster dimensions {width}x{height} overflow the address space")]
    Overflow { width: u32, height: u32 },
}

/// A width x height grid of 8-bit RGBA samples, row-major and interleaved.
///
/// `pixels.len()` is always `width * height * 4`. Rasters are never shared:
/// every history snapshot and every transform output owns its own buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA sample data in row-major order (4 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Create a transparent-black raster of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * CHANNELS],
        }
    }

    /// Create a raster with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap caller-supplied RGBA bytes, validating the buffer length.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RasterError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(RasterError::Overflow { width, height })?;
        if pixels.len() != expected {
            return Err(RasterError::SizeMismatch {
                width,
                height,
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

    /// Create a raster from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbaImage` for encoding or display.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this raster has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Byte offset of the first sample of pixel (x, y).
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Read the RGBA value of pixel (x, y).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Write the RGBA value of pixel (x, y).
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.index(x, y);
        self.pixels[i..i + CHANNELS].copy_from_slice(&rgba);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent_black() {
        let r = Raster::new(3, 2);
        assert_eq!(r.pixels.len(), 24);
        assert!(r.pixels.iter().all(|&v| v == 0));
        assert_eq!(r.pixel_count(), 6);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_filled() {
        let r = Raster::filled(2, 2, [1, 2, 3, 4]);
        assert_eq!(r.pixel(1, 1), [1, 2, 3, 4]);
        assert_eq!(r.pixels, vec![1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn test_from_raw_validates_length() {
        assert!(Raster::from_raw(2, 2, vec![0; 16]).is_ok());

        let err = Raster::from_raw(2, 2, vec![0; 12]).unwrap_err();
        assert_eq!(
            err,
            RasterError::SizeMismatch {
                width: 2,
                height: 2,
                expected: 16,
                actual: 12
            }
        );
        assert_eq!(err.to_string(), "Raster 2x2 needs 16 bytes, got 12");
    }

    #[test]
    fn test_zero_sized_raster() {
        let r = Raster::from_raw(0, 5, vec![]).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.pixel_count(), 0);
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut r = Raster::new(4, 3);
        r.set_pixel(3, 2, [10, 20, 30, 40]);
        assert_eq!(r.pixel(3, 2), [10, 20, 30, 40]);
        assert_eq!(r.index(3, 2), (2 * 4 + 3) * 4);
        assert_eq!(r.pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_image_conversion() {
        let r = Raster::filled(5, 4, [9, 8, 7, 255]);
        let img = r.to_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (5, 4));
        let back = Raster::from_rgba_image(img);
        assert_eq!(back, r);
    }
}
