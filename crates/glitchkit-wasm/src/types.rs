//! WASM-compatible raster wrapper.
//!
//! `JsRaster` owns a core [`Raster`] and converts at the boundary. Pixel
//! data is always RGBA, 4 bytes per pixel, row-major, matching canvas
//! `ImageData`.

use glitchkit_core::{Raster, RasterError};
use wasm_bindgen::prelude::*;

/// An RGBA raster for JavaScript.
///
/// # Memory Management
///
/// Pixels live in WASM memory. `pixels()` and `to_clamped_array()` copy
/// them out; call `free()` to release a large raster early.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsRaster {
    inner: Raster,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a raster from RGBA bytes.
    ///
    /// # Errors
    /// Returns an error if `pixels.length != width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRaster, JsValue> {
        Self::from_parts(width, height, pixels).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Number of bytes in the pixel buffer (width * height * 4).
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels.len()
    }

    /// Copy of the RGBA bytes as a `Uint8Array`.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Copy of the RGBA bytes as a `Uint8ClampedArray`, ready for
    /// `new ImageData(data, width, height)`.
    pub fn to_clamped_array(&self) -> js_sys::Uint8ClampedArray {
        js_sys::Uint8ClampedArray::from(self.inner.pixels.as_slice())
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRaster {
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RasterError> {
        Raster::from_raw(width, height, pixels).map(Self::from_raster)
    }

    pub(crate) fn from_raster(inner: Raster) -> Self {
        Self { inner }
    }

    pub(crate) fn as_raster(&self) -> &Raster {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_valid() {
        let raster = JsRaster::from_parts(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 1);
        assert_eq!(raster.byte_length(), 8);
        assert_eq!(raster.pixels(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_from_parts_rejects_rgb_buffer() {
        let err = JsRaster::from_parts(2, 2, vec![0; 12]).unwrap_err();
        assert_eq!(
            err,
            RasterError::SizeMismatch {
                width: 2,
                height: 2,
                expected: 16,
                actual: 12,
            }
        );
    }

    #[test]
    fn test_raster_roundtrip() {
        let core = Raster::filled(3, 3, [9, 8, 7, 6]);
        let js = JsRaster::from_raster(core.clone());
        assert_eq!(js.as_raster(), &core);
    }
}
