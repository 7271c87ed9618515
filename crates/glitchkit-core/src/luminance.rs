//! Luminance calculation using ITU-R BT.601 coefficients.
//!
//! Every luminance-driven effect (grayscale, saturation, dither, gradient
//! maps, pixel sorting) weights channels with these coefficients.

/// BT.601 coefficient for the red channel.
pub const LUMINANCE_R: f64 = 0.299;

/// BT.601 coefficient for the green channel.
pub const LUMINANCE_G: f64 = 0.587;

/// BT.601 coefficient for the blue channel.
pub const LUMINANCE_B: f64 = 0.114;

/// Calculate luminance from 0-255 channel values.
///
/// The result is unrounded and lies in 0.0..=255.0.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    LUMINANCE_R * r as f64 + LUMINANCE_G * g as f64 + LUMINANCE_B * b as f64
}

/// Calculate rounded luminance from u8 RGB values.
#[inline]
pub fn luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    luminance(r, g, b).round().clamp(0.0, 255.0) as u8
}

/// Plain channel average, used by the emboss and Sobel kernels.
#[inline]
pub fn channel_mean(r: u8, g: u8, b: u8) -> f64 {
    (r as f64 + g as f64 + b as f64) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMINANCE_R + LUMINANCE_G + LUMINANCE_B;
        assert!((sum - 1.0).abs() < 1e-9, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance_u8(255, 255, 255), 255);
        assert_eq!(luminance_u8(0, 0, 0), 0);
    }

    #[test]
    fn test_luminance_gray_preserves_value() {
        for v in 0..=255u8 {
            assert_eq!(luminance_u8(v, v, v), v, "gray {} should map to itself", v);
        }
    }

    #[test]
    fn test_luminance_primaries() {
        // 0.299 * 255 = 76.245
        assert_eq!(luminance_u8(255, 0, 0), 76);
        // 0.587 * 255 = 149.685
        assert_eq!(luminance_u8(0, 255, 0), 150);
        // 0.114 * 255 = 29.07
        assert_eq!(luminance_u8(0, 0, 255), 29);
    }

    #[test]
    fn test_channel_mean() {
        assert!((channel_mean(30, 60, 90) - 60.0).abs() < 1e-12);
    }
}
