//! Pointwise colour remaps.
//!
//! Each output pixel depends only on the source pixel at the same position
//! (vignette and lomo also use the position itself). Alpha is copied through
//! unchanged by every effect in this module.

use super::{clamp_u8, fill_with, map_pixels};
use crate::luminance::{luminance, luminance_u8};
use crate::raster::Raster;

// ============================================================================
// Grayscale, invert, solarize, sepia
// ============================================================================

/// Replace R, G and B with the rounded BT.601 luminance.
pub fn grayscale(src: &Raster, dst: &mut Raster) {
    map_pixels(src, dst, |[r, g, b, a]| {
        let gray = luminance_u8(r, g, b);
        [gray, gray, gray, a]
    });
}

/// `255 - v` on every colour channel.
pub fn invert(src: &Raster, dst: &mut Raster) {
    map_pixels(src, dst, |[r, g, b, a]| [255 - r, 255 - g, 255 - b, a]);
}

const SOLARIZE_THRESHOLD: u8 = 128;

/// Invert only the samples above the threshold.
pub fn solarize(src: &Raster, dst: &mut Raster) {
    let s = |v: u8| if v > SOLARIZE_THRESHOLD { 255 - v } else { v };
    map_pixels(src, dst, |[r, g, b, a]| [s(r), s(g), s(b), a]);
}

/// Classic sepia colour matrix.
pub fn sepia(src: &Raster, dst: &mut Raster) {
    map_pixels(src, dst, |[r, g, b, a]| {
        let (r, g, b) = (r as f64, g as f64, b as f64);
        [
            clamp_u8(0.393 * r + 0.769 * g + 0.189 * b),
            clamp_u8(0.349 * r + 0.686 * g + 0.168 * b),
            clamp_u8(0.272 * r + 0.534 * g + 0.131 * b),
            a,
        ]
    });
}

// ============================================================================
// Posterize
// ============================================================================

/// Quantize each colour channel to `levels` evenly spaced values.
///
/// `level = round(v / 255 * (levels - 1))`, `out = level * 255 / (levels - 1)`.
pub fn posterize(src: &Raster, dst: &mut Raster, levels: u32) {
    let steps = levels.max(2) as f64 - 1.0;
    let step = 255.0 / steps;
    let q = |v: u8| clamp_u8((v as f64 / 255.0 * steps + 0.5).floor() * step);
    map_pixels(src, dst, |[r, g, b, a]| [q(r), q(g), q(b), a]);
}

pub fn posterize_4(src: &Raster, dst: &mut Raster) {
    posterize(src, dst, 4);
}

pub fn posterize_8(src: &Raster, dst: &mut Raster) {
    posterize(src, dst, 8);
}

// ============================================================================
// Channel isolate / swap
// ============================================================================

fn keep_channels(src: &Raster, dst: &mut Raster, keep: [bool; 3]) {
    map_pixels(src, dst, |[r, g, b, a]| {
        [
            if keep[0] { r } else { 0 },
            if keep[1] { g } else { 0 },
            if keep[2] { b } else { 0 },
            a,
        ]
    });
}

/// Rebuild RGB from the given source channel indices.
fn reorder_channels(src: &Raster, dst: &mut Raster, from: [usize; 3]) {
    map_pixels(src, dst, |p| [p[from[0]], p[from[1]], p[from[2]], p[3]]);
}

pub fn red_only(src: &Raster, dst: &mut Raster) {
    keep_channels(src, dst, [true, false, false]);
}

pub fn green_only(src: &Raster, dst: &mut Raster) {
    keep_channels(src, dst, [false, true, false]);
}

pub fn blue_only(src: &Raster, dst: &mut Raster) {
    keep_channels(src, dst, [false, false, true]);
}

pub fn swap_rg(src: &Raster, dst: &mut Raster) {
    reorder_channels(src, dst, [1, 0, 2]);
}

pub fn swap_gb(src: &Raster, dst: &mut Raster) {
    reorder_channels(src, dst, [0, 2, 1]);
}

pub fn swap_rb(src: &Raster, dst: &mut Raster) {
    reorder_channels(src, dst, [2, 1, 0]);
}

// ============================================================================
// Linear contrast / brightness, saturation, deep fry
// ============================================================================

/// `(v - 128) * factor + 128 + delta` on each colour channel.
pub fn linear(src: &Raster, dst: &mut Raster, factor: f64, delta: f64) {
    let f = |v: u8| clamp_u8((v as f64 - 128.0) * factor + 128.0 + delta);
    map_pixels(src, dst, |[r, g, b, a]| [f(r), f(g), f(b), a]);
}

pub fn contrast_up(src: &Raster, dst: &mut Raster) {
    linear(src, dst, 1.5, 0.0);
}

pub fn contrast_down(src: &Raster, dst: &mut Raster) {
    linear(src, dst, 0.65, 0.0);
}

pub fn brightness_up(src: &Raster, dst: &mut Raster) {
    linear(src, dst, 1.0, 25.0);
}

pub fn brightness_down(src: &Raster, dst: &mut Raster) {
    linear(src, dst, 1.0, -25.0);
}

/// Push each channel away from (or toward) the pixel's luminance.
#[inline]
fn saturate(r: u8, g: u8, b: u8, mult: f64) -> [u8; 3] {
    let gray = luminance(r, g, b);
    let f = |v: u8| clamp_u8((v as f64 - gray) * mult + gray);
    [f(r), f(g), f(b)]
}

/// Scale saturation by `mult`; values above 1 oversaturate.
pub fn saturation(src: &Raster, dst: &mut Raster, mult: f64) {
    map_pixels(src, dst, |[r, g, b, a]| {
        let [r, g, b] = saturate(r, g, b, mult);
        [r, g, b, a]
    });
}

pub fn saturation_up(src: &Raster, dst: &mut Raster) {
    saturation(src, dst, 1.8);
}

pub fn saturation_down(src: &Raster, dst: &mut Raster) {
    saturation(src, dst, 0.4);
}

/// Saturation x1.8, then contrast x1.4 with a -30 shift. Each stage clamps.
pub fn deep_fry(src: &Raster, dst: &mut Raster) {
    const SATURATION: f64 = 1.8;
    const CONTRAST: f64 = 1.4;
    const SHIFT: f64 = -30.0;

    let c = |v: u8| clamp_u8((v as f64 - 128.0) * CONTRAST + 128.0 + SHIFT);
    map_pixels(src, dst, |[r, g, b, a]| {
        let [r, g, b] = saturate(r, g, b, SATURATION);
        [c(r), c(g), c(b), a]
    });
}

// ============================================================================
// Tints, fade, high/low key
// ============================================================================

fn channel_gain(src: &Raster, dst: &mut Raster, gain: [f64; 3]) {
    map_pixels(src, dst, |[r, g, b, a]| {
        [
            clamp_u8(r as f64 * gain[0]),
            clamp_u8(g as f64 * gain[1]),
            clamp_u8(b as f64 * gain[2]),
            a,
        ]
    });
}

/// Amber cast.
pub fn warm_tint(src: &Raster, dst: &mut Raster) {
    channel_gain(src, dst, [1.05, 0.98, 0.82]);
}

/// Blue/cyan cast.
pub fn cool_tint(src: &Raster, dst: &mut Raster) {
    channel_gain(src, dst, [0.9, 0.97, 1.12]);
}

/// Faded film: contrast x0.88 with blacks lifted by 18.
pub fn fade(src: &Raster, dst: &mut Raster) {
    linear(src, dst, 0.88, 18.0);
}

/// `255 * (v / 255)^gamma + lift` on each colour channel.
pub fn gamma_lift(src: &Raster, dst: &mut Raster, gamma: f64, lift: f64) {
    let f = |v: u8| clamp_u8((v as f64 / 255.0).powf(gamma) * 255.0 + lift);
    map_pixels(src, dst, |[r, g, b, a]| [f(r), f(g), f(b), a]);
}

pub fn high_key(src: &Raster, dst: &mut Raster) {
    gamma_lift(src, dst, 0.92, 35.0);
}

pub fn low_key(src: &Raster, dst: &mut Raster) {
    gamma_lift(src, dst, 1.12, -28.0);
}

// ============================================================================
// Gradient maps: duotone, colorise
// ============================================================================

/// A colour stop on a luminance gradient; `t` is in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub t: f64,
    pub rgb: [f64; 3],
}

const fn stop(t: f64, r: f64, g: f64, b: f64) -> ColorStop {
    ColorStop { t, rgb: [r, g, b] }
}

const DUOTONE_STOPS: [ColorStop; 2] = [stop(0.0, 32.0, 32.0, 80.0), stop(1.0, 240.0, 232.0, 200.0)];

const COLORISE_STOPS: [ColorStop; 5] = [
    stop(0.0, 28.0, 35.0, 52.0),
    stop(0.35, 70.0, 95.0, 110.0),
    stop(0.6, 140.0, 120.0, 95.0),
    stop(0.85, 220.0, 210.0, 190.0),
    stop(1.0, 248.0, 245.0, 238.0),
];

const COLORISE_WARM_STOPS: [ColorStop; 3] = [
    stop(0.0, 40.0, 32.0, 28.0),
    stop(0.5, 120.0, 90.0, 70.0),
    stop(1.0, 245.0, 235.0, 220.0),
];

/// Sample a gradient at `t`, interpolating linearly between the two stops
/// that bracket it. Stops must be sorted by `t`; at or past the last stop
/// its colour is returned as-is.
pub fn gradient_at(stops: &[ColorStop], t: f64) -> [f64; 3] {
    let Some(last) = stops.last() else {
        return [0.0; 3];
    };
    let mut i = 0;
    while i < stops.len() - 1 && stops[i + 1].t <= t {
        i += 1;
    }
    if i >= stops.len() - 1 {
        return last.rgb;
    }
    let (a, b) = (&stops[i], &stops[i + 1]);
    let u = (t - a.t) / (b.t - a.t);
    [
        a.rgb[0] + (b.rgb[0] - a.rgb[0]) * u,
        a.rgb[1] + (b.rgb[1] - a.rgb[1]) * u,
        a.rgb[2] + (b.rgb[2] - a.rgb[2]) * u,
    ]
}

/// Map each pixel's luminance through a colour gradient.
pub fn gradient_map(src: &Raster, dst: &mut Raster, stops: &[ColorStop]) {
    map_pixels(src, dst, |[r, g, b, a]| {
        let c = gradient_at(stops, luminance(r, g, b) / 255.0);
        [clamp_u8(c[0]), clamp_u8(c[1]), clamp_u8(c[2]), a]
    });
}

/// Navy shadows to cream highlights.
pub fn duotone(src: &Raster, dst: &mut Raster) {
    gradient_map(src, dst, &DUOTONE_STOPS);
}

/// Hand-tinted look: slate shadows, bronze mids, ivory highlights.
pub fn colorise(src: &Raster, dst: &mut Raster) {
    gradient_map(src, dst, &COLORISE_STOPS);
}

pub fn colorise_warm(src: &Raster, dst: &mut Raster) {
    gradient_map(src, dst, &COLORISE_WARM_STOPS);
}

// ============================================================================
// Vignette, lomo
// ============================================================================

/// Normalized elliptical distance of (x, y) from the raster centre.
#[inline]
fn center_distance(x: u32, y: u32, width: u32, height: u32) -> f64 {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    let dx = (x as f64 - cx) / cx;
    let dy = (y as f64 - cy) / cy;
    (dx * dx + dy * dy).sqrt()
}

/// Darken toward the corners: `max(0, 1 - 0.7 d)`.
pub fn vignette(src: &Raster, dst: &mut Raster) {
    let (w, h) = src.dimensions();
    fill_with(dst, |x, y| {
        let f = (1.0 - center_distance(x, y, w, h) * 0.7).max(0.0);
        let [r, g, b, a] = src.pixel(x, y);
        [
            clamp_u8(r as f64 * f),
            clamp_u8(g as f64 * f),
            clamp_u8(b as f64 * f),
            a,
        ]
    });
}

/// Lomo: contrast x1.15 and a hard vignette floored at 0.3.
pub fn lomo(src: &Raster, dst: &mut Raster) {
    let (w, h) = src.dimensions();
    fill_with(dst, |x, y| {
        let f = (1.0 - center_distance(x, y, w, h) * 0.95).max(0.3);
        let [r, g, b, a] = src.pixel(x, y);
        let c = |v: u8| clamp_u8(((v as f64 - 128.0) * 1.15 + 128.0) * f);
        [c(r), c(g), c(b), a]
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::test_support::{gradient, run};

    fn one(rgba: [u8; 4], f: fn(&Raster, &mut Raster)) -> [u8; 4] {
        run(f, &Raster::filled(1, 1, rgba)).pixel(0, 0)
    }

    #[test]
    fn test_grayscale_weights() {
        assert_eq!(one([255, 0, 0, 7], grayscale), [76, 76, 76, 7]);
        assert_eq!(one([10, 200, 30, 255], grayscale), [124, 124, 124, 255]);
    }

    #[test]
    fn test_invert_preserves_alpha() {
        assert_eq!(one([0, 100, 255, 42], invert), [255, 155, 0, 42]);
    }

    #[test]
    fn test_solarize_threshold() {
        assert_eq!(one([128, 129, 255, 255], solarize), [128, 126, 0, 255]);
    }

    #[test]
    fn test_sepia_white_saturates() {
        assert_eq!(one([255, 255, 255, 255], sepia), [255, 255, 239, 255]);
    }

    #[test]
    fn test_posterize_4_mid_gray() {
        // level = round(128 / 255 * 3) = 2, value = 2 * 85 = 170
        assert_eq!(one([128, 128, 128, 255], posterize_4), [170, 170, 170, 255]);
        assert_eq!(one([0, 42, 43, 9], posterize_4), [0, 0, 85, 9]);
    }

    #[test]
    fn test_posterize_8_levels() {
        let out = run(posterize_8, &gradient(16, 16));
        let allowed: Vec<u8> = (0..8).map(|l| clamp_u8(l as f64 * 255.0 / 7.0)).collect();
        for px in out.pixels.chunks_exact(4) {
            for &v in &px[..3] {
                assert!(allowed.contains(&v), "{} is not a posterize level", v);
            }
        }
    }

    #[test]
    fn test_channel_isolate_and_swap() {
        let p = [10, 20, 30, 40];
        assert_eq!(one(p, red_only), [10, 0, 0, 40]);
        assert_eq!(one(p, green_only), [0, 20, 0, 40]);
        assert_eq!(one(p, blue_only), [0, 0, 30, 40]);
        assert_eq!(one(p, swap_rg), [20, 10, 30, 40]);
        assert_eq!(one(p, swap_gb), [10, 30, 20, 40]);
        assert_eq!(one(p, swap_rb), [30, 20, 10, 40]);
    }

    #[test]
    fn test_contrast_and_brightness() {
        assert_eq!(one([128, 200, 50, 255], contrast_up), [128, 236, 11, 255]);
        assert_eq!(one([128, 200, 50, 255], contrast_down), [128, 175, 77, 255]);
        assert_eq!(one([240, 10, 100, 255], brightness_up), [255, 35, 125, 255]);
        assert_eq!(one([240, 10, 100, 255], brightness_down), [215, 0, 75, 255]);
    }

    #[test]
    fn test_saturation_leaves_gray_alone() {
        for f in [saturation_up, saturation_down] {
            assert_eq!(one([90, 90, 90, 255], f), [90, 90, 90, 255]);
        }
    }

    #[test]
    fn test_saturation_up_spreads_channels() {
        let [r, g, b, _] = one([200, 100, 50, 255], saturation_up);
        assert!(r > 200 && b < 50 && g < 100);
    }

    #[test]
    fn test_deep_fry_composes_stages() {
        // Gray input skips the saturation stage: (100 - 128) * 1.4 + 98 = 58.8
        assert_eq!(one([100, 100, 100, 3], deep_fry), [59, 59, 59, 3]);
    }

    #[test]
    fn test_tints() {
        assert_eq!(one([100, 100, 100, 255], warm_tint), [105, 98, 82, 255]);
        assert_eq!(one([100, 100, 100, 255], cool_tint), [90, 97, 112, 255]);
    }

    #[test]
    fn test_fade_lifts_blacks() {
        // (0 - 128) * 0.88 + 146 = 33.36
        assert_eq!(one([0, 0, 0, 255], fade), [33, 33, 33, 255]);
    }

    #[test]
    fn test_high_and_low_key() {
        assert_eq!(one([0, 0, 0, 255], high_key), [35, 35, 35, 255]);
        assert_eq!(one([255, 255, 255, 255], low_key), [227, 227, 227, 255]);
    }

    #[test]
    fn test_gradient_at_brackets() {
        let mid = gradient_at(&COLORISE_WARM_STOPS, 0.25);
        assert!((mid[0] - 80.0).abs() < 1e-9);
        assert_eq!(gradient_at(&COLORISE_WARM_STOPS, 1.0), [245.0, 235.0, 220.0]);
        assert_eq!(gradient_at(&COLORISE_WARM_STOPS, 0.0), [40.0, 32.0, 28.0]);
        assert_eq!(gradient_at(&[], 0.5), [0.0; 3]);
    }

    #[test]
    fn test_duotone_endpoints() {
        assert_eq!(one([0, 0, 0, 255], duotone), [32, 32, 80, 255]);
        assert_eq!(one([255, 255, 255, 255], duotone), [240, 232, 200, 255]);
    }

    #[test]
    fn test_colorise_endpoints() {
        assert_eq!(one([0, 0, 0, 1], colorise), [28, 35, 52, 1]);
        assert_eq!(one([255, 255, 255, 1], colorise), [248, 245, 238, 1]);
    }

    #[test]
    fn test_vignette_darkens_corners() {
        let src = Raster::filled(21, 21, [200, 200, 200, 255]);
        let out = run(vignette, &src);
        let center = out.pixel(10, 10)[0];
        let corner = out.pixel(0, 0)[0];
        assert!(center > 190);
        assert_eq!(corner, 2);
        assert_eq!(out.pixel(0, 0)[3], 255);
    }

    #[test]
    fn test_lomo_floor() {
        let src = Raster::filled(20, 20, [255, 255, 255, 255]);
        let out = run(lomo, &src);
        // Corner: distance sqrt(2), factor floored at 0.3; (255-128)*1.15+128 = 274.05
        assert_eq!(out.pixel(0, 0)[0], clamp_u8(274.05 * 0.3));
    }
}
