//! Polar and shear remaps.
//!
//! The polar warps measure radius from the pixel-grid centre
//! `((w - 1) / 2, (h - 1) / 2)` and normalize by the centre-to-corner
//! distance. Swirl, bulge, pinch and radial blur read transparent black
//! outside the source; skew clamps to the edge and skew-wrap samples the
//! source as a torus.

use super::{fill_with, sample_clamped, sample_transparent, sample_wrapped};
use crate::raster::Raster;

/// Centre and maximum radius shared by the polar warps.
struct Polar {
    cx: f64,
    cy: f64,
    max_r: f64,
}

impl Polar {
    fn of(src: &Raster) -> Self {
        let cx = (src.width as f64 - 1.0) / 2.0;
        let cy = (src.height as f64 - 1.0) / 2.0;
        let max_r = cx.hypot(cy);
        Self {
            cx,
            cy,
            max_r: if max_r > 0.0 { max_r } else { 1.0 },
        }
    }
}

const SWIRL_TWIST: f64 = 1.2;

/// Rotate each pixel's polar angle by `(1 - r / max_r) * 1.2π`: the centre
/// turns most, the corners not at all.
pub fn swirl(src: &Raster, dst: &mut Raster) {
    let p = Polar::of(src);
    fill_with(dst, |x, y| {
        let dx = x as f64 - p.cx;
        let dy = y as f64 - p.cy;
        let r = dx.hypot(dy);
        let angle = dy.atan2(dx) + (1.0 - r / p.max_r) * SWIRL_TWIST * std::f64::consts::PI;
        sample_transparent(src, p.cx + r * angle.cos(), p.cy + r * angle.sin())
    });
}

/// Scale the offset from the centre by `scale(n)` where `n = r / max_r`.
fn radial_scale(src: &Raster, dst: &mut Raster, scale: impl Fn(f64) -> f64) {
    let p = Polar::of(src);
    fill_with(dst, |x, y| {
        let dx = x as f64 - p.cx;
        let dy = y as f64 - p.cy;
        let n = dx.hypot(dy) / p.max_r;
        let g = scale(n);
        sample_transparent(src, p.cx + dx * g, p.cy + dy * g)
    });
}

/// Magnify the middle: sample at `1 / (1 + 0.6 n^2)` of the radius.
pub fn bulge(src: &Raster, dst: &mut Raster) {
    radial_scale(src, dst, |n| 1.0 / (1.0 + 0.6 * n * n));
}

/// Shrink toward the middle: sample at `1 + 0.5 n^2` of the radius.
pub fn pinch(src: &Raster, dst: &mut Raster) {
    radial_scale(src, dst, |n| 1.0 + 0.5 * n * n);
}

const SKEW_X: f64 = 0.25;
const SKEW_Y: f64 = 0.15;

/// Shear about the centre in both axes, clamping to the edge.
pub fn skew(src: &Raster, dst: &mut Raster) {
    let cx = (src.width as f64 - 1.0) / 2.0;
    let cy = (src.height as f64 - 1.0) / 2.0;
    fill_with(dst, |x, y| {
        let sx = x as f64 + SKEW_X * (y as f64 - cy);
        let sy = y as f64 + SKEW_Y * (x as f64 - cx);
        sample_clamped(src, sx.floor() as i64, sy.floor() as i64)
    });
}

const WRAP_KX: f64 = 0.35;
const WRAP_KY: f64 = 0.2;

/// Parallelogram shear through the inverse of `[[1, kx], [ky, 1]]`, sampling
/// the source as a torus so nothing is cropped.
pub fn skew_wrap(src: &Raster, dst: &mut Raster) {
    let inv = 1.0 / (1.0 - WRAP_KX * WRAP_KY);
    fill_with(dst, |x, y| {
        let (x, y) = (x as f64, y as f64);
        sample_wrapped(src, inv * (x - WRAP_KX * y), inv * (y - WRAP_KY * x))
    });
}

const RADIAL_BLUR_TAPS: i32 = 9;
const RADIAL_BLUR_STEP: f64 = 1.5;
const RADIAL_BLUR_STRENGTH: f64 = 0.4;

/// Average 19 samples stepped along the ray from the centre; the step grows
/// with normalized radius, so the centre stays sharp.
pub fn radial_blur(src: &Raster, dst: &mut Raster) {
    let p = Polar::of(src);
    let count = (2 * RADIAL_BLUR_TAPS + 1) as f64;
    fill_with(dst, |x, y| {
        let (fx, fy) = (x as f64, y as f64);
        let dx = fx - p.cx;
        let dy = fy - p.cy;
        let r = dx.hypot(dy);
        let (nx, ny) = if r > 0.0 { (dx / r, dy / r) } else { (0.0, 0.0) };
        let strength = RADIAL_BLUR_STRENGTH * (r / p.max_r);

        let mut sum = [0u32; 4];
        for i in -RADIAL_BLUR_TAPS..=RADIAL_BLUR_TAPS {
            let t = i as f64 * RADIAL_BLUR_STEP * strength;
            let s = sample_transparent(src, fx + nx * t, fy + ny * t);
            for c in 0..4 {
                sum[c] += s[c] as u32;
            }
        }
        sum.map(|v| (v as f64 / count).round() as u8)
    });
}
