//! Neighbourhood filters: box blur, 3x3 kernels and Sobel edge effects.
//!
//! All neighbourhood reads clamp to the raster edge.

use super::{clamp_u8, fill_with, sample_clamped, store_u8};
use crate::luminance::channel_mean;
use crate::raster::Raster;

/// Box blur: average of the `(2r + 1)^2` window around each pixel, all four
/// channels.
pub fn box_blur(src: &Raster, dst: &mut Raster, radius: i64) {
    let count = ((2 * radius + 1) * (2 * radius + 1)) as f64;
    fill_with(dst, |x, y| {
        let mut sum = [0u32; 4];
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let p = sample_clamped(src, x as i64 + dx, y as i64 + dy);
                for c in 0..4 {
                    sum[c] += p[c] as u32;
                }
            }
        }
        sum.map(|s| store_u8(s as f64 / count))
    });
}

pub fn blur_light(src: &Raster, dst: &mut Raster) {
    box_blur(src, dst, 2);
}

pub fn blur_medium(src: &Raster, dst: &mut Raster) {
    box_blur(src, dst, 4);
}

pub fn blur_heavy(src: &Raster, dst: &mut Raster) {
    box_blur(src, dst, 8);
}

/// Sharpen kernel `[[0,-1,0],[-1,5,-1],[0,-1,0]]` per colour channel.
pub fn sharpen(src: &Raster, dst: &mut Raster) {
    fill_with(dst, |x, y| {
        let (x, y) = (x as i64, y as i64);
        let center = sample_clamped(src, x, y);
        let n = sample_clamped(src, x, y - 1);
        let w = sample_clamped(src, x - 1, y);
        let e = sample_clamped(src, x + 1, y);
        let s = sample_clamped(src, x, y + 1);
        let k = |c: usize| {
            clamp_u8(
                5.0 * center[c] as f64 - n[c] as f64 - w[c] as f64 - e[c] as f64 - s[c] as f64,
            )
        };
        [k(0), k(1), k(2), center[3]]
    });
}

const EMBOSS_KERNEL: [[f64; 3]; 3] = [[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]];

#[inline]
fn gray_at(src: &Raster, x: i64, y: i64) -> f64 {
    let [r, g, b, _] = sample_clamped(src, x, y);
    channel_mean(r, g, b)
}

/// Emboss kernel on the channel mean, biased to mid-gray: `clamp(128 + sum)`.
pub fn emboss(src: &Raster, dst: &mut Raster) {
    fill_with(dst, |x, y| {
        let mut v = 0.0;
        for (ky, row) in EMBOSS_KERNEL.iter().enumerate() {
            for (kx, weight) in row.iter().enumerate() {
                v += gray_at(src, x as i64 + kx as i64 - 1, y as i64 + ky as i64 - 1) * weight;
            }
        }
        let out = clamp_u8(128.0 + v);
        [out, out, out, src.pixel(x, y)[3]]
    });
}

/// Sobel gradient magnitude on the channel mean, scaled and capped at 255.
pub fn sobel_magnitude(src: &Raster, x: u32, y: u32, scale: f64) -> f64 {
    let (x, y) = (x as i64, y as i64);
    let g = |dx: i64, dy: i64| gray_at(src, x + dx, y + dy);
    let gx = -g(-1, -1) - 2.0 * g(-1, 0) - g(-1, 1) + g(1, -1) + 2.0 * g(1, 0) + g(1, 1);
    let gy = -g(-1, -1) - 2.0 * g(0, -1) - g(1, -1) + g(-1, 1) + 2.0 * g(0, 1) + g(1, 1);
    ((gx * gx + gy * gy).sqrt() * scale).min(255.0)
}

/// Dark edges on a white background: `255 - m` on every colour channel.
pub fn edge_outline(src: &Raster, dst: &mut Raster) {
    fill_with(dst, |x, y| {
        let v = store_u8(255.0 - sobel_magnitude(src, x, y, 0.6));
        [v, v, v, src.pixel(x, y)[3]]
    });
}

/// Blend from white (flat areas) to the original colour (strong edges).
pub fn find_edges(src: &Raster, dst: &mut Raster) {
    fill_with(dst, |x, y| {
        let t = sobel_magnitude(src, x, y, 0.5) / 255.0;
        let [r, g, b, a] = src.pixel(x, y);
        let f = |v: u8| clamp_u8((1.0 - t) * 255.0 + t * v as f64);
        [f(r), f(g), f(b), a]
    });
}

/// Original colour scaled by edge strength, so flat areas go black.
pub fn glowing_edges(src: &Raster, dst: &mut Raster) {
    fill_with(dst, |x, y| {
        let t = sobel_magnitude(src, x, y, 0.7) / 255.0;
        let [r, g, b, a] = src.pixel(x, y);
        let f = |v: u8| clamp_u8(t * v as f64);
        [f(r), f(g), f(b), a]
    });
}
