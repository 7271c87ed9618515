//! Exact rotations, arbitrary-angle rotation and tiling layouts.
//!
//! # Algorithm
//!
//! Every effect here uses inverse mapping: for each destination pixel we
//! compute the source coordinate it comes from and take the nearest source
//! pixel. For an arbitrary rotation by angle θ about the centre `(cx, cy)`:
//! ```text
//! src_x =  (dst_x - cx) * cos(θ) + (dst_y - cy) * sin(θ) + cx
//! src_y = -(dst_x - cx) * sin(θ) + (dst_y - cy) * cos(θ) + cy
//! ```
//! Positive angles turn the picture clockwise on screen (y points down).
//! Samples falling outside the source are transparent black.
//!
//! The quarter-turn rotations are exact permutations and swap the output
//! width and height; register them with
//! [`swapped_dimensions`](super::swapped_dimensions).

use super::{fill_with, sample_clamped, sample_transparent};
use crate::raster::Raster;

/// Point reflection through the centre.
pub fn rotate_180(src: &Raster, dst: &mut Raster) {
    let (w, h) = src.dimensions();
    fill_with(dst, |x, y| src.pixel(w - 1 - x, h - 1 - y));
}

/// Quarter turn clockwise. `dst` must be `height x width`.
pub fn rotate_90_cw(src: &Raster, dst: &mut Raster) {
    let h = src.height;
    // dst(h - 1 - sy, sx) = src(sx, sy)
    fill_with(dst, |x, y| src.pixel(y, h - 1 - x));
}

/// Quarter turn counter-clockwise. `dst` must be `height x width`.
pub fn rotate_90_ccw(src: &Raster, dst: &mut Raster) {
    let w = src.width;
    // dst(sy, w - 1 - sx) = src(sx, sy)
    fill_with(dst, |x, y| src.pixel(w - 1 - y, x));
}

/// Rotate about the centre by `angle_degrees`, keeping the canvas size.
pub fn rotate_by(src: &Raster, dst: &mut Raster, angle_degrees: f64) {
    let angle = angle_degrees.to_radians();
    let (cos, sin) = (angle.cos(), angle.sin());
    let cx = src.width as f64 / 2.0;
    let cy = src.height as f64 / 2.0;

    fill_with(dst, |x, y| {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        let sx = dx * cos + dy * sin + cx;
        let sy = -dx * sin + dy * cos + cy;
        sample_transparent(src, sx, sy)
    });
}

pub fn rotate_5(src: &Raster, dst: &mut Raster) {
    rotate_by(src, dst, 5.0);
}

pub fn rotate_15(src: &Raster, dst: &mut Raster) {
    rotate_by(src, dst, 15.0);
}

pub fn rotate_neg_5(src: &Raster, dst: &mut Raster) {
    rotate_by(src, dst, -5.0);
}

pub fn rotate_neg_15(src: &Raster, dst: &mut Raster) {
    rotate_by(src, dst, -15.0);
}

/// Four-way mirror: the top-left quadrant is reflected into the other three.
pub fn kaleidoscope(src: &Raster, dst: &mut Raster) {
    let (w, h) = src.dimensions();
    let (hw, hh) = (w / 2, h / 2);
    fill_with(dst, |x, y| {
        let sx = if x < hw { x } else { w - 1 - x };
        let sy = if y < hh { y } else { h - 1 - y };
        sample_clamped(src, sx as i64, sy as i64)
    });
}

/// Half-scale copy of the whole picture tiled into each quadrant.
pub fn split_four(src: &Raster, dst: &mut Raster) {
    let (hw, hh) = (src.width / 2, src.height / 2);
    if hw == 0 || hh == 0 {
        dst.pixels.copy_from_slice(&src.pixels);
        return;
    }
    fill_with(dst, |x, y| src.pixel((x % hw) * 2, (y % hh) * 2));
}

/// Crop the central third-by-third tile and repeat it on a 3x3 grid.
///
/// Columns and rows past the last full tile keep repeating the pattern.
pub fn split_nine(src: &Raster, dst: &mut Raster) {
    let (tw, th) = (src.width / 3, src.height / 3);
    if tw == 0 || th == 0 {
        dst.pixels.copy_from_slice(&src.pixels);
        return;
    }
    fill_with(dst, |x, y| src.pixel(tw + x % tw, th + y % th));
}
