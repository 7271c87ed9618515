//! Deterministic glitch effects.
//!
//! Nothing here uses a random number generator: every "random-looking"
//! offset or noise byte comes from [`hash`], so the same input always gives
//! the same output.

use super::{clamp_u8, fill_with, hash, sample_clamped};
use crate::raster::Raster;

/// Wrap a shifted column index into `0..width`.
#[inline]
fn wrap_column(x: u32, offset: i64, width: u32) -> u32 {
    (x as i64 - offset).rem_euclid(width as i64) as u32
}

/// Shift every row by its own offset, wrapping horizontally.
fn shift_rows(src: &Raster, dst: &mut Raster, offset_for_row: impl Fn(u32) -> i64) {
    let w = src.width;
    fill_with(dst, |x, y| src.pixel(wrap_column(x, offset_for_row(y), w), y));
}

/// Draw a value in `-max..=max` from a hash.
#[inline]
fn centered(h: u32, max: u32) -> i64 {
    (h % (2 * max + 1)) as i64 - max as i64
}

const GRAIN_AMOUNT: u32 = 14;

/// Add the same hash-derived offset in `-14..=14` to R, G and B of each pixel.
pub fn film_grain(src: &Raster, dst: &mut Raster) {
    let w = src.width;
    fill_with(dst, |x, y| {
        let noise = centered(hash(y.wrapping_mul(w).wrapping_add(x)), GRAIN_AMOUNT) as f64;
        let [r, g, b, a] = src.pixel(x, y);
        let f = |v: u8| clamp_u8(v as f64 + noise);
        [f(r), f(g), f(b), a]
    });
}

/// Horizontal bands (height / 16 rows, at least 4) each shifted by a hashed
/// offset of up to width / 20 (at least 2) pixels.
pub fn slice_shift(src: &Raster, dst: &mut Raster) {
    let band_height = (src.height / 16).max(4);
    let max_offset = (src.width / 20).max(2);
    shift_rows(src, dst, |y| centered(hash(y / band_height), max_offset));
}

const JITTER_PERIOD: u32 = 4;
const JITTER_AMOUNT: u32 = 8;

/// Every 4th row jitters sideways by up to 8 pixels.
pub fn scan_jitter(src: &Raster, dst: &mut Raster) {
    shift_rows(src, dst, |y| {
        if y % JITTER_PERIOD == 0 {
            centered(hash(y), JITTER_AMOUNT)
        } else {
            0
        }
    });
}

/// Flip every odd band of height / 12 rows (at least 2) horizontally.
pub fn mirror_slices(src: &Raster, dst: &mut Raster) {
    let band_height = (src.height / 12).max(2);
    let w = src.width;
    fill_with(dst, |x, y| {
        let flip = (y / band_height) % 2 == 1;
        src.pixel(if flip { w - 1 - x } else { x }, y)
    });
}

const NOISE_LINE_PERIOD: u32 = 8;

/// Replace every 8th row with opaque hash noise.
pub fn noise_lines(src: &Raster, dst: &mut Raster) {
    let w = src.width;
    fill_with(dst, |x, y| {
        if y % NOISE_LINE_PERIOD == 0 {
            let n = hash(y.wrapping_mul(w).wrapping_add(x));
            [n as u8, (n >> 8) as u8, (n >> 16) as u8, 255]
        } else {
            src.pixel(x, y)
        }
    });
}

const BLOCK_SIZE: u32 = 8;

/// Rearrange 8x8 blocks.
///
/// Destination block `(bx, by)` is copied from source block
/// `(by if by < cols else bx, bx if bx < rows else by)` where `cols` and
/// `rows` count whole blocks. This is a transpose on square grids and
/// deliberately asymmetric on non-square ones. Pixels outside the whole-block
/// grid become transparent black.
pub fn block_scramble(src: &Raster, dst: &mut Raster) {
    let cols = src.width / BLOCK_SIZE;
    let rows = src.height / BLOCK_SIZE;
    fill_with(dst, |x, y| {
        let (bx, by) = (x / BLOCK_SIZE, y / BLOCK_SIZE);
        if bx >= cols || by >= rows {
            return [0, 0, 0, 0];
        }
        let src_bx = if by < cols { by } else { bx };
        let src_by = if bx < rows { bx } else { by };
        src.pixel(
            src_bx * BLOCK_SIZE + x % BLOCK_SIZE,
            src_by * BLOCK_SIZE + y % BLOCK_SIZE,
        )
    });
}

const SMEAR_MAX_ROWS: u32 = 40;

/// Repeat the row at 30% height downward over the next
/// `min(40, height / 6)` rows.
pub fn data_smear(src: &Raster, dst: &mut Raster) {
    let strip_y = (src.height as f64 * 0.3) as u32;
    let smear_end = strip_y + SMEAR_MAX_ROWS.min(src.height / 6);
    fill_with(dst, |x, y| {
        if y >= strip_y && y < smear_end {
            src.pixel(x, strip_y)
        } else {
            src.pixel(x, y)
        }
    });
}

const RGB_SHIFT_OFFSET: i64 = 4;

/// Red sampled 4 px to the left, blue 4 px to the right (clamped).
pub fn rgb_shift(src: &Raster, dst: &mut Raster) {
    fill_with(dst, |x, y| {
        let (x, y) = (x as i64, y as i64);
        let [_, g, _, a] = sample_clamped(src, x, y);
        let r = sample_clamped(src, x - RGB_SHIFT_OFFSET, y)[0];
        let b = sample_clamped(src, x + RGB_SHIFT_OFFSET, y)[2];
        [r, g, b, a]
    });
}

const RGB_SHIFT_VERTICAL_OFFSET: i64 = 6;

/// Red sampled 6 rows above, blue 6 rows below (clamped).
pub fn rgb_shift_vertical(src: &Raster, dst: &mut Raster) {
    fill_with(dst, |x, y| {
        let (x, y) = (x as i64, y as i64);
        let [_, g, _, a] = sample_clamped(src, x, y);
        let r = sample_clamped(src, x, y - RGB_SHIFT_VERTICAL_OFFSET)[0];
        let b = sample_clamped(src, x, y + RGB_SHIFT_VERTICAL_OFFSET)[2];
        [r, g, b, a]
    });
}
