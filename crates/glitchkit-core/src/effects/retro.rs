//! Block and retro effects: pixelation, ordered dithering, scanlines and
//! luminance pixel sorting.

use super::{fill_with, store_u8};
use crate::luminance::luminance;
use crate::raster::{Raster, CHANNELS};

/// Replace each `block x block` cell with its top-left source pixel.
pub fn pixelate(src: &Raster, dst: &mut Raster, block: u32) {
    let block = block.max(1);
    fill_with(dst, |x, y| {
        let bx = ((x / block) * block).min(src.width - 1);
        let by = ((y / block) * block).min(src.height - 1);
        src.pixel(bx, by)
    });
}

pub fn pixelate_small(src: &Raster, dst: &mut Raster) {
    pixelate(src, dst, 4);
}

pub fn pixelate_medium(src: &Raster, dst: &mut Raster) {
    pixelate(src, dst, 8);
}

pub fn pixelate_large(src: &Raster, dst: &mut Raster) {
    pixelate(src, dst, 16);
}

/// 4x4 Bayer matrix, values 0-15 in row-major order.
const BAYER_4X4: [u8; 16] = [0, 8, 2, 10, 12, 4, 14, 6, 3, 11, 1, 9, 15, 7, 13, 5];

/// Bayer threshold for pixel (x, y), scaled to 0-255.
#[inline]
pub fn bayer_threshold(x: u32, y: u32) -> f64 {
    BAYER_4X4[((y % 4) * 4 + (x % 4)) as usize] as f64 / 16.0 * 255.0
}

/// Ordered dither to pure black/white on luminance. Alpha is preserved.
pub fn dither(src: &Raster, dst: &mut Raster) {
    fill_with(dst, |x, y| {
        let [r, g, b, a] = src.pixel(x, y);
        let out = if luminance(r, g, b) > bayer_threshold(x, y) {
            255
        } else {
            0
        };
        [out, out, out, a]
    });
}

const SCANLINE_PERIOD: u32 = 2;
const SCANLINE_DARKEN: f64 = 0.6;

/// Darken every other row (starting at row 0) to 60%.
pub fn scanlines(src: &Raster, dst: &mut Raster) {
    fill_with(dst, |x, y| {
        let [r, g, b, a] = src.pixel(x, y);
        if y % SCANLINE_PERIOD == 0 {
            let d = |v: u8| store_u8(v as f64 * SCANLINE_DARKEN);
            [d(r), d(g), d(b), a]
        } else {
            [r, g, b, a]
        }
    });
}

/// Sort a run of pixels by ascending luminance; equal keys keep their order.
fn sort_by_luminance(run: &mut [[u8; 4]]) {
    run.sort_by(|p, q| luminance(p[0], p[1], p[2]).total_cmp(&luminance(q[0], q[1], q[2])));
}

/// Sort every row independently by luminance, dark to light.
pub fn pixel_sort_rows(src: &Raster, dst: &mut Raster) {
    let width = src.width as usize;
    if width == 0 {
        return;
    }
    let row_bytes = width * CHANNELS;
    let mut row: Vec<[u8; 4]> = Vec::with_capacity(width);
    for (s, d) in src
        .pixels
        .chunks_exact(row_bytes)
        .zip(dst.pixels.chunks_exact_mut(row_bytes))
    {
        row.clear();
        row.extend(s.chunks_exact(CHANNELS).map(|p| [p[0], p[1], p[2], p[3]]));
        sort_by_luminance(&mut row);
        for (out, p) in d.chunks_exact_mut(CHANNELS).zip(&row) {
            out.copy_from_slice(p);
        }
    }
}

/// Sort every column independently by luminance, dark at the top.
pub fn pixel_sort_columns(src: &Raster, dst: &mut Raster) {
    let (w, h) = src.dimensions();
    let mut column: Vec<[u8; 4]> = Vec::with_capacity(h as usize);
    for x in 0..w {
        column.clear();
        column.extend((0..h).map(|y| src.pixel(x, y)));
        sort_by_luminance(&mut column);
        for (y, p) in column.iter().enumerate() {
            dst.set_pixel(x, y as u32, *p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::test_support::{gradient, run};
    use crate::luminance::luminance_u8;

    #[test]
    fn test_pixelate_blocks() {
        let src = gradient(10, 9);
        let out = run(pixelate_small, &src);
        assert_eq!(out.pixel(3, 3), src.pixel(0, 0));
        assert_eq!(out.pixel(7, 5), src.pixel(4, 4));
        assert_eq!(out.pixel(9, 8), src.pixel(8, 8));
    }

    #[test]
    fn test_bayer_thresholds() {
        assert_eq!(bayer_threshold(0, 0), 0.0);
        assert_eq!(bayer_threshold(0, 3), 15.0 / 16.0 * 255.0);
        assert_eq!(bayer_threshold(5, 4), bayer_threshold(1, 0));
    }

    #[test]
    fn test_dither_black_and_white_inputs() {
        let black = run(dither, &Raster::filled(4, 4, [0, 0, 0, 255]));
        assert!(black.pixels.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
        let white = run(dither, &Raster::filled(4, 4, [255, 255, 255, 255]));
        assert!(white.pixels.chunks_exact(4).all(|p| p == [255, 255, 255, 255]));
    }

    #[test]
    fn test_dither_mid_gray_is_half_on() {
        let out = run(dither, &Raster::filled(4, 4, [128, 128, 128, 255]));
        let on = out.pixels.chunks_exact(4).filter(|p| p[0] == 255).count();
        assert_eq!(on, 9);
    }

    #[test]
    fn test_scanlines_even_rows() {
        let src = Raster::filled(2, 3, [100, 200, 255, 40]);
        let out = run(scanlines, &src);
        assert_eq!(out.pixel(0, 0), [60, 120, 153, 40]);
        assert_eq!(out.pixel(1, 1), [100, 200, 255, 40]);
        assert_eq!(out.pixel(0, 2), [60, 120, 153, 40]);
    }

    #[test]
    fn test_pixel_sort_rows_orders_luminance() {
        let src = gradient(13, 4);
        let out = run(pixel_sort_rows, &src);
        for y in 0..4 {
            let lums: Vec<f64> = (0..13)
                .map(|x| {
                    let [r, g, b, _] = out.pixel(x, y);
                    luminance(r, g, b)
                })
                .collect();
            assert!(lums.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_pixel_sort_is_a_permutation() {
        let src = gradient(6, 5);
        let out = run(pixel_sort_columns, &src);
        for x in 0..6 {
            let mut before: Vec<[u8; 4]> = (0..5).map(|y| src.pixel(x, y)).collect();
            let mut after: Vec<[u8; 4]> = (0..5).map(|y| out.pixel(x, y)).collect();
            before.sort();
            after.sort();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_pixel_sort_is_stable() {
        // Same luminance, different alpha: order must survive
        let mut src = Raster::new(3, 1);
        src.set_pixel(0, 0, [50, 50, 50, 1]);
        src.set_pixel(1, 0, [50, 50, 50, 2]);
        src.set_pixel(2, 0, [10, 10, 10, 3]);
        let out = run(pixel_sort_rows, &src);
        assert_eq!(out.pixel(0, 0), [10, 10, 10, 3]);
        assert_eq!(out.pixel(1, 0)[3], 1);
        assert_eq!(out.pixel(2, 0)[3], 2);
        assert_eq!(luminance_u8(50, 50, 50), 50);
    }
}
