//! The built-in transform library.
//!
//! Every transform is a pure function `fn(&Raster, &mut Raster)`: it reads
//! only the source, writes every sample of the destination exactly once,
//! and never reads destination state. The destination is always allocated
//! by the dispatcher at the size the registry entry declares.
//!
//! # Families
//!
//! - [`color`] - pointwise colour remaps (grayscale, tints, gradient maps...)
//! - [`convolve`] - 3x3 kernels, box blur and Sobel edge effects
//! - [`geometry`] - exact rotations, arbitrary-angle rotation, tiling layouts
//! - [`warp`] - polar and shear remaps (swirl, bulge, skew, radial blur)
//! - [`retro`] - pixelation, dithering, scanlines, pixel sorting
//! - [`glitch`] - hash-driven deterministic noise and band shifts
//! - [`stripes`] - the white-stripe family
//!
//! # Edge policies
//!
//! Off-raster samples are resolved per effect: clamp-to-edge for kernels and
//! most geometric remaps, transparent black for arbitrary rotation and the
//! polar warps, toroidal wrap for the glitch shifts and the wrapping skew.

pub mod color;
pub mod convolve;
pub mod geometry;
pub mod glitch;
pub mod retro;
pub mod stripes;
pub mod warp;

use crate::raster::{Raster, CHANNELS};
use crate::registry::{TransformEntry, TransformRegistry};

/// Round half up, then clamp to a byte.
///
/// Used wherever an effect clamps its result explicitly.
#[inline]
pub(crate) fn clamp_u8(v: f64) -> u8 {
    (v + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Store a float into a byte with clamped-array semantics: round half to
/// even, then clamp.
#[inline]
pub(crate) fn store_u8(v: f64) -> u8 {
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Integer hash behind every "random-looking" effect.
///
/// `h(n) = (n * 31) ^ (n >> 16)` in wrapping 32-bit arithmetic. The formula
/// is part of the visual output and must not change.
#[inline]
pub fn hash(n: u32) -> u32 {
    n.wrapping_mul(31) ^ (n >> 16)
}

/// Sample pixel (x, y), clamping coordinates to the raster edge.
#[inline]
pub(crate) fn sample_clamped(src: &Raster, x: i64, y: i64) -> [u8; 4] {
    let sx = x.clamp(0, src.width as i64 - 1) as u32;
    let sy = y.clamp(0, src.height as i64 - 1) as u32;
    src.pixel(sx, sy)
}

/// Nearest-neighbour sample at a fractional position; anything outside the
/// raster is transparent black.
#[inline]
pub(crate) fn sample_transparent(src: &Raster, x: f64, y: f64) -> [u8; 4] {
    let sx = x.floor();
    let sy = y.floor();
    if sx < 0.0 || sy < 0.0 || sx >= src.width as f64 || sy >= src.height as f64 {
        return [0, 0, 0, 0];
    }
    src.pixel(sx as u32, sy as u32)
}

/// Nearest-neighbour sample at a fractional position on a torus.
#[inline]
pub(crate) fn sample_wrapped(src: &Raster, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (src.width as f64, src.height as f64);
    let u = x.rem_euclid(w);
    let v = y.rem_euclid(h);
    let sx = (u.floor() as u32).min(src.width - 1);
    let sy = (v.floor() as u32).min(src.height - 1);
    src.pixel(sx, sy)
}

/// Apply a per-pixel colour function; dimensions are preserved.
#[inline]
pub(crate) fn map_pixels(src: &Raster, dst: &mut Raster, f: impl Fn([u8; 4]) -> [u8; 4]) {
    for (s, d) in src
        .pixels
        .chunks_exact(CHANNELS)
        .zip(dst.pixels.chunks_exact_mut(CHANNELS))
    {
        d.copy_from_slice(&f([s[0], s[1], s[2], s[3]]));
    }
}

/// Fill every destination pixel from its coordinates.
#[inline]
pub(crate) fn fill_with(dst: &mut Raster, f: impl Fn(u32, u32) -> [u8; 4]) {
    let width = dst.width;
    if width == 0 {
        return;
    }
    for (i, d) in dst.pixels.chunks_exact_mut(CHANNELS).enumerate() {
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        d.copy_from_slice(&f(x, y));
    }
}

/// Output size of the quarter-turn rotations.
pub fn swapped_dimensions(width: u32, height: u32) -> (u32, u32) {
    (height, width)
}

/// Register the full built-in catalog under its stable ids.
pub fn register_builtins(registry: &mut TransformRegistry) {
    use color::*;
    use convolve::*;
    use geometry::*;
    use glitch::*;
    use retro::*;
    use stripes::*;
    use warp::*;

    let mut add = |id: u32, name: &str, f: fn(&Raster, &mut Raster)| {
        registry.register(id, TransformEntry::new(name, f));
    };

    // 1-5: blur & sharpen
    add(1, "Blur light", blur_light);
    add(2, "Blur medium", blur_medium);
    add(3, "Blur heavy", blur_heavy);
    add(4, "Sharpen", sharpen);
    add(5, "Emboss", emboss);

    // 6-13: channels & RGB shift
    add(6, "Red channel only", red_only);
    add(7, "Green channel only", green_only);
    add(8, "Blue channel only", blue_only);
    add(9, "Swap R–G", swap_rg);
    add(10, "Swap G–B", swap_gb);
    add(11, "Swap R–B", swap_rb);
    add(12, "RGB shift", rgb_shift);
    add(13, "RGB shift vertical", rgb_shift_vertical);

    // 14-20: contrast, brightness, saturation
    add(14, "Contrast up", contrast_up);
    add(15, "Contrast down", contrast_down);
    add(16, "Brightness up", brightness_up);
    add(17, "Brightness down", brightness_down);
    add(18, "Saturation up", saturation_up);
    add(19, "Saturation down", saturation_down);
    add(20, "Deep fry", deep_fry);

    // 21-35: grayscale, invert, colour & tint
    add(21, "Grayscale", grayscale);
    add(22, "Invert", invert);
    add(23, "Solarize", solarize);
    add(24, "Sepia", sepia);
    add(25, "Warm tint", warm_tint);
    add(26, "Cool tint", cool_tint);
    add(27, "Fade", fade);
    add(28, "Duotone", duotone);
    add(29, "Colorise", colorise);
    add(30, "Colorise warm", colorise_warm);
    add(31, "Film grain", film_grain);
    add(32, "High key", high_key);
    add(33, "Low key", low_key);
    add(34, "Lomo", lomo);
    add(35, "Vignette", vignette);

    // 36-44: pixel & retro
    add(36, "Pixelate small", pixelate_small);
    add(37, "Pixelate medium", pixelate_medium);
    add(38, "Pixelate large", pixelate_large);
    add(39, "Posterize 4 levels", posterize_4);
    add(40, "Posterize 8 levels", posterize_8);
    add(41, "Dither", dither);
    add(42, "Scanlines", scanlines);
    add(43, "Pixel sort rows", pixel_sort_rows);
    add(44, "Pixel sort columns", pixel_sort_columns);

    // 45-50: glitch
    add(45, "Glitch slice shift", slice_shift);
    add(46, "Glitch scan jitter", scan_jitter);
    add(47, "Glitch mirror slices", mirror_slices);
    add(48, "Glitch noise lines", noise_lines);
    add(49, "Glitch block scramble", block_scramble);
    add(50, "Glitch data smear", data_smear);

    // 51-53: edges
    add(51, "Edge outline", edge_outline);
    add(52, "Find edges", find_edges);
    add(53, "Glowing edges", glowing_edges);

    // 54-63: layout & rotation
    add(54, "Split into 4", split_four);
    add(55, "Split into 9", split_nine);
    add(56, "Kaleidoscope", kaleidoscope);
    add(57, "Rotate 180°", rotate_180);
    add(60, "Rotate 5°", rotate_5);
    add(61, "Rotate 15°", rotate_15);
    add(62, "Rotate -5°", rotate_neg_5);
    add(63, "Rotate -15°", rotate_neg_15);

    // 64-75: white stripes (N/S, E/W, SW/NE, NW/SE x small, medium, large)
    add(64, "White stripes N/S small", stripes_ns_small);
    add(65, "White stripes N/S medium", stripes_ns_medium);
    add(66, "White stripes N/S large", stripes_ns_large);
    add(67, "White stripes E/W small", stripes_ew_small);
    add(68, "White stripes E/W medium", stripes_ew_medium);
    add(69, "White stripes E/W large", stripes_ew_large);
    add(70, "White stripes SW/NE small", stripes_swne_small);
    add(71, "White stripes SW/NE medium", stripes_swne_medium);
    add(72, "White stripes SW/NE large", stripes_swne_large);
    add(73, "White stripes NW/SE small", stripes_nwse_small);
    add(74, "White stripes NW/SE medium", stripes_nwse_medium);
    add(75, "White stripes NW/SE large", stripes_nwse_large);

    // 76-81: warps
    add(76, "Swirl", swirl);
    add(77, "Bulge", bulge);
    add(78, "Pinch", pinch);
    add(79, "Skew", skew);
    add(80, "Skew wrap", skew_wrap);
    add(81, "Radial blur", radial_blur);

    registry.register(
        58,
        TransformEntry::new("Rotate 90° CW", rotate_90_cw).with_output_size(swapped_dimensions),
    );
    registry.register(
        59,
        TransformEntry::new("Rotate 90° CCW", rotate_90_ccw).with_output_size(swapped_dimensions),
    );
}
