//! Opaque white stripes in four orientations and three widths.
//!
//! A pixel turns opaque white when `floor(phase / stripe_width)` is even,
//! where the stripe width is a percentage of `min(width, height)` (at least
//! one pixel) and the phase depends on the orientation.

use super::fill_with;
use crate::raster::Raster;

/// Stripe orientation, named by the compass direction the stripes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeDirection {
    /// Horizontal bands; phase = y.
    NorthSouth,
    /// Vertical bands; phase = x.
    EastWest,
    /// Diagonal bands rising to the right; phase = x + y.
    SouthWestNorthEast,
    /// Diagonal bands falling to the right; phase = x - y + width.
    NorthWestSouthEast,
}

impl StripeDirection {
    #[inline]
    fn phase(self, x: u32, y: u32, width: u32) -> f64 {
        let (x, y, w) = (x as f64, y as f64, width as f64);
        match self {
            StripeDirection::NorthSouth => y,
            StripeDirection::EastWest => x,
            StripeDirection::SouthWestNorthEast => x + y,
            StripeDirection::NorthWestSouthEast => x - y + w,
        }
    }
}

/// Paint stripes `percent`% of the shorter side wide.
pub fn white_stripes(src: &Raster, dst: &mut Raster, direction: StripeDirection, percent: f64) {
    let min_dim = src.width.min(src.height) as f64;
    let stripe_width = (min_dim * percent / 100.0).max(1.0);
    fill_with(dst, |x, y| {
        let band = (direction.phase(x, y, src.width) / stripe_width).floor() as i64;
        if band.rem_euclid(2) == 0 {
            [255, 255, 255, 255]
        } else {
            src.pixel(x, y)
        }
    });
}

const SMALL: f64 = 2.0;
const MEDIUM: f64 = 5.0;
const LARGE: f64 = 10.0;

macro_rules! stripe_variant {
    ($name:ident, $direction:ident, $percent:expr) => {
        pub fn $name(src: &Raster, dst: &mut Raster) {
            white_stripes(src, dst, StripeDirection::$direction, $percent);
        }
    };
}

stripe_variant!(stripes_ns_small, NorthSouth, SMALL);
stripe_variant!(stripes_ns_medium, NorthSouth, MEDIUM);
stripe_variant!(stripes_ns_large, NorthSouth, LARGE);
stripe_variant!(stripes_ew_small, EastWest, SMALL);
stripe_variant!(stripes_ew_medium, EastWest, MEDIUM);
stripe_variant!(stripes_ew_large, EastWest, LARGE);
stripe_variant!(stripes_swne_small, SouthWestNorthEast, SMALL);
stripe_variant!(stripes_swne_medium, SouthWestNorthEast, MEDIUM);
stripe_variant!(stripes_swne_large, SouthWestNorthEast, LARGE);
stripe_variant!(stripes_nwse_small, NorthWestSouthEast, SMALL);
stripe_variant!(stripes_nwse_medium, NorthWestSouthEast, MEDIUM);
stripe_variant!(stripes_nwse_large, NorthWestSouthEast, LARGE);
