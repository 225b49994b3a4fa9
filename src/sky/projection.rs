//! Mollweide equal-area projection of the full sky onto an image

use std::f64::consts::{FRAC_PI_2, PI};

/// Image raster covering the Mollweide ellipse
///
/// The ellipse touches all four image edges; pixels outside it carry no
/// sky position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MollweideGrid {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl MollweideGrid {
    /// Grid with the projection's natural 2:1 aspect ratio
    pub const fn with_width(width: u32) -> Self {
        let height = if width / 2 == 0 { 1 } else { width / 2 };
        Self { width, height }
    }

    /// Total number of image pixels
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Sky position `(theta, phi)` seen at the centre of an image pixel
    ///
    /// `theta` is the colatitude in `[0, pi]` and `phi` the longitude in
    /// `[0, 2pi)`. Longitude grows to the left, with `phi = 0` at the image
    /// centre. Returns `None` outside the projection ellipse.
    pub fn inverse(&self, col: u32, row: u32) -> Option<(f64, f64)> {
        // Normalised coordinates: u across [-1, 1], v up across [-1, 1]
        let u = 2.0 * (f64::from(col) + 0.5) / f64::from(self.width) - 1.0;
        let v = 1.0 - 2.0 * (f64::from(row) + 0.5) / f64::from(self.height);

        if u.mul_add(u, v * v) > 1.0 {
            return None;
        }

        let aux = v.asin();
        let latitude = ((2.0 * aux + (2.0 * aux).sin()) / PI).clamp(-1.0, 1.0).asin();

        let cos_aux = aux.cos();
        let longitude = if cos_aux > f64::EPSILON {
            -PI * u / cos_aux
        } else {
            0.0
        };

        Some((FRAC_PI_2 - latitude, longitude.rem_euclid(2.0 * PI)))
    }
}
