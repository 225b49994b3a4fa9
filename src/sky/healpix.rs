//! HEALPix pixel indexing for RING and NESTED schemes
//!
//! Only the pieces needed to look up a map value from sky angles are
//! provided: angle to RING index, NESTED to RING conversion, and the
//! resolution bookkeeping around `npix = 12 * nside^2`.

use crate::io::configuration::MAX_NSIDE;
use crate::io::error::{Result, invalid_input};
use std::f64::consts::{FRAC_PI_2, TAU};

// Ring number of the southern vertex of each base face, in units of nside
const JRLL: [i64; 12] = [2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4];
// Longitude of each base face centre, in units of pi/4
const JPLL: [i64; 12] = [1, 3, 5, 7, 0, 2, 4, 6, 1, 3, 5, 7];

/// Number of pixels in a map of the given resolution
pub const fn npix(nside: u32) -> usize {
    12 * (nside as usize) * (nside as usize)
}

/// Recover the resolution parameter from a pixel count
///
/// # Errors
///
/// Returns `InvalidInput` unless `npix == 12 * nside^2` for some
/// `1 <= nside <= MAX_NSIDE`
pub fn nside_from_npix(pixel_count: usize) -> Result<u32> {
    if pixel_count == 0 || pixel_count % 12 != 0 {
        return Err(invalid_input(
            "nside_from_npix",
            &format!("{pixel_count} is not 12 * nside^2"),
        ));
    }

    let nside = ((pixel_count / 12) as f64).sqrt().round() as u32;
    if nside == 0 || nside > MAX_NSIDE || npix(nside) != pixel_count {
        return Err(invalid_input(
            "nside_from_npix",
            &format!("{pixel_count} is not 12 * nside^2"),
        ));
    }

    Ok(nside)
}

/// RING index of the pixel containing colatitude `theta` and longitude `phi`
///
/// `theta` is in `[0, pi]`; `phi` may be any angle and is wrapped into
/// `[0, 2pi)`.
pub fn ang2pix_ring(nside: u32, theta: f64, phi: f64) -> usize {
    let ns = i64::from(nside);
    let z = theta.cos();
    let za = z.abs();
    let tt = phi.rem_euclid(TAU) / FRAC_PI_2;

    let pixel = if za <= 2.0 / 3.0 {
        // Equatorial belt
        let nl4 = 4 * ns;
        let temp1 = ns as f64 * (0.5 + tt);
        let temp2 = ns as f64 * z * 0.75;
        let jp = (temp1 - temp2) as i64;
        let jm = (temp1 + temp2) as i64;

        let ir = ns + 1 + jp - jm;
        let kshift = 1 - (ir & 1);
        let ip = (jp + jm - ns + kshift + 1).div_euclid(2).rem_euclid(nl4);

        2 * ns * (ns - 1) + (ir - 1) * nl4 + ip
    } else {
        // Polar caps
        let tp = tt - tt.floor();
        let tmp = ns as f64 * (3.0 * (1.0 - za)).sqrt();
        let jp = (tp * tmp) as i64;
        let jm = ((1.0 - tp) * tmp) as i64;

        let ir = (jp + jm + 1).min(ns);
        let ip = ((tt * ir as f64) as i64).rem_euclid(4 * ir);

        if z > 0.0 {
            2 * ir * (ir - 1) + ip
        } else {
            12 * ns * ns - 2 * ir * (ir + 1) + ip
        }
    };

    pixel as usize
}

/// Convert a NESTED pixel index to its RING index
///
/// `nside` must be a power of two, which every NESTED map satisfies.
pub fn nest2ring(nside: u32, pixel: usize) -> usize {
    let ns = i64::from(nside);
    let face_pixels = (nside as usize) * (nside as usize);
    let face = pixel / face_pixels;
    let local = pixel % face_pixels;

    let ix = i64::from(compress_bits(local as u64));
    let iy = i64::from(compress_bits((local >> 1) as u64));

    let jrll = JRLL.get(face).copied().unwrap_or(0);
    let jpll = JPLL.get(face).copied().unwrap_or(0);

    let nl4 = 4 * ns;
    let jr = jrll * ns - ix - iy - 1;

    let (nr, n_before, kshift) = if jr < ns {
        (jr, 2 * jr * (jr - 1), 0)
    } else if jr > 3 * ns {
        let nr = nl4 - jr;
        (nr, 12 * ns * ns - 2 * (nr + 1) * nr, 0)
    } else {
        (ns, 2 * ns * (ns - 1) + (jr - ns) * nl4, (jr - ns) & 1)
    };

    let mut jp = (jpll * nr + ix - iy + 1 + kshift) / 2;
    if jp > nl4 {
        jp -= nl4;
    } else if jp < 1 {
        jp += nl4;
    }

    (n_before + jp - 1) as usize
}

/// Permute a full NESTED map into RING order
///
/// # Errors
///
/// Returns `InvalidInput` if the map length does not match `nside` or
/// `nside` is not a power of two
pub fn reorder_nested_to_ring<T: Copy + Default>(values: &[T], nside: u32) -> Result<Vec<T>> {
    if !nside.is_power_of_two() {
        return Err(invalid_input(
            "reorder_nested_to_ring",
            &format!("NESTED ordering requires a power-of-two nside, got {nside}"),
        ));
    }
    if values.len() != npix(nside) {
        return Err(invalid_input(
            "reorder_nested_to_ring",
            &format!(
                "map has {} pixels but nside {nside} needs {}",
                values.len(),
                npix(nside)
            ),
        ));
    }

    let mut ring = vec![T::default(); values.len()];
    for (nested_index, &value) in values.iter().enumerate() {
        if let Some(slot) = ring.get_mut(nest2ring(nside, nested_index)) {
            *slot = value;
        }
    }
    Ok(ring)
}

// Gathers the even-position bits of `v` into the low half
const fn compress_bits(v: u64) -> u32 {
    let mut raw = v & 0x5555_5555_5555_5555;
    raw |= raw >> 1;
    raw &= 0x3333_3333_3333_3333;
    raw |= raw >> 2;
    raw &= 0x0f0f_0f0f_0f0f_0f0f;
    raw |= raw >> 4;
    raw &= 0x00ff_00ff_00ff_00ff;
    raw |= raw >> 8;
    raw &= 0x0000_ffff_0000_ffff;
    raw |= raw >> 16;
    (raw & 0x0000_0000_ffff_ffff) as u32
}
