//! Sky fractions and overlap maps for pairs of HEALPix masks
//!
//! Every operation is a pure function of its inputs. Masks are per-pixel
//! visibility weights in `[0, 1]` sharing one pixelization; combining masks
//! of different lengths is rejected rather than truncated.

use crate::analysis::visibility::VisibilityBitmap;
use crate::io::error::{Result, ensure_same_length, invalid_input, invalid_parameter};
use ndarray::{Array1, ArrayView1, Zip};
use num_traits::Float;

/// Fraction of pixels strictly above `threshold`
///
/// Values equal to the threshold are not visible.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty mask and `InvalidParameter` when the
/// threshold is outside `[0, 1)`
pub fn sky_fraction<T: Float>(mask: ArrayView1<'_, T>, threshold: T) -> Result<f64> {
    if mask.is_empty() {
        return Err(invalid_input("sky_fraction", &"mask has no pixels"));
    }
    if !(threshold >= T::zero() && threshold < T::one()) {
        return Err(invalid_parameter(
            "threshold",
            &threshold.to_f64().unwrap_or(f64::NAN),
            &"must lie in [0, 1)",
        ));
    }

    let visible = VisibilityBitmap::above(mask, threshold).count();
    Ok(visible as f64 / mask.len() as f64)
}

/// Encode two masks as `a + 2b`
///
/// For 0/1 masks this gives 0 (neither), 1 (first only), 2 (second only)
/// and 3 (both). Fractional weights are summed as-is.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the masks differ in length
pub fn combine_masks<T: Float>(
    mask_a: ArrayView1<'_, T>,
    mask_b: ArrayView1<'_, T>,
) -> Result<Array1<T>> {
    ensure_same_length("combine_masks", mask_a.len(), mask_b.len())?;

    Ok(Zip::from(&mask_a)
        .and(&mask_b)
        .map_collect(|&a, &b| a + (b + b)))
}

/// Overlap category 3 where both masks are nonzero, 0 elsewhere
///
/// Any nonzero value counts, not only 1, so the result shares the colour
/// scale of [`combine_masks`].
///
/// # Errors
///
/// Returns `ShapeMismatch` if the masks differ in length
pub fn strict_overlap<T: Float>(
    mask_a: ArrayView1<'_, T>,
    mask_b: ArrayView1<'_, T>,
) -> Result<Array1<T>> {
    ensure_same_length("strict_overlap", mask_a.len(), mask_b.len())?;

    let both =
        VisibilityBitmap::nonzero(mask_a).intersection(&VisibilityBitmap::nonzero(mask_b));
    let overlap = overlap_category::<T>();

    Ok(both
        .iter()
        .map(|visible| if visible { overlap } else { T::zero() })
        .collect())
}

/// Cap the primary footprint by a foreground mask
///
/// Elementwise minimum, so the argument order does not matter.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the masks differ in length
pub fn apply_foreground_mask<T: Float>(
    primary_mask: ArrayView1<'_, T>,
    foreground_mask: ArrayView1<'_, T>,
) -> Result<Array1<T>> {
    ensure_same_length(
        "apply_foreground_mask",
        primary_mask.len(),
        foreground_mask.len(),
    )?;

    Ok(Zip::from(&primary_mask)
        .and(&foreground_mask)
        .map_collect(|&primary, &foreground| primary.min(foreground)))
}

/// Multiply every pixel by a category value
///
/// Used to colour a single survey: 1 for the first mask, 2 for the second.
pub fn scale_mask<T: Float>(mask: ArrayView1<'_, T>, category: T) -> Array1<T> {
    mask.mapv(|value| value * category)
}

fn overlap_category<T: Float>() -> T {
    T::one() + T::one() + T::one()
}
