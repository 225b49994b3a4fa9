use bitvec::prelude::*;
use ndarray::ArrayView1;
use num_traits::Float;
use std::fmt;

/// Bit-packed per-pixel visibility of a sky mask
///
/// One bit per pixel in the mask's own pixel order. Used to count visible
/// pixels and to intersect the footprints of two surveys without holding a
/// second floating-point map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityBitmap {
    bits: BitVec,
}

impl VisibilityBitmap {
    /// Mark every pixel whose value is strictly greater than `threshold`
    pub fn above<T: Float>(mask: ArrayView1<'_, T>, threshold: T) -> Self {
        Self {
            bits: mask.iter().map(|&value| value > threshold).collect(),
        }
    }

    /// Mark every nonzero pixel
    ///
    /// NaN is nonzero, so it counts as visible.
    pub fn nonzero<T: Float>(mask: ArrayView1<'_, T>) -> Self {
        Self {
            bits: mask.iter().map(|&value| value != T::zero()).collect(),
        }
    }

    /// Number of pixels covered by the bitmap
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Test if the bitmap covers no pixels at all
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Test pixel visibility
    pub fn contains(&self, pixel: usize) -> bool {
        self.bits.get(pixel).as_deref() == Some(&true)
    }

    /// Intersect this bitmap with another in-place
    ///
    /// Both bitmaps must cover the same pixels.
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitmap visible only where both are visible
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Count visible pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Visible pixel indices in ascending order
    pub fn visible_pixels(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }

    /// Iterate over per-pixel visibility
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }
}

impl fmt::Display for VisibilityBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VisibilityBitmap({} of {} pixels visible)",
            self.count(),
            self.len()
        )
    }
}
