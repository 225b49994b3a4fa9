use crate::io::error::{Result, invalid_input};
use crate::sky::healpix::{nside_from_npix, npix};
use ndarray::{Array1, ArrayView1};

/// A RING-ordered HEALPix visibility map with its survey name
///
/// Values are visibility weights, 0 for masked and 1 for fully visible.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyMask {
    name: String,
    nside: u32,
    values: Array1<f64>,
}

impl SkyMask {
    /// Wrap RING-ordered values of a map with resolution `nside`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the value count is not `12 * nside^2`
    pub fn new(name: impl Into<String>, nside: u32, values: Array1<f64>) -> Result<Self> {
        if values.len() != npix(nside) || nside == 0 {
            return Err(invalid_input(
                "SkyMask::new",
                &format!(
                    "{} values do not form a map with nside {nside}",
                    values.len()
                ),
            ));
        }

        Ok(Self {
            name: name.into(),
            nside,
            values,
        })
    }

    /// Wrap RING-ordered values, deriving `nside` from their count
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the value count is not `12 * nside^2`
    pub fn from_values(name: impl Into<String>, values: Array1<f64>) -> Result<Self> {
        let nside = nside_from_npix(values.len())?;
        Self::new(name, nside, values)
    }

    /// Survey name the mask was loaded for
    pub fn name(&self) -> &str {
        &self.name
    }

    /// HEALPix resolution parameter
    pub const fn nside(&self) -> u32 {
        self.nside
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed mask
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the per-pixel values
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    /// Take the per-pixel values
    pub fn into_values(self) -> Array1<f64> {
        self.values
    }
}
