//! One full analysis pass for a survey selection

use crate::analysis::coverage::{
    apply_foreground_mask, combine_masks, scale_mask, sky_fraction, strict_overlap,
};
use crate::io::error::Result;
use crate::survey::{FOREGROUND_MASK, MaskLoader, Selection};
use log::{debug, info};
use ndarray::Array1;
use std::fmt;

/// Category value of the first (CMB) survey on the shared colour scale
const FIRST_CATEGORY: f64 = 1.0;
/// Category value of the second (galaxy) survey on the shared colour scale
const SECOND_CATEGORY: f64 = 2.0;

/// Sky fractions and displayable maps for one selection
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Selection the report was built for
    pub selection: Selection,
    /// Threshold used for every fraction
    pub threshold: f64,
    /// Visible fraction of the CMB footprint, after foregrounds if requested
    pub cmb_fsky: f64,
    /// Visible fraction of the galaxy footprint
    pub galaxy_fsky: f64,
    /// Visible fraction of the strict overlap
    pub overlap_fsky: f64,
    /// CMB footprint on the colour scale (1 = visible)
    pub cmb_panel: Array1<f64>,
    /// Galaxy footprint on the colour scale (2 = visible)
    pub galaxy_panel: Array1<f64>,
    /// Overlap view: the combined categories, or only the strict overlap
    pub overlap_map: Array1<f64>,
}

impl CoverageReport {
    /// Load the selected masks and compute every fraction and map
    ///
    /// The overlap fraction always comes from the strict overlap, whichever
    /// overlap view is selected.
    ///
    /// # Errors
    ///
    /// Returns an error if a mask cannot be loaded, the masks have different
    /// resolutions, or the threshold is outside `[0, 1)`
    pub fn analyze(selection: Selection, loader: &MaskLoader, threshold: f64) -> Result<Self> {
        let mut cmb = loader.load(selection.cmb.name())?.into_values();
        if selection.add_foregrounds {
            let foregrounds = loader.load(FOREGROUND_MASK.name())?;
            debug!("Applying {FOREGROUND_MASK} foregrounds to {}", selection.cmb);
            cmb = apply_foreground_mask(cmb.view(), foregrounds.view())?;
        }
        let cmb_fsky = sky_fraction(cmb.view(), threshold)?;

        let galaxy = loader.load(selection.galaxy.name())?.into_values();
        let galaxy_fsky = sky_fraction(galaxy.view(), threshold)?;

        let combined = combine_masks(cmb.view(), galaxy.view())?;
        let overlap_only = strict_overlap(cmb.view(), galaxy.view())?;
        let overlap_fsky = sky_fraction(overlap_only.view(), threshold)?;

        info!(
            "{}: cmb f_sky {cmb_fsky:.4}, galaxy f_sky {galaxy_fsky:.4}, overlap f_sky {overlap_fsky:.4}",
            selection.pair_title()
        );

        let overlap_map = if selection.overlap_only {
            overlap_only
        } else {
            combined
        };

        Ok(Self {
            selection,
            threshold,
            cmb_fsky,
            galaxy_fsky,
            overlap_fsky,
            cmb_panel: scale_mask(cmb.view(), FIRST_CATEGORY),
            galaxy_panel: scale_mask(galaxy.view(), SECOND_CATEGORY),
            overlap_map,
        })
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} f_sky = {:.2}", self.selection.cmb, self.cmb_fsky)?;
        writeln!(f, "{} f_sky = {:.2}", self.selection.galaxy, self.galaxy_fsky)?;
        write!(f, "Overlap f_sky = {:.2}", self.overlap_fsky)
    }
}
