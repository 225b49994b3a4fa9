//! Sky coverage of CMB experiments and galaxy surveys
//!
//! Loads HEALPix footprint masks for one CMB experiment and one galaxy survey,
//! reports the fraction of sky each covers on its own and jointly, and renders
//! both footprints and their overlap in Mollweide projection.

#![forbid(unsafe_code)]

/// Sky fractions, overlap categories and the per-selection analysis pass
pub mod analysis;
/// Command line, FITS and PNG input/output, configuration and errors
pub mod io;
/// HEALPix indexing, mask container and Mollweide projection
pub mod sky;
/// Survey catalogs and mask file lookup
pub mod survey;

pub use io::error::{CoverageError, Result};
