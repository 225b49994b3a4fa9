//! Sky coverage analysis for pairs of survey masks

/// Sky fractions, overlap categories and foreground capping
pub mod coverage;
/// Full analysis pass for one survey selection
pub mod report;
/// Bit-packed per-pixel visibility
pub mod visibility;

pub use coverage::{apply_foreground_mask, combine_masks, sky_fraction, strict_overlap};
pub use report::CoverageReport;
