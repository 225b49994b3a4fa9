//! Survey catalogs and mask lookup

/// CMB and galaxy survey enumerations and user selections
pub mod catalog;
/// Mask file resolution by survey name
pub mod loader;

pub use catalog::{CmbExperiment, FOREGROUND_MASK, GalaxySurvey, Selection};
pub use loader::MaskLoader;
