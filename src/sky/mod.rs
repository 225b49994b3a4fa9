//! Spherical pixelization and map projection
//!
//! This module contains sky geometry used by the loader and renderer:
//! - HEALPix pixel indexing
//! - The mask container shared by loader, analysis and renderer
//! - Mollweide projection of the sphere onto an image

/// HEALPix RING/NESTED index arithmetic
pub mod healpix;
/// RING-ordered HEALPix visibility maps
pub mod mask;
/// Mollweide inverse projection
pub mod projection;

pub use mask::SkyMask;
pub use projection::MollweideGrid;
