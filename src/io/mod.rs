//! Input/output: command line, mask files, images and errors

/// Command-line arguments and the processing driver
pub mod cli;
/// Compile-time defaults and limits
pub mod configuration;
/// Error type shared by the crate
pub mod error;
/// HEALPix FITS reading and writing
pub mod fits;
/// Mollweide PNG rendering
pub mod image;
/// Rendering progress display
pub mod progress;
