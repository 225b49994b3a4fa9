//! Error types for mask loading, coverage analysis and map export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all coverage operations
#[derive(Debug)]
pub enum CoverageError {
    /// Input data cannot be used by the requested computation
    ///
    /// Raised for an empty mask passed to a fraction computation, or a pixel
    /// count that does not describe a HEALPix map
    InvalidInput {
        /// Name of the operation that rejected its input
        operation: &'static str,
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Two masks combined elementwise have different lengths
    ShapeMismatch {
        /// Name of the combining operation
        operation: &'static str,
        /// Pixel count of the first mask
        left: usize,
        /// Pixel count of the second mask
        right: usize,
    },

    /// A requested survey has no mask file
    ResourceNotFound {
        /// Survey name that was requested
        name: String,
        /// Path where the mask was expected
        path: PathBuf,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The FITS library failed while reading or writing a mask
    Fits {
        /// Path to the mask file
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying FITS error
        source: fitsio::errors::Error,
    },

    /// A FITS file was readable but is not a usable HEALPix map
    InvalidMaskFile {
        /// Path to the mask file
        path: PathBuf,
        /// Description of the problem
        reason: String,
    },

    /// Failed to save a rendered map to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CoverageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { operation, reason } => {
                write!(f, "Invalid input to {operation}: {reason}")
            }
            Self::ShapeMismatch {
                operation,
                left,
                right,
            } => {
                write!(
                    f,
                    "Shape mismatch in {operation}: masks have {left} and {right} pixels"
                )
            }
            Self::ResourceNotFound { name, path } => {
                write!(
                    f,
                    "No mask found for survey '{name}' (expected '{}')",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Fits {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "FITS error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidMaskFile { path, reason } => {
                write!(f, "Invalid HEALPix mask '{}': {reason}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CoverageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fits { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for coverage results
pub type Result<T> = std::result::Result<T, CoverageError>;

impl From<std::io::Error> for CoverageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CoverageError {
    CoverageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error
pub fn invalid_input(operation: &'static str, reason: &impl ToString) -> CoverageError {
    CoverageError::InvalidInput {
        operation,
        reason: reason.to_string(),
    }
}

/// Fail with a shape mismatch unless both lengths agree
///
/// # Errors
///
/// Returns `ShapeMismatch` when `left != right`
pub const fn ensure_same_length(operation: &'static str, left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(CoverageError::ShapeMismatch {
            operation,
            left,
            right,
        })
    }
}
