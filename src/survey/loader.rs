//! Survey name to mask file resolution

use crate::io::configuration::{DEFAULT_MASK_DIRECTORY, MASK_EXTENSION};
use crate::io::error::{CoverageError, Result};
use crate::io::fits::read_healpix_map;
use crate::sky::SkyMask;
use log::debug;
use std::path::{Path, PathBuf};

/// Loads survey masks from `<directory>/<name>.fits`
///
/// Every call reads the file again; nothing is cached between selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskLoader {
    directory: PathBuf,
}

impl Default for MaskLoader {
    fn default() -> Self {
        Self::new(DEFAULT_MASK_DIRECTORY)
    }
}

impl MaskLoader {
    /// Create a loader reading from the given directory
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory searched for masks
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Expected path of the mask for a survey name
    pub fn mask_path(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{name}.{MASK_EXTENSION}"))
    }

    /// Read the mask of a survey
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no mask file exists for `name`, or a
    /// read error if the file is not a valid HEALPix map
    pub fn load(&self, name: &str) -> Result<SkyMask> {
        let path = self.mask_path(name);
        if !path.is_file() {
            return Err(CoverageError::ResourceNotFound {
                name: name.to_string(),
                path,
            });
        }

        debug!("Loading mask '{name}' from {}", path.display());
        let mask = read_healpix_map(&path, name)?;
        debug!("Loaded '{name}': nside {}, {} pixels", mask.nside(), mask.len());

        Ok(mask)
    }
}
