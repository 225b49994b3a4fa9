//! HEALPix maps stored as FITS binary tables
//!
//! Maps live in the first column of HDU 1. Large maps are commonly written
//! with many pixels per table cell (1024 is typical), so a column is read as
//! `rows * repeat` consecutive values. `NSIDE` and `ORDERING` header keys are
//! honoured when present; NESTED maps are reordered to RING on load.

use crate::io::configuration::{MAP_COLUMN_NAME, MAP_HDU_INDEX};
use crate::io::error::{CoverageError, Result};
use crate::sky::SkyMask;
use crate::sky::healpix::{nside_from_npix, reorder_nested_to_ring};
use fitsio::FitsFile;
use fitsio::hdu::HduInfo;
use fitsio::tables::{ColumnDataType, ColumnDescription};
use log::{debug, trace};
use ndarray::Array1;
use std::path::Path;

/// Pixel ordering declared by a map's `ORDERING` header key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelOrdering {
    /// Iso-latitude rings from north to south
    Ring,
    /// Hierarchical quad-tree within each base face
    Nested,
}

impl PixelOrdering {
    /// Parse a header value, ignoring case and padding
    pub fn from_header(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "RING" => Some(Self::Ring),
            "NESTED" | "NEST" => Some(Self::Nested),
            _ => None,
        }
    }
}

/// Read a HEALPix map and return it in RING order
///
/// # Errors
///
/// Returns a FITS error if the file cannot be read, or `InvalidMaskFile` if
/// HDU 1 is not a table, the pixel count is not a HEALPix map, or the header
/// contradicts the data
pub fn read_healpix_map(path: &Path, name: &str) -> Result<SkyMask> {
    let fits_error = |operation: &'static str| {
        move |source: fitsio::errors::Error| CoverageError::Fits {
            path: path.to_path_buf(),
            operation,
            source,
        }
    };
    let invalid = |reason: String| CoverageError::InvalidMaskFile {
        path: path.to_path_buf(),
        reason,
    };

    let mut fptr = FitsFile::open(path).map_err(fits_error("open"))?;
    let hdu = fptr.hdu(MAP_HDU_INDEX).map_err(fits_error("open HDU"))?;

    let (column, repeat, rows) = match &hdu.info {
        HduInfo::TableInfo {
            column_descriptions,
            num_rows,
            ..
        } => {
            let first = column_descriptions
                .first()
                .ok_or_else(|| invalid("map table has no columns".to_string()))?;
            (
                first.name.clone(),
                first.data_type.repeat.max(1),
                *num_rows,
            )
        }
        _ => return Err(invalid(format!("HDU {MAP_HDU_INDEX} is not a table"))),
    };
    let expected = rows * repeat;
    trace!("{}: column '{column}', {rows} rows x {repeat}", path.display());

    let mut values: Vec<f64> = hdu
        .read_col(&mut fptr, &column)
        .map_err(fits_error("read column"))?;
    if values.len() != expected {
        // Vector cells: continue reading across row boundaries
        values = hdu
            .read_col_range(&mut fptr, &column, &(0..expected))
            .map_err(fits_error("read column"))?;
    }
    if values.len() != expected {
        return Err(invalid(format!(
            "expected {expected} values in column '{column}', read {}",
            values.len()
        )));
    }

    let nside = nside_from_npix(values.len()).map_err(|e| invalid(e.to_string()))?;
    if let Ok(declared) = hdu.read_key::<i64>(&mut fptr, "NSIDE") {
        if declared != i64::from(nside) {
            return Err(invalid(format!(
                "NSIDE = {declared} but the map has {} pixels",
                values.len()
            )));
        }
    }

    let ordering = match hdu.read_key::<String>(&mut fptr, "ORDERING") {
        Ok(value) => PixelOrdering::from_header(&value)
            .ok_or_else(|| invalid(format!("unknown ORDERING '{}'", value.trim())))?,
        Err(_) => PixelOrdering::Ring,
    };

    let values = match ordering {
        PixelOrdering::Ring => values,
        PixelOrdering::Nested => {
            debug!("{}: reordering NESTED map to RING", path.display());
            reorder_nested_to_ring(&values, nside).map_err(|e| invalid(e.to_string()))?
        }
    };

    SkyMask::new(name, nside, Array1::from(values))
}

/// Write a RING-ordered map with one pixel per table row
///
/// An existing file at `path` is replaced.
///
/// # Errors
///
/// Returns a FITS error if the file cannot be created or written
pub fn write_healpix_map(path: &Path, mask: &SkyMask) -> Result<()> {
    let fits_error = |operation: &'static str| {
        move |source: fitsio::errors::Error| CoverageError::Fits {
            path: path.to_path_buf(),
            operation,
            source,
        }
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CoverageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let mut fptr = FitsFile::create(path)
        .overwrite()
        .open()
        .map_err(fits_error("create"))?;

    let column = ColumnDescription::new(MAP_COLUMN_NAME)
        .with_type(ColumnDataType::Double)
        .create()
        .map_err(fits_error("describe column"))?;
    let hdu = fptr
        .create_table("xtension".to_string(), &[column])
        .map_err(fits_error("create table"))?;

    hdu.write_key(&mut fptr, "PIXTYPE", "HEALPIX".to_string())
        .map_err(fits_error("write header"))?;
    hdu.write_key(&mut fptr, "ORDERING", "RING".to_string())
        .map_err(fits_error("write header"))?;
    hdu.write_key(&mut fptr, "NSIDE", i64::from(mask.nside()))
        .map_err(fits_error("write header"))?;

    let values = mask.view().to_vec();
    hdu.write_col(&mut fptr, MAP_COLUMN_NAME, &values)
        .map_err(fits_error("write column"))?;

    Ok(())
}
