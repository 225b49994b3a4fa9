//! PNG export of coverage maps in Mollweide projection

use crate::io::configuration::PANEL_GAP;
use crate::io::error::{CoverageError, Result, invalid_input};
use crate::io::progress::ProgressManager;
use crate::sky::MollweideGrid;
use crate::sky::healpix::{ang2pix_ring, nside_from_npix};
use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::ArrayView1;
use std::path::Path;

/// Upper end of the colour scale shared by every coverage view
pub const CATEGORY_MAX: f64 = 3.0;

/// Colours for background, first mask, second mask and overlap
pub const OVERLAP_PALETTE: [[u8; 4]; 4] = [
    [127, 127, 127, 255], // grey
    [31, 119, 180, 255],  // blue
    [214, 39, 40, 255],   // red
    [148, 103, 189, 255], // purple
];

const OUTSIDE: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Palette entry for a map value on the `[0, 3]` scale
///
/// The scale is split into four equal bins, so fractional weighted sums
/// land in the bin they fall inside. NaN is background.
pub fn category_index(value: f64) -> usize {
    if value.is_nan() {
        return 0;
    }

    let bins = OVERLAP_PALETTE.len();
    let bin = (value / CATEGORY_MAX * bins as f64).floor();
    bin.clamp(0.0, (bins - 1) as f64) as usize
}

/// Colour of a map value
pub fn category_color(value: f64) -> Rgba<u8> {
    Rgba(
        OVERLAP_PALETTE
            .get(category_index(value))
            .copied()
            .unwrap_or([0, 0, 0, 0]),
    )
}

/// Rasterize a RING-ordered map onto a Mollweide grid
///
/// Pixels outside the projection ellipse are transparent. `on_row` is
/// called after each image row is drawn.
///
/// # Errors
///
/// Returns `InvalidInput` if the map length is not a HEALPix pixel count
pub fn render_mollweide(
    values: ArrayView1<'_, f64>,
    grid: MollweideGrid,
    mut on_row: impl FnMut(u32),
) -> Result<RgbaImage> {
    let nside = nside_from_npix(values.len())?;
    let mut img = ImageBuffer::from_pixel(grid.width, grid.height, OUTSIDE);

    for row in 0..grid.height {
        for col in 0..grid.width {
            if let Some((theta, phi)) = grid.inverse(col, row) {
                let pixel = ang2pix_ring(nside, theta, phi);
                let value = values.get(pixel).copied().ok_or_else(|| {
                    invalid_input(
                        "render_mollweide",
                        &format!("pixel {pixel} outside map of {} values", values.len()),
                    )
                })?;
                img.put_pixel(col, row, category_color(value));
            }
        }
        on_row(row + 1);
    }

    Ok(img)
}

/// Render maps side by side and save them as one PNG
///
/// Each panel is `grid.width` wide, separated by a transparent gap. The
/// parent directory of `output_path` is created if needed.
///
/// # Errors
///
/// Returns an error if:
/// - No panels were given
/// - A map length is not a HEALPix pixel count
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_panels_as_png(
    panels: &[(&str, ArrayView1<'_, f64>)],
    grid: MollweideGrid,
    output_path: &Path,
    mut progress: Option<&mut ProgressManager>,
) -> Result<()> {
    if panels.is_empty() {
        return Err(invalid_input("export_panels_as_png", &"no maps to render"));
    }

    let count = panels.len() as u32;
    let width = count * grid.width + (count - 1) * PANEL_GAP;
    let mut canvas = ImageBuffer::from_pixel(width, grid.height, OUTSIDE);

    if let Some(pm) = progress.as_deref_mut() {
        pm.initialize(panels.iter().map(|(title, _)| *title), grid.height);
    }

    for (index, (_, values)) in panels.iter().enumerate() {
        let panel = render_mollweide(values.view(), grid, |row| {
            if let Some(pm) = progress.as_deref() {
                pm.update_row(index, row);
            }
        })?;

        let x_offset = index as u32 * (grid.width + PANEL_GAP);
        for (x, y, pixel) in panel.enumerate_pixels() {
            canvas.put_pixel(x + x_offset, y, *pixel);
        }

        if let Some(pm) = progress.as_deref() {
            pm.complete_panel(index);
        }
    }

    if let Some(pm) = progress.as_deref() {
        pm.finish();
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CoverageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|e| CoverageError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
