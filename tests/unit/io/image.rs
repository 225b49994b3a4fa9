//! Tests for colour bucketing and Mollweide PNG export

#[cfg(test)]
mod tests {
    use ndarray::Array1;
    use skyoverlap::CoverageError;
    use skyoverlap::io::configuration::PANEL_GAP;
    use skyoverlap::io::image::{
        OVERLAP_PALETTE, category_color, category_index, export_panels_as_png, render_mollweide,
    };
    use skyoverlap::sky::MollweideGrid;
    use tempfile::TempDir;

    // Tests integer categories map to their own colours
    // Verified by offsetting the bucket index
    #[test]
    fn test_category_index_integers() {
        assert_eq!(category_index(0.0), 0);
        assert_eq!(category_index(1.0), 1);
        assert_eq!(category_index(2.0), 2);
        assert_eq!(category_index(3.0), 3);
    }

    // Tests fractional and out-of-range values use the four equal bins
    // Verified by rounding instead of flooring
    #[test]
    fn test_category_index_fractional() {
        assert_eq!(category_index(0.5), 0);
        assert_eq!(category_index(0.75), 1);
        assert_eq!(category_index(1.5), 2);
        assert_eq!(category_index(2.2), 2);
        assert_eq!(category_index(-1.0), 0);
        assert_eq!(category_index(10.0), 3);
        assert_eq!(category_index(f64::NAN), 0);
    }

    // Tests colours come from the palette
    // Verified by swapping blue and red entries
    #[test]
    fn test_category_color() {
        assert_eq!(category_color(1.0).0, OVERLAP_PALETTE[1]);
        assert_eq!(category_color(2.0).0, OVERLAP_PALETTE[2]);
    }

    // Tests the ellipse is filled and the corners stay transparent
    // Verified by painting every pixel
    #[test]
    fn test_render_mollweide() {
        let grid = MollweideGrid::with_width(64);
        let values = Array1::from_elem(12, 3.0);
        let mut rows = Vec::new();

        let img = render_mollweide(values.view(), grid, |row| rows.push(row)).unwrap();

        assert_eq!(img.dimensions(), (64, 32));
        assert_eq!(img.get_pixel(32, 16).0, OVERLAP_PALETTE[3]);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(63, 31).0[3], 0);
        assert_eq!(rows, (1..=32).collect::<Vec<u32>>());
    }

    // Tests maps that are not HEALPix-sized are rejected
    // Verified by skipping the pixel count check
    #[test]
    fn test_render_invalid_map() {
        let grid = MollweideGrid::with_width(32);
        let values = Array1::from_elem(10, 1.0);

        let err = render_mollweide(values.view(), grid, |_| {}).unwrap_err();
        assert!(matches!(err, CoverageError::InvalidInput { .. }));
    }

    // Tests side-by-side panels are written with the gap between them
    // Verified by dropping the gap from the canvas width
    #[test]
    fn test_export_panels_creates_file() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("nested/dir/surveys.png");
        let grid = MollweideGrid::with_width(40);
        let first = Array1::from_elem(12, 1.0);
        let second = Array1::from_elem(48, 2.0);

        export_panels_as_png(
            &[("SPTPol", first.view()), ("DES", second.view())],
            grid,
            &output_path,
            None,
        )
        .unwrap();

        assert!(output_path.exists(), "PNG file should be created");
        let dimensions = image::image_dimensions(&output_path).unwrap();
        assert_eq!(dimensions, (2 * 40 + PANEL_GAP, 20));
    }

    // Tests exporting nothing fails
    // Verified by writing an empty canvas
    #[test]
    fn test_export_panels_empty() {
        let dir = TempDir::new().unwrap();
        let grid = MollweideGrid::with_width(40);

        let result = export_panels_as_png(&[], grid, &dir.path().join("empty.png"), None);
        assert!(result.is_err(), "Should fail when no panels are given");
    }
}
