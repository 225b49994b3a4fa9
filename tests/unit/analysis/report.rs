//! Tests for the full analysis pass over masks on disk

#[cfg(test)]
mod tests {
    use crate::{nside1_mask, write_mask};
    use ndarray::Array1;
    use skyoverlap::CoverageError;
    use skyoverlap::analysis::CoverageReport;
    use skyoverlap::survey::{CmbExperiment, GalaxySurvey, MaskLoader, Selection};
    use tempfile::TempDir;

    // CMB sees pixels 0-5, galaxy 3-8, foregrounds remove pixels 0-3
    fn mask_directory() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_mask(dir.path(), "SPTPol", nside1_mask(&[0, 1, 2, 3, 4, 5]));
        write_mask(dir.path(), "DES", nside1_mask(&[3, 4, 5, 6, 7, 8]));
        write_mask(
            dir.path(),
            "Planck-Gal-70",
            nside1_mask(&[4, 5, 6, 7, 8, 9, 10, 11]),
        );
        dir
    }

    fn selection() -> Selection {
        Selection::new(CmbExperiment::SptPol, GalaxySurvey::Des)
    }

    // Tests fractions and the combined overlap categories
    // Verified by computing the overlap fraction from the combined map
    #[test]
    fn test_analyze_combined_view() {
        let dir = mask_directory();
        let loader = MaskLoader::new(dir.path());

        let report = CoverageReport::analyze(selection(), &loader, 0.1).unwrap();

        assert_eq!(report.cmb_fsky, 0.5);
        assert_eq!(report.galaxy_fsky, 0.5);
        assert_eq!(report.overlap_fsky, 0.25);
        assert_eq!(
            report.overlap_map.to_vec(),
            vec![1.0, 1.0, 1.0, 3.0, 3.0, 3.0, 2.0, 2.0, 2.0, 0.0, 0.0, 0.0]
        );
    }

    // Tests overlap-only mode swaps the displayed map but not the fraction
    // Verified by ignoring the overlap-only flag
    #[test]
    fn test_analyze_overlap_only() {
        let dir = mask_directory();
        let loader = MaskLoader::new(dir.path());
        let selection = Selection {
            overlap_only: true,
            ..selection()
        };

        let report = CoverageReport::analyze(selection, &loader, 0.1).unwrap();

        assert_eq!(report.overlap_fsky, 0.25);
        assert_eq!(
            report.overlap_map.to_vec(),
            vec![0.0, 0.0, 0.0, 3.0, 3.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    // Tests foregrounds cap the CMB footprint before any fraction
    // Verified by applying foregrounds after the CMB fraction
    #[test]
    fn test_analyze_with_foregrounds() {
        let dir = mask_directory();
        let loader = MaskLoader::new(dir.path());
        let selection = Selection {
            add_foregrounds: true,
            ..selection()
        };

        let report = CoverageReport::analyze(selection, &loader, 0.1).unwrap();

        assert!((report.cmb_fsky - 2.0 / 12.0).abs() < 1e-12);
        assert_eq!(report.galaxy_fsky, 0.5);
        assert!((report.overlap_fsky - 2.0 / 12.0).abs() < 1e-12);
    }

    // Tests panels use categories 1 and 2 of the colour scale
    // Verified by rendering the galaxy panel unscaled
    #[test]
    fn test_analyze_panels() {
        let dir = mask_directory();
        let loader = MaskLoader::new(dir.path());

        let report = CoverageReport::analyze(selection(), &loader, 0.1).unwrap();

        assert_eq!(report.cmb_panel, Array1::from(nside1_mask(&[0, 1, 2, 3, 4, 5])));
        assert_eq!(report.galaxy_panel.get(3).copied(), Some(2.0));
        assert_eq!(report.galaxy_panel.get(0).copied(), Some(0.0));
    }

    // Tests a missing survey mask surfaces as ResourceNotFound
    // Verified by substituting an empty mask
    #[test]
    fn test_analyze_missing_mask() {
        let dir = mask_directory();
        let loader = MaskLoader::new(dir.path());
        let selection = Selection::new(CmbExperiment::CmbS4, GalaxySurvey::Des);

        let err = CoverageReport::analyze(selection, &loader, 0.1).unwrap_err();
        match err {
            CoverageError::ResourceNotFound { name, .. } => assert_eq!(name, "CMB-S4"),
            other => unreachable!("Expected ResourceNotFound, got {other}"),
        }
    }

    // Tests masks of different resolution are rejected
    // Verified by truncating to the shorter mask
    #[test]
    fn test_analyze_resolution_mismatch() {
        let dir = mask_directory();
        write_mask(dir.path(), "DES", vec![1.0; 48]);
        let loader = MaskLoader::new(dir.path());

        let err = CoverageReport::analyze(selection(), &loader, 0.1).unwrap_err();
        assert!(matches!(err, CoverageError::ShapeMismatch { left: 12, right: 48, .. }));
    }

    // Tests the printed summary uses two decimals
    // Verified by printing full precision
    #[test]
    fn test_display() {
        let dir = mask_directory();
        let loader = MaskLoader::new(dir.path());

        let report = CoverageReport::analyze(selection(), &loader, 0.1).unwrap();

        assert_eq!(
            report.to_string(),
            "SPTPol f_sky = 0.50\nDES f_sky = 0.50\nOverlap f_sky = 0.25"
        );
    }
}
