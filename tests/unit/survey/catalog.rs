//! Tests for the survey catalogs and selections

#[cfg(test)]
mod tests {
    use clap::ValueEnum;
    use skyoverlap::CoverageError;
    use skyoverlap::survey::{CmbExperiment, FOREGROUND_MASK, GalaxySurvey, Selection};

    // Tests catalog order and names follow the mask file stems
    // Verified by renaming a variant
    #[test]
    fn test_cmb_catalog() {
        let names: Vec<&str> = CmbExperiment::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec![
                "Planck-Gal-70",
                "SPTPol",
                "SPTSZ",
                "ACTPol",
                "Simons-Observatory",
                "CMB-S4"
            ]
        );
    }

    // Tests galaxy catalog order and mixed-case names
    // Verified by upper-casing eBOSS
    #[test]
    fn test_galaxy_catalog() {
        let names: Vec<&str> = GalaxySurvey::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "BOSS-DR10",
                "BOSS-North",
                "DES",
                "DESI",
                "LSST",
                "CMASS-North",
                "eBOSS-North",
                "LOWZ-North"
            ]
        );
    }

    // Tests every catalog name parses back to its entry
    // Verified by matching names case-insensitively
    #[test]
    fn test_parse_names() {
        for experiment in CmbExperiment::ALL {
            assert_eq!(experiment.name().parse::<CmbExperiment>().unwrap(), experiment);
            assert_eq!(experiment.to_string(), experiment.name());
        }
        for survey in GalaxySurvey::ALL {
            assert_eq!(survey.name().parse::<GalaxySurvey>().unwrap(), survey);
        }

        let err = "Planck".parse::<CmbExperiment>().unwrap_err();
        assert!(matches!(err, CoverageError::InvalidParameter { parameter: "cmb", .. }));
        assert!("des".parse::<GalaxySurvey>().is_err());
    }

    // Tests command-line values are the catalog names
    // Verified by using clap's default kebab-case names
    #[test]
    fn test_value_enum_names() {
        for survey in GalaxySurvey::ALL {
            let value = survey.to_possible_value().unwrap();
            assert_eq!(value.get_name(), survey.name());
        }
        assert_eq!(CmbExperiment::value_variants().len(), CmbExperiment::ALL.len());
    }

    // Tests the foreground mask is the Planck Galactic mask
    // Verified by pointing it at another experiment
    #[test]
    fn test_foreground_mask() {
        assert_eq!(FOREGROUND_MASK.name(), "Planck-Gal-70");
    }

    // Tests new selections start with both options off
    // Verified by defaulting overlap-only to true
    #[test]
    fn test_selection() {
        let selection = Selection::new(CmbExperiment::CmbS4, GalaxySurvey::Lsst);
        assert!(!selection.add_foregrounds);
        assert!(!selection.overlap_only);
        assert_eq!(selection.pair_title(), "CMB-S4 x LSST");
    }
}
