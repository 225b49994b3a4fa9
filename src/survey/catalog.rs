//! Fixed catalogs of CMB experiments and galaxy surveys with mask files

use crate::io::error::{CoverageError, invalid_parameter};
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// CMB experiments with a precomputed footprint mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CmbExperiment {
    /// Planck 70% Galactic mask
    #[value(name = "Planck-Gal-70")]
    PlanckGal70,
    /// SPTpol 500 deg² field
    #[value(name = "SPTPol")]
    SptPol,
    /// SPT-SZ 2500 deg² survey
    #[value(name = "SPTSZ")]
    SptSz,
    /// ACTPol wide fields
    #[value(name = "ACTPol")]
    ActPol,
    /// Simons Observatory large-aperture survey
    #[value(name = "Simons-Observatory")]
    SimonsObservatory,
    /// CMB-S4 wide survey
    #[value(name = "CMB-S4")]
    CmbS4,
}

/// Galactic foreground mask intersected with a CMB footprint on request
pub const FOREGROUND_MASK: CmbExperiment = CmbExperiment::PlanckGal70;

impl CmbExperiment {
    /// Every experiment in display order
    pub const ALL: [Self; 6] = [
        Self::PlanckGal70,
        Self::SptPol,
        Self::SptSz,
        Self::ActPol,
        Self::SimonsObservatory,
        Self::CmbS4,
    ];

    /// Catalog name, also the mask file stem
    pub const fn name(self) -> &'static str {
        match self {
            Self::PlanckGal70 => "Planck-Gal-70",
            Self::SptPol => "SPTPol",
            Self::SptSz => "SPTSZ",
            Self::ActPol => "ACTPol",
            Self::SimonsObservatory => "Simons-Observatory",
            Self::CmbS4 => "CMB-S4",
        }
    }
}

/// Galaxy surveys with a precomputed footprint mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum GalaxySurvey {
    /// BOSS Data Release 10
    #[value(name = "BOSS-DR10")]
    BossDr10,
    /// BOSS northern Galactic cap
    #[value(name = "BOSS-North")]
    BossNorth,
    /// Dark Energy Survey
    #[value(name = "DES")]
    Des,
    /// Dark Energy Spectroscopic Instrument
    #[value(name = "DESI")]
    Desi,
    /// Rubin Observatory Legacy Survey of Space and Time
    #[value(name = "LSST")]
    Lsst,
    /// BOSS CMASS sample, northern cap
    #[value(name = "CMASS-North")]
    CmassNorth,
    /// eBOSS northern cap
    #[value(name = "eBOSS-North")]
    EbossNorth,
    /// BOSS LOWZ sample, northern cap
    #[value(name = "LOWZ-North")]
    LowzNorth,
}

impl GalaxySurvey {
    /// Every survey in display order
    pub const ALL: [Self; 8] = [
        Self::BossDr10,
        Self::BossNorth,
        Self::Des,
        Self::Desi,
        Self::Lsst,
        Self::CmassNorth,
        Self::EbossNorth,
        Self::LowzNorth,
    ];

    /// Catalog name, also the mask file stem
    pub const fn name(self) -> &'static str {
        match self {
            Self::BossDr10 => "BOSS-DR10",
            Self::BossNorth => "BOSS-North",
            Self::Des => "DES",
            Self::Desi => "DESI",
            Self::Lsst => "LSST",
            Self::CmassNorth => "CMASS-North",
            Self::EbossNorth => "eBOSS-North",
            Self::LowzNorth => "LOWZ-North",
        }
    }
}

impl fmt::Display for CmbExperiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for GalaxySurvey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CmbExperiment {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|experiment| experiment.name() == s)
            .ok_or_else(|| invalid_parameter("cmb", &s, &"not a known CMB experiment"))
    }
}

impl FromStr for GalaxySurvey {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|survey| survey.name() == s)
            .ok_or_else(|| invalid_parameter("galaxy", &s, &"not a known galaxy survey"))
    }
}

/// One user choice: a CMB experiment, a galaxy survey and display options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Selected CMB experiment, drawn in blue
    pub cmb: CmbExperiment,
    /// Selected galaxy survey, drawn in red
    pub galaxy: GalaxySurvey,
    /// Intersect the CMB footprint with the Galactic foreground mask
    pub add_foregrounds: bool,
    /// Show only pixels seen by both surveys in the overlap view
    pub overlap_only: bool,
}

impl Selection {
    /// Selection with both options off
    pub const fn new(cmb: CmbExperiment, galaxy: GalaxySurvey) -> Self {
        Self {
            cmb,
            galaxy,
            add_foregrounds: false,
            overlap_only: false,
        }
    }

    /// Title of the combined view, `<cmb> x <galaxy>`
    pub fn pair_title(&self) -> String {
        format!("{} x {}", self.cmb, self.galaxy)
    }
}
