//! Command-line interface for computing and rendering survey overlaps

use crate::analysis::CoverageReport;
use crate::io::configuration::{
    DEFAULT_MASK_DIRECTORY, DEFAULT_PANEL_WIDTH, DEFAULT_THRESHOLD, MAX_PANEL_WIDTH,
    MIN_PANEL_WIDTH, OVERLAP_SUFFIX, PAIR_SEPARATOR, SURVEYS_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_panels_as_png;
use crate::io::progress::ProgressManager;
use crate::sky::MollweideGrid;
use crate::survey::{CmbExperiment, GalaxySurvey, MaskLoader, Selection};
use clap::{ArgAction, Parser};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skyoverlap")]
#[command(
    author,
    version,
    about = "Visualize overlaps between CMB experiments and galaxy surveys"
)]
/// Command-line arguments for the overlap tool
// Display options are independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// CMB experiment (drawn in blue)
    #[arg(short, long, value_enum, default_value_t = CmbExperiment::PlanckGal70)]
    pub cmb: CmbExperiment,

    /// Galaxy survey (drawn in red)
    #[arg(short, long, value_enum, default_value_t = GalaxySurvey::BossDr10)]
    pub galaxy: GalaxySurvey,

    /// Directory holding `<survey>.fits` masks
    #[arg(short, long, default_value = DEFAULT_MASK_DIRECTORY)]
    pub masks: PathBuf,

    /// Intersect the CMB footprint with the Planck Galactic foreground mask
    #[arg(short, long)]
    pub foregrounds: bool,

    /// Show only the overlap of the two surveys in the combined map
    #[arg(long)]
    pub overlap_only: bool,

    /// Mask value above which a pixel counts as visible
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Directory for rendered maps
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Width of each rendered panel in pixels
    #[arg(short, long, default_value_t = DEFAULT_PANEL_WIDTH)]
    pub width: u32,

    /// Only print sky fractions
    #[arg(long)]
    pub no_render: bool,

    /// List the available surveys and exit
    #[arg(short, long)]
    pub list: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Selection described by the survey and display flags
    pub const fn selection(&self) -> Selection {
        Selection {
            cmb: self.cmb,
            galaxy: self.galaxy,
            add_foregrounds: self.foregrounds,
            overlap_only: self.overlap_only,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check argument ranges clap cannot express
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a threshold outside `[0, 1)` or a panel
    /// width outside the supported range
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.threshold) {
            return Err(invalid_parameter(
                "threshold",
                &self.threshold,
                &"must lie in [0, 1)",
            ));
        }
        if !(MIN_PANEL_WIDTH..=MAX_PANEL_WIDTH).contains(&self.width) {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &format!("must lie in [{MIN_PANEL_WIDTH}, {MAX_PANEL_WIDTH}]"),
            ));
        }
        Ok(())
    }
}

/// Set up the `env_logger` backend from the `-v` count
///
/// `RUST_LOG` still applies on top of the chosen level.
pub fn setup_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.format_target(false);
    builder.filter_level(match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    });
    builder.parse_default_env();
    let _ = builder.try_init();
}

/// Runs one analysis pass and writes its outputs
pub struct OverlapProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl OverlapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process the selection given on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, mask loading, analysis or
    /// rendering fails
    // Fractions and catalogs are the tool's output
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        if self.cli.list {
            println!("{}", Self::catalog_listing());
            return Ok(());
        }

        self.cli.validate()?;

        let selection = self.cli.selection();
        let loader = MaskLoader::new(&self.cli.masks);
        let report = CoverageReport::analyze(selection, &loader, self.cli.threshold)?;

        println!("{report}");

        if self.cli.no_render {
            return Ok(());
        }

        let grid = MollweideGrid::with_width(self.cli.width);
        let surveys_path = self.output_path(SURVEYS_SUFFIX);
        export_panels_as_png(
            &[
                (selection.cmb.name(), report.cmb_panel.view()),
                (selection.galaxy.name(), report.galaxy_panel.view()),
            ],
            grid,
            &surveys_path,
            self.progress_manager.as_mut(),
        )?;
        info!("Wrote {}", surveys_path.display());

        let overlap_path = self.output_path(OVERLAP_SUFFIX);
        let overlap_title = selection.pair_title();
        export_panels_as_png(
            &[(overlap_title.as_str(), report.overlap_map.view())],
            grid,
            &overlap_path,
            self.progress_manager.as_mut(),
        )?;
        info!("Wrote {}", overlap_path.display());

        Ok(())
    }

    /// Both catalogs, one survey name per line
    pub fn catalog_listing() -> String {
        let mut listing = String::from("CMB experiments:");
        for experiment in CmbExperiment::ALL {
            listing.push_str("\n  ");
            listing.push_str(experiment.name());
        }
        listing.push_str("\nGalaxy surveys:");
        for survey in GalaxySurvey::ALL {
            listing.push_str("\n  ");
            listing.push_str(survey.name());
        }
        listing
    }

    /// Output file for the selected pair with the given suffix
    pub fn output_path(&self, suffix: &str) -> PathBuf {
        let name = format!(
            "{}{PAIR_SEPARATOR}{}{suffix}.png",
            self.cli.cmb.name(),
            self.cli.galaxy.name()
        );
        self.cli.output.join(name)
    }
}
