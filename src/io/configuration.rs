//! Analysis constants and runtime configuration defaults

// Visibility cutoff used for every f_sky value
/// Default threshold above which a pixel counts as visible
pub const DEFAULT_THRESHOLD: f64 = 0.1;

// Mask lookup
/// Directory searched for survey masks
pub const DEFAULT_MASK_DIRECTORY: &str = "masks";
/// File extension of survey masks
pub const MASK_EXTENSION: &str = "fits";

// HEALPix file layout
/// Binary table HDU holding the map column
pub const MAP_HDU_INDEX: usize = 1;
/// Column name used when writing maps
pub const MAP_COLUMN_NAME: &str = "TEMPERATURE";
/// Largest supported resolution parameter
pub const MAX_NSIDE: u32 = 8192;

// Rendering
/// Default width of one Mollweide panel in pixels
pub const DEFAULT_PANEL_WIDTH: u32 = 800;
/// Smallest panel width that still shows the projection outline
pub const MIN_PANEL_WIDTH: u32 = 16;
/// Largest panel width accepted from the command line
pub const MAX_PANEL_WIDTH: u32 = 8000;
/// Horizontal gap between side-by-side panels
pub const PANEL_GAP: u32 = 8;

// Output settings
/// Separator between the two survey names in output filenames
pub const PAIR_SEPARATOR: &str = "_x_";
/// Suffix of the side-by-side survey image
pub const SURVEYS_SUFFIX: &str = "_surveys";
/// Suffix of the combined overlap image
pub const OVERLAP_SUFFIX: &str = "_overlap";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
