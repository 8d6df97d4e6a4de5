// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{LIGHTBLUE, ORANGE};
use plotters::style::RGBColor;

// --- Simulation Defaults ---

// Grid edge length in samples. Both the near and the far field use the same grid.
pub const DEFAULT_GRID_SIZE: usize = 100;

// Samples per lattice unit: sample coordinates advance by 1/step per grid index.
pub const DEFAULT_SAMPLE_STEP: f64 = 10.0;

// Coordinate offset of the far field. Large enough that f64 lattice fractions
// start losing bits.
pub const DEFAULT_FAR_OFFSET: f64 = 100_000_000.0;

pub const DEFAULT_SEED: u64 = 0;

// Stem for all generated output files.
pub const DEFAULT_OUTPUT_ROOT: &str = "perlin_drift";

// --- Noise Lattice ---

// Size of the lattice permutation table before doubling.
pub const PERMUTATION_SIZE: usize = 256;

// Theoretical output bounds of the noise function (axis-aligned unit gradients).
pub const NOISE_VALUE_MIN: f64 = -1.0;
pub const NOISE_VALUE_MAX: f64 = 1.0;

// --- Histogram / Entropy ---

pub const HISTOGRAM_BINS: usize = 20;

// Additive floor inside ln() so empty bins contribute zero instead of NaN.
pub const ENTROPY_LOG_FLOOR: f64 = 1e-10;

// --- Verdict Thresholds ---

// A far/near continuity ratio above this flags degradation.
pub const DIFF_RATIO_THRESHOLD: f64 = 1.3;

// Range and entropy ratios outside these bands flag degradation.
pub const RANGE_RATIO_LOW: f64 = 0.8;
pub const RANGE_RATIO_HIGH: f64 = 1.2;
pub const ENTROPY_RATIO_LOW: f64 = 0.8;
pub const ENTROPY_RATIO_HIGH: f64 = 1.2;

// --- Plot Dimensions ---

pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// --- Font Sizes ---

pub const FONT_SIZE_MAIN_TITLE: i32 = 30;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// --- Plot Color Assignments ---

pub const COLOR_NEAR_FIELD: &RGBColor = &LIGHTBLUE;
pub const COLOR_FAR_FIELD: &RGBColor = &ORANGE;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// src/constants.rs
