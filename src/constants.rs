//! Fixed experiment wiring: input/output paths, titles and figure geometry.

pub const HEATMAP_DATA_PATH: &str = "data/output2d.csv";
pub const HEATMAP_LABELS_PATH: &str = "test_output.csv";
pub const HEATMAP_OUTPUT_PATH: &str = "data/output2d.jpg";

pub const STATS_DATA_PATH: &str = "data/test.csv";
pub const STATS_OUTPUT_PATH: &str = "data/test_output.jpg";

pub const HEATMAP_TITLE: &str = "Wpływ 2 heurystyk na fitness score";
pub const STATS_TITLE: &str = "Wynik badania dla n=1000, n_drops=5000";
pub const STATS_X_LABEL: &str = "Pokolenie";
pub const STATS_Y_LABEL: &str = "Fitness";

/// Column layout of the per-generation statistics CSV.
pub const BEST_FITNESS_COLUMN: usize = 5;
pub const MEAN_FITNESS_COLUMN: usize = 6;
pub const MIN_STAT_COLUMNS: usize = 7;

/// Output resolution in dots per inch.
pub const DPI: u32 = 600;
/// Figure sizes in inches; pixel dimensions are figsize * DPI.
pub const HEATMAP_FIGSIZE: (f64, f64) = (8.0, 6.0);
pub const LINE_CHART_FIGSIZE: (f64, f64) = (6.4, 4.8);
