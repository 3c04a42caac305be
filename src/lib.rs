pub mod chart;
pub mod constants;
pub mod csv_reader;
pub mod error;
pub mod grid;

pub use chart::{render_heatmap, render_line_chart};
pub use csv_reader::{
    AxisLabels, GenerationStat, GridSample, read_axis_labels, read_generation_stats,
    read_grid_samples,
};
pub use error::{PlotError, Result};
pub use grid::ValueGrid;
