pub mod colormap;
pub mod heatmap;
pub mod line_chart;

pub use heatmap::render_heatmap;
pub use line_chart::render_line_chart;

use crate::error::PlotError;
use std::fmt::Display;

fn render_error(err: impl Display) -> PlotError {
    PlotError::Render(err.to_string())
}
