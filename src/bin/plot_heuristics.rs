use anyhow::Result;
use log::info;

use ga_plots::constants::{HEATMAP_DATA_PATH, HEATMAP_LABELS_PATH, HEATMAP_OUTPUT_PATH};
use ga_plots::{ValueGrid, read_axis_labels, read_grid_samples, render_heatmap};

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let labels = read_axis_labels(HEATMAP_LABELS_PATH)?;
    let samples = read_grid_samples(HEATMAP_DATA_PATH)?;
    info!("Loaded {} grid samples from {HEATMAP_DATA_PATH}", samples.len());

    let grid = ValueGrid::from_samples(&samples)?;
    info!("Regridded into {} x {} cells", grid.nx(), grid.ny());

    render_heatmap(&grid, &labels, HEATMAP_OUTPUT_PATH)?;
    info!("Heatmap written to {HEATMAP_OUTPUT_PATH}");

    Ok(())
}
