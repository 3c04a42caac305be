use anyhow::Result;
use log::info;

use ga_plots::constants::{
    STATS_DATA_PATH, STATS_OUTPUT_PATH, STATS_X_LABEL, STATS_Y_LABEL,
};
use ga_plots::{read_generation_stats, render_line_chart};

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let stats = read_generation_stats(STATS_DATA_PATH)?;
    info!("Loaded {} generations from {STATS_DATA_PATH}", stats.len());

    render_line_chart(&stats, STATS_X_LABEL, STATS_Y_LABEL, STATS_OUTPUT_PATH)?;
    info!("Fitness chart written to {STATS_OUTPUT_PATH}");

    Ok(())
}
