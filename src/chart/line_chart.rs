use super::render_error;
use crate::constants::{DPI, LINE_CHART_FIGSIZE, STATS_TITLE};
use crate::csv_reader::GenerationStat;
use crate::error::Result;

use log::debug;
use plotters::prelude::*;
use std::path::Path;

const MARGIN: i32 = 50;
const X_LABEL_AREA: i32 = 240;
const Y_LABEL_AREA: i32 = 320;
const CAPTION_SIZE: i32 = 130;
const LINE_WIDTH: u32 = 10;

const BEST_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const MEAN_COLOR: RGBColor = RGBColor(0xff, 0x7f, 0x0e);

/// Renders the best/mean fitness history against the generation index and
/// writes it to `out_path` (JPEG, overwriting any existing file).
pub fn render_line_chart<P: AsRef<Path>>(
    stats: &[GenerationStat],
    x_label: &str,
    y_label: &str,
    out_path: P,
) -> Result<()> {
    let width = (LINE_CHART_FIGSIZE.0 * f64::from(DPI)) as u32;
    let height = (LINE_CHART_FIGSIZE.1 * f64::from(DPI)) as u32;
    debug!("rendering {width}x{height} line chart with {} points", stats.len());

    let root = BitMapBackend::new(out_path.as_ref(), (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let x_max = if stats.len() > 1 {
        (stats.len() - 1) as f64
    } else {
        1.0
    };
    let (y_min, y_max) = fitness_range(stats);

    let mut chart = ChartBuilder::on(&root)
        .caption(STATS_TITLE, ("sans-serif", CAPTION_SIZE))
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(("sans-serif", 70))
        .axis_desc_style(("sans-serif", 90))
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(LineSeries::new(
            series_points(stats, |s| s.best_fitness),
            BEST_COLOR.stroke_width(LINE_WIDTH),
        ))
        .map_err(render_error)?
        .label("Best Fitness")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 60, y)], BEST_COLOR.stroke_width(LINE_WIDTH))
        });

    chart
        .draw_series(LineSeries::new(
            series_points(stats, |s| s.mean_fitness),
            MEAN_COLOR.stroke_width(LINE_WIDTH),
        ))
        .map_err(render_error)?
        .label("Mean Fitness")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 60, y)], MEAN_COLOR.stroke_width(LINE_WIDTH))
        });

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 80))
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

fn series_points<'a, F>(
    stats: &'a [GenerationStat],
    select: F,
) -> impl Iterator<Item = (f64, f64)> + 'a
where
    F: Fn(&GenerationStat) -> f64 + 'a,
{
    stats
        .iter()
        .enumerate()
        .map(move |(i, s)| (i as f64, select(s)))
}

/// Y range over both series with a small margin; falls back to a unit span
/// for flat or empty input.
fn fitness_range(stats: &[GenerationStat]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in stats {
        min = min.min(s.best_fitness).min(s.mean_fitness);
        max = max.max(s.best_fitness).max(s.mean_fitness);
    }

    if max > min {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    } else if min.is_finite() {
        (min - 0.5, min + 0.5)
    } else {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn stat(best: f64, mean: f64) -> GenerationStat {
        GenerationStat {
            best_fitness: best,
            mean_fitness: mean,
        }
    }

    #[test]
    fn renders_three_generations() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("stats.jpg");
        let stats = [stat(10.0, 5.0), stat(12.0, 6.0), stat(15.0, 8.0)];

        render_line_chart(&stats, "Pokolenie", "Fitness", &out).unwrap();

        assert!(out.exists());
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
        assert_eq!(image::image_dimensions(&out).unwrap(), (3840, 2880));
    }

    #[test]
    fn renders_empty_input_as_bare_frame() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("empty.jpg");

        render_line_chart(&[], "Pokolenie", "Fitness", &out).unwrap();

        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn rendering_is_dimension_stable() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.jpg");
        let second = dir.path().join("b.jpg");
        let stats = [stat(1.0, 0.5), stat(2.0, 1.0)];

        render_line_chart(&stats, "Pokolenie", "Fitness", &first).unwrap();
        render_line_chart(&stats, "Pokolenie", "Fitness", &second).unwrap();

        assert_eq!(
            image::image_dimensions(&first).unwrap(),
            image::image_dimensions(&second).unwrap()
        );
    }

    #[test]
    fn flat_series_get_a_unit_span() {
        assert_eq!(fitness_range(&[stat(3.0, 3.0)]), (2.5, 3.5));
        assert_eq!(fitness_range(&[]), (0.0, 1.0));
    }
}
