use super::colormap::{normalized, viridis};
use super::render_error;
use crate::constants::{DPI, HEATMAP_FIGSIZE, HEATMAP_TITLE};
use crate::csv_reader::AxisLabels;
use crate::error::Result;
use crate::grid::ValueGrid;

use log::debug;
use plotters::prelude::*;
use std::path::Path;

const MARGIN: u32 = 60;
const X_LABEL_AREA: u32 = 260;
const Y_LABEL_AREA: u32 = 340;
const CAPTION_SIZE: u32 = 160;
const COLORBAR_WIDTH: u32 = 560;
const COLORBAR_LABEL_AREA: u32 = 250;
const COLORBAR_STEPS: usize = 256;

/// Renders the grid as a pseudocolor mesh with a color scale bar on the
/// right and writes it to `out_path` (JPEG, overwriting any existing file).
pub fn render_heatmap<P: AsRef<Path>>(
    grid: &ValueGrid,
    labels: &AxisLabels,
    out_path: P,
) -> Result<()> {
    let width = (HEATMAP_FIGSIZE.0 * f64::from(DPI)) as u32;
    let height = (HEATMAP_FIGSIZE.1 * f64::from(DPI)) as u32;
    debug!("rendering {width}x{height} heatmap");

    let root = BitMapBackend::new(out_path.as_ref(), (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let (mesh_area, bar_area) = root.split_horizontally((width - COLORBAR_WIDTH) as i32);

    let x_edges = grid.x_edges();
    let y_edges = grid.y_edges();
    let (x_min, x_max) = edge_span(&x_edges);
    let (y_min, y_max) = edge_span(&y_edges);
    let (vmin, vmax) = value_span(grid);

    // Size the mesh box so the x and y data ranges share one scale.
    let (area_w, area_h) = mesh_area.dim_in_pixel();
    let avail_w = area_w.saturating_sub(Y_LABEL_AREA + 2 * MARGIN).max(1);
    let avail_h = area_h
        .saturating_sub(X_LABEL_AREA + CAPTION_SIZE + 2 * MARGIN)
        .max(1);
    let aspect = (x_max - x_min) / (y_max - y_min);
    let (mesh_w, mesh_h) = if f64::from(avail_w) > f64::from(avail_h) * aspect {
        ((f64::from(avail_h) * aspect) as u32, avail_h)
    } else {
        (avail_w, (f64::from(avail_w) / aspect) as u32)
    };
    let pad_x = avail_w - mesh_w;
    let pad_y = avail_h - mesh_h;

    let mut chart = ChartBuilder::on(&mesh_area)
        .caption(HEATMAP_TITLE, ("sans-serif", CAPTION_SIZE as i32))
        .margin_left((MARGIN + pad_x / 2) as i32)
        .margin_right((MARGIN + pad_x - pad_x / 2) as i32)
        .margin_top((MARGIN + pad_y / 2) as i32)
        .margin_bottom((MARGIN + pad_y - pad_y / 2) as i32)
        .x_label_area_size(X_LABEL_AREA as i32)
        .y_label_area_size(Y_LABEL_AREA as i32)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(labels.x.as_str())
        .y_desc(labels.y.as_str())
        .label_style(("sans-serif", 80))
        .axis_desc_style(("sans-serif", 100))
        .draw()
        .map_err(render_error)?;

    let cells = (0..grid.ny()).flat_map(|iy| (0..grid.nx()).map(move |ix| (ix, iy)));
    chart
        .draw_series(cells.map(|(ix, iy)| {
            let t = normalized(grid.value(ix, iy), vmin, vmax);
            Rectangle::new(
                [
                    (x_edges[ix], y_edges[iy]),
                    (x_edges[ix + 1], y_edges[iy + 1]),
                ],
                viridis(t).filled(),
            )
        }))
        .map_err(render_error)?;

    draw_colorbar(&bar_area, vmin, vmax, pad_y)?;

    root.present().map_err(render_error)?;
    Ok(())
}

/// Vertical gradient of the color ramp over [vmin, vmax], with value ticks.
fn draw_colorbar<DB>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    vmin: f64,
    vmax: f64,
    pad_y: u32,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let mut bar = ChartBuilder::on(area)
        .margin_top((MARGIN + CAPTION_SIZE + pad_y / 2) as i32)
        .margin_bottom((MARGIN + X_LABEL_AREA + pad_y - pad_y / 2) as i32)
        .margin_right(MARGIN as i32)
        .y_label_area_size(COLORBAR_LABEL_AREA as i32)
        .build_cartesian_2d(0.0..1.0, vmin..vmax)
        .map_err(render_error)?;

    bar.configure_mesh()
        .disable_mesh()
        .y_labels(6)
        .label_style(("sans-serif", 70))
        .draw()
        .map_err(render_error)?;

    bar.draw_series((0..COLORBAR_STEPS).map(|i| {
        let t0 = i as f64 / COLORBAR_STEPS as f64;
        let t1 = (i + 1) as f64 / COLORBAR_STEPS as f64;
        Rectangle::new(
            [
                (0.0, vmin + t0 * (vmax - vmin)),
                (1.0, vmin + t1 * (vmax - vmin)),
            ],
            viridis(t0).filled(),
        )
    }))
    .map_err(render_error)?;

    Ok(())
}

fn edge_span(edges: &[f64]) -> (f64, f64) {
    match (edges.first(), edges.last()) {
        (Some(&first), Some(&last)) if last > first => (first, last),
        _ => (0.0, 1.0),
    }
}

fn value_span(grid: &ValueGrid) -> (f64, f64) {
    let (min, max) = grid.value_range();
    if max > min {
        (min, max)
    } else if min.is_finite() {
        (min, min + 1.0)
    } else {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_reader::GridSample;
    use tempfile::TempDir;

    fn labels() -> AxisLabels {
        AxisLabels {
            x: "X".to_string(),
            y: "Y".to_string(),
            z: "Z".to_string(),
        }
    }

    fn two_by_two() -> ValueGrid {
        let samples = [
            GridSample {
                x: 0.0,
                y: 0.0,
                value: 1.0,
            },
            GridSample {
                x: 0.0,
                y: 1.0,
                value: 2.0,
            },
            GridSample {
                x: 1.0,
                y: 0.0,
                value: 3.0,
            },
            GridSample {
                x: 1.0,
                y: 1.0,
                value: 4.0,
            },
        ];
        ValueGrid::from_samples(&samples).unwrap()
    }

    #[test]
    fn renders_two_by_two_grid() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("heatmap.jpg");

        render_heatmap(&two_by_two(), &labels(), &out).unwrap();

        assert!(out.exists());
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
        assert_eq!(image::image_dimensions(&out).unwrap(), (4800, 3600));
    }

    #[test]
    fn rendering_is_dimension_stable() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.jpg");
        let second = dir.path().join("b.jpg");
        let grid = two_by_two();

        render_heatmap(&grid, &labels(), &first).unwrap();
        render_heatmap(&grid, &labels(), &second).unwrap();

        assert_eq!(
            image::image_dimensions(&first).unwrap(),
            image::image_dimensions(&second).unwrap()
        );
    }

    #[test]
    fn overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("heatmap.jpg");
        std::fs::write(&out, b"stale").unwrap();

        render_heatmap(&two_by_two(), &labels(), &out).unwrap();

        assert_eq!(image::image_dimensions(&out).unwrap(), (4800, 3600));
    }

    #[test]
    fn renders_single_row_grid() {
        let samples = [
            GridSample {
                x: 0.0,
                y: 5.0,
                value: 1.0,
            },
            GridSample {
                x: 1.0,
                y: 5.0,
                value: 2.0,
            },
        ];
        let grid = ValueGrid::from_samples(&samples).unwrap();

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("row.jpg");
        render_heatmap(&grid, &labels(), &out).unwrap();

        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }
}
