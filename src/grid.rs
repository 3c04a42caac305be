use crate::csv_reader::GridSample;
use crate::error::{PlotError, Result};

use std::cmp::Ordering;

/// A rectangular grid of values addressed by the sorted unique x and y
/// coordinates of the source samples. Storage is row-major by y.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    values: Vec<f64>,
}

impl ValueGrid {
    /// Builds the grid by scattering every sample into the cell addressed by
    /// its own (x, y) pair, so source row order does not matter.
    ///
    /// # Errors
    /// Returns [`PlotError::Shape`] when the sample count does not equal
    /// `unique(x) * unique(y)`, and [`PlotError::DuplicateCell`] when two
    /// samples address the same cell.
    pub fn from_samples(samples: &[GridSample]) -> Result<Self> {
        let xs = sorted_unique(samples.iter().map(|s| s.x));
        let ys = sorted_unique(samples.iter().map(|s| s.y));

        let nx = xs.len();
        let ny = ys.len();
        if samples.len() != nx * ny {
            return Err(PlotError::Shape {
                rows: samples.len(),
                nx,
                ny,
            });
        }

        let mut values = vec![0.0; nx * ny];
        let mut filled = vec![false; nx * ny];
        for s in samples {
            let ix = coord_index(&xs, s.x).ok_or(PlotError::Shape {
                rows: samples.len(),
                nx,
                ny,
            })?;
            let iy = coord_index(&ys, s.y).ok_or(PlotError::Shape {
                rows: samples.len(),
                nx,
                ny,
            })?;

            let idx = iy * nx + ix;
            if filled[idx] {
                return Err(PlotError::DuplicateCell { x: s.x, y: s.y });
            }
            filled[idx] = true;
            values[idx] = s.value;
        }

        Ok(Self { xs, ys, values })
    }

    pub fn nx(&self) -> usize {
        self.xs.len()
    }

    pub fn ny(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        self.values[iy * self.xs.len() + ix]
    }

    /// Minimum and maximum of the stored values.
    pub fn value_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }

    /// Cell boundaries along x: midpoints between neighboring coordinates,
    /// with the outer edges extended by half the adjacent step.
    pub fn x_edges(&self) -> Vec<f64> {
        cell_edges(&self.xs)
    }

    /// Cell boundaries along y, same construction as [`Self::x_edges`].
    pub fn y_edges(&self) -> Vec<f64> {
        cell_edges(&self.ys)
    }
}

fn sorted_unique<I: Iterator<Item = f64>>(coords: I) -> Vec<f64> {
    let mut out: Vec<f64> = coords.collect();
    out.sort_unstable_by(f64::total_cmp);
    out.dedup_by(|a, b| a == b);
    out
}

fn coord_index(coords: &[f64], value: f64) -> Option<usize> {
    coords
        .binary_search_by(|probe| probe.partial_cmp(&value).unwrap_or(Ordering::Less))
        .ok()
}

fn cell_edges(coords: &[f64]) -> Vec<f64> {
    match coords {
        [] => Vec::new(),
        // A single coordinate gets a unit-width cell around it.
        [only] => vec![only - 0.5, only + 0.5],
        _ => {
            let n = coords.len();
            let mut edges = Vec::with_capacity(n + 1);
            edges.push(coords[0] - (coords[1] - coords[0]) / 2.0);
            for pair in coords.windows(2) {
                edges.push((pair[0] + pair[1]) / 2.0);
            }
            edges.push(coords[n - 1] + (coords[n - 1] - coords[n - 2]) / 2.0);
            edges
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, y: f64, value: f64) -> GridSample {
        GridSample { x, y, value }
    }

    #[test]
    fn builds_two_by_two_grid() {
        let samples = [
            sample(0.0, 0.0, 1.0),
            sample(0.0, 1.0, 2.0),
            sample(1.0, 0.0, 3.0),
            sample(1.0, 1.0, 4.0),
        ];
        let grid = ValueGrid::from_samples(&samples).unwrap();

        assert_eq!(grid.nx(), 2);
        assert_eq!(grid.ny(), 2);
        assert_eq!(grid.value(0, 0), 1.0);
        assert_eq!(grid.value(0, 1), 2.0);
        assert_eq!(grid.value(1, 0), 3.0);
        assert_eq!(grid.value(1, 1), 4.0);
        assert_eq!(grid.value_range(), (1.0, 4.0));
    }

    #[test]
    fn row_order_does_not_matter() {
        let sorted = [
            sample(0.0, 0.0, 1.0),
            sample(1.0, 0.0, 2.0),
            sample(0.0, 1.0, 3.0),
            sample(1.0, 1.0, 4.0),
        ];
        let shuffled = [sorted[3], sorted[0], sorted[2], sorted[1]];

        assert_eq!(
            ValueGrid::from_samples(&sorted).unwrap(),
            ValueGrid::from_samples(&shuffled).unwrap()
        );
    }

    #[test]
    fn incomplete_grid_is_shape_error() {
        let samples = [
            sample(0.0, 0.0, 1.0),
            sample(0.0, 1.0, 2.0),
            sample(1.0, 0.0, 3.0),
        ];
        let err = ValueGrid::from_samples(&samples).unwrap_err();

        assert!(matches!(
            err,
            PlotError::Shape {
                rows: 3,
                nx: 2,
                ny: 2
            }
        ));
    }

    #[test]
    fn duplicate_cell_is_rejected() {
        // Four rows and a 2x2 coordinate set, but (0, 0) appears twice.
        let samples = [
            sample(0.0, 0.0, 1.0),
            sample(0.0, 0.0, 1.5),
            sample(1.0, 0.0, 3.0),
            sample(1.0, 1.0, 4.0),
        ];
        let err = ValueGrid::from_samples(&samples).unwrap_err();

        match err {
            PlotError::DuplicateCell { x, y } => assert_eq!((x, y), (0.0, 0.0)),
            other => panic!("expected DuplicateCell, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_builds_empty_grid() {
        let grid = ValueGrid::from_samples(&[]).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.nx(), 0);
        assert_eq!(grid.ny(), 0);
    }

    #[test]
    fn edges_are_midpoints_with_extended_ends() {
        let samples = [
            sample(0.0, 10.0, 1.0),
            sample(1.0, 10.0, 2.0),
            sample(3.0, 10.0, 3.0),
        ];
        let grid = ValueGrid::from_samples(&samples).unwrap();

        assert_eq!(grid.x_edges(), vec![-0.5, 0.5, 2.0, 4.0]);
        assert_eq!(grid.y_edges(), vec![9.5, 10.5]);
    }
}
