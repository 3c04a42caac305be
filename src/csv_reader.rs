use crate::constants::{BEST_FITNESS_COLUMN, MEAN_FITNESS_COLUMN, MIN_STAT_COLUMNS};
use crate::error::{PlotError, Result};

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// One row of the heatmap CSV: a sampled point of the heuristic grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSample {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Fitness summary of one generation. The generation number is the row
/// position in the source file, not a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStat {
    pub best_fitness: f64,
    pub mean_fitness: f64,
}

/// Axis labels taken verbatim from the label file. `z` is carried for
/// completeness but not drawn anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
    pub z: String,
}

const GRID_COLUMNS: usize = 3;
const LABEL_COUNT: usize = 3;

/// Reads (x, y, value) grid samples from a CSV file with one header line.
///
/// # Errors
/// Returns an error if the file cannot be read, a row has fewer than three
/// columns, or a field does not parse as a number.
pub fn read_grid_samples<P: AsRef<Path>>(path: P) -> Result<Vec<GridSample>> {
    let file = File::open(path)?;
    read_grid_samples_from_reader(file)
}

pub fn read_grid_samples_from_reader<R: Read>(reader: R) -> Result<Vec<GridSample>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut samples = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 2; // CSV rows are 1-indexed, +1 for the header

        if is_blank(&rec) {
            continue;
        }

        let x = parse_float(&rec, 0, row, GRID_COLUMNS)?;
        let y = parse_float(&rec, 1, row, GRID_COLUMNS)?;
        let value = parse_float(&rec, 2, row, GRID_COLUMNS)?;
        samples.push(GridSample { x, y, value });
    }

    Ok(samples)
}

/// Reads per-generation statistics from a CSV file with one header line.
/// Rows must have at least [`MIN_STAT_COLUMNS`] columns; only the best- and
/// mean-fitness columns are interpreted.
///
/// # Errors
/// Returns an error if the file cannot be read, a row is too short, or a
/// fitness field does not parse as a number.
pub fn read_generation_stats<P: AsRef<Path>>(path: P) -> Result<Vec<GenerationStat>> {
    let file = File::open(path)?;
    read_generation_stats_from_reader(file)
}

pub fn read_generation_stats_from_reader<R: Read>(reader: R) -> Result<Vec<GenerationStat>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut stats = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 2;

        if is_blank(&rec) {
            continue;
        }

        if rec.len() < MIN_STAT_COLUMNS {
            return Err(PlotError::Columns {
                row,
                expected: MIN_STAT_COLUMNS,
                got: rec.len(),
            });
        }

        let best_fitness = parse_float(&rec, BEST_FITNESS_COLUMN, row, MIN_STAT_COLUMNS)?;
        let mean_fitness = parse_float(&rec, MEAN_FITNESS_COLUMN, row, MIN_STAT_COLUMNS)?;
        stats.push(GenerationStat {
            best_fitness,
            mean_fitness,
        });
    }

    Ok(stats)
}

/// Reads the first line of the label file and splits it into the three axis
/// labels (x, y, and the unused z placeholder).
///
/// # Errors
/// Returns an error if the file cannot be read or the line does not contain
/// exactly three comma-separated fields.
pub fn read_axis_labels<P: AsRef<Path>>(path: P) -> Result<AxisLabels> {
    let file = File::open(path)?;
    read_axis_labels_from_reader(file)
}

pub fn read_axis_labels_from_reader<R: Read>(reader: R) -> Result<AxisLabels> {
    let mut first_line = String::new();
    BufReader::new(reader).read_line(&mut first_line)?;

    let fields: Vec<&str> = first_line
        .trim_end_matches(['\r', '\n'])
        .split(',')
        .map(str::trim)
        .collect();

    match fields.as_slice() {
        [x, y, z] => Ok(AxisLabels {
            x: (*x).to_string(),
            y: (*y).to_string(),
            z: (*z).to_string(),
        }),
        _ => Err(PlotError::Labels {
            expected: LABEL_COUNT,
            got: if first_line.trim().is_empty() {
                0
            } else {
                fields.len()
            },
        }),
    }
}

fn is_blank(rec: &StringRecord) -> bool {
    rec.iter().all(|f| f.trim().is_empty())
}

fn parse_float(rec: &StringRecord, column: usize, row: usize, expected: usize) -> Result<f64> {
    let field = rec
        .get(column)
        .map(str::trim)
        .ok_or(PlotError::Columns {
            row,
            expected,
            got: rec.len(),
        })?;

    field.parse().map_err(|source| PlotError::FloatParse {
        row,
        column,
        value: field.to_string(),
        source,
    })
}
