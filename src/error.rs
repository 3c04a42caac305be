use std::num::ParseFloatError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Invalid number at row {row}, column {column}: '{value}'")]
    FloatParse {
        row: usize,
        column: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Invalid CSV row {row}: expected at least {expected} columns, got {got}")]
    Columns {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Invalid label line: expected {expected} comma-separated labels, got {got}")]
    Labels { expected: usize, got: usize },

    #[error("Cannot reshape {rows} values into a {ny}x{nx} grid")]
    Shape { rows: usize, nx: usize, ny: usize },

    #[error("Grid cell ({x}, {y}) appears more than once")]
    DuplicateCell { x: f64, y: f64 },

    #[error("Rendering failed: {0}")]
    Render(String),
}
