//! Error types for the extraction engine.

use thiserror::Error;

use crate::engine::CellRef;

/// Errors that can occur while configuring or running an extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimetableError {
    #[error("Cell {cell} is outside the sheet ({rows} rows x {cols} columns)")]
    OutOfBounds {
        cell: CellRef,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),
}

impl TimetableError {
    pub(crate) fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        TimetableError::OutOfBounds {
            cell: CellRef::new(col, row),
            rows,
            cols,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimetableError>;
