//! Error types for timetable-core.

use thiserror::Error;

/// Errors from loading, saving or exporting a timetable sheet
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("CSV file is empty")]
    EmptyCsv,

    #[error("No file path set")]
    NoFilePath,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Extract(#[from] timetable_engine::TimetableError),
}

pub type Result<T> = std::result::Result<T, SheetError>;
