//! Error types for the timetable binary

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading schedule settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(
        "Refusing to read {}: file too large ({} bytes, max {})",
        .path.display(),
        .size,
        .max
    )]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Config(#[from] timetable_engine::TimetableError),
}

pub type Result<T> = std::result::Result<T, SettingsError>;
