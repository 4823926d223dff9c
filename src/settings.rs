//! Schedule settings from `schedule.toml`.
//!
//! Every key is optional and falls back to the built-in layout:
//!
//! ```toml
//! first_lesson_cell = "C3"     # or first_lesson_row / first_lesson_column (0-based)
//! lessons_shift1 = 6
//! lessons_shift2 = 5
//! lessons_per_day = 11         # defaults to lessons_shift1 + lessons_shift2
//! school_days_per_week = 6
//! ```

use crate::error::{Result, SettingsError};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use timetable_engine::TimetableError;
use timetable_engine::engine::{CellRef, ScheduleConfig};

const MAX_SETTINGS_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    first_lesson_cell: Option<String>,
    first_lesson_row: Option<usize>,
    first_lesson_column: Option<usize>,
    lessons_per_day: Option<usize>,
    lessons_shift1: Option<usize>,
    lessons_shift2: Option<usize>,
    school_days_per_week: Option<usize>,
}

/// Load the schedule layout.
///
/// An explicit `config_file` must exist. Without one, the user config
/// (`<config dir>/timetable/schedule.toml`) is used when present, otherwise
/// the built-in defaults. Returns the config and the file it came from.
pub fn load_config(config_file: Option<&Path>) -> Result<(ScheduleConfig, Option<PathBuf>)> {
    let path = match config_file {
        Some(path) if !path.exists() => return Err(SettingsError::NotFound(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => match user_settings_path().filter(|path| path.is_file()) {
            Some(path) => path,
            None => return Ok((ScheduleConfig::default(), None)),
        },
    };

    let size = std::fs::metadata(&path)?.len();
    if size > MAX_SETTINGS_FILE_BYTES {
        return Err(SettingsError::TooLarge {
            path,
            size,
            max: MAX_SETTINGS_FILE_BYTES,
        });
    }

    let content = std::fs::read_to_string(&path)?;
    let config = parse_settings(&content)?;
    Ok((config, Some(path)))
}

/// Parse settings TOML and validate it into a [`ScheduleConfig`].
pub fn parse_settings(content: &str) -> Result<ScheduleConfig> {
    let file: SettingsFile = toml::from_str(content)?;
    resolve(file)
}

fn resolve(file: SettingsFile) -> Result<ScheduleConfig> {
    let defaults = ScheduleConfig::default();

    let (first_row, first_column) = match file.first_lesson_cell.as_deref() {
        Some(cell) => {
            if file.first_lesson_row.is_some() || file.first_lesson_column.is_some() {
                return Err(TimetableError::InvalidConfiguration(
                    "first_lesson_cell cannot be combined with first_lesson_row/first_lesson_column"
                        .to_string(),
                )
                .into());
            }
            let cell: CellRef = cell.parse()?;
            (cell.row, cell.col)
        }
        None => (
            file.first_lesson_row.unwrap_or(defaults.first_lesson_row()),
            file.first_lesson_column
                .unwrap_or(defaults.first_lesson_column()),
        ),
    };

    let shift1 = file.lessons_shift1.unwrap_or(defaults.lessons_shift1());
    let shift2 = file.lessons_shift2.unwrap_or(defaults.lessons_shift2());
    let per_day = file.lessons_per_day.unwrap_or(shift1.saturating_add(shift2));
    let days = file
        .school_days_per_week
        .unwrap_or(defaults.school_days_per_week());

    Ok(ScheduleConfig::new(
        first_row,
        first_column,
        per_day,
        shift1,
        shift2,
        days,
    )?)
}

fn user_settings_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "timetable")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("schedule.toml");
    Some(path)
}
