use super::TimetableSheet;
use crate::error::{Result, SheetError};
use crate::storage::{parse_csv_content, write_csv};
use std::path::{Path, PathBuf};
use timetable_engine::engine::Grid;
use tracing::info;

const MAX_SHEET_FILE_BYTES: u64 = 16 * 1_048_576; // 16 MiB

fn read_sheet_file(path: &Path) -> Result<String> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_SHEET_FILE_BYTES {
        return Err(SheetError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "Refusing to read {}: sheet too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_SHEET_FILE_BYTES
            ),
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

impl TimetableSheet {
    /// Load a CSV file, replacing the current grid.
    /// The grid is only replaced once the whole file parsed.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = read_sheet_file(path)?;
        let grid = parse_csv_content(&content)?;
        info!(path = %path.display(), rows = grid.row_count(), "loaded sheet");

        self.grid = grid;
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Save to current file path.
    /// Returns the path saved to.
    pub fn save_file(&mut self) -> Result<PathBuf> {
        let Some(path) = self.file_path.clone() else {
            return Err(SheetError::NoFilePath);
        };
        self.save_as(&path)?;
        Ok(path)
    }

    /// Save to `path` and make it the current file path.
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        write_csv(path, &self.grid)?;
        info!(path = %path.display(), "saved sheet");
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }
}
