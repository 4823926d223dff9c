use crate::error::Result;
use std::path::PathBuf;
use timetable_engine::engine::{Grid, SheetGrid};

/// A timetable sheet loaded from (or destined for) a CSV file.
#[derive(Debug, Default)]
pub struct TimetableSheet {
    /// The cell grid
    pub grid: SheetGrid,
    /// Current file path
    pub file_path: Option<PathBuf>,
    /// Whether the grid has been modified since load/save
    pub modified: bool,
}

impl TimetableSheet {
    /// Create an empty sheet. Does not touch the filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing grid.
    pub fn from_grid(grid: SheetGrid) -> Self {
        TimetableSheet {
            grid,
            file_path: None,
            modified: false,
        }
    }

    /// Create a sheet and load a file if provided.
    /// A path that does not exist yet is remembered for a later save.
    pub fn with_file(path: Option<PathBuf>) -> Result<Self> {
        let mut sheet = Self::new();
        if let Some(ref p) = path {
            if p.exists() {
                sheet.load_file(p)?;
            } else {
                sheet.file_path = Some(p.clone());
            }
        }
        Ok(sheet)
    }

    /// Number of physical rows.
    pub fn physical_rows(&self) -> usize {
        self.grid.row_count()
    }

    /// Widest populated row.
    pub fn physical_columns(&self) -> usize {
        self.grid.column_count()
    }
}
