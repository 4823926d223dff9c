//! Read-only grid access and the in-memory sheet grid.

/// A read-only, row-major view of trimmed string cells.
///
/// Rows may be ragged. `row_width` reports one past the last non-empty cell
/// of a row, so trailing blanks never widen the sheet.
pub trait Grid {
    /// Number of physical rows.
    fn row_count(&self) -> usize;

    /// One past the last populated column of `row` (0 for blank or missing rows).
    fn row_width(&self, row: usize) -> usize;

    /// The cell at `(row, col)`, or None when the row is shorter or missing.
    fn cell(&self, row: usize, col: usize) -> Option<&str>;

    /// Widest populated row.
    fn column_count(&self) -> usize {
        (0..self.row_count())
            .map(|row| self.row_width(row))
            .max()
            .unwrap_or(0)
    }
}

/// Dense in-memory grid. Cells are trimmed on the way in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SheetGrid {
    rows: Vec<Vec<String>>,
}

impl SheetGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.as_ref().trim().to_string())
                    .collect()
            })
            .collect();
        SheetGrid { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Set a cell, growing the grid with blank cells as needed.
    pub fn set(&mut self, row: usize, col: usize, value: &str) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize_with(col + 1, String::new);
        }
        cells[col] = value.trim().to_string();
    }

    /// Drop every row.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl Grid for SheetGrid {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_width(&self, row: usize) -> usize {
        self.rows
            .get(row)
            .and_then(|cells| cells.iter().rposition(|cell| !cell.is_empty()))
            .map_or(0, |last| last + 1)
    }

    fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_trims_cells() {
        let grid = SheetGrid::from_rows([vec!["  Math ", "\tEng"]]);
        assert_eq!(grid.cell(0, 0), Some("Math"));
        assert_eq!(grid.cell(0, 1), Some("Eng"));
    }

    #[test]
    fn test_trailing_blanks_do_not_extend_width() {
        let grid = SheetGrid::from_rows([vec!["a", "b", "", ""], vec!["x", "", "y"]]);
        assert_eq!(grid.row_width(0), 2);
        assert_eq!(grid.row_width(1), 3);
        assert_eq!(grid.column_count(), 3);
    }

    #[test]
    fn test_blank_and_missing_rows_have_zero_width() {
        let grid = SheetGrid::from_rows([vec!["", ""]]);
        assert_eq!(grid.row_width(0), 0);
        assert_eq!(grid.row_width(5), 0);
        assert_eq!(grid.column_count(), 0);
        assert_eq!(SheetGrid::new().column_count(), 0);
    }

    #[test]
    fn test_cell_outside_ragged_row_is_none() {
        let grid = SheetGrid::from_rows([vec!["a"], vec!["b", "c"]]);
        assert_eq!(grid.cell(0, 1), None);
        assert_eq!(grid.cell(2, 0), None);
    }

    #[test]
    fn test_set_grows_grid() {
        let mut grid = SheetGrid::new();
        grid.set(2, 3, " Bio ");
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.cell(2, 3), Some("Bio"));
        assert_eq!(grid.cell(2, 0), Some(""));
        assert_eq!(grid.row_width(1), 0);

        grid.clear();
        assert!(grid.is_empty());
    }
}
