//! CSV import/export of timetable grids

use crate::error::{Result, SheetError};
use std::io::Write;
use std::path::Path;
use timetable_engine::engine::{Grid, SheetGrid};

/// Parse a CSV file into a grid, one row per line
pub fn parse_csv(path: &Path) -> Result<SheetGrid> {
    let content = std::fs::read_to_string(path)?;
    parse_csv_content(&content)
}

/// Parse CSV text into a grid
pub fn parse_csv_content(content: &str) -> Result<SheetGrid> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    if content.trim().is_empty() {
        return Err(SheetError::EmptyCsv);
    }
    Ok(SheetGrid::from_rows(parse_records(content)?))
}

/// Split CSV text into records. Quoted fields may span lines.
fn parse_records(content: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                // Doubled quote inside a quoted field
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    current.push(c);
                }
                _ => current.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current).trim().to_string()),
                '\n' => {
                    fields.push(std::mem::take(&mut current).trim().to_string());
                    rows.push(std::mem::take(&mut fields));
                    line += 1;
                    record_line = line;
                }
                _ => current.push(c),
            }
        }
    }

    if in_quotes {
        return Err(SheetError::Parse {
            line: record_line,
            message: "Unterminated quoted field".to_string(),
        });
    }
    if !content.ends_with('\n') {
        fields.push(current.trim().to_string());
        rows.push(fields);
    }
    Ok(rows)
}

/// Write a grid to a CSV file
pub fn write_csv(path: &Path, grid: &SheetGrid) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(write_csv_content(grid).as_bytes())?;
    Ok(())
}

/// Render a grid as CSV text. Rows are padded to the widest populated row.
pub fn write_csv_content(grid: &SheetGrid) -> String {
    let width = grid.column_count();
    let mut out = String::new();

    for row in 0..grid.row_count() {
        let fields: Vec<String> = (0..width)
            .map(|col| escape_csv_field(grid.cell(row, col).unwrap_or("")))
            .collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

/// Escape a field for CSV output
fn escape_csv_field(field: &str) -> String {
    // Guard against CSV formula injection in spreadsheet apps.
    let first_non_space = field.trim_start_matches([' ', '\t']).chars().next();
    let safe_field = if matches!(first_non_space, Some('=' | '+' | '-' | '@')) {
        format!("'{}", field)
    } else {
        field.to_string()
    };

    if safe_field.contains(',')
        || safe_field.contains('"')
        || safe_field.contains('\n')
        || safe_field.contains('\r')
    {
        format!("\"{}\"", safe_field.replace('"', "\"\""))
    } else {
        safe_field
    }
}
