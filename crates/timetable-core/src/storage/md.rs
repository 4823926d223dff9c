//! Markdown export functionality

use super::weekday_name;
use crate::sheet::SheetWriter;
use std::path::Path;
use timetable_engine::engine::{Grid, Schedule, SchoolClass, SheetGrid};

/// Write a schedule to a markdown file
pub fn write_markdown(path: &Path, schedule: &Schedule) -> std::io::Result<()> {
    std::fs::write(path, render_markdown(schedule))
}

/// Render a schedule as markdown: one section and table per class
pub fn render_markdown(schedule: &Schedule) -> String {
    let mut out = String::from("# Timetable\n");

    if schedule.is_empty() {
        out.push_str("\n*Empty timetable*\n");
        return out;
    }

    for class in schedule {
        out.push('\n');
        out.push_str(&format!("## {}\n\n", escape_markdown(class.name())));
        if class.max_lessons() == 0 {
            out.push_str("*No lessons*\n");
        } else {
            out.push_str(&render_table(&class_table(class)));
        }
    }

    out
}

/// Lay out one class: lesson numbers down the side, weekdays across
fn class_table(class: &SchoolClass) -> SheetGrid {
    let mut table = SheetGrid::new();
    table.set_cell(0, 0, "#");
    for (day_idx, day) in class.days().iter().enumerate() {
        let header = format!("{} (shift {})", weekday_name(day_idx), day.shift());
        table.set_cell(0, day_idx + 1, &header);
    }

    for slot in 0..class.max_lessons() {
        table.set_cell(slot + 1, 0, &(slot + 1).to_string());
        for (day_idx, day) in class.days().iter().enumerate() {
            let lesson = day.lessons().get(slot).map_or("", String::as_str);
            table.set_cell(slot + 1, day_idx + 1, &escape_markdown(lesson));
        }
    }

    table
}

/// Render a grid as a markdown table padded to autosized column widths.
/// The first row is the header.
fn render_table(table: &SheetGrid) -> String {
    let widths = table.autosize_columns();
    let mut out = String::new();

    for row in 0..table.row_count() {
        out.push('|');
        for (col, width) in widths.iter().enumerate() {
            let value = table.cell(row, col).unwrap_or("");
            out.push_str(&format!(" {:<width$} |", value, width = width));
        }
        out.push('\n');

        if row == 0 {
            out.push('|');
            for width in &widths {
                out.push_str(&format!("{}|", "-".repeat(width + 2)));
            }
            out.push('\n');
        }
    }

    out
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}
