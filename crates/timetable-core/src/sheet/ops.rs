use super::TimetableSheet;
use crate::error::Result;
use crate::storage::weekday_name;
use timetable_engine::engine::{Grid, Schedule, ScheduleConfig, SheetGrid, TimetableExtractor};
use tracing::debug;

/// Write side of a sheet. Kept apart from the read-only [`Grid`] so the
/// extractor can never mutate what it reads.
pub trait SheetWriter {
    /// Set a cell, growing the sheet as needed.
    fn set_cell(&mut self, row: usize, col: usize, value: &str);

    /// Remove every row.
    fn clear_all(&mut self);

    /// Display width (in chars, at least 1) of the widest cell per column.
    fn autosize_columns(&self) -> Vec<usize>;
}

impl SheetWriter for SheetGrid {
    fn set_cell(&mut self, row: usize, col: usize, value: &str) {
        self.set(row, col, value);
    }

    fn clear_all(&mut self) {
        self.clear();
    }

    fn autosize_columns(&self) -> Vec<usize> {
        let mut widths = vec![1; self.column_count()];
        for row in self.rows() {
            for (col, cell) in row.iter().enumerate().take(widths.len()) {
                widths[col] = widths[col].max(cell.chars().count());
            }
        }
        widths
    }
}

impl SheetWriter for TimetableSheet {
    fn set_cell(&mut self, row: usize, col: usize, value: &str) {
        self.grid.set_cell(row, col, value);
        self.modified = true;
    }

    fn clear_all(&mut self) {
        self.grid.clear_all();
        self.modified = true;
    }

    fn autosize_columns(&self) -> Vec<usize> {
        self.grid.autosize_columns()
    }
}

impl TimetableSheet {
    /// Extract the weekly schedule from the current grid.
    pub fn extract(&self, config: ScheduleConfig) -> Result<Schedule> {
        let schedule = TimetableExtractor::new(&self.grid, config).extract_schedule()?;
        Ok(schedule)
    }

    /// Replace the sheet with a normalized layout of `schedule`.
    ///
    /// Row 0 is `Day, #, <class names>`. Each day then takes as many rows as
    /// its busiest class (at least one), with the weekday name on the day's
    /// first row and 1-based lesson numbers in column 1.
    pub fn write_schedule(&mut self, schedule: &Schedule) {
        self.clear_all();

        self.set_cell(0, 0, "Day");
        self.set_cell(0, 1, "#");
        for (idx, class) in schedule.iter().enumerate() {
            self.set_cell(0, idx + 2, class.name());
        }

        let mut row = 1;
        for day in 0..schedule.days_per_week() {
            let slots = schedule
                .iter()
                .filter_map(|class| class.day(day))
                .map(|school_day| school_day.lessons().len())
                .max()
                .unwrap_or(0);

            self.set_cell(row, 0, &weekday_name(day));
            for slot in 0..slots.max(1) {
                if slot < slots {
                    self.set_cell(row + slot, 1, &(slot + 1).to_string());
                }
                for (idx, class) in schedule.iter().enumerate() {
                    let lesson = class
                        .day(day)
                        .and_then(|school_day| school_day.lessons().get(slot))
                        .map_or("", String::as_str);
                    self.set_cell(row + slot, idx + 2, lesson);
                }
            }
            row += slots.max(1);
        }

        debug!(rows = row, classes = schedule.len(), "wrote schedule layout");
    }
}
