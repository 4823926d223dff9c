//! Grid-to-timetable extraction.
//!
//! The sheet carries no markup for shifts: each day of each class column is
//! split into a first-shift block and a second-shift block, and a class is
//! assumed to run whichever block has strictly more filled cells. Ties,
//! including a fully empty day, go to the second shift.

use std::ops::Range;

use tracing::{debug, trace};

use super::config::ScheduleConfig;
use super::grid::Grid;
use super::model::{CARRY_OVER_MARKER, Schedule, SchoolClass, SchoolDay, Shift};
use crate::error::{Result, TimetableError};

/// Reads a [`Schedule`] out of a borrowed grid.
///
/// Holds no state besides the grid reference, the configuration and the
/// column bound computed at construction.
pub struct TimetableExtractor<'g, G: Grid + ?Sized> {
    grid: &'g G,
    config: ScheduleConfig,
    rows: usize,
    columns: usize,
}

impl<'g, G: Grid + ?Sized> TimetableExtractor<'g, G> {
    pub fn new(grid: &'g G, config: ScheduleConfig) -> Self {
        TimetableExtractor {
            grid,
            config,
            rows: grid.row_count(),
            columns: grid.column_count(),
        }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Exclusive upper bound of class columns.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    fn read_cell(&self, row: usize, col: usize) -> Result<&'g str> {
        if row >= self.rows || col >= self.columns {
            return Err(TimetableError::out_of_bounds(
                row,
                col,
                self.rows,
                self.columns,
            ));
        }
        Ok(self.grid.cell(row, col).unwrap_or("").trim())
    }

    /// Rows of `shift` on `day`. A day too far out to address is out of bounds.
    fn shift_rows(&self, day: usize, shift: Shift, col: usize) -> Result<Range<usize>> {
        let start = self.config.shift_start_row(day, shift);
        match start.and_then(|start| start.checked_add(self.config.shift_len(shift))) {
            Some(end) => Ok(end - self.config.shift_len(shift)..end),
            None => Err(TimetableError::out_of_bounds(
                start.unwrap_or(usize::MAX),
                col,
                self.rows,
                self.columns,
            )),
        }
    }

    /// Number of filled cells in `shift`'s rows of `day` for a class column.
    pub fn count_lessons(&self, shift: Shift, day: usize, class_index: usize) -> Result<usize> {
        let mut count = 0;
        for row in self.shift_rows(day, shift, class_index)? {
            if !self.read_cell(row, class_index)?.is_empty() {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Shift with strictly more filled cells; ties go to [`Shift::Second`].
    pub fn detect_shift(&self, day: usize, class_index: usize) -> Result<Shift> {
        let first = self.count_lessons(Shift::First, day, class_index)?;
        let second = self.count_lessons(Shift::Second, day, class_index)?;
        let shift = if first > second {
            Shift::First
        } else {
            Shift::Second
        };
        trace!(day, class_index, first, second, %shift, "detected shift");
        Ok(shift)
    }

    /// Lessons of one class on one day, see [`Self::extract_day`].
    pub fn extract_lessons(&self, day: usize, class_index: usize) -> Result<Vec<String>> {
        let shift = self.detect_shift(day, class_index)?;
        self.lessons_in_shift(day, class_index, shift)
    }

    /// Lessons of one class on one day together with the detected shift.
    ///
    /// The shift block is read top to bottom and trailing blanks are dropped;
    /// blanks between lessons are kept as free periods. On a second-shift day
    /// the first-shift rows are then walked bottom to top and every filled
    /// cell is appended with a `!` prefix.
    pub fn extract_day(&self, day: usize, class_index: usize) -> Result<SchoolDay> {
        let shift = self.detect_shift(day, class_index)?;
        let lessons = self.lessons_in_shift(day, class_index, shift)?;
        Ok(SchoolDay::new(lessons, shift))
    }

    fn lessons_in_shift(&self, day: usize, class_index: usize, shift: Shift) -> Result<Vec<String>> {
        let rows = self.shift_rows(day, shift, class_index)?;
        let start = rows.start;

        let mut lessons = Vec::with_capacity(rows.len());
        for row in rows {
            lessons.push(self.read_cell(row, class_index)?.to_string());
        }

        while lessons.last().is_some_and(|lesson| lesson.is_empty()) {
            lessons.pop();
        }

        if shift == Shift::Second {
            for row in (start - self.config.lessons_shift1()..start).rev() {
                let lesson = self.read_cell(row, class_index)?;
                if !lesson.is_empty() {
                    lessons.push(format!("{}{}", CARRY_OVER_MARKER, lesson));
                }
            }
        }

        Ok(lessons)
    }

    /// One class column: header name plus every school day.
    pub fn extract_class(&self, class_index: usize) -> Result<SchoolClass> {
        let name = self.read_cell(self.config.header_row(), class_index)?;
        let days = (0..self.config.school_days_per_week())
            .map(|day| self.extract_day(day, class_index))
            .collect::<Result<Vec<_>>>()?;
        debug!(class_index, name, "extracted class");
        Ok(SchoolClass::new(name, days))
    }

    /// Every class column from the first lesson column to the widest row.
    ///
    /// Fails as a whole on the first out-of-bounds read.
    pub fn extract_schedule(&self) -> Result<Schedule> {
        let classes = (self.config.first_lesson_column()..self.columns)
            .map(|class_index| self.extract_class(class_index))
            .collect::<Result<Vec<_>>>()?;
        debug!(classes = classes.len(), "extracted schedule");
        Ok(Schedule::new(classes))
    }
}
