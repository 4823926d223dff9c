//! Timetable extraction API.
//!
//! - [`Grid`], [`SheetGrid`] - Read-only cell access and the in-memory grid
//! - [`CellRef`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`ScheduleConfig`] - Sheet layout: where lessons start, shift sizes, days
//! - [`TimetableExtractor`] - Shift detection, lesson blocks, schedule assembly
//! - [`Schedule`], [`SchoolClass`], [`SchoolDay`], [`Shift`] - Extracted records

mod cell_ref;
mod config;
mod extract;
mod grid;
mod model;

pub use cell_ref::CellRef;
pub use config::{
    DEFAULT_FIRST_LESSON_COLUMN, DEFAULT_FIRST_LESSON_ROW, DEFAULT_LESSONS_SHIFT1,
    DEFAULT_LESSONS_SHIFT2, DEFAULT_SCHOOL_DAYS_PER_WEEK, ScheduleConfig,
};
pub use extract::TimetableExtractor;
pub use grid::{Grid, SheetGrid};
pub use model::{CARRY_OVER_MARKER, Schedule, SchoolClass, SchoolDay, Shift};
