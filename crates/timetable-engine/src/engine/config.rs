//! Sheet layout configuration.

use serde::Serialize;

use super::model::Shift;
use crate::error::{Result, TimetableError};

pub const DEFAULT_FIRST_LESSON_ROW: usize = 2;
pub const DEFAULT_FIRST_LESSON_COLUMN: usize = 2;
pub const DEFAULT_LESSONS_SHIFT1: usize = 6;
pub const DEFAULT_LESSONS_SHIFT2: usize = 5;
pub const DEFAULT_SCHOOL_DAYS_PER_WEEK: usize = 6;

/// Where the lesson block starts and how each day is split into shifts.
///
/// Immutable once built; the only constructor validates, so an extractor
/// can rely on `lessons_per_day == lessons_shift1 + lessons_shift2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScheduleConfig {
    first_lesson_row: usize,
    first_lesson_column: usize,
    lessons_per_day: usize,
    lessons_shift1: usize,
    lessons_shift2: usize,
    school_days_per_week: usize,
}

impl ScheduleConfig {
    pub fn new(
        first_lesson_row: usize,
        first_lesson_column: usize,
        lessons_per_day: usize,
        lessons_shift1: usize,
        lessons_shift2: usize,
        school_days_per_week: usize,
    ) -> Result<Self> {
        if first_lesson_row == 0 {
            return Err(TimetableError::InvalidConfiguration(
                "first_lesson_row must be at least 1 (the row above holds class names)"
                    .to_string(),
            ));
        }
        for (name, value) in [
            ("lessons_per_day", lessons_per_day),
            ("lessons_shift1", lessons_shift1),
            ("lessons_shift2", lessons_shift2),
            ("school_days_per_week", school_days_per_week),
        ] {
            if value == 0 {
                return Err(TimetableError::InvalidConfiguration(format!(
                    "{} must be positive",
                    name
                )));
            }
        }
        if lessons_shift1.checked_add(lessons_shift2) != Some(lessons_per_day) {
            return Err(TimetableError::InvalidConfiguration(format!(
                "lessons_per_day ({}) must equal lessons_shift1 ({}) + lessons_shift2 ({})",
                lessons_per_day, lessons_shift1, lessons_shift2
            )));
        }

        Ok(ScheduleConfig {
            first_lesson_row,
            first_lesson_column,
            lessons_per_day,
            lessons_shift1,
            lessons_shift2,
            school_days_per_week,
        })
    }

    pub fn first_lesson_row(&self) -> usize {
        self.first_lesson_row
    }

    pub fn first_lesson_column(&self) -> usize {
        self.first_lesson_column
    }

    pub fn lessons_per_day(&self) -> usize {
        self.lessons_per_day
    }

    pub fn lessons_shift1(&self) -> usize {
        self.lessons_shift1
    }

    pub fn lessons_shift2(&self) -> usize {
        self.lessons_shift2
    }

    pub fn school_days_per_week(&self) -> usize {
        self.school_days_per_week
    }

    /// Row holding the class names.
    pub fn header_row(&self) -> usize {
        self.first_lesson_row - 1
    }

    /// Number of lesson rows reserved for `shift`.
    pub fn shift_len(&self, shift: Shift) -> usize {
        match shift {
            Shift::First => self.lessons_shift1,
            Shift::Second => self.lessons_shift2,
        }
    }

    /// First row of `shift` on `day`, or `None` if it does not fit in `usize`.
    pub fn shift_start_row(&self, day: usize, shift: Shift) -> Option<usize> {
        let day_start = day
            .checked_mul(self.lessons_per_day)?
            .checked_add(self.first_lesson_row)?;
        match shift {
            Shift::First => Some(day_start),
            Shift::Second => day_start.checked_add(self.lessons_shift1),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            first_lesson_row: DEFAULT_FIRST_LESSON_ROW,
            first_lesson_column: DEFAULT_FIRST_LESSON_COLUMN,
            lessons_per_day: DEFAULT_LESSONS_SHIFT1 + DEFAULT_LESSONS_SHIFT2,
            lessons_shift1: DEFAULT_LESSONS_SHIFT1,
            lessons_shift2: DEFAULT_LESSONS_SHIFT2,
            school_days_per_week: DEFAULT_SCHOOL_DAYS_PER_WEEK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ScheduleConfig::default();
        let rebuilt = ScheduleConfig::new(
            config.first_lesson_row(),
            config.first_lesson_column(),
            config.lessons_per_day(),
            config.lessons_shift1(),
            config.lessons_shift2(),
            config.school_days_per_week(),
        )
        .unwrap();
        assert_eq!(config, rebuilt);
        assert_eq!(config.lessons_per_day(), 11);
    }

    #[test]
    fn test_rejects_mismatched_lesson_counts() {
        let err = ScheduleConfig::new(2, 2, 10, 6, 5, 6).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidConfiguration(ref m) if m.contains("lessons_per_day")));
    }

    #[test]
    fn test_rejects_zero_fields() {
        assert!(ScheduleConfig::new(0, 2, 11, 6, 5, 6).is_err());
        assert!(ScheduleConfig::new(2, 2, 5, 0, 5, 6).is_err());
        assert!(ScheduleConfig::new(2, 2, 6, 6, 0, 6).is_err());
        assert!(ScheduleConfig::new(2, 2, 11, 6, 5, 0).is_err());
        assert!(ScheduleConfig::new(2, 0, 11, 6, 5, 6).is_ok());
    }

    #[test]
    fn test_rejects_overflowing_sum() {
        assert!(ScheduleConfig::new(1, 0, usize::MAX, usize::MAX, 1, 1).is_err());
    }

    #[test]
    fn test_shift_rows() {
        let config = ScheduleConfig::new(3, 1, 11, 6, 5, 6).unwrap();
        assert_eq!(config.header_row(), 2);
        assert_eq!(config.shift_start_row(0, Shift::First), Some(3));
        assert_eq!(config.shift_start_row(0, Shift::Second), Some(9));
        assert_eq!(config.shift_start_row(2, Shift::Second), Some(31));
        assert_eq!(config.shift_len(Shift::First), 6);
        assert_eq!(config.shift_len(Shift::Second), 5);
    }

    #[test]
    fn test_shift_rows_overflow_is_none() {
        let config = ScheduleConfig::new(3, 1, 11, 6, 5, 6).unwrap();
        assert_eq!(config.shift_start_row(usize::MAX / 2, Shift::First), None);
        assert_eq!(config.shift_start_row(usize::MAX / 11, Shift::Second), None);
    }
}
