//! timetable_engine - Weekly school timetable extraction from a lesson grid.

pub mod engine;
pub mod error;

pub use error::{Result, TimetableError};

#[cfg(test)]
mod tests {
    use crate::engine::*;

    const DAYS: usize = 2;

    fn config() -> ScheduleConfig {
        ScheduleConfig::new(2, 2, 11, 6, 5, DAYS).unwrap()
    }

    /// Two header rows, then `DAYS` blocks of 11 lesson rows.
    /// Column 2 runs the first shift, column 3 the second shift with a
    /// carried-over lesson, column 4 is empty apart from its header.
    fn sample_grid() -> SheetGrid {
        let mut rows: Vec<Vec<&str>> = vec![
            vec!["Timetable", "", "", "", ""],
            vec!["Day", "#", "5A", "5B", "5C"],
        ];
        for day in 0..DAYS {
            let day_name = if day == 0 { "Mon" } else { "Tue" };
            let block: [[&str; 3]; 11] = [
                ["Math", "", ""],
                ["Eng", "", ""],
                ["", "", ""],
                ["Bio", "", ""],
                ["", "", ""],
                ["", "Rus", ""],
                ["", "Chem", ""],
                ["", "Hist", ""],
                ["", "", ""],
                ["", "Geo", ""],
                ["", "", ""],
            ];
            for (slot, cells) in block.iter().enumerate() {
                let label = if slot == 0 { day_name } else { "" };
                let mut row = vec![label, ""];
                row.extend(cells.iter().copied());
                rows.push(row);
            }
        }
        SheetGrid::from_rows(rows)
    }

    #[test]
    fn test_schedule_has_one_class_per_column() {
        let grid = sample_grid();
        let extractor = TimetableExtractor::new(&grid, config());
        let schedule = extractor.extract_schedule().unwrap();

        assert_eq!(schedule.len(), grid.column_count() - config().first_lesson_column());
        let names: Vec<&str> = schedule.iter().map(SchoolClass::name).collect();
        assert_eq!(names, vec!["5A", "5B", "5C"]);
        for class in &schedule {
            assert_eq!(class.days().len(), DAYS);
        }
    }

    #[test]
    fn test_schedule_contents() {
        let grid = sample_grid();
        let schedule = TimetableExtractor::new(&grid, config())
            .extract_schedule()
            .unwrap();

        let first = schedule.class("5A").unwrap();
        assert_eq!(first.days()[0].shift(), Shift::First);
        assert_eq!(first.days()[0].lessons(), ["Math", "Eng", "", "Bio"]);

        let second = schedule.class("5B").unwrap();
        assert_eq!(second.days()[1].shift(), Shift::Second);
        assert_eq!(second.days()[1].lessons(), ["Chem", "Hist", "", "Geo", "!Rus"]);

        let empty = schedule.class("5C").unwrap();
        assert!(empty.days().iter().all(|day| day.is_empty()));
        assert!(empty.days().iter().all(|day| day.shift() == Shift::Second));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let grid = sample_grid();
        let extractor = TimetableExtractor::new(&grid, config());
        assert_eq!(
            extractor.extract_schedule().unwrap(),
            extractor.extract_schedule().unwrap()
        );
    }

    #[test]
    fn test_properties_hold_for_every_cell() {
        let grid = sample_grid();
        let config = config();
        let extractor = TimetableExtractor::new(&grid, config);

        for class_index in config.first_lesson_column()..grid.column_count() {
            for day in 0..DAYS {
                let first = extractor.count_lessons(Shift::First, day, class_index).unwrap();
                let second = extractor.count_lessons(Shift::Second, day, class_index).unwrap();
                assert!(first + second <= config.lessons_per_day());

                let shift = extractor.detect_shift(day, class_index).unwrap();
                assert_eq!(shift == Shift::First, first > second);

                let lessons = extractor.extract_lessons(day, class_index).unwrap();
                assert!(lessons.last().is_none_or(|lesson| !lesson.is_empty()));

                let carried: Vec<&String> = lessons
                    .iter()
                    .filter(|lesson| lesson.starts_with(CARRY_OVER_MARKER))
                    .collect();
                if shift == Shift::First {
                    assert!(carried.is_empty());
                }
                assert!(carried.iter().all(|lesson| lesson.len() > 1));
            }
        }
    }

    #[test]
    fn test_trailing_blank_columns_do_not_add_classes() {
        let mut grid = sample_grid();
        grid.set(1, 8, "");
        let schedule = TimetableExtractor::new(&grid, config())
            .extract_schedule()
            .unwrap();
        assert_eq!(schedule.len(), 3);
    }
}
