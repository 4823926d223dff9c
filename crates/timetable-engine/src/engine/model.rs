//! Extracted timetable records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix marking a lesson read from the first-shift rows of a second-shift day.
pub const CARRY_OVER_MARKER: char = '!';

/// One of the two daily sessions. Serialized as `1` or `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Shift {
    First,
    Second,
}

impl Shift {
    pub fn number(self) -> u8 {
        match self {
            Shift::First => 1,
            Shift::Second => 2,
        }
    }
}

impl From<Shift> for u8 {
    fn from(shift: Shift) -> u8 {
        shift.number()
    }
}

impl TryFrom<u8> for Shift {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Shift::First),
            2 => Ok(Shift::Second),
            other => Err(format!("shift must be 1 or 2, got {}", other)),
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Lessons of one class on one weekday.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolDay {
    lessons: Vec<String>,
    shift: Shift,
}

impl SchoolDay {
    pub fn new(lessons: Vec<String>, shift: Shift) -> Self {
        SchoolDay { lessons, shift }
    }

    /// Lessons in slot order; carry-over lessons come last, prefixed with `!`.
    pub fn lessons(&self) -> &[String] {
        &self.lessons
    }

    pub fn shift(&self) -> Shift {
        self.shift
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Carry-over lessons with the marker stripped.
    pub fn carried_over(&self) -> impl Iterator<Item = &str> {
        self.lessons
            .iter()
            .filter_map(|lesson| lesson.strip_prefix(CARRY_OVER_MARKER))
    }
}

/// A class column: its header name and one day per school weekday.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClass {
    name: String,
    days: Vec<SchoolDay>,
}

impl SchoolClass {
    pub fn new(name: impl Into<String>, days: Vec<SchoolDay>) -> Self {
        SchoolClass {
            name: name.into(),
            days,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn days(&self) -> &[SchoolDay] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Option<&SchoolDay> {
        self.days.get(index)
    }

    /// Length of the busiest day.
    pub fn max_lessons(&self) -> usize {
        self.days.iter().map(|day| day.lessons.len()).max().unwrap_or(0)
    }
}

/// Every class of the sheet in column order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    classes: Vec<SchoolClass>,
}

impl Schedule {
    pub fn new(classes: Vec<SchoolClass>) -> Self {
        Schedule { classes }
    }

    pub fn classes(&self) -> &[SchoolClass] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchoolClass> {
        self.classes.iter()
    }

    /// First class whose header matches `name`.
    pub fn class(&self, name: &str) -> Option<&SchoolClass> {
        self.classes.iter().find(|class| class.name == name)
    }

    /// Number of weekdays; every class carries the same count.
    pub fn days_per_week(&self) -> usize {
        self.classes.first().map_or(0, |class| class.days.len())
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a SchoolClass;
    type IntoIter = std::slice::Iter<'a, SchoolClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}

impl IntoIterator for Schedule {
    type Item = SchoolClass;
    type IntoIter = std::vec::IntoIter<SchoolClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lessons(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_shift_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Shift::Second).unwrap(), "2");
        let shift: Shift = serde_json::from_str("1").unwrap();
        assert_eq!(shift, Shift::First);
        assert!(serde_json::from_str::<Shift>("3").is_err());
    }

    #[test]
    fn test_carried_over_strips_marker() {
        let day = SchoolDay::new(lessons(&["Bio", "", "!Eng", "!Math"]), Shift::Second);
        let carried: Vec<&str> = day.carried_over().collect();
        assert_eq!(carried, vec!["Eng", "Math"]);
    }

    #[test]
    fn test_class_lookup_and_max_lessons() {
        let schedule = Schedule::new(vec![
            SchoolClass::new(
                "5A",
                vec![
                    SchoolDay::new(lessons(&["Math"]), Shift::First),
                    SchoolDay::new(lessons(&["Bio", "Chem", "Art"]), Shift::Second),
                ],
            ),
            SchoolClass::new("5B", vec![SchoolDay::new(Vec::new(), Shift::Second)]),
        ]);

        assert_eq!(schedule.class("5A").map(SchoolClass::max_lessons), Some(3));
        assert_eq!(schedule.class("5B").map(SchoolClass::max_lessons), Some(0));
        assert!(schedule.class("6C").is_none());
        assert_eq!(schedule.days_per_week(), 2);
        assert_eq!(Schedule::default().days_per_week(), 0);
    }

    #[test]
    fn test_schedule_serializes_as_list() {
        let schedule = Schedule::new(vec![SchoolClass::new(
            "7A",
            vec![SchoolDay::new(lessons(&["Geo"]), Shift::First)],
        )]);
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "name": "7A", "days": [{ "lessons": ["Geo"], "shift": 1 }] }])
        );
    }
}
