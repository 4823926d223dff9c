//! JSON export

use crate::error::Result;
use std::path::Path;
use timetable_engine::engine::Schedule;

/// Pretty-printed JSON for a schedule
pub fn render_json(schedule: &Schedule) -> Result<String> {
    Ok(serde_json::to_string_pretty(schedule)?)
}

/// Write a schedule as JSON
pub fn write_json(path: &Path, schedule: &Schedule) -> Result<()> {
    let mut content = render_json(schedule)?;
    content.push('\n');
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::render_json;
    use timetable_engine::engine::{Schedule, SchoolClass, SchoolDay, Shift};

    #[test]
    fn test_render_json_round_trips() {
        let schedule = Schedule::new(vec![SchoolClass::new(
            "5A",
            vec![SchoolDay::new(
                vec!["Bio".to_string(), "!Eng".to_string()],
                Shift::Second,
            )],
        )]);
        let json = render_json(&schedule).unwrap();
        assert!(json.contains("\"shift\": 2"));
        assert!(json.contains("\"!Eng\""));

        let parsed: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, schedule);
    }
}
