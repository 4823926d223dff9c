//! Storage: CSV grids in, Markdown/JSON/CSV schedules out

mod csv;
mod json;
mod md;

pub use csv::{parse_csv, parse_csv_content, write_csv, write_csv_content};
pub use json::{render_json, write_json};
pub use md::{render_markdown, write_markdown};

use chrono::Weekday;

/// English weekday name for a zero-based school day (0 = Monday).
/// Days past Sunday are rendered as "Day N" (1-based).
pub fn weekday_name(day: usize) -> String {
    let Some(weekday) = u8::try_from(day)
        .ok()
        .and_then(|day| Weekday::try_from(day).ok())
    else {
        return format!("Day {}", day + 1);
    };
    let name = match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::weekday_name;

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(0), "Monday");
        assert_eq!(weekday_name(5), "Saturday");
        assert_eq!(weekday_name(6), "Sunday");
        assert_eq!(weekday_name(7), "Day 8");
        assert_eq!(weekday_name(256), "Day 257");
    }
}
