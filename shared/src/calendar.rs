//! Header date banner.

use chrono::{Datelike, Local, NaiveDate};

/// Today's date in the browser's (or host's) local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// English ordinal suffix for a day of the month.
fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Formats a date as `Thursday, 26th June 2025`.
pub fn banner_date(date: NaiveDate) -> String {
    format!(
        "{}, {}{} {}",
        date.format("%A"),
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%B %Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_banner_date_format() {
        assert_eq!(banner_date(date(2025, 6, 26)), "Thursday, 26th June 2025");
        assert_eq!(banner_date(date(2025, 6, 1)), "Sunday, 1st June 2025");
        assert_eq!(banner_date(date(2024, 2, 29)), "Thursday, 29th February 2024");
    }

    #[test]
    fn test_ordinal_suffixes() {
        let expected = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in expected {
            assert_eq!(ordinal_suffix(day), suffix, "{day}");
        }
    }
}
