//! Date helpers for the `YYYY-MM-DD` / `YYYY-MM` strings the API speaks.

use chrono::{Datelike, Local, NaiveDate};

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn current_month() -> String {
    format_month(today())
}

/// First and last day of a `YYYY-MM` month, as API date strings.
/// `None` when the input is not a valid month.
pub fn month_start_end(month: &str) -> Option<(String, String)> {
    let (year, month_num) = month.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month_num: u32 = month_num.parse().ok()?;

    let start = NaiveDate::from_ymd_opt(year, month_num, 1)?;
    let next_month = if month_num == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month_num + 1, 1)?
    };
    let end = next_month.pred_opt()?;

    Some((format_date(start), format_date(end)))
}

/// Inclusive day count between two dates.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

/// Previous month of a `YYYY-MM` string.
pub fn previous_month(month: &str) -> Option<String> {
    let (start, _) = month_start_end(month)?;
    let first: NaiveDate = start.parse().ok()?;
    Some(format_month(first.pred_opt()?))
}

/// Next month of a `YYYY-MM` string.
pub fn next_month(month: &str) -> Option<String> {
    let (_, end) = month_start_end(month)?;
    let last: NaiveDate = end.parse().ok()?;
    Some(format_month(last.succ_opt()?))
}

/// Readable label for a record date: day and short month.
pub fn day_label(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_dates_and_months() {
        assert_eq!(format_date(date(2026, 8, 6)), "2026-08-06");
        assert_eq!(format_month(date(2026, 8, 6)), "2026-08");
        assert_eq!(day_label(date(2026, 8, 6)), "08/06");
    }

    #[test]
    fn month_bounds_cover_leap_and_year_end() {
        assert_eq!(
            month_start_end("2026-08"),
            Some(("2026-08-01".to_owned(), "2026-08-31".to_owned()))
        );
        assert_eq!(
            month_start_end("2024-02"),
            Some(("2024-02-01".to_owned(), "2024-02-29".to_owned()))
        );
        assert_eq!(
            month_start_end("2025-12"),
            Some(("2025-12-01".to_owned(), "2025-12-31".to_owned()))
        );
        assert_eq!(month_start_end("2025-13"), None);
        assert_eq!(month_start_end("garbage"), None);
    }

    #[test]
    fn day_counts_are_inclusive() {
        assert_eq!(days_between(date(2026, 8, 1), date(2026, 8, 1)), 1);
        assert_eq!(days_between(date(2026, 8, 1), date(2026, 8, 31)), 31);
        assert_eq!(days_between(date(2026, 8, 31), date(2026, 8, 1)), 31);
    }

    #[test]
    fn month_arithmetic_wraps_years() {
        assert_eq!(previous_month("2026-01").as_deref(), Some("2025-12"));
        assert_eq!(next_month("2025-12").as_deref(), Some("2026-01"));
        assert_eq!(next_month("2026-08").as_deref(), Some("2026-09"));
    }
}
