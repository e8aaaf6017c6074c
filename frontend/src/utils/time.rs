use chrono::{Datelike, Local, NaiveDate};

use crate::api::ReportPeriod;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn current_period() -> ReportPeriod {
    period_of(today())
}

pub fn period_of(date: NaiveDate) -> ReportPeriod {
    ReportPeriod {
        month: date.month(),
        year: date.year(),
    }
}

pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    month
        .checked_sub(1)
        .and_then(|idx| NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// Years offered by period selectors: two back, one ahead.
pub fn selectable_years(current: i32) -> Vec<i32> {
    (current - 2..=current + 1).collect()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// `2025-01-02` → `Jan 02, 2025`; anything unparseable is shown as-is.
pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(|date| date.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Keeps `HH:MM` of a time or datetime string.
pub fn format_time(value: Option<&str>) -> String {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return "-".to_string();
    };
    let time_part = value
        .split(['T', ' '])
        .nth(1)
        .unwrap_or(value);
    time_part.chars().take(5).collect()
}

pub fn format_hours(hours: Option<f64>) -> String {
    match hours {
        Some(h) => format!("{:.2} h", h),
        None => "-".to_string(),
    }
}
