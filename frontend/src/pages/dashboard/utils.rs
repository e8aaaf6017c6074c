use crate::{api::TodayAttendance, utils::time::format_time};

pub fn ratio(part: impl std::fmt::Display, whole: impl std::fmt::Display) -> String {
    format!("{}/{}", part, whole)
}

/// Inline width for a progress bar, clamped to 0–100 %.
pub fn progress_style(percentage: Option<f64>) -> String {
    let pct = percentage.unwrap_or(0.0).clamp(0.0, 100.0);
    format!("width: {:.0}%", pct)
}

pub fn today_times(today: &TodayAttendance) -> Option<String> {
    let check_in = today.check_in.as_deref().filter(|v| !v.is_empty())?;
    let mut line = format!("Check In: {}", format_time(Some(check_in)));
    if let Some(check_out) = today.check_out.as_deref().filter(|v| !v.is_empty()) {
        line.push_str(&format!(" | Check Out: {}", format_time(Some(check_out))));
    }
    Some(line)
}

pub fn greeting(full_name: &str) -> String {
    format!("Welcome back, {}!", full_name)
}
