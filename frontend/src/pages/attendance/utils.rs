use crate::api::CheckAction;

pub fn success_message(action: CheckAction) -> &'static str {
    match action {
        CheckAction::CheckIn => "Checked in successfully!",
        CheckAction::CheckOut => "Checked out successfully!",
    }
}

/// Present days and total logged hours for the loaded month.
pub fn month_totals(records: &[crate::api::AttendanceRecord]) -> (usize, f64) {
    let present = records
        .iter()
        .filter(|r| r.status.eq_ignore_ascii_case("PRESENT"))
        .count();
    let hours = records.iter().filter_map(|r| r.work_hours).sum();
    (present, hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AttendanceRecord;

    #[test]
    fn messages_follow_action() {
        assert_eq!(success_message(CheckAction::CheckIn), "Checked in successfully!");
        assert_eq!(success_message(CheckAction::CheckOut), "Checked out successfully!");
    }

    #[test]
    fn totals_count_present_days_and_hours() {
        let records = vec![
            AttendanceRecord {
                status: "PRESENT".into(),
                work_hours: Some(8.5),
                ..AttendanceRecord::default()
            },
            AttendanceRecord {
                status: "present".into(),
                work_hours: Some(7.0),
                ..AttendanceRecord::default()
            },
            AttendanceRecord {
                status: "ABSENT".into(),
                ..AttendanceRecord::default()
            },
        ];
        assert_eq!(month_totals(&records), (2, 15.5));
        assert_eq!(month_totals(&[]), (0, 0.0));
    }
}
