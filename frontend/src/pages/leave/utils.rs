use leptos::*;

use crate::{
    api::{TimeOffSubmission, TimeOffType},
    utils::{
        time::parse_date,
        validation::{is_blank, FILL_REQUIRED_FIELDS},
    },
};

pub const SUBMITTED: &str = "Leave request submitted successfully!";
pub const END_BEFORE_START: &str = "End date cannot be before start date";

#[derive(Clone, Copy)]
pub struct LeaveForm {
    pub time_off_type: RwSignal<TimeOffType>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub reason: RwSignal<String>,
}

impl LeaveForm {
    pub fn new() -> Self {
        Self {
            time_off_type: create_rw_signal(TimeOffType::Paid),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }

    pub fn snapshot(&self) -> LeaveInput {
        LeaveInput {
            time_off_type: self.time_off_type.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            reason: self.reason.get_untracked(),
        }
    }

    pub fn reset(&self) {
        self.time_off_type.set(TimeOffType::Paid);
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }
}

impl Default for LeaveForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveInput {
    pub time_off_type: TimeOffType,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

impl LeaveInput {
    pub fn validate(&self) -> Result<TimeOffSubmission, &'static str> {
        if is_blank(&self.start_date) || is_blank(&self.end_date) || is_blank(&self.reason) {
            return Err(FILL_REQUIRED_FIELDS);
        }
        if let (Some(start), Some(end)) = (parse_date(&self.start_date), parse_date(&self.end_date)) {
            if end < start {
                return Err(END_BEFORE_START);
            }
        }
        Ok(TimeOffSubmission {
            time_off_type: self.time_off_type,
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
            reason: self.reason.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(start: &str, end: &str, reason: &str) -> LeaveInput {
        LeaveInput {
            time_off_type: TimeOffType::Sick,
            start_date: start.into(),
            end_date: end.into(),
            reason: reason.into(),
        }
    }

    #[test]
    fn all_fields_are_required() {
        assert_eq!(input("", "2025-03-02", "flu").validate(), Err(FILL_REQUIRED_FIELDS));
        assert_eq!(input("2025-03-01", "2025-03-02", "  ").validate(), Err(FILL_REQUIRED_FIELDS));
    }

    #[test]
    fn end_may_not_precede_start() {
        assert_eq!(
            input("2025-03-05", "2025-03-02", "flu").validate(),
            Err(END_BEFORE_START)
        );
    }

    #[test]
    fn single_day_request_is_valid() {
        let submission = input("2025-03-05", "2025-03-05", " flu ").validate().unwrap();
        assert_eq!(submission.time_off_type, TimeOffType::Sick);
        assert_eq!(submission.reason, "flu");
    }
}
