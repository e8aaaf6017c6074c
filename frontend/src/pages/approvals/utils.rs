use crate::api::{DecisionAction, TimeOffDecision};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApprovalTab {
    #[default]
    Pending,
    All,
}

impl ApprovalTab {
    pub fn status_filter(self) -> Option<&'static str> {
        match self {
            ApprovalTab::Pending => Some("PENDING"),
            ApprovalTab::All => None,
        }
    }

    pub fn empty_title(self) -> &'static str {
        match self {
            ApprovalTab::Pending => "No pending requests",
            ApprovalTab::All => "No leave requests found",
        }
    }
}

pub fn decision_message(action: DecisionAction) -> String {
    format!("Leave request {} successfully!", action.past_tense())
}

/// Blank reasons are left out of the request.
pub fn build_decision(action: DecisionAction, reason: &str) -> TimeOffDecision {
    let reason = reason.trim();
    TimeOffDecision {
        action,
        reason: (!reason.is_empty()).then(|| reason.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_map_to_status_filters() {
        assert_eq!(ApprovalTab::Pending.status_filter(), Some("PENDING"));
        assert_eq!(ApprovalTab::All.status_filter(), None);
    }

    #[test]
    fn decision_messages_use_past_tense() {
        assert_eq!(
            decision_message(DecisionAction::Approve),
            "Leave request approved successfully!"
        );
        assert_eq!(
            decision_message(DecisionAction::Reject),
            "Leave request rejected successfully!"
        );
    }

    #[test]
    fn blank_reason_is_dropped() {
        assert_eq!(build_decision(DecisionAction::Reject, "   ").reason, None);
        assert_eq!(
            build_decision(DecisionAction::Reject, " overlapping sprint ").reason.as_deref(),
            Some("overlapping sprint")
        );
    }
}
