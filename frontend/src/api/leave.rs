use reqwest::Method;

use super::{
    client::{path_segment, ApiClient},
    error::ApiError,
    types::{MyTimeOff, TimeOffDecision, TimeOffDecisionResponse, TimeOffRequest, TimeOffSubmission},
};

impl ApiClient {
    pub async fn get_my_time_off(&self) -> Result<MyTimeOff, ApiError> {
        self.call(
            Method::GET,
            "/auth/timeoff/request",
            |req| req,
            "Failed to load leave data",
        )
        .await
    }

    pub async fn submit_time_off(
        &self,
        submission: &TimeOffSubmission,
    ) -> Result<TimeOffRequest, ApiError> {
        self.call(
            Method::POST,
            "/auth/timeoff/request",
            |req| req.json(submission),
            "Failed to submit leave request",
        )
        .await
    }

    /// All requests visible to the caller, optionally filtered by status
    /// (`PENDING`, `APPROVED`, `REJECTED`).
    pub async fn manage_time_off(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<TimeOffRequest>, ApiError> {
        self.call(
            Method::GET,
            "/auth/timeoff/manage",
            |req| match status {
                Some(status) => req.query(&[("status", status)]),
                None => req,
            },
            "Failed to load leave requests",
        )
        .await
    }

    pub async fn decide_time_off(
        &self,
        id: &str,
        decision: &TimeOffDecision,
    ) -> Result<TimeOffDecisionResponse, ApiError> {
        let fallback = format!("Failed to {} request", decision.action.verb());
        self.call(
            Method::PATCH,
            &format!("/auth/timeoff/manage/{}", path_segment(id)),
            |req| req.json(decision),
            &fallback,
        )
        .await
    }
}
