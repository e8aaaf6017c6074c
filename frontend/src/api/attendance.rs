use reqwest::Method;

use super::{
    client::ApiClient,
    error::ApiError,
    types::{AdminDashboard, CheckRequest, CheckResponse, EmployeeDashboard, MyAttendance},
};

impl ApiClient {
    pub async fn get_employee_dashboard(&self) -> Result<EmployeeDashboard, ApiError> {
        self.call(
            Method::GET,
            "/auth/dashboard/employee",
            |req| req,
            "Failed to load dashboard",
        )
        .await
    }

    pub async fn get_admin_dashboard(&self) -> Result<AdminDashboard, ApiError> {
        self.call(
            Method::GET,
            "/auth/dashboard/admin",
            |req| req,
            "Failed to load dashboard",
        )
        .await
    }

    pub async fn check_attendance(&self, request: &CheckRequest) -> Result<CheckResponse, ApiError> {
        let fallback = format!("Failed to {}", request.action.label());
        self.call(
            Method::POST,
            "/auth/attendance/check",
            |req| req.json(request),
            &fallback,
        )
        .await
    }

    pub async fn get_my_attendance(&self, month: u32, year: i32) -> Result<MyAttendance, ApiError> {
        self.call(
            Method::GET,
            "/auth/attendance/my",
            |req| req.query(&[("month", month.to_string()), ("year", year.to_string())]),
            "Failed to load attendance",
        )
        .await
    }
}
