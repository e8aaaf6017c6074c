use reqwest::Method;

use super::{
    client::{path_segment, ApiClient},
    error::ApiError,
    types::{
        ChangePasswordRequest, CompanySignupRequest, CompanySignupResponse,
        CreateEmployeeRequest, CreateEmployeeResponse, CurrentUser, EmployeeSummary,
        LoginRequest, LoginResponse, MessageResponse,
    },
};

impl ApiClient {
    pub async fn company_signup(
        &self,
        request: &CompanySignupRequest,
    ) -> Result<CompanySignupResponse, ApiError> {
        self.call(
            Method::POST,
            "/auth/company/signup",
            |req| req.json(request),
            "Failed to create company. Please try again.",
        )
        .await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.call(
            Method::POST,
            "/auth/login",
            |req| req.json(request),
            "Invalid credentials. Please try again.",
        )
        .await
    }

    pub async fn create_employee(
        &self,
        request: &CreateEmployeeRequest,
    ) -> Result<CreateEmployeeResponse, ApiError> {
        self.call(
            Method::POST,
            "/auth/employee/create",
            |req| req.json(request),
            "Failed to create employee",
        )
        .await
    }

    pub async fn list_employees(&self) -> Result<Vec<EmployeeSummary>, ApiError> {
        self.call(
            Method::GET,
            "/auth/employee/all",
            |req| req,
            "Failed to load employees",
        )
        .await
    }

    /// `id` is the system identifier from [`EmployeeSummary::id`], not the
    /// business employee id.
    pub async fn deactivate_employee(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.call(
            Method::DELETE,
            &format!("/auth/employee/{}/delete", path_segment(id)),
            |req| req,
            "Failed to deactivate employee",
        )
        .await
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.call(
            Method::POST,
            "/auth/change-password",
            |req| req.json(request),
            "Failed to change password",
        )
        .await
    }

    pub async fn get_me(&self) -> Result<CurrentUser, ApiError> {
        self.call(Method::GET, "/auth/me", |req| req, "Failed to load user")
            .await
    }
}
