use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::session::SessionUpdate;

/// Accepts numbers, numeric strings (decimal fields) and null.
pub fn de_flex_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Id fields that arrive as either numbers or strings.
pub fn de_flex_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// Auth

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub login_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_first_login: Option<bool>,
}

impl LoginResponse {
    /// Session fields to store. The login identity stands in for a missing
    /// email so the session still validates.
    pub fn to_session_update(&self, login_id: &str) -> SessionUpdate {
        let email = self
            .email
            .clone()
            .filter(|e| !e.is_empty())
            .or_else(|| Some(login_id.to_string()).filter(|id| !id.is_empty()));
        SessionUpdate {
            token: self.token.clone(),
            refresh: self.refresh.clone(),
            role: self.role.clone(),
            email,
            employee_id: self.employee_id.clone(),
            full_name: self.full_name.clone(),
            is_first_login: self.is_first_login,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanySignupRequest {
    pub company_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanySignupResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub user: Option<SignupUser>,
}

impl CompanySignupResponse {
    /// The company owner is signed in as ADMIN when the backend returns the
    /// created user.
    pub fn to_session_update(&self) -> Option<SessionUpdate> {
        let user = self.user.as_ref()?;
        Some(SessionUpdate {
            token: self.token.clone(),
            refresh: self.refresh.clone(),
            role: Some("ADMIN".to_string()),
            email: user.email.clone(),
            employee_id: user.employee_id.clone(),
            full_name: user.full_name.clone(),
            is_first_login: Some(false),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default, deserialize_with = "de_flex_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_first_login: Option<bool>,
}

// ---------------------------------------------------------------------------
// Employees

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub year_of_joining: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatedEmployee {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEmployeeResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub employee: CreatedEmployee,
    #[serde(default)]
    pub temporary_password: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// System identifier used by the deactivation endpoint.
    #[serde(default, deserialize_with = "de_flex_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Profile & documents

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub residential_address: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub monthly_wage: Option<f64>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub ifsc_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub phone: String,
    pub residential_address: String,
    pub about: String,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvatarResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocument {
    #[serde(default, deserialize_with = "de_flex_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub document_name: String,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_size: Option<Value>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// File contents handed to a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentUpload {
    pub document_name: String,
    pub document_type: String,
    pub file: FileUpload,
}

// ---------------------------------------------------------------------------
// Dashboards

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodayAttendance {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceOverview {
    #[serde(default)]
    pub days_present: u32,
    #[serde(default)]
    pub working_days: u32,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub attendance_percentage: Option<f64>,
    #[serde(default)]
    pub today: Option<TodayAttendance>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalance {
    #[serde(default)]
    pub paid_leave_available: i64,
    #[serde(default)]
    pub paid_leave_total: i64,
    #[serde(default)]
    pub sick_leave_available: i64,
    #[serde(default)]
    pub sick_leave_total: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDashboard {
    #[serde(default)]
    pub attendance: AttendanceOverview,
    #[serde(default)]
    pub leaves: LeaveBalance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminSummary {
    #[serde(default)]
    pub total_employees: u32,
    #[serde(default)]
    pub pending_leaves: u32,
    #[serde(default)]
    pub monthly_attendance_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceToday {
    #[serde(default, rename = "PRESENT")]
    pub present: u32,
    #[serde(default, rename = "ABSENT")]
    pub absent: u32,
    #[serde(default, rename = "LEAVE")]
    pub leave: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCard {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboard {
    #[serde(default)]
    pub summary: AdminSummary,
    #[serde(default)]
    pub attendance_today: AttendanceToday,
    #[serde(default)]
    pub employee_cards: Vec<EmployeeCard>,
}

// ---------------------------------------------------------------------------
// Attendance

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckAction {
    CheckIn,
    CheckOut,
}

impl CheckAction {
    pub fn label(self) -> &'static str {
        match self {
            CheckAction::CheckIn => "check in",
            CheckAction::CheckOut => "check out",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub action: CheckAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl CheckRequest {
    pub fn new(action: CheckAction) -> Self {
        Self {
            action,
            latitude: None,
            longitude: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub work_hours: Option<f64>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub extra_hours: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default, deserialize_with = "de_flex_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub work_hours: Option<f64>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MyAttendance {
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

// ---------------------------------------------------------------------------
// Time off

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeOffType {
    Paid,
    Sick,
    Unpaid,
}

impl TimeOffType {
    pub const ALL: [TimeOffType; 3] = [TimeOffType::Paid, TimeOffType::Sick, TimeOffType::Unpaid];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeOffType::Paid => "PAID",
            TimeOffType::Sick => "SICK",
            TimeOffType::Unpaid => "UNPAID",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeOffType::Paid => "Paid Time Off",
            TimeOffType::Sick => "Sick Leave",
            TimeOffType::Unpaid => "Unpaid Leave",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOffSubmission {
    pub time_off_type: TimeOffType,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    #[serde(default, deserialize_with = "de_flex_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub time_off_type: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub total_days: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub approved_by_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MyTimeOff {
    #[serde(default)]
    pub time_off_requests: Vec<TimeOffRequest>,
    #[serde(default)]
    pub allocation: Option<LeaveBalance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionAction {
    Approve,
    Reject,
}

impl DecisionAction {
    pub fn verb(self) -> &'static str {
        match self {
            DecisionAction::Approve => "approve",
            DecisionAction::Reject => "reject",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            DecisionAction::Approve => "approved",
            DecisionAction::Reject => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOffDecision {
    pub action: DecisionAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeOffDecisionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub request: Option<TimeOffRequest>,
}

// ---------------------------------------------------------------------------
// Reports

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Attendance,
    Leave,
    Payroll,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Attendance, ReportKind::Leave, ReportKind::Payroll];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Attendance => "attendance",
            ReportKind::Leave => "leave",
            ReportKind::Payroll => "payroll",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Attendance => "Attendance",
            ReportKind::Leave => "Leave",
            ReportKind::Payroll => "Payroll",
        }
    }

    /// Leave reports are yearly.
    pub fn uses_month(self) -> bool {
        !matches!(self, ReportKind::Leave)
    }

    pub fn query(self, period: ReportPeriod) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(2);
        if self.uses_month() {
            query.push(("month", period.month.to_string()));
        }
        query.push(("year", period.year.to_string()));
        query
    }

    pub fn csv_file_name(self, period: ReportPeriod) -> String {
        if self.uses_month() {
            format!("{}_report_{}_{}.csv", self.as_str(), period.month, period.year)
        } else {
            format!("{}_report_{}.csv", self.as_str(), period.year)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub month: u32,
    pub year: i32,
}

/// Report payloads are rendered as key figures only, so the body is kept
/// loosely typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportData(pub Value);

impl ReportData {
    /// Scalar entries of the `summary` object, sorted by key.
    pub fn summary_figures(&self) -> Vec<(String, String)> {
        let Some(summary) = self.0.get("summary").and_then(Value::as_object) else {
            return Vec::new();
        };
        summary
            .iter()
            .filter_map(|(key, value)| {
                let shown = match value {
                    Value::Number(n) => format_number(n.as_f64()?),
                    Value::String(s) => s.clone(),
                    Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some((humanize_key(key), shown))
            })
            .collect()
    }

    pub fn payroll_entries(&self) -> Vec<PayrollEntry> {
        self.0
            .get("payroll_data")
            .and_then(|entries| serde_json::from_value(entries.clone()).ok())
            .unwrap_or_default()
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryDetails {
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub monthly_wage: Option<f64>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub basic_salary: Option<f64>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub hra: Option<f64>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub standard_allowance: Option<f64>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub performance_bonus: Option<f64>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub lta: Option<f64>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub fixed_allowance: Option<f64>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub gross_salary: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deductions {
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub pf_employee: Option<f64>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub professional_tax: Option<f64>,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub total_deductions: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollAttendance {
    #[serde(default)]
    pub present_days: u32,
    #[serde(default)]
    pub leave_days: u32,
    #[serde(default)]
    pub absent_days: u32,
    #[serde(default)]
    pub working_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub salary_details: SalaryDetails,
    #[serde(default)]
    pub deductions: Deductions,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub net_salary: Option<f64>,
    #[serde(default)]
    pub attendance: PayrollAttendance,
}

// ---------------------------------------------------------------------------
// Notifications

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, deserialize_with = "de_flex_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub notification_type: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub time_ago: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationList {
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_falls_back_to_login_id_for_email() {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "abc",
            "role": "EMPLOYEE",
            "is_first_login": true
        }))
        .unwrap();
        let update = response.to_session_update("emp@x.com");
        assert_eq!(update.email.as_deref(), Some("emp@x.com"));
        assert_eq!(update.is_first_login, Some(true));
        assert!(update.refresh.is_none());

        let with_email = LoginResponse {
            email: Some("real@x.com".into()),
            ..response
        };
        assert_eq!(
            with_email.to_session_update("OIJODO20250001").email.as_deref(),
            Some("real@x.com")
        );
    }

    #[test]
    fn signup_response_without_user_yields_no_session() {
        let response: CompanySignupResponse =
            serde_json::from_value(json!({ "message": "Company created" })).unwrap();
        assert!(response.to_session_update().is_none());

        let response: CompanySignupResponse = serde_json::from_value(json!({
            "token": "t",
            "user": { "email": "owner@acme.com", "employee_id": "OIACOW20250001", "full_name": "Owner" }
        }))
        .unwrap();
        let update = response.to_session_update().unwrap();
        assert_eq!(update.role.as_deref(), Some("ADMIN"));
        assert_eq!(update.is_first_login, Some(false));
        assert_eq!(update.email.as_deref(), Some("owner@acme.com"));
    }

    #[test]
    fn change_password_omits_old_password_on_first_login() {
        let body = serde_json::to_value(ChangePasswordRequest {
            old_password: None,
            new_password: "newsecret".into(),
            confirm_password: "newsecret".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({ "new_password": "newsecret", "confirm_password": "newsecret" })
        );
    }

    #[test]
    fn employee_summary_accepts_numeric_or_missing_id() {
        let numeric: EmployeeSummary = serde_json::from_value(json!({
            "id": 42, "employee_id": "OIJODO20250001", "full_name": "John Doe",
            "email": "john@x.com", "role": "EMPLOYEE"
        }))
        .unwrap();
        assert_eq!(numeric.id.as_deref(), Some("42"));
        assert!(numeric.is_active);

        let missing: EmployeeSummary = serde_json::from_value(json!({
            "employee_id": "OIJODO20250002", "full_name": "Jane", "email": "jane@x.com",
            "role": "HR", "is_active": false
        }))
        .unwrap();
        assert!(missing.id.is_none());
        assert!(!missing.is_active);
    }

    #[test]
    fn decimal_strings_parse_as_numbers() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": 1, "date": "2025-01-02", "check_in": "09:00:00",
            "check_out": null, "work_hours": "7.50", "status": "PRESENT"
        }))
        .unwrap();
        assert_eq!(record.work_hours, Some(7.5));

        let profile: Profile =
            serde_json::from_value(json!({ "monthly_wage": 50000, "skills": ["Rust"] })).unwrap();
        assert_eq!(profile.monthly_wage, Some(50000.0));
        assert_eq!(profile.skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn admin_dashboard_reads_uppercase_attendance_keys() {
        let dashboard: AdminDashboard = serde_json::from_value(json!({
            "summary": { "total_employees": 12, "pending_leaves": 3 },
            "attendance_today": { "PRESENT": 9, "ABSENT": 2, "LEAVE": 1 },
            "employee_cards": [{ "employee_id": "E1", "name": "Ann", "status": "present" }]
        }))
        .unwrap();
        assert_eq!(dashboard.summary.total_employees, 12);
        assert_eq!(dashboard.attendance_today.present, 9);
        assert_eq!(dashboard.attendance_today.leave, 1);
        assert_eq!(dashboard.employee_cards[0].name, "Ann");
    }

    #[test]
    fn check_request_serializes_action_in_snake_case() {
        let body = serde_json::to_value(CheckRequest::new(CheckAction::CheckOut)).unwrap();
        assert_eq!(body, json!({ "action": "check_out" }));
    }

    #[test]
    fn decision_omits_empty_reason() {
        let body = serde_json::to_value(TimeOffDecision {
            action: DecisionAction::Approve,
            reason: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "action": "approve" }));
    }

    #[test]
    fn report_kind_builds_query_and_file_names() {
        let period = ReportPeriod { month: 3, year: 2025 };
        assert_eq!(
            ReportKind::Attendance.query(period),
            vec![("month", "3".to_string()), ("year", "2025".to_string())]
        );
        assert_eq!(ReportKind::Leave.query(period), vec![("year", "2025".to_string())]);
        assert_eq!(
            ReportKind::Payroll.csv_file_name(period),
            "payroll_report_3_2025.csv"
        );
        assert_eq!(ReportKind::Leave.csv_file_name(period), "leave_report_2025.csv");
    }

    #[test]
    fn report_summary_figures_keep_scalars_only() {
        let report = ReportData(json!({
            "summary": {
                "total_payout": 125000.5,
                "processed_count": 4,
                "nested": { "x": 1 }
            }
        }));
        let figures = report.summary_figures();
        assert!(figures.contains(&("Total Payout".to_string(), "125000.50".to_string())));
        assert!(figures.contains(&("Processed Count".to_string(), "4".to_string())));
        assert_eq!(figures.len(), 2);
        assert!(ReportData(json!({})).summary_figures().is_empty());
    }

    #[test]
    fn payroll_entries_parse_from_report() {
        let report = ReportData(json!({
            "payroll_data": [{
                "employee_name": "Ann",
                "salary_details": { "basic_salary": "25000.00", "gross_salary": 50000 },
                "deductions": { "total_deductions": 1800 },
                "net_salary": 48200,
                "attendance": { "present_days": 20, "working_days": 22 }
            }]
        }));
        let entries = report.payroll_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].salary_details.basic_salary, Some(25000.0));
        assert_eq!(entries[0].net_salary, Some(48200.0));
        assert_eq!(entries[0].attendance.working_days, 22);
    }

    #[test]
    fn time_off_type_parses_wire_values() {
        assert_eq!(TimeOffType::parse("SICK"), Some(TimeOffType::Sick));
        assert_eq!(TimeOffType::parse("sick"), None);
        assert_eq!(
            serde_json::to_value(TimeOffType::Unpaid).unwrap(),
            json!("UNPAID")
        );
    }
}
