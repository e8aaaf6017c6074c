pub mod approvals;
pub mod attendance;
pub mod change_password;
pub mod company_signup;
pub mod create_employee;
pub mod dashboard;
pub mod employees;
pub mod leave;
pub mod login;
pub mod payroll;
pub mod profile;
pub mod reports;

pub use approvals::ApprovalsPage;
pub use attendance::AttendancePage;
pub use change_password::ChangePasswordPage;
pub use company_signup::CompanySignupPage;
pub use create_employee::CreateEmployeePage;
pub use dashboard::DashboardPage;
pub use employees::EmployeesPage;
pub use leave::LeavePage;
pub use login::LoginPage;
pub use payroll::PayrollPage;
pub use profile::ProfilePage;
pub use reports::ReportsPage;
