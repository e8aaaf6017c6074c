use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RouteGuard, layout::Layout},
    pages::{
        ApprovalsPage, AttendancePage, ChangePasswordPage, CompanySignupPage, CreateEmployeePage,
        DashboardPage, EmployeesPage, LeavePage, LoginPage, PayrollPage, ProfilePage, ReportsPage,
    },
    session::{guard::DASHBOARD_PATH, GuardKind, Session},
    state::{flash::Flash, notifications::NotificationState},
    utils::navigation::use_navigator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    CompanySignup,
    ChangePassword,
    Dashboard,
    Profile,
    Attendance,
    Leave,
    Payroll,
    Approvals,
    Reports,
    Employees,
    CreateEmployee,
}

impl AppRoute {
    pub const ALL: [AppRoute; 12] = [
        AppRoute::Login,
        AppRoute::CompanySignup,
        AppRoute::ChangePassword,
        AppRoute::Dashboard,
        AppRoute::Profile,
        AppRoute::Attendance,
        AppRoute::Leave,
        AppRoute::Payroll,
        AppRoute::Approvals,
        AppRoute::Reports,
        AppRoute::Employees,
        AppRoute::CreateEmployee,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::CompanySignup => "/company-signup",
            AppRoute::ChangePassword => "/change-password",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Profile => "/profile",
            AppRoute::Attendance => "/attendance",
            AppRoute::Leave => "/leave",
            AppRoute::Payroll => "/payroll",
            AppRoute::Approvals => "/approvals",
            AppRoute::Reports => "/reports",
            AppRoute::Employees => "/employees",
            AppRoute::CreateEmployee => "/create-employee",
        }
    }

    pub fn guard_kind(self) -> GuardKind {
        match self {
            AppRoute::Login | AppRoute::CompanySignup => GuardKind::PublicOnly,
            AppRoute::Approvals
            | AppRoute::Reports
            | AppRoute::Employees
            | AppRoute::CreateEmployee => GuardKind::AdminOnly,
            _ => GuardKind::Protected,
        }
    }

    /// Whether the page sits inside the sidebar shell.
    pub fn uses_shell(self) -> bool {
        !matches!(
            self,
            AppRoute::Login | AppRoute::CompanySignup | AppRoute::ChangePassword
        )
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

pub const ROUTE_PATHS: &[&str] = &[
    "/login",
    "/company-signup",
    "/change-password",
    "/dashboard",
    "/profile",
    "/attendance",
    "/leave",
    "/payroll",
    "/approvals",
    "/reports",
    "/employees",
    "/create-employee",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/change-password",
    "/dashboard",
    "/profile",
    "/attendance",
    "/leave",
    "/payroll",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/approvals", "/reports", "/employees", "/create-employee"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/login", "/company-signup"];

fn page(route: AppRoute) -> View {
    match route {
        AppRoute::Login => view! { <LoginPage/> }.into_view(),
        AppRoute::CompanySignup => view! { <CompanySignupPage/> }.into_view(),
        AppRoute::ChangePassword => view! { <ChangePasswordPage/> }.into_view(),
        AppRoute::Dashboard => view! { <DashboardPage/> }.into_view(),
        AppRoute::Profile => view! { <ProfilePage/> }.into_view(),
        AppRoute::Attendance => view! { <AttendancePage/> }.into_view(),
        AppRoute::Leave => view! { <LeavePage/> }.into_view(),
        AppRoute::Payroll => view! { <PayrollPage/> }.into_view(),
        AppRoute::Approvals => view! { <ApprovalsPage/> }.into_view(),
        AppRoute::Reports => view! { <ReportsPage/> }.into_view(),
        AppRoute::Employees => view! { <EmployeesPage/> }.into_view(),
        AppRoute::CreateEmployee => view! { <CreateEmployeePage/> }.into_view(),
    }
}

fn shell(route: AppRoute) -> View {
    if route.uses_shell() {
        view! { <Layout>{page(route)}</Layout> }.into_view()
    } else {
        page(route)
    }
}

/// A route's page behind its guard.
pub fn guarded(route: AppRoute) -> impl IntoView {
    view! {
        <RouteGuard kind=route.guard_kind() path=route.path()>
            {shell(route)}
        </RouteGuard>
    }
}

#[component]
fn ToDashboard() -> impl IntoView {
    let navigator = use_navigator();
    create_effect(move |_| navigator.go(DASHBOARD_PATH));
}

pub fn mount_app() {
    mount_to_body(app_root);
}

/// App-wide context. Notifications are wiped whenever the session is cleared.
pub fn provide_app_context(session: Session) {
    let notifications = NotificationState::new();
    notifications.follow(&session);
    provide_context(session.clone());
    provide_context(ApiClient::new(session));
    provide_context(notifications);
    provide_context(Flash::new());
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_app_context(Session::browser());

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=|| guarded(AppRoute::Login)/>
                <Route path="/company-signup" view=|| guarded(AppRoute::CompanySignup)/>
                <Route path="/change-password" view=|| guarded(AppRoute::ChangePassword)/>
                <Route path="/dashboard" view=|| guarded(AppRoute::Dashboard)/>
                <Route path="/profile" view=|| guarded(AppRoute::Profile)/>
                <Route path="/attendance" view=|| guarded(AppRoute::Attendance)/>
                <Route path="/leave" view=|| guarded(AppRoute::Leave)/>
                <Route path="/payroll" view=|| guarded(AppRoute::Payroll)/>
                <Route path="/approvals" view=|| guarded(AppRoute::Approvals)/>
                <Route path="/reports" view=|| guarded(AppRoute::Reports)/>
                <Route path="/employees" view=|| guarded(AppRoute::Employees)/>
                <Route path="/create-employee" view=|| guarded(AppRoute::CreateEmployee)/>
                <Route path="/" view=ToDashboard/>
                <Route path="/*any" view=ToDashboard/>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_table_matches_enum() {
        let paths: Vec<&str> = AppRoute::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths, ROUTE_PATHS);
    }

    #[test]
    fn guard_lists_partition_routes() {
        let mut seen = HashSet::new();
        for (list, kind) in [
            (PROTECTED_ROUTE_PATHS, GuardKind::Protected),
            (ADMIN_ROUTE_PATHS, GuardKind::AdminOnly),
            (PUBLIC_ROUTE_PATHS, GuardKind::PublicOnly),
        ] {
            for path in list {
                let route = AppRoute::from_path(path).expect("listed path is routed");
                assert_eq!(route.guard_kind(), kind, "{}", path);
                assert!(seen.insert(*path), "duplicate {}", path);
            }
        }
        assert_eq!(seen.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn from_path_ignores_trailing_slash_and_rejects_unknown() {
        assert_eq!(AppRoute::from_path("/leave/"), Some(AppRoute::Leave));
        assert_eq!(AppRoute::from_path("/nowhere"), None);
        assert_eq!(AppRoute::from_path("/"), None);
    }

    #[test]
    fn auth_pages_render_without_shell() {
        assert!(!AppRoute::Login.uses_shell());
        assert!(!AppRoute::ChangePassword.uses_shell());
        assert!(AppRoute::Payroll.uses_shell());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::{Notification, NotificationList},
        components::notifications::NotificationBell,
        session::SessionUpdate,
        state::auth::logout,
        test_support::{
            helpers::{admin_session, employee_session, provide_api, session_with},
            ssr::render_to_string,
        },
        utils::navigation::Navigator,
    };
    use httpmock::prelude::*;

    #[test]
    fn employee_cannot_open_employee_directory() {
        let server = MockServer::start();
        let list = server.mock(|when, then| {
            when.method(GET).path("/api/auth/employee/all");
            then.status(200).json_body(serde_json::json!([]));
        });
        let base = server.url("/api");
        let html = render_to_string(move || {
            provide_meta_context();
            provide_api(employee_session(), &base);
            guarded(AppRoute::Employees)
        });
        assert!(!html.contains("All Employees"));
        list.assert_hits(0);
    }

    #[test]
    fn admin_sees_employee_directory_in_shell() {
        let html = render_to_string(|| {
            provide_meta_context();
            provide_api(admin_session(), "http://127.0.0.1:9");
            guarded(AppRoute::Employees)
        });
        assert!(html.contains("All Employees"));
        assert!(html.contains("Administration"));
    }

    #[test]
    fn first_login_shows_only_password_change() {
        let html = render_to_string(|| {
            provide_meta_context();
            provide_api(session_with("EMPLOYEE", true), "http://127.0.0.1:9");
            guarded(AppRoute::Dashboard)
        });
        assert!(!html.contains("Welcome back"));
    }

    #[test]
    fn next_user_never_sees_previous_notifications() {
        let html = render_to_string(|| {
            provide_meta_context();
            let first = session_with("EMPLOYEE", false);
            provide_app_context(first.clone());
            let notifications = expect_context::<NotificationState>();
            let seq = notifications.begin();
            notifications.apply(
                seq,
                Ok(NotificationList {
                    total_count: 7,
                    unread_count: 7,
                    notifications: vec![Notification {
                        title: "Payslip for first user".into(),
                        ..Notification::default()
                    }],
                }),
            );
            let in_flight = notifications.begin();

            logout(&first, &Navigator::from_fn(|_| {}));
            first.set_partial(&SessionUpdate {
                token: Some("second-token".into()),
                role: Some("HR".into()),
                email: Some("second@acme.com".into()),
                ..SessionUpdate::default()
            });
            assert!(!notifications.apply(in_flight, Ok(NotificationList::default())));

            view! { <NotificationBell/> }
        });
        assert!(!html.contains("min-w-[1.25rem]"));
        assert!(!html.contains("Payslip for first user"));
    }
}
