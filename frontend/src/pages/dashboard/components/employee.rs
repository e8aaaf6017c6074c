use leptos::*;

use crate::{
    api::EmployeeDashboard,
    components::{cards::StatCard, layout::StatusBadge},
    pages::dashboard::utils::{progress_style, ratio, today_times},
    utils::format::percent,
};

#[component]
pub fn EmployeeOverview(data: EmployeeDashboard) -> impl IntoView {
    let attendance = data.attendance;
    let leaves = data.leaves;
    let today = attendance.today.clone();

    view! {
        <div class="grid grid-cols-1 gap-5 md:grid-cols-3">
            <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
                <div class="px-4 py-5 sm:p-6">
                    <dt class="text-sm font-medium text-fg-muted">{"Attendance"}</dt>
                    <dd class="mt-1 text-3xl font-semibold text-fg">
                        {ratio(attendance.days_present, attendance.working_days)}
                    </dd>
                    <div class="mt-3 h-2 w-full rounded-full bg-surface-muted">
                        <div class="h-2 rounded-full bg-action-primary-bg" style=progress_style(attendance.attendance_percentage)></div>
                    </div>
                    <p class="mt-2 text-xs text-fg-muted">
                        {format!("{} attendance this month", percent(attendance.attendance_percentage))}
                    </p>
                </div>
            </div>
            <StatCard
                label="Paid Leave"
                value=ratio(leaves.paid_leave_available, leaves.paid_leave_total)
                hint="days available"
            />
            <StatCard
                label="Sick Leave"
                value=ratio(leaves.sick_leave_available, leaves.sick_leave_total)
                hint="days available"
            />
        </div>
        {today.map(|today| {
            let times = today_times(&today);
            view! {
                <div class="mt-6 bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6">
                    <h3 class="text-lg leading-6 font-medium text-fg">{"Today's Status"}</h3>
                    <div class="mt-3 flex items-center gap-3">
                        <StatusBadge status=today.status.clone().unwrap_or_else(|| "NOT MARKED".to_string())/>
                        {times.map(|line| view! { <span class="text-sm text-fg-muted">{line}</span> })}
                    </div>
                </div>
            }
        })}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{api::TodayAttendance, test_support::ssr::render_to_string};

    #[test]
    fn renders_attendance_and_balances() {
        let html = render_to_string(|| {
            let mut data = EmployeeDashboard::default();
            data.attendance.days_present = 18;
            data.attendance.working_days = 22;
            data.attendance.attendance_percentage = Some(81.8);
            data.leaves.paid_leave_available = 10;
            data.leaves.paid_leave_total = 12;
            data.attendance.today = Some(TodayAttendance {
                status: Some("PRESENT".into()),
                check_in: Some("09:00:00".into()),
                check_out: None,
            });
            view! { <EmployeeOverview data=data/> }
        });
        assert!(html.contains("18&#x2F;22"));
        assert!(html.contains("81.8% attendance this month"));
        assert!(html.contains("10&#x2F;12"));
        assert!(html.contains("Today&#x27;s Status") || html.contains("Today's Status"));
        assert!(html.contains("Check In: 09:00"));
    }
}
