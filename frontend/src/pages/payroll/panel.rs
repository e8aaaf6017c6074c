use leptos::*;

use crate::{
    api::{use_api, PayrollEntry, ReportData, ReportKind},
    components::{
        alert::{AlertBanner, MessageState},
        cards::{DetailCard, StatCard},
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{LoadingSpinner, PageHeader},
        period::PeriodSelector,
    },
    pages::{
        payroll::utils::{attendance_rows, deduction_rows, earnings_rows},
        reports::repository::{download_report, DOWNLOADED},
    },
    state::{auth::use_session, request_gate::PageData},
    utils::{
        format::{currency, or_dash},
        time::current_period,
    },
};

#[component]
fn PayslipView(entry: PayrollEntry) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-5 md:grid-cols-2">
            <DetailCard title="Earnings" rows=earnings_rows(&entry.salary_details)/>
            <DetailCard title="Deductions" rows=deduction_rows(&entry.deductions)/>
            <DetailCard title="Attendance Summary" rows=attendance_rows(&entry.attendance)/>
            <StatCard label="Net Salary" value=currency(entry.net_salary)/>
        </div>
    }
}

#[component]
fn PayrollTable(entries: Vec<PayrollEntry>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        {["Employee", "Department", "Working Days", "Gross Salary", "Deductions", "Net Salary"]
                            .into_iter()
                            .map(|h| view! { <th class="px-4 py-2 text-left text-xs font-medium uppercase text-fg-muted">{h}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {entries
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <tr>
                                    <td class="px-4 py-2 text-sm text-fg">
                                        <p class="font-medium">{or_dash(entry.employee_name.as_deref())}</p>
                                        <p class="text-xs text-fg-muted">{or_dash(entry.employee_id.as_deref())}</p>
                                    </td>
                                    <td class="px-4 py-2 text-sm text-fg">{or_dash(entry.department.as_deref())}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{entry.attendance.working_days}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{currency(entry.salary_details.gross_salary)}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{currency(entry.deductions.total_deductions)}</td>
                                    <td class="px-4 py-2 text-sm font-semibold text-fg">{currency(entry.net_salary)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn render_report(report: ReportData, is_admin: bool) -> View {
    let entries = report.payroll_entries();
    if !is_admin {
        return match entries.into_iter().next() {
            Some(entry) => view! { <PayslipView entry=entry/> }.into_view(),
            None => view! {
                <EmptyState title="No payroll data" description="No payslip is available for this period."/>
            }
            .into_view(),
        };
    }
    let figures = report.summary_figures();
    view! {
        <div class="grid grid-cols-1 gap-5 sm:grid-cols-3 mb-6">
            {figures
                .into_iter()
                .map(|(label, value)| view! { <StatCard label=label value=value/> })
                .collect_view()}
        </div>
        {if entries.is_empty() {
            view! { <EmptyState title="No payroll data" description="Select a different period"/> }.into_view()
        } else {
            view! { <PayrollTable entries=entries/> }.into_view()
        }}
    }
    .into_view()
}

#[component]
pub fn PayrollPage() -> impl IntoView {
    let api = use_api();
    let is_admin = use_session().is_admin();
    let period = create_rw_signal(current_period());
    let messages = create_rw_signal(MessageState::default());
    let report = PageData::<ReportData>::new();

    {
        let api = api.clone();
        let report = report.clone();
        create_effect(move |_| {
            let period = period.get();
            let api = api.clone();
            report.load(async move { api.get_report(ReportKind::Payroll, period).await });
        });
    }

    let download = create_action(move |_: &()| {
        let api = api.clone();
        let period = period.get_untracked();
        async move {
            match download_report(&api, ReportKind::Payroll, period).await {
                Ok(_) => messages.update(|m| m.set_success(DOWNLOADED)),
                Err(err) => messages.update(|m| m.set_api_error(&err)),
            }
        }
    });
    let downloading = download.pending();

    let value = report.value;
    let loading = report.loading;
    let title = if is_admin { "Payroll Management" } else { "My Payroll" };

    view! {
        <PageHeader title=title/>
        <AlertBanner messages=messages/>
        <div class="mb-6 flex flex-wrap items-end justify-between gap-4">
            <PeriodSelector period=period/>
            {is_admin.then(|| view! {
                <Button variant=ButtonVariant::Secondary loading=downloading on:click=move |_| download.dispatch(())>
                    {move || if downloading.get() { "Downloading..." } else { "Download CSV" }}
                </Button>
            })}
        </div>
        <InlineErrorMessage error=report.error/>
        {move || match value.get() {
            Some(data) => render_report(data, is_admin),
            None if loading.get() => view! { <LoadingSpinner/> }.into_view(),
            None => ().into_view(),
        }}
    }
}
