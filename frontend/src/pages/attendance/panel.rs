use leptos::*;

use crate::{
    api::{use_api, AttendanceRecord, CheckAction, CheckRequest, MyAttendance},
    components::{
        alert::{AlertBanner, MessageState},
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{LoadingSpinner, PageHeader, StatusBadge},
        period::PeriodSelector,
    },
    pages::attendance::utils::{month_totals, success_message},
    state::request_gate::PageData,
    utils::{
        format::or_dash,
        time::{current_period, format_date, format_hours, format_time},
    },
};

#[component]
fn AttendanceTable(records: Vec<AttendanceRecord>) -> impl IntoView {
    if records.is_empty() {
        return view! { <EmptyState title="No attendance records" description="Nothing logged for this month."/> }
            .into_view();
    }
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium uppercase text-fg-muted">{"Date"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium uppercase text-fg-muted">{"Check In"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium uppercase text-fg-muted">{"Check Out"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium uppercase text-fg-muted">{"Work Hours"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium uppercase text-fg-muted">{"Status"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {records
                        .into_iter()
                        .map(|record| {
                            view! {
                                <tr>
                                    <td class="px-4 py-2 text-sm text-fg">{format_date(&record.date)}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{format_time(record.check_in.as_deref())}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{format_time(record.check_out.as_deref())}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{format_hours(record.work_hours)}</td>
                                    <td class="px-4 py-2 text-sm">
                                        <StatusBadge status=or_dash(Some(record.status.as_str()))/>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let api = use_api();
    let period = create_rw_signal(current_period());
    let messages = create_rw_signal(MessageState::default());
    let history = PageData::<MyAttendance>::new();

    let reload = {
        let api = api.clone();
        let history = history.clone();
        move || {
            let api = api.clone();
            let current = period.get_untracked();
            history.load(async move { api.get_my_attendance(current.month, current.year).await });
        }
    };

    {
        let reload = reload.clone();
        create_effect(move |_| {
            period.track();
            reload();
        });
    }

    let check = create_action(move |action: &CheckAction| {
        let api = api.clone();
        let reload = reload.clone();
        let action = *action;
        async move {
            match api.check_attendance(&CheckRequest::new(action)).await {
                Ok(_) => {
                    log::info!("attendance {} recorded", action.label());
                    messages.update(|m| m.set_success(success_message(action)));
                    reload();
                }
                Err(err) => messages.update(|m| m.set_api_error(&err)),
            }
        }
    });
    let pending = check.pending();

    let records = history.value;
    let loading = history.loading;

    view! {
        <PageHeader title="Attendance" subtitle="Check in, check out and review your month"/>
        <AlertBanner messages=messages/>
        <div class="bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6 mb-6">
            <h3 class="text-lg leading-6 font-medium text-fg mb-3">{"Today's Attendance"}</h3>
            <div class="flex gap-3">
                <Button
                    loading=pending
                    on:click=move |_| check.dispatch(CheckAction::CheckIn)
                >
                    {"Check In"}
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    loading=pending
                    on:click=move |_| check.dispatch(CheckAction::CheckOut)
                >
                    {"Check Out"}
                </Button>
            </div>
        </div>
        <div class="bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6">
            <div class="flex flex-wrap items-center justify-between gap-3 mb-4">
                <h3 class="text-lg leading-6 font-medium text-fg">{"Attendance History"}</h3>
                <PeriodSelector period=period/>
            </div>
            <InlineErrorMessage error=history.error/>
            {move || {
                if loading.get() && records.with(Option::is_none) {
                    return view! { <LoadingSpinner/> }.into_view();
                }
                let list = records.get().map(|data| data.records).unwrap_or_default();
                let (present, hours) = month_totals(&list);
                view! {
                    <p class="mb-3 text-sm text-fg-muted">
                        {format!("{} days present, {} logged", present, format_hours(Some(hours)))}
                    </p>
                    <AttendanceTable records=list/>
                }
                .into_view()
            }}
        </div>
    }
}
