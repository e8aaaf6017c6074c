use leptos::{ev::SubmitEvent, *};

use crate::{
    api::{use_api, LeaveBalance, MyTimeOff, TimeOffRequest, TimeOffSubmission, TimeOffType},
    components::{
        alert::{AlertBanner, MessageState},
        cards::StatCard,
        common::{Button, TextField},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{LoadingSpinner, PageHeader, StatusBadge},
    },
    pages::leave::utils::{LeaveForm, SUBMITTED},
    state::request_gate::PageData,
    utils::{format::or_dash, time::format_date},
};

fn type_label(raw: &str) -> String {
    TimeOffType::parse(raw)
        .map(|kind| kind.label().to_string())
        .unwrap_or_else(|| or_dash(Some(raw)))
}

fn days_label(days: Option<f64>) -> String {
    match days {
        Some(d) if d.fract() == 0.0 => format!("{}", d as i64),
        Some(d) => format!("{:.1}", d),
        None => "-".to_string(),
    }
}

#[component]
fn Balances(allocation: LeaveBalance) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-5 md:grid-cols-2 mb-6">
            <StatCard
                label="Paid Leave"
                value=allocation.paid_leave_available.to_string()
                hint=format!("of {} days available", allocation.paid_leave_total)
            />
            <StatCard
                label="Sick Leave"
                value=allocation.sick_leave_available.to_string()
                hint=format!("of {} days available", allocation.sick_leave_total)
            />
        </div>
    }
}

#[component]
fn LeaveHistory(requests: Vec<TimeOffRequest>) -> impl IntoView {
    if requests.is_empty() {
        return view! { <EmptyState title="No leave requests yet"/> }.into_view();
    }
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        {["Type", "Start Date", "End Date", "Days", "Reason", "Status", "Approved By"]
                            .into_iter()
                            .map(|h| view! { <th class="px-4 py-2 text-left text-xs font-medium uppercase text-fg-muted">{h}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {requests
                        .into_iter()
                        .map(|request| {
                            view! {
                                <tr>
                                    <td class="px-4 py-2 text-sm text-fg">{type_label(&request.time_off_type)}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{format_date(&request.start_date)}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{format_date(&request.end_date)}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{days_label(request.total_days)}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{or_dash(request.reason.as_deref())}</td>
                                    <td class="px-4 py-2 text-sm"><StatusBadge status=request.status.clone()/></td>
                                    <td class="px-4 py-2 text-sm text-fg">{or_dash(request.approved_by_name.as_deref())}</td>
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
pub fn LeavePage() -> impl IntoView {
    let api = use_api();
    let form = LeaveForm::new();
    let messages = create_rw_signal(MessageState::default());
    let data = PageData::<MyTimeOff>::new();

    let reload = {
        let api = api.clone();
        let data = data.clone();
        move || {
            let api = api.clone();
            data.load(async move { api.get_my_time_off().await });
        }
    };
    {
        let reload = reload.clone();
        create_effect(move |_| reload());
    }

    let submit = create_action(move |submission: &TimeOffSubmission| {
        let api = api.clone();
        let reload = reload.clone();
        let submission = submission.clone();
        async move {
            match api.submit_time_off(&submission).await {
                Ok(_) => {
                    messages.update(|m| m.set_success(SUBMITTED));
                    form.reset();
                    reload();
                }
                Err(err) => messages.update(|m| m.set_api_error(&err)),
            }
        }
    });
    let pending = submit.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.snapshot().validate() {
            Ok(submission) => {
                messages.update(MessageState::clear);
                submit.dispatch(submission);
            }
            Err(msg) => messages.update(|m| m.set_error(msg)),
        }
    };

    let value = data.value;
    let loading = data.loading;

    view! {
        <PageHeader title="Leave" subtitle="Request time off and track your requests"/>
        <AlertBanner messages=messages/>
        <InlineErrorMessage error=data.error/>
        {move || value.get().and_then(|d| d.allocation).map(|allocation| view! { <Balances allocation=allocation/> })}
        <div class="bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6 mb-6">
            <h3 class="text-lg leading-6 font-medium text-fg mb-4">{"Request Time Off"}</h3>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label for="time_off_type" class="block text-sm font-medium text-fg">
                        {"Leave Type"}<span class="text-status-error-text">{" *"}</span>
                    </label>
                    <select
                        id="time_off_type"
                        class="mt-1 block w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg"
                        on:change=move |ev| {
                            if let Some(kind) = TimeOffType::parse(&event_target_value(&ev)) {
                                form.time_off_type.set(kind);
                            }
                        }
                    >
                        {TimeOffType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option value=kind.as_str() selected=move || form.time_off_type.get() == kind>
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <TextField id="start_date" label="Start Date" value=form.start_date input_type="date" required=true/>
                    <TextField id="end_date" label="End Date" value=form.end_date input_type="date" required=true/>
                </div>
                <div>
                    <label for="reason" class="block text-sm font-medium text-fg">
                        {"Reason"}<span class="text-status-error-text">{" *"}</span>
                    </label>
                    <textarea
                        id="reason"
                        rows="3"
                        placeholder="Please explain the reason for your leave request..."
                        class="mt-1 block w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg"
                        prop:value=move || form.reason.get()
                        on:input=move |ev| form.reason.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <Button loading=pending>
                    {move || if pending.get() { "Submitting..." } else { "Submit Request" }}
                </Button>
            </form>
        </div>
        <div class="bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6">
            <h3 class="text-lg leading-6 font-medium text-fg mb-4">{"My Leave Requests"}</h3>
            {move || match value.get() {
                Some(data) => view! { <LeaveHistory requests=data.time_off_requests/> }.into_view(),
                None if loading.get() => view! { <LoadingSpinner/> }.into_view(),
                None => view! { <LeaveHistory requests=Vec::new()/> }.into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_known_types_and_whole_days() {
        assert_eq!(type_label("SICK"), "Sick Leave");
        assert_eq!(type_label("SABBATICAL"), "SABBATICAL");
        assert_eq!(days_label(Some(3.0)), "3");
        assert_eq!(days_label(Some(0.5)), "0.5");
        assert_eq!(days_label(None), "-");
    }
}
