use leptos::*;

use crate::{
    api::{use_api, DecisionAction, TimeOffDecision, TimeOffRequest, TimeOffType},
    components::{
        alert::{AlertBanner, MessageState},
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{LoadingSpinner, PageHeader, StatusBadge},
    },
    pages::approvals::utils::{build_decision, decision_message, ApprovalTab},
    state::request_gate::PageData,
    utils::{format::or_dash, time::format_date},
};

const TAB_CLASS: &str = "px-4 py-2 text-sm font-medium border-b-2 border-transparent text-fg-muted hover:text-fg";
const ACTIVE_TAB_CLASS: &str = "px-4 py-2 text-sm font-semibold border-b-2 border-action-primary-bg text-fg";

#[component]
fn RequestCard(
    request: TimeOffRequest,
    on_approve: Callback<String>,
    on_reject: Callback<String>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let id = request.id.clone().unwrap_or_default();
    let reject_id = id.clone();
    let is_pending = request.status.eq_ignore_ascii_case("PENDING") && !id.is_empty();
    let kind = TimeOffType::parse(&request.time_off_type)
        .map(|k| k.label().to_string())
        .unwrap_or_else(|| request.time_off_type.clone());

    view! {
        <li class="rounded-lg border border-border bg-surface-elevated p-4">
            <div class="flex items-start justify-between gap-3">
                <div>
                    <p class="text-sm font-semibold text-fg">{or_dash(request.employee_name.as_deref())}</p>
                    <p class="text-xs text-fg-muted">{or_dash(request.employee_id.as_deref())}</p>
                </div>
                <StatusBadge status=request.status.clone()/>
            </div>
            <p class="mt-2 text-sm text-fg">
                {format!("{}: {} to {}", kind, format_date(&request.start_date), format_date(&request.end_date))}
            </p>
            {request.reason.clone().filter(|r| !r.trim().is_empty()).map(|reason| view! {
                <p class="mt-1 text-sm text-fg-muted">{reason}</p>
            })}
            {if is_pending {
                view! {
                    <div class="mt-3 flex gap-2">
                        <Button disabled=busy on:click=move |_| on_approve.call(id.clone())>{"Approve"}</Button>
                        <Button variant=ButtonVariant::Danger disabled=busy on:click=move |_| on_reject.call(reject_id.clone())>
                            {"Reject"}
                        </Button>
                    </div>
                }
                .into_view()
            } else {
                request
                    .approved_by_name
                    .clone()
                    .map(|name| view! { <p class="mt-2 text-xs text-fg-muted">{format!("Processed by {}", name)}</p> })
                    .into_view()
            }}
        </li>
    }
}

#[component]
pub fn ApprovalsPage() -> impl IntoView {
    let api = use_api();
    let tab = create_rw_signal(ApprovalTab::Pending);
    let messages = create_rw_signal(MessageState::default());
    let pending = PageData::<Vec<TimeOffRequest>>::new();
    let all = PageData::<Vec<TimeOffRequest>>::new();
    let rejecting = create_rw_signal(None::<String>);
    let reject_reason = create_rw_signal(String::new());

    let reload = {
        let api = api.clone();
        let pending = pending.clone();
        let all = all.clone();
        move |current: ApprovalTab| {
            let client = api.clone();
            pending.load(async move { client.manage_time_off(ApprovalTab::Pending.status_filter()).await });
            if current == ApprovalTab::All {
                let client = api.clone();
                all.load(async move { client.manage_time_off(ApprovalTab::All.status_filter()).await });
            }
        }
    };
    {
        let reload = reload.clone();
        create_effect(move |_| reload(tab.get()));
    }

    let decide = create_action(move |(id, decision): &(String, TimeOffDecision)| {
        let api = api.clone();
        let reload = reload.clone();
        let id = id.clone();
        let decision = decision.clone();
        async move {
            match api.decide_time_off(&id, &decision).await {
                Ok(_) => {
                    log::info!("time off {} {}", id, decision.action.past_tense());
                    messages.update(|m| m.set_success(decision_message(decision.action)));
                    reload(tab.get_untracked());
                }
                Err(err) => messages.update(|m| m.set_api_error(&err)),
            }
        }
    });
    let busy = decide.pending();

    let on_approve = Callback::new(move |id: String| {
        decide.dispatch((id, build_decision(DecisionAction::Approve, "")));
    });
    let on_reject = Callback::new(move |id: String| {
        reject_reason.set(String::new());
        rejecting.set(Some(id));
    });
    let confirm_reject = move |_| {
        if let Some(id) = rejecting.get_untracked() {
            let decision = build_decision(DecisionAction::Reject, &reject_reason.get_untracked());
            rejecting.set(None);
            decide.dispatch((id, decision));
        }
    };

    let pending_list = pending.value;
    let pending_count = move || pending_list.with(|list| list.as_ref().map_or(0, Vec::len));
    let shown = {
        let pending = pending.clone();
        let all = all.clone();
        move || match tab.get() {
            ApprovalTab::Pending => pending.clone(),
            ApprovalTab::All => all.clone(),
        }
    };

    view! {
        <div class="flex items-center justify-between">
            <PageHeader title="Leave Approvals"/>
            <span class="rounded-full bg-status-warning-bg px-3 py-1 text-sm font-semibold text-status-warning-text">
                {move || format!("{} Pending", pending_count())}
            </span>
        </div>
        <AlertBanner messages=messages/>
        <div class="mb-4 flex gap-2 border-b border-border" role="tablist">
            <button
                type="button"
                role="tab"
                class=move || if tab.get() == ApprovalTab::Pending { ACTIVE_TAB_CLASS } else { TAB_CLASS }
                on:click=move |_| tab.set(ApprovalTab::Pending)
            >
                {"Pending Requests"}
            </button>
            <button
                type="button"
                role="tab"
                class=move || if tab.get() == ApprovalTab::All { ACTIVE_TAB_CLASS } else { TAB_CLASS }
                on:click=move |_| tab.set(ApprovalTab::All)
            >
                {"All Requests"}
            </button>
        </div>
        <Show when=move || rejecting.with(Option::is_some)>
            <div class="mb-4 rounded-lg border border-status-error-border bg-surface-elevated p-4 space-y-3">
                <label for="reject_reason" class="block text-sm font-medium text-fg">{"Rejection reason (optional)"}</label>
                <textarea
                    id="reject_reason"
                    rows="2"
                    class="block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                    prop:value=move || reject_reason.get()
                    on:input=move |ev| reject_reason.set(event_target_value(&ev))
                ></textarea>
                <div class="flex justify-end gap-2">
                    <Button variant=ButtonVariant::Secondary on:click=move |_| rejecting.set(None)>{"Cancel"}</Button>
                    <Button variant=ButtonVariant::Danger on:click=confirm_reject>{"Reject request"}</Button>
                </div>
            </div>
        </Show>
        {move || {
            let data = shown();
            let current = tab.get();
            if let Some(err) = data.error.get() {
                let error = Signal::derive(move || Some(err.clone()));
                return view! { <InlineErrorMessage error=error/> }.into_view();
            }
            match data.value.get() {
                None if data.loading.get() => view! { <LoadingSpinner/> }.into_view(),
                Some(list) if !list.is_empty() => view! {
                    <ul class="grid grid-cols-1 gap-4 lg:grid-cols-2">
                        {list
                            .into_iter()
                            .map(|request| view! {
                                <RequestCard request=request on_approve=on_approve on_reject=on_reject busy=busy/>
                            })
                            .collect_view()}
                    </ul>
                }
                .into_view(),
                _ => view! { <EmptyState title=current.empty_title()/> }.into_view(),
            }
        }}
    }
}
