use leptos::*;

use crate::{
    api::{AdminDashboard, EmployeeCard},
    components::{cards::StatCard, empty_state::EmptyState, layout::StatusBadge},
    utils::format::{initials, or_dash},
};

#[component]
fn EmployeeTile(card: EmployeeCard) -> impl IntoView {
    view! {
        <li class="flex items-center gap-3 rounded-lg border border-border bg-surface-elevated p-4">
            {match card.avatar.clone().filter(|url| !url.is_empty()) {
                Some(url) => view! { <img src=url alt="" class="h-10 w-10 rounded-full object-cover"/> }.into_view(),
                None => view! {
                    <span class="flex h-10 w-10 items-center justify-center rounded-full bg-surface-muted text-sm font-semibold text-fg">
                        {initials(&card.name)}
                    </span>
                }
                .into_view(),
            }}
            <div class="min-w-0 flex-1">
                <p class="truncate text-sm font-medium text-fg">{card.name.clone()}</p>
                <p class="truncate text-xs text-fg-muted">{or_dash(card.job_title.as_deref())}</p>
            </div>
            {card.status.clone().map(|status| view! { <StatusBadge status=status/> })}
        </li>
    }
}

#[component]
pub fn AdminOverview(data: AdminDashboard) -> impl IntoView {
    let summary = data.summary;
    let today = data.attendance_today;
    let cards = data.employee_cards;

    view! {
        <div class="grid grid-cols-1 gap-5 md:grid-cols-3">
            <StatCard label="Total Employees" value=summary.total_employees.to_string()/>
            <StatCard label="Pending Leaves" value=summary.pending_leaves.to_string()/>
            <StatCard label="Today's Present" value=today.present.to_string()/>
        </div>
        <div class="mt-6 bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6">
            <h3 class="text-lg leading-6 font-medium text-fg">{"Today's Attendance Overview"}</h3>
            <dl class="mt-4 grid grid-cols-3 gap-4 text-center">
                <div>
                    <dd class="text-2xl font-semibold text-status-success-text">{today.present}</dd>
                    <dt class="text-sm text-fg-muted">{"Present"}</dt>
                </div>
                <div>
                    <dd class="text-2xl font-semibold text-status-error-text">{today.absent}</dd>
                    <dt class="text-sm text-fg-muted">{"Absent"}</dt>
                </div>
                <div>
                    <dd class="text-2xl font-semibold text-status-warning-text">{today.leave}</dd>
                    <dt class="text-sm text-fg-muted">{"On Leave"}</dt>
                </div>
            </dl>
        </div>
        <div class="mt-6">
            <h3 class="mb-3 text-lg leading-6 font-medium text-fg">{"Team"}</h3>
            {if cards.is_empty() {
                view! { <EmptyState title="No employees yet" description="Add employees to see them here."/> }.into_view()
            } else {
                view! {
                    <ul class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        {cards.into_iter().map(|card| view! { <EmployeeTile card=card/> }).collect_view()}
                    </ul>
                }
                .into_view()
            }}
        </div>
    }
}
