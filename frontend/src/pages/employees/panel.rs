use leptos::*;

use crate::{
    api::{use_api, EmployeeSummary},
    components::{
        alert::{AlertBanner, MessageState},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{LoadingSpinner, PageHeader, StatusBadge},
    },
    pages::employees::{
        repository::{deactivate_employee, DEACTIVATED},
        utils::{deactivate_prompt, filter_employees},
    },
    state::request_gate::PageData,
    utils::format::{initials, or_dash},
};

fn status_text(active: bool) -> &'static str {
    if active {
        "ACTIVE"
    } else {
        "INACTIVE"
    }
}

#[component]
fn EmployeeDetails(employee: EmployeeSummary, on_close: Callback<()>) -> impl IntoView {
    let subtitle = format!(
        "{} • {}",
        employee.job_title.clone().unwrap_or_else(|| "No Job Title".into()),
        employee.department.clone().unwrap_or_else(|| "No Department".into())
    );
    view! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Close"
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <div class="relative z-[61] w-full max-w-lg rounded-lg border border-border bg-surface-elevated p-6 shadow-xl" role="dialog" aria-modal="true">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-fg">{"Employee Details"}</h2>
                    <button type="button" class="text-fg-muted hover:text-fg" on:click=move |_| on_close.call(())>
                        {"✕"}
                    </button>
                </div>
                <div class="mt-4 text-center">
                    <span class="mx-auto flex h-16 w-16 items-center justify-center rounded-full bg-action-primary-bg text-xl font-semibold text-action-primary-text">
                        {initials(&employee.full_name)}
                    </span>
                    <p class="mt-2 text-lg font-semibold text-fg">{employee.full_name.clone()}</p>
                    <p class="text-sm text-fg-muted">{subtitle}</p>
                </div>
                <dl class="mt-6 grid grid-cols-1 gap-4 sm:grid-cols-2">
                    <div>
                        <dt class="text-xs text-fg-muted">{"Employee ID"}</dt>
                        <dd class="text-sm text-fg">{employee.employee_id.clone()}</dd>
                    </div>
                    <div>
                        <dt class="text-xs text-fg-muted">{"Email Address"}</dt>
                        <dd class="text-sm text-fg">{employee.email.clone()}</dd>
                    </div>
                    <div>
                        <dt class="text-xs text-fg-muted">{"Phone"}</dt>
                        <dd class="text-sm text-fg">{employee.phone.clone().filter(|p| !p.is_empty()).unwrap_or_else(|| "N/A".into())}</dd>
                    </div>
                    <div>
                        <dt class="text-xs text-fg-muted">{"Role"}</dt>
                        <dd class="text-sm text-fg">{employee.role.clone()}</dd>
                    </div>
                    <div class="sm:col-span-2">
                        <dt class="text-xs text-fg-muted">{"Account Status"}</dt>
                        <dd class="text-sm">
                            {if employee.is_active { "Active Account" } else { "Inactive Account" }}
                        </dd>
                    </div>
                </dl>
                <p class="mt-6 rounded bg-surface-muted px-3 py-2 text-sm text-fg-muted">
                    {"Full salary details are restricted. Please contact Finance for payslip access."}
                </p>
            </div>
        </div>
    }
}

#[component]
fn EmployeeTable(
    employees: Vec<EmployeeSummary>,
    on_view: Callback<EmployeeSummary>,
    on_deactivate: Callback<EmployeeSummary>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        {["ID", "Name", "Email", "Role", "Department", "Job Title", "Status", "Action"]
                            .into_iter()
                            .map(|h| view! { <th class="px-4 py-2 text-left text-xs font-medium uppercase text-fg-muted">{h}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {employees
                        .into_iter()
                        .map(|employee| {
                            let for_view = employee.clone();
                            let for_deactivate = employee.clone();
                            view! {
                                <tr>
                                    <td class="px-4 py-2 text-sm text-fg-muted">{employee.employee_id.clone()}</td>
                                    <td class="px-4 py-2 text-sm font-medium text-fg">{employee.full_name.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{employee.email.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{employee.role.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{or_dash(employee.department.as_deref())}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{or_dash(employee.job_title.as_deref())}</td>
                                    <td class="px-4 py-2 text-sm"><StatusBadge status=status_text(employee.is_active)/></td>
                                    <td class="px-4 py-2 text-sm space-x-3">
                                        <button type="button" class="text-action-primary-bg hover:underline" on:click=move |_| on_view.call(for_view.clone())>
                                            {"View"}
                                        </button>
                                        {employee.is_active.then(|| view! {
                                            <button
                                                type="button"
                                                class="text-status-error-text hover:underline"
                                                on:click=move |_| on_deactivate.call(for_deactivate.clone())
                                            >
                                                {"Deactivate"}
                                            </button>
                                        })}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let api = use_api();
    let employees = PageData::<Vec<EmployeeSummary>>::new();
    let messages = create_rw_signal(MessageState::default());
    let query = create_rw_signal(String::new());
    let selected = create_rw_signal(None::<EmployeeSummary>);
    let pending_deactivation = create_rw_signal(None::<EmployeeSummary>);

    let reload = {
        let api = api.clone();
        let employees = employees.clone();
        move || {
            let api = api.clone();
            employees.load(async move { api.list_employees().await });
        }
    };
    {
        let reload = reload.clone();
        create_effect(move |_| reload());
    }

    let deactivate = create_action(move |employee: &EmployeeSummary| {
        let api = api.clone();
        let reload = reload.clone();
        let employee = employee.clone();
        async move {
            match deactivate_employee(&api, &employee).await {
                Ok(()) => {
                    messages.update(|m| m.set_success(DEACTIVATED));
                    reload();
                }
                Err(err) => messages.update(|m| m.set_api_error(&err)),
            }
        }
    });
    let deactivating = deactivate.pending();

    let on_view = Callback::new(move |employee: EmployeeSummary| selected.set(Some(employee)));
    let on_close = Callback::new(move |_: ()| selected.set(None));
    let on_deactivate = Callback::new(move |employee: EmployeeSummary| pending_deactivation.set(Some(employee)));
    let confirm = Callback::new(move |_: ()| {
        if let Some(employee) = pending_deactivation.get_untracked() {
            deactivate.dispatch(employee);
        }
        pending_deactivation.set(None);
    });
    let cancel = Callback::new(move |_: ()| pending_deactivation.set(None));

    let list = employees.value;
    let loading = employees.loading;
    let visible = Signal::derive(move || {
        list.with(|all| all.as_deref().map(|all| filter_employees(all, &query.get())))
    });

    view! {
        <PageHeader title="All Employees" subtitle="Manage your organization's workforce"/>
        <AlertBanner messages=messages/>
        <div class="mb-4 flex items-center justify-between gap-4">
            <input
                type="search"
                aria-label="Search employees"
                placeholder="Search employees..."
                class="w-full max-w-sm rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg focus:border-action-primary-bg focus:outline-none"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <span class="text-sm text-fg-muted">
                {move || visible.get().map(|v| format!("{} employees", v.len())).unwrap_or_default()}
            </span>
        </div>
        <InlineErrorMessage error=employees.error/>
        {move || match visible.get() {
            None if loading.get() => view! { <LoadingSpinner/> }.into_view(),
            Some(rows) if !rows.is_empty() => {
                view! { <EmployeeTable employees=rows on_view=on_view on_deactivate=on_deactivate/> }.into_view()
            }
            Some(_) => view! { <EmptyState title="No employees found" description="Try a different search."/> }.into_view(),
            None => ().into_view(),
        }}
        {move || selected.get().map(|employee| view! { <EmployeeDetails employee=employee on_close=on_close/> })}
        <ConfirmDialog
            is_open=Signal::derive(move || pending_deactivation.with(Option::is_some))
            title="Deactivate employee"
            message=Signal::derive(move || pending_deactivation.get().map(|e| deactivate_prompt(&e)).unwrap_or_default())
            on_confirm=confirm
            on_cancel=cancel
            confirm_label="Deactivate"
            confirm_disabled=deactivating
            destructive=true
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{admin_session, provide_api},
        ssr::render_to_string,
    };

    fn sample(active: bool) -> EmployeeSummary {
        EmployeeSummary {
            id: Some("7".into()),
            employee_id: "OIACGRHO20240001".into(),
            full_name: "Grace Hopper".into(),
            email: "grace@acme.com".into(),
            role: "EMPLOYEE".into(),
            is_active: active,
            ..EmployeeSummary::default()
        }
    }

    #[test]
    fn table_offers_deactivation_only_for_active_rows() {
        let noop = || Callback::new(|_: EmployeeSummary| {});
        let html = render_to_string(move || {
            view! { <EmployeeTable employees=vec![sample(true)] on_view=noop() on_deactivate=noop()/> }
        });
        assert!(html.contains("Grace Hopper"));
        assert!(html.contains("Deactivate"));
        assert!(html.contains("ACTIVE"));

        let html = render_to_string(move || {
            view! { <EmployeeTable employees=vec![sample(false)] on_view=noop() on_deactivate=noop()/> }
        });
        assert!(html.contains("INACTIVE"));
        assert!(!html.contains("Deactivate"));
    }

    #[test]
    fn details_fall_back_for_missing_fields() {
        let html = render_to_string(|| {
            view! { <EmployeeDetails employee=sample(true) on_close=Callback::new(|_: ()| {})/> }
        });
        assert!(html.contains("No Job Title • No Department"));
        assert!(html.contains("N&#x2F;A"));
        assert!(html.contains("Active Account"));
    }

    #[test]
    fn page_renders_search_box() {
        let html = render_to_string(|| {
            leptos_meta::provide_meta_context();
            provide_api(admin_session(), "http://127.0.0.1:9");
            view! { <EmployeesPage/> }
        });
        assert!(html.contains("Search employees..."));
        assert!(html.contains("All Employees"));
    }
}
