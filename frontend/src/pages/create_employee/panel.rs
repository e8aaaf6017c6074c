use leptos::{ev::SubmitEvent, *};

use crate::{
    api::{use_api, CreateEmployeeRequest, CreateEmployeeResponse},
    components::{
        alert::{AlertBanner, MessageState},
        common::{Button, TextField},
        layout::PageHeader,
    },
    pages::create_employee::utils::{EmployeeForm, ASSIGNABLE_ROLES, CREATED},
    utils::format::or_dash,
};

#[component]
fn CredentialsCard(created: CreateEmployeeResponse) -> impl IntoView {
    let employee = created.employee;
    view! {
        <div class="mb-6 rounded-lg border border-status-success-border bg-surface-elevated shadow">
            <div class="rounded-t-lg bg-status-success-bg px-4 py-3 text-sm font-semibold text-status-success-text">
                {"Employee Created Successfully"}
            </div>
            <dl class="grid grid-cols-1 gap-4 px-4 py-5 sm:grid-cols-2">
                <div>
                    <dt class="text-xs text-fg-muted">{"Employee ID"}</dt>
                    <dd class="text-sm font-semibold text-fg">{or_dash(employee.employee_id.as_deref())}</dd>
                </div>
                <div>
                    <dt class="text-xs text-fg-muted">{"Full Name"}</dt>
                    <dd class="text-sm font-semibold text-fg">{or_dash(employee.full_name.as_deref())}</dd>
                </div>
                <div>
                    <dt class="text-xs text-fg-muted">{"Email"}</dt>
                    <dd class="text-sm font-semibold text-fg">{or_dash(employee.email.as_deref())}</dd>
                </div>
                <div>
                    <dt class="text-xs text-fg-muted">{"Temporary Password"}</dt>
                    <dd>
                        <code class="rounded bg-surface-muted px-2 py-1 text-sm text-fg">
                            {or_dash(created.temporary_password.as_deref())}
                        </code>
                    </dd>
                </div>
            </dl>
            {created.note.map(|note| view! {
                <p class="mx-4 mb-4 rounded bg-status-warning-bg px-3 py-2 text-sm text-status-warning-text">
                    <strong>{"Important: "}</strong>{note}
                </p>
            })}
        </div>
    }
}

#[component]
pub fn CreateEmployeePage() -> impl IntoView {
    let api = use_api();
    let form = EmployeeForm::new();
    let messages = create_rw_signal(MessageState::default());
    let created = create_rw_signal(None::<CreateEmployeeResponse>);

    let create = create_action(move |request: &CreateEmployeeRequest| {
        let api = api.clone();
        let request = request.clone();
        async move {
            match api.create_employee(&request).await {
                Ok(response) => {
                    log::info!(
                        "created employee {}",
                        response.employee.employee_id.as_deref().unwrap_or("?")
                    );
                    messages.update(|m| m.set_success(CREATED));
                    created.set(Some(response));
                    form.reset();
                }
                Err(err) => messages.update(|m| m.set_api_error(&err)),
            }
        }
    });
    let pending = create.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.snapshot().validate() {
            Ok(request) => {
                messages.update(MessageState::clear);
                create.dispatch(request);
            }
            Err(msg) => messages.update(|m| m.set_error(msg)),
        }
    };

    view! {
        <PageHeader title="Create New Employee"/>
        <AlertBanner messages=messages/>
        {move || created.get().map(|response| view! { <CredentialsCard created=response/> })}
        <form class="bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6 space-y-4" on:submit=on_submit>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                <TextField id="first_name" label="First Name" value=form.first_name required=true/>
                <TextField id="last_name" label="Last Name" value=form.last_name required=true/>
                <TextField id="email" label="Email" value=form.email input_type="email" required=true/>
                <TextField id="phone" label="Phone" value=form.phone input_type="tel" placeholder="9876543210"/>
                <div>
                    <label for="role" class="block text-sm font-medium text-fg">
                        {"Role"}<span class="text-status-error-text">{" *"}</span>
                    </label>
                    <select
                        id="role"
                        class="mt-1 block w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg"
                        on:change=move |ev| form.role.set(event_target_value(&ev))
                    >
                        {ASSIGNABLE_ROLES
                            .iter()
                            .map(|(value, label)| {
                                let value = *value;
                                view! { <option value=value selected=move || form.role.get() == value>{*label}</option> }
                            })
                            .collect_view()}
                    </select>
                    <p class="mt-1 text-xs text-fg-muted">{"Admin role can only be set during company signup"}</p>
                </div>
                <TextField id="year_of_joining" label="Year of Joining" value=form.year_of_joining input_type="number" required=true/>
            </div>
            <p class="rounded bg-surface-muted px-3 py-2 text-sm text-fg-muted">
                {"A temporary password will be generated. The employee must change it on first login."}
            </p>
            <Button loading=pending>
                {move || if pending.get() { "Creating..." } else { "Create Employee" }}
            </Button>
        </form>
    }
}
