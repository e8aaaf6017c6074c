use crate::{
    components::{
        alert::{AlertBanner, MessageState},
        common::{Button, TextField},
    },
    pages::company_signup::utils::SignupForm,
    state::{
        auth,
        flash::{signup_notice, use_flash},
    },
    utils::navigation::use_navigator,
};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

#[component]
pub fn CompanySignupPage() -> impl IntoView {
    let form = SignupForm::new();
    let messages = create_rw_signal(MessageState::default());
    let navigator = use_navigator();
    let flash = use_flash();

    let signup_action = auth::use_signup_action();
    let pending = signup_action.pending();

    create_effect(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(next) => {
                    if let Some(notice) = signup_notice(next) {
                        flash.set(notice);
                    }
                    navigator.go(next);
                }
                Err(err) => messages.update(|m| m.set_api_error(&err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.snapshot().validate() {
            Ok(request) => {
                messages.update(MessageState::clear);
                signup_action.dispatch(request);
            }
            Err(msg) => messages.update(|m| m.set_error(msg)),
        }
    };

    view! {
        <Title text="Register your company | Dayflow"/>
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-lg w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">{"Register your company"}</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        {"You will be the administrator of the new workspace."}
                    </p>
                </div>
                <form class="space-y-6" on:submit=on_submit>
                    <AlertBanner messages=messages/>
                    <TextField id="company_name" label="Company Name" value=form.company_name required=true/>
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                        <TextField id="first_name" label="First Name" value=form.first_name required=true/>
                        <TextField id="last_name" label="Last Name" value=form.last_name required=true/>
                    </div>
                    <TextField id="email" label="Email" value=form.email input_type="email" required=true/>
                    <TextField id="phone" label="Phone" value=form.phone input_type="tel" required=true/>
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                        <TextField id="password" label="Password" value=form.password input_type="password" required=true/>
                        <TextField id="confirm_password" label="Confirm Password" value=form.confirm_password input_type="password" required=true/>
                    </div>
                    <Button class="w-full" loading=pending>
                        {move || if pending.get() { "Creating company..." } else { "Create company" }}
                    </Button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    {"Already registered? "}
                    <a href="/login" class="font-medium text-action-primary-bg hover:underline">{"Sign in"}</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{session::Session, test_support::ssr::render_to_string};

    #[test]
    fn signup_page_renders_all_fields() {
        let html = render_to_string(|| {
            provide_context(Session::in_memory());
            view! { <CompanySignupPage/> }
        });
        for id in [
            "company_name",
            "first_name",
            "last_name",
            "email",
            "phone",
            "password",
            "confirm_password",
        ] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
        assert!(html.contains("href=\"/login\""));
    }
}
