use crate::{
    components::{
        alert::{AlertBanner, MessageState},
        common::{Button, TextField},
    },
    pages::login::utils,
    state::{auth, flash::use_flash},
    utils::navigation::use_navigator,
};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

#[component]
pub fn LoginPage() -> impl IntoView {
    let login_id = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let messages = create_rw_signal(MessageState::default());
    let navigator = use_navigator();
    if let Some(notice) = use_flash().take() {
        messages.update(|m| m.set_success(notice));
    }

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(next) => navigator.go(next),
                Err(err) => messages.update(|m| m.set_api_error(&err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match utils::validate_credentials(&login_id.get_untracked(), &password.get_untracked()) {
            Ok(request) => {
                messages.update(MessageState::clear);
                login_action.dispatch(request);
            }
            Err(msg) => messages.update(|m| m.set_error(msg)),
        }
    };

    view! {
        <Title text="Sign in | Dayflow"/>
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">{"Sign in to Dayflow"}</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">{"Every workday, perfectly aligned."}</p>
                </div>
                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <AlertBanner messages=messages/>
                    <div class="space-y-4">
                        <TextField id="login_id" label="Email or Employee ID" value=login_id placeholder="you@company.com" required=true/>
                        <TextField id="password" label="Password" value=password input_type="password" required=true/>
                    </div>
                    <Button class="w-full" loading=pending>
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    {"New to Dayflow? "}
                    <a href="/company-signup" class="font-medium text-action-primary-bg hover:underline">
                        {"Register your company"}
                    </a>
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
    fn login_page_renders_form_and_signup_link() {
        let html = render_to_string(|| {
            provide_context(Session::in_memory());
            view! { <LoginPage/> }
        });
        assert!(html.contains("Sign in to Dayflow"));
        assert!(html.contains("id=\"login_id\""));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("/company-signup"));
    }

    #[test]
    fn login_page_shows_signup_notice_once() {
        use crate::state::flash::{Flash, COMPANY_CREATED};

        let html = render_to_string(|| {
            provide_context(Session::in_memory());
            let flash = Flash::new();
            flash.set(COMPANY_CREATED);
            provide_context(flash);
            let first = view! { <LoginPage/> }.into_view();
            let second = view! { <div id="second"><LoginPage/></div> }.into_view();
            assert_eq!(flash.take(), None);
            view! { {first} {second} }
        });
        assert_eq!(html.matches("Company created successfully! Please sign in.").count(), 1);
    }
}
