use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

use crate::{
    api::use_api,
    components::{
        alert::{AlertBanner, MessageState},
        common::{Button, TextField},
    },
    pages::change_password::{
        repository::submit_password_change,
        utils::{PasswordChangeInput, REDIRECT_DELAY_MS, SUCCESS_MESSAGE},
    },
    session::guard::DASHBOARD_PATH,
    utils::navigation::use_navigator,
};

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let api = use_api();
    let first_login = api.session().is_first_login();
    let navigator = use_navigator();

    let old_password = create_rw_signal(String::new());
    let new_password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let messages = create_rw_signal(MessageState::default());
    let redirect: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let change_action = create_action(move |input: &PasswordChangeInput| {
        let api = api.clone();
        let input = input.clone();
        async move { submit_password_change(&api, &input, first_login).await }
    });
    let pending = change_action.pending();

    {
        let redirect = redirect.clone();
        create_effect(move |_| {
            if let Some(result) = change_action.value().get() {
                match result {
                    Ok(_) => {
                        messages.update(|m| m.set_success(SUCCESS_MESSAGE));
                        let navigator = navigator.clone();
                        let timeout = Timeout::new(REDIRECT_DELAY_MS, move || navigator.go(DASHBOARD_PATH));
                        redirect.borrow_mut().replace(timeout);
                    }
                    Err(err) => messages.update(|m| m.set_api_error(&err)),
                }
            }
        });
    }
    on_cleanup(move || {
        if let Some(timeout) = redirect.borrow_mut().take() {
            timeout.cancel();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let input = PasswordChangeInput {
            old_password: old_password.get_untracked(),
            new_password: new_password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        match input.validate(first_login) {
            Ok(_) => {
                messages.update(MessageState::clear);
                change_action.dispatch(input);
            }
            Err(msg) => messages.update(|m| m.set_error(msg)),
        }
    };

    view! {
        <Title text="Change password | Dayflow"/>
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        {if first_login { "Set your password" } else { "Change password" }}
                    </h2>
                    {first_login.then(|| view! {
                        <p class="mt-2 text-center text-sm text-fg-muted">
                            {"This is your first sign-in. Replace the temporary password to continue."}
                        </p>
                    })}
                </div>
                <form class="space-y-6" on:submit=on_submit>
                    <AlertBanner messages=messages/>
                    {(!first_login).then(|| view! {
                        <TextField id="old_password" label="Current Password" value=old_password input_type="password" required=true/>
                    })}
                    <TextField id="new_password" label="New Password" value=new_password input_type="password" required=true/>
                    <TextField id="confirm_password" label="Confirm New Password" value=confirm_password input_type="password" required=true/>
                    <Button class="w-full" loading=pending>
                        {move || if pending.get() { "Saving..." } else { "Change password" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
