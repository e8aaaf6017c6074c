use leptos::*;

use crate::{
    api::{use_api, FileUpload, Profile, ProfileUpdate},
    components::{
        alert::{AlertBanner, MessageState},
        cards::DetailCard,
        common::{Button, ButtonVariant, TextField},
        error::InlineErrorMessage,
        layout::{LoadingSpinner, PageHeader},
    },
    pages::profile::{
        documents::DocumentsSection,
        utils::{job_rows, salary_rows, ProfileForm, ProfileTab, AVATAR_UPDATED, PROFILE_UPDATED},
    },
    state::request_gate::PageData,
    utils::{
        file::{read_file, selected_file},
        format::{initials, or_dash},
    },
};

const TAB_CLASS: &str = "px-4 py-2 text-sm font-medium border-b-2 border-transparent text-fg-muted hover:text-fg";
const ACTIVE_TAB_CLASS: &str = "px-4 py-2 text-sm font-semibold border-b-2 border-action-primary-bg text-fg";

fn tag_list(items: &[String]) -> View {
    if items.is_empty() {
        return view! { <span class="text-sm text-fg-muted">{"-"}</span> }.into_view();
    }
    items
        .iter()
        .map(|item| {
            view! {
                <span class="mr-2 mb-2 inline-flex rounded-full bg-surface-muted px-2 py-0.5 text-xs text-fg">{item.clone()}</span>
            }
        })
        .collect_view()
}

#[component]
fn PersonalInfo(profile: Profile) -> impl IntoView {
    let rows = vec![
        ("Email".to_string(), or_dash(profile.email.as_deref())),
        ("Phone".to_string(), or_dash(profile.phone.as_deref())),
        ("Address".to_string(), or_dash(profile.residential_address.as_deref())),
        ("About".to_string(), or_dash(profile.about.as_deref())),
    ];
    view! {
        <DetailCard title="Personal Info" rows=rows/>
        <div class="mt-5 grid grid-cols-1 gap-5 md:grid-cols-2">
            <div class="bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6">
                <h3 class="text-sm font-medium text-fg-muted mb-2">{"Skills"}</h3>
                {tag_list(&profile.skills)}
            </div>
            <div class="bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6">
                <h3 class="text-sm font-medium text-fg-muted mb-2">{"Certifications"}</h3>
                {tag_list(&profile.certifications)}
            </div>
        </div>
    }
}

#[component]
fn ProfileEditor(
    form: ProfileForm,
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<ProfileUpdate>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_save.call(form.to_update());
    };
    view! {
        <form class="bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6 space-y-4" on:submit=on_submit>
            <TextField id="phone" label="Phone" value=form.phone input_type="tel"/>
            <TextField id="residential_address" label="Address" value=form.residential_address/>
            <div>
                <label for="about" class="block text-sm font-medium text-fg">{"About"}</label>
                <textarea
                    id="about"
                    rows="3"
                    class="mt-1 block w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg"
                    prop:value=move || form.about.get()
                    on:input=move |ev| form.about.set(event_target_value(&ev))
                ></textarea>
            </div>
            <TextField id="skills" label="Skills" value=form.skills placeholder="Comma separated, e.g. Rust, SQL"/>
            <TextField id="certifications" label="Certifications" value=form.certifications placeholder="Comma separated"/>
            <div class="flex gap-2">
                <Button loading=saving>{move || if saving.get() { "Saving..." } else { "Save Changes" }}</Button>
                <button
                    type="button"
                    class=format!("inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold {}", ButtonVariant::Secondary.classes())
                    on:click=move |_| on_cancel.call(())
                >
                    {"Cancel"}
                </button>
            </div>
        </form>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = use_api();
    let profile = PageData::<Profile>::new();
    let messages = create_rw_signal(MessageState::default());
    let tab = create_rw_signal(ProfileTab::Info);
    let editing = create_rw_signal(false);
    let form = ProfileForm::new();

    {
        let api = api.clone();
        let profile = profile.clone();
        create_effect(move |_| {
            let api = api.clone();
            profile.load(async move { api.get_my_profile().await });
        });
    }

    let save = {
        let api = api.clone();
        let profile = profile.clone();
        create_action(move |update: &ProfileUpdate| {
            let api = api.clone();
            let profile = profile.clone();
            let update = update.clone();
            async move {
                match api.update_profile(&update).await {
                    Ok(_) => {
                        profile.update(|p| {
                            p.phone = Some(update.phone.clone());
                            p.residential_address = Some(update.residential_address.clone());
                            p.about = Some(update.about.clone());
                            p.skills = update.skills.clone();
                            p.certifications = update.certifications.clone();
                        });
                        editing.set(false);
                        messages.update(|m| m.set_success(PROFILE_UPDATED));
                    }
                    Err(err) => messages.update(|m| m.set_api_error(&err)),
                }
            }
        })
    };
    let saving = save.pending();

    let avatar = {
        let profile = profile.clone();
        create_action(move |file: &FileUpload| {
            let api = api.clone();
            let profile = profile.clone();
            let file = file.clone();
            async move {
                match api.upload_avatar(&file).await {
                    Ok(response) => {
                        if let Some(url) = response.avatar {
                            profile.update(|p| p.avatar = Some(url));
                        }
                        messages.update(|m| m.set_success(AVATAR_UPDATED));
                    }
                    Err(err) => messages.update(|m| m.set_api_error(&err)),
                }
            }
        })
    };

    let on_avatar = move |ev: leptos::ev::Event| {
        if let Some(file) = selected_file(&ev) {
            spawn_local(async move {
                match read_file(&file).await {
                    Ok(upload) => avatar.dispatch(upload),
                    Err(msg) => messages.update(|m| m.set_error(msg)),
                }
            });
        }
    };

    let value = profile.value;
    let loading = profile.loading;
    let start_edit = move |_| {
        if let Some(current) = value.get_untracked() {
            form.fill_from(&current);
        }
        editing.set(true);
    };
    let on_save = Callback::new(move |update: ProfileUpdate| save.dispatch(update));
    let on_cancel = Callback::new(move |_: ()| editing.set(false));

    view! {
        <div class="flex items-start justify-between">
            <PageHeader title="My Profile"/>
            <Show when=move || value.with(Option::is_some) && !editing.get()>
                <Button on:click=start_edit>{"Edit Profile"}</Button>
            </Show>
        </div>
        <AlertBanner messages=messages/>
        <InlineErrorMessage error=profile.error/>
        {move || match value.get() {
            None if loading.get() => view! { <LoadingSpinner/> }.into_view(),
            None => ().into_view(),
            Some(current) => {
                let name = current.full_name.clone().unwrap_or_else(|| "User".to_string());
                view! {
                    <div class="mb-6 flex items-center gap-4">
                        {match current.avatar.clone().filter(|url| !url.is_empty()) {
                            Some(url) => view! { <img src=url alt="Profile photo" class="h-20 w-20 rounded-full object-cover"/> }.into_view(),
                            None => view! {
                                <span class="flex h-20 w-20 items-center justify-center rounded-full bg-action-primary-bg text-2xl font-semibold text-action-primary-text">
                                    {initials(&name)}
                                </span>
                            }
                            .into_view(),
                        }}
                        <div>
                            <p class="text-xl font-semibold text-fg">{name.clone()}</p>
                            <p class="text-sm text-fg-muted">{or_dash(current.employee_id.as_deref())}</p>
                            <label class="mt-2 inline-block cursor-pointer text-sm text-action-primary-bg hover:underline">
                                {"Change photo"}
                                <input type="file" accept="image/*" class="sr-only" on:change=on_avatar/>
                            </label>
                        </div>
                    </div>
                }
                .into_view()
            }
        }}
        <div class="mb-4 flex gap-2 border-b border-border" role="tablist">
            {ProfileTab::ALL
                .into_iter()
                .map(|item| view! {
                    <button
                        type="button"
                        role="tab"
                        class=move || if tab.get() == item { ACTIVE_TAB_CLASS } else { TAB_CLASS }
                        on:click=move |_| tab.set(item)
                    >
                        {item.label()}
                    </button>
                })
                .collect_view()}
        </div>
        {move || {
            let Some(current) = value.get() else {
                return ().into_view();
            };
            match tab.get() {
                ProfileTab::Info if editing.get() => {
                    view! { <ProfileEditor form=form saving=saving on_save=on_save on_cancel=on_cancel/> }.into_view()
                }
                ProfileTab::Info => view! { <PersonalInfo profile=current/> }.into_view(),
                ProfileTab::Job => view! { <DetailCard title="Job Details" rows=job_rows(&current)/> }.into_view(),
                ProfileTab::Salary => view! { <DetailCard title="Salary Info" rows=salary_rows(&current)/> }.into_view(),
            }
        }}
        <div class="mt-6">
            <DocumentsSection/>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{employee_session, provide_api},
        ssr::render_to_string,
    };

    #[test]
    fn personal_info_lists_fields_and_tags() {
        let html = render_to_string(|| {
            let profile = Profile {
                email: Some("jane.doe@acme.com".into()),
                phone: Some("555-0100".into()),
                skills: vec!["Rust".into(), "SQL".into()],
                ..Profile::default()
            };
            view! { <PersonalInfo profile=profile/> }
        });
        assert!(html.contains("jane.doe@acme.com"));
        assert!(html.contains("555-0100"));
        assert!(html.contains("Rust"));
        assert!(html.contains("Certifications"));
    }

    #[test]
    fn editor_prefills_from_form() {
        let html = render_to_string(|| {
            let form = ProfileForm::new();
            form.fill_from(&Profile {
                skills: vec!["Rust".into(), "Leptos".into()],
                ..Profile::default()
            });
            let on_save = Callback::new(|_: ProfileUpdate| {});
            let on_cancel = Callback::new(|_: ()| {});
            view! { <ProfileEditor form=form saving=Signal::derive(|| false) on_save=on_save on_cancel=on_cancel/> }
        });
        assert!(html.contains("Save Changes"));
        assert!(html.contains("id=\"skills\""));
    }

    #[test]
    fn page_renders_tabs_and_documents() {
        let html = render_to_string(|| {
            leptos_meta::provide_meta_context();
            provide_api(employee_session(), "http://127.0.0.1:9");
            view! { <ProfilePage/> }
        });
        assert!(html.contains("My Profile"));
        assert!(html.contains("Personal Info"));
        assert!(html.contains("Salary Info"));
        assert!(html.contains("Documents"));
    }
}
