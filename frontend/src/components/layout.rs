use crate::{
    components::{notifications::NotificationBell, search::SearchBox, search::NAV_INDEX},
    state::auth::{self, use_session},
    utils::navigation::{current_path, use_navigator},
};
use leptos::*;
use leptos_meta::Title;

const LINK_CLASS: &str =
    "block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";
const ACTIVE_LINK_CLASS: &str =
    "block text-fg bg-action-ghost-bg-hover px-3 py-2 rounded-md text-sm font-semibold";

fn link_class(path: &str, active: Option<&str>) -> &'static str {
    if active == Some(path) {
        ACTIVE_LINK_CLASS
    } else {
        LINK_CLASS
    }
}

#[component]
pub fn Sidebar(#[prop(into)] menu_open: Signal<bool>) -> impl IntoView {
    let is_admin = use_session().is_admin();
    let active = current_path();
    let main_links = NAV_INDEX
        .iter()
        .filter(|entry| !entry.admin_only)
        .map(|entry| {
            view! { <a href=entry.path class=link_class(entry.path, active.as_deref())>{entry.label}</a> }
        })
        .collect_view();
    let admin_links = is_admin.then(|| {
        let links = NAV_INDEX
            .iter()
            .filter(|entry| entry.admin_only)
            .map(|entry| {
                view! { <a href=entry.path class=link_class(entry.path, active.as_deref())>{entry.label}</a> }
            })
            .collect_view();
        view! {
            <p class="mt-6 px-3 text-xs font-semibold uppercase tracking-wider text-fg-muted">
                {"Administration"}
            </p>
            <div class="mt-2 space-y-1">{links}</div>
        }
    });

    view! {
        <aside
            id="sidebar-nav"
            class=move || {
                if menu_open.get() {
                    "w-64 shrink-0 border-r border-border bg-surface-elevated"
                } else {
                    "hidden lg:block w-64 shrink-0 border-r border-border bg-surface-elevated"
                }
            }
        >
            <div class="h-16 flex items-center px-6 border-b border-border">
                <span class="text-xl font-semibold text-fg">"Dayflow"</span>
            </div>
            <nav class="px-3 py-4">
                <div class="space-y-1">{main_links}</div>
                {admin_links}
            </nav>
        </aside>
    }
}

#[component]
pub fn UserBadge() -> impl IntoView {
    let info = use_session().user_info();
    view! {
        <div class="flex items-center gap-3">
            <span class="flex h-9 w-9 items-center justify-center rounded-full bg-action-primary-bg text-sm font-semibold text-action-primary-text">
                {info.initials()}
            </span>
            <div class="hidden sm:block leading-tight">
                <p class="text-sm font-medium text-fg">{info.full_name.clone()}</p>
                <p class="text-xs text-fg-muted">{format!("{} · {}", info.role, info.employee_id)}</p>
            </div>
        </div>
    }
}

#[component]
pub fn TopBar(menu_open: RwSignal<bool>) -> impl IntoView {
    let session = use_session();
    let navigator = use_navigator();
    let on_logout = move |_| auth::logout(&session, &navigator);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="flex justify-between items-center h-16 px-4 sm:px-6 gap-4">
                <div class="flex items-center gap-3 flex-1">
                    <button
                        type="button"
                        class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        aria-expanded=move || menu_open.get()
                        aria-controls="sidebar-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                        </svg>
                    </button>
                    <SearchBox/>
                </div>
                <div class="flex items-center gap-4">
                    <NotificationBell/>
                    <UserBadge/>
                    <button
                        on:click=on_logout
                        class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let menu_open = create_rw_signal(false);
    view! {
        <div class="min-h-screen bg-surface flex">
            <Sidebar menu_open=menu_open/>
            <div class="flex-1 min-w-0">
                <TopBar menu_open=menu_open/>
                <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}

/// Page heading; also sets the document title.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    let document_title = format!("{} | Dayflow", title);
    view! {
        <Title text=document_title/>
        <div class="mb-6">
            <h1 class="text-2xl font-bold text-fg">{title}</h1>
            {subtitle.map(|text| view! { <p class="mt-1 text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = match status.to_ascii_uppercase().as_str() {
        "APPROVED" | "PRESENT" | "ACTIVE" => "bg-status-success-bg text-status-success-text",
        "REJECTED" | "ABSENT" | "INACTIVE" => "bg-status-error-bg text-status-error-text",
        "PENDING" | "LEAVE" | "HALF_DAY" => "bg-status-warning-bg text-status-warning-text",
        _ => "bg-surface-muted text-fg-muted",
    };
    view! {
        <span class=format!("inline-flex rounded-full px-2 py-0.5 text-xs font-semibold {}", class)>
            {status}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_is_highlighted() {
        assert_eq!(link_class("/leave", Some("/leave")), ACTIVE_LINK_CLASS);
        assert_eq!(link_class("/leave", Some("/payroll")), LINK_CLASS);
        assert_eq!(link_class("/leave", None), LINK_CLASS);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{test_support::helpers::session_with, test_support::ssr::render_to_string};

    #[test]
    fn layout_shows_admin_section_for_admins() {
        let html = render_to_string(|| {
            provide_context(session_with("HR", false));
            view! { <Layout><div>"content"</div></Layout> }
        });
        assert!(html.contains("Administration"));
        assert!(html.contains("/employees"));
        assert!(html.contains("/reports"));
        assert!(html.contains("content"));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn layout_hides_admin_section_for_employees() {
        let html = render_to_string(|| {
            provide_context(session_with("EMPLOYEE", false));
            view! { <Layout><div>"content"</div></Layout> }
        });
        assert!(!html.contains("Administration"));
        assert!(!html.contains("/employees"));
        assert!(html.contains("/payroll"));
    }

    #[test]
    fn user_badge_falls_back_for_missing_fields() {
        let html = render_to_string(|| {
            provide_context(crate::session::Session::in_memory());
            view! { <UserBadge/> }
        });
        assert!(html.contains("User"));
        assert!(html.contains("N&#x2F;A · N&#x2F;A"));
    }

    #[test]
    fn page_header_renders_title_and_subtitle() {
        let html = render_to_string(|| {
            leptos_meta::provide_meta_context();
            view! { <PageHeader title="Leave" subtitle="Request time off"/> }
        });
        assert!(html.contains("Leave"));
        assert!(html.contains("Request time off"));
    }

    #[test]
    fn status_badge_colours_by_status() {
        let html = render_to_string(|| view! { <StatusBadge status="APPROVED"/> });
        assert!(html.contains("bg-status-success-bg"));
        let html = render_to_string(|| view! { <StatusBadge status="pending"/> });
        assert!(html.contains("bg-status-warning-bg"));
    }
}
