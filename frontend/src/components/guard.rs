use leptos::*;

use crate::{
    session::{evaluate, GuardDecision, GuardKind},
    state::auth::use_session,
    utils::navigation::use_navigator,
};

/// Evaluates the session once per mount of `path`. Children are built only
/// when the route may render; otherwise the router is sent to the redirect
/// target and nothing is shown, so a blocked page never issues its fetches.
#[component]
pub fn RouteGuard(kind: GuardKind, path: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigator = use_navigator();
    let decision = evaluate(&session, kind, path);

    if let GuardDecision::Redirect(target) = decision {
        log::info!("{} redirected to {}", path, target);
        create_effect(move |_| navigator.go(target));
    }

    view! {
        <Show when=move || decision.renders() fallback=|| ()>
            {children()}
        </Show>
    }
}
