use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Interval;
use leptos::*;

use crate::{
    api::{use_api, Notification},
    config,
    state::notifications::NotificationState,
};

fn badge_text(unread: u32) -> String {
    if unread > 99 {
        "99+".to_string()
    } else {
        unread.to_string()
    }
}

/// Bell with unread badge and dropdown. Polls on a fixed interval while
/// mounted.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let api = use_api();
    let state = use_context::<NotificationState>().unwrap_or_else(NotificationState::new);
    let unread = state.unread_count;
    let items = state.items;
    let open = create_rw_signal(false);
    let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    {
        let api = api.clone();
        let state = state.clone();
        let ticker = ticker.clone();
        create_effect(move |_| {
            let poll = {
                let api = api.clone();
                let state = state.clone();
                move || {
                    if !api.session().is_authenticated() {
                        return;
                    }
                    let api = api.clone();
                    let state = state.clone();
                    spawn_local(async move {
                        state.refresh(&api).await;
                    });
                }
            };
            poll();
            let period_ms = config::current().notification_poll_seconds.saturating_mul(1000);
            ticker.borrow_mut().replace(Interval::new(period_ms, poll));
        });
    }
    on_cleanup(move || {
        if let Some(interval) = ticker.borrow_mut().take() {
            interval.cancel();
        }
    });

    let mark_read = {
        let api = api.clone();
        let state = state.clone();
        create_action(move |id: &String| {
            let api = api.clone();
            let state = state.clone();
            let id = id.clone();
            async move {
                match api.mark_notification_read(&id).await {
                    Ok(_) => state.mark_read_locally(&id),
                    Err(err) => log::warn!("failed to mark notification {} read: {}", id, err),
                }
            }
        })
    };
    let remove = {
        let api = api.clone();
        let state = state.clone();
        create_action(move |id: &String| {
            let api = api.clone();
            let state = state.clone();
            let id = id.clone();
            async move {
                match api.delete_notification(&id).await {
                    Ok(_) => state.remove_locally(&id),
                    Err(err) => log::warn!("failed to delete notification {}: {}", id, err),
                }
            }
        })
    };
    let mark_all = {
        let api = api.clone();
        let state = state.clone();
        create_action(move |_: &()| {
            let api = api.clone();
            let state = state.clone();
            async move {
                match api.mark_all_notifications_read().await {
                    Ok(_) => state.mark_all_read_locally(),
                    Err(err) => log::warn!("failed to mark notifications read: {}", err),
                }
            }
        })
    };
    let clear_read = create_action(move |_: &()| {
        let api = api.clone();
        let state = state.clone();
        async move {
            match api.clear_notifications().await {
                Ok(_) => state.clear_read_locally(),
                Err(err) => log::warn!("failed to clear notifications: {}", err),
            }
        }
    });

    view! {
        <div class="relative">
            <button
                type="button"
                aria-label="Notifications"
                class="relative rounded-full p-2 text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                on:click=move |_| open.update(|value| *value = !*value)
            >
                <i class="fas fa-bell"></i>
                <Show when=move || { unread.get() > 0 }>
                    <span class="absolute -top-0.5 -right-0.5 min-w-[1.25rem] rounded-full bg-status-error-text px-1 text-center text-xs font-semibold text-text-inverse">
                        {move || badge_text(unread.get())}
                    </span>
                </Show>
            </button>
            <Show when=move || open.get()>
                <div class="absolute right-0 z-50 mt-2 w-80 rounded-lg border border-border bg-surface-elevated shadow-xl">
                    <div class="flex items-center justify-between border-b border-border px-4 py-2">
                        <span class="text-sm font-semibold text-fg">{"Notifications"}</span>
                        <div class="flex gap-2 text-xs">
                            <button type="button" class="text-action-primary-bg hover:underline" on:click=move |_| mark_all.dispatch(())>
                                {"Mark all read"}
                            </button>
                            <button type="button" class="text-fg-muted hover:underline" on:click=move |_| clear_read.dispatch(())>
                                {"Clear read"}
                            </button>
                        </div>
                    </div>
                    <ul class="max-h-96 overflow-y-auto divide-y divide-border">
                        <Show
                            when=move || !items.get().is_empty()
                            fallback=|| view! { <li class="px-4 py-6 text-center text-sm text-fg-muted">{"No notifications"}</li> }
                        >
                            <For
                                each=move || items.get()
                                key=|item: &Notification| (item.id.clone(), item.is_read)
                                children=move |item: Notification| {
                                    let id = item.id.clone().unwrap_or_default();
                                    let read_id = id.clone();
                                    let unread_item = !item.is_read;
                                    view! {
                                        <li class=if unread_item { "px-4 py-3 bg-surface-muted" } else { "px-4 py-3" }>
                                            <p class="text-sm font-medium text-fg">{item.title.clone()}</p>
                                            <p class="text-xs text-fg-muted">{item.message.clone()}</p>
                                            <div class="mt-1 flex items-center justify-between text-xs">
                                                <span class="text-fg-muted">{item.time_ago.clone().unwrap_or_default()}</span>
                                                <div class="flex gap-2">
                                                    {unread_item.then(|| view! {
                                                        <button type="button" class="text-action-primary-bg hover:underline" on:click=move |_| mark_read.dispatch(read_id.clone())>
                                                            {"Mark read"}
                                                        </button>
                                                    })}
                                                    <button type="button" class="text-status-error-text hover:underline" on:click=move |_| remove.dispatch(id.clone())>
                                                        {"Delete"}
                                                    </button>
                                                </div>
                                            </div>
                                        </li>
                                    }
                                }
                            />
                        </Show>
                    </ul>
                </div>
            </Show>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::NotificationList,
        session::Session,
        state::request_gate::RequestGate,
        test_support::ssr::render_to_string,
    };

    #[test]
    fn bell_shows_unread_badge_from_state() {
        let html = render_to_string(|| {
            provide_context(Session::in_memory());
            let state = NotificationState::with_gate(RequestGate::new());
            let seq = state.begin();
            state.apply(
                seq,
                Ok(NotificationList {
                    total_count: 2,
                    unread_count: 2,
                    notifications: vec![Notification::default(), Notification::default()],
                }),
            );
            provide_context(state);
            view! { <NotificationBell /> }
        });
        assert!(html.contains("aria-label=\"Notifications\""));
        assert!(html.contains(">2<"));
    }

    #[test]
    fn bell_without_unread_has_no_badge() {
        let html = render_to_string(|| {
            provide_context(Session::in_memory());
            view! { <NotificationBell /> }
        });
        assert!(html.contains("fa-bell"));
        assert!(!html.contains("min-w-[1.25rem]"));
    }
}
