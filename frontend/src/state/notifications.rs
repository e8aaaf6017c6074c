use leptos::*;

use crate::{
    api::{ApiClient, ApiError, Notification, NotificationList, NotificationQuery},
    session::Session,
    state::request_gate::{use_request_gate, RequestGate},
};

/// Notifications shown in the shell. Fetch failures are logged and leave the
/// current display untouched.
#[derive(Clone)]
pub struct NotificationState {
    gate: RequestGate,
    pub unread_count: RwSignal<u32>,
    pub items: RwSignal<Vec<Notification>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::with_gate(use_request_gate())
    }

    pub fn with_gate(gate: RequestGate) -> Self {
        Self {
            gate,
            unread_count: create_rw_signal(0),
            items: create_rw_signal(Vec::new()),
        }
    }

    pub fn begin(&self) -> u64 {
        self.gate.begin()
    }

    /// Empties the display and drops every poll still in flight.
    pub fn reset(&self) {
        self.gate.invalidate();
        self.unread_count.set(0);
        self.items.set(Vec::new());
    }

    /// Resets whenever `session` is cleared, so one user's notifications
    /// never reach the next.
    pub fn follow(&self, session: &Session) {
        let state = self.clone();
        session.on_clear(move || state.reset());
    }

    pub fn apply(&self, seq: u64, result: Result<NotificationList, ApiError>) -> bool {
        match result {
            Ok(list) => {
                if !self.gate.try_apply(seq) {
                    log::debug!("discarding stale notification poll #{}", seq);
                    return false;
                }
                self.unread_count.set(list.unread_count);
                self.items.set(list.notifications);
                true
            }
            Err(err) => {
                log::warn!("notification poll failed: {}", err);
                false
            }
        }
    }

    /// One poll tick. Ticks may overlap; the gate keeps the newest.
    pub async fn refresh(&self, api: &ApiClient) -> bool {
        let seq = self.begin();
        let result = api.list_notifications(&NotificationQuery::default()).await;
        self.apply(seq, result)
    }

    pub fn mark_read_locally(&self, id: &str) {
        let mut newly_read = 0;
        self.items.update(|items| {
            for item in items.iter_mut() {
                if item.id.as_deref() == Some(id) && !item.is_read {
                    item.is_read = true;
                    newly_read += 1;
                }
            }
        });
        self.unread_count
            .update(|count| *count = count.saturating_sub(newly_read));
    }

    pub fn mark_all_read_locally(&self) {
        self.items
            .update(|items| items.iter_mut().for_each(|item| item.is_read = true));
        self.unread_count.set(0);
    }

    pub fn remove_locally(&self, id: &str) {
        let mut removed_unread = 0;
        self.items.update(|items| {
            items.retain(|item| {
                let matches = item.id.as_deref() == Some(id);
                if matches && !item.is_read {
                    removed_unread += 1;
                }
                !matches
            })
        });
        self.unread_count
            .update(|count| *count = count.saturating_sub(removed_unread));
    }

    /// The backend's clear endpoint drops read notifications only.
    pub fn clear_read_locally(&self) {
        self.items.update(|items| items.retain(|item| !item.is_read));
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::session::Session;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn refresh_applies_server_counts() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/notifications");
            then.status(200).json_body(json!({
                "total_count": 1,
                "unread_count": 1,
                "notifications": [{ "id": 8, "title": "Payslip ready", "message": "", "is_read": false }]
            }));
        });

        let runtime = create_runtime();
        let api = ApiClient::new_with_base_url(server.url("/api"), Session::in_memory());
        let state = NotificationState::with_gate(RequestGate::new());
        assert!(state.refresh(&api).await);
        assert_eq!(state.unread_count.get(), 1);
        assert_eq!(state.items.get()[0].id.as_deref(), Some("8"));
        runtime.dispose();
    }
}
