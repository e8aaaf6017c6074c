use leptos::*;

use crate::api::ApiError;

/// One success or error line shown at the top of a page. Setting one clears
/// the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    pub fn set_api_error(&mut self, err: &ApiError) {
        self.set_error(err.error.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.success.is_none() && self.error.is_none()
    }
}

#[component]
pub fn AlertBanner(messages: RwSignal<MessageState>) -> impl IntoView {
    let dismiss = move |_| messages.update(MessageState::clear);
    view! {
        {move || {
            let state = messages.get();
            if let Some(error) = state.error {
                view! {
                    <div
                        role="alert"
                        class="flex items-start justify-between gap-3 bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4"
                    >
                        <span>{error}</span>
                        <button type="button" aria-label="Dismiss" class="font-bold" on:click=dismiss>
                            {"✕"}
                        </button>
                    </div>
                }
                .into_view()
            } else if let Some(success) = state.success {
                view! {
                    <div
                        role="status"
                        class="flex items-start justify-between gap-3 bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4"
                    >
                        <span>{success}</span>
                        <button type="button" aria-label="Dismiss" class="font-bold" on:click=dismiss>
                            {"✕"}
                        </button>
                    </div>
                }
                .into_view()
            } else {
                ().into_view()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_state_keeps_one_message() {
        let mut state = MessageState::default();
        assert!(state.is_empty());

        state.set_error("Please fill in all fields");
        assert_eq!(state.error.as_deref(), Some("Please fill in all fields"));
        assert!(state.success.is_none());

        state.set_success("Saved");
        assert!(state.error.is_none());

        state.set_api_error(&ApiError::validation("Passwords do not match"));
        assert_eq!(state.error.as_deref(), Some("Passwords do not match"));

        state.clear();
        assert!(state.is_empty());
    }
}
