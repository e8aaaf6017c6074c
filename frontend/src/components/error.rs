use crate::api::{humanize_key, ApiError};
use leptos::*;
use serde_json::Value;

/// Per-field messages of a validation response, excluding the one already
/// shown as the headline.
fn field_messages(error: &ApiError) -> Vec<String> {
    if !error.is_validation() {
        return Vec::new();
    }
    let Some(object) = error.details.as_ref().and_then(Value::as_object) else {
        return Vec::new();
    };
    object
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "message" | "error" | "detail"))
        .flat_map(|(key, value)| {
            let texts: Vec<String> = match value {
                Value::String(text) => vec![text.clone()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
                _ => Vec::new(),
            };
            let label = if key == "non_field_errors" {
                None
            } else {
                Some(humanize_key(key))
            };
            texts.into_iter().map(move |text| match &label {
                Some(label) => format!("{}: {}", label, text),
                None => text,
            })
        })
        .filter(|line| !line.ends_with(&error.error))
        .collect()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let lines = error.get().map(|e| field_messages(&e)).unwrap_or_default();
                    if lines.is_empty() {
                        ().into_view()
                    } else {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                }}
            </div>
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_field_details() {
        let html = render_to_string(move || {
            let body = json!({
                "non_field_errors": ["Invalid credentials"],
                "password": ["This field is required."]
            });
            let error = ApiError::from_body(400, &body.to_string(), "fallback");
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Invalid credentials"));
        assert!(html.contains("Password: This field is required."));
    }

    #[test]
    fn inline_error_hidden_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("bg-status-error-bg"));
    }
}
