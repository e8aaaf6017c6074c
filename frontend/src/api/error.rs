use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body keys consulted for a user-facing message, highest priority first.
pub const MESSAGE_KEYS: &[&str] = &[
    "non_field_errors",
    "login_id",
    "company_name",
    "email",
    "password",
    "old_password",
    "new_password",
    "confirm_password",
    "phone",
    "message",
    "error",
    "detail",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn new(code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.into(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", msg)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::new("UNKNOWN", msg)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::new("REQUEST_FAILED", msg)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", msg)
    }

    /// Normalises a failed response body into one message.
    ///
    /// Keys are tried in [`MESSAGE_KEYS`] order; each may hold a string or a
    /// list of strings. Non-JSON bodies and bodies without any known key
    /// produce `fallback`.
    pub fn from_body(status: u16, body: &str, fallback: &str) -> Self {
        let details = serde_json::from_str::<Value>(body).ok();
        let error = details
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| fallback.to_string());
        Self {
            error,
            code: code_for_status(status).to_string(),
            details,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }
}

pub fn extract_message(body: &Value) -> Option<String> {
    let object = body.as_object()?;
    MESSAGE_KEYS
        .iter()
        .filter_map(|key| object.get(*key))
        .find_map(message_from_value)
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => items.iter().find_map(|item| match item {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            _ => None,
        }),
        _ => None,
    }
}

fn code_for_status(status: u16) -> &'static str {
    match status {
        401 => "UNAUTHORIZED",
        403 => "FORBIDDEN",
        404 => "NOT_FOUND",
        400 | 409 | 422 => "VALIDATION_ERROR",
        500..=599 => "SERVER_ERROR",
        _ => "REQUEST_FAILED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(body: Value) -> String {
        ApiError::from_body(400, &body.to_string(), "fallback").error
    }

    #[test]
    fn non_field_errors_win_over_everything() {
        assert_eq!(
            message(json!({
                "message": "generic",
                "email": ["email taken"],
                "non_field_errors": ["Invalid credentials"]
            })),
            "Invalid credentials"
        );
    }

    #[test]
    fn field_errors_follow_declared_order() {
        assert_eq!(
            message(json!({ "phone": "bad phone", "company_name": ["taken"] })),
            "taken"
        );
        assert_eq!(
            message(json!({ "new_password": ["too short"], "old_password": "wrong" })),
            "wrong"
        );
        assert_eq!(
            message(json!({ "login_id": ["unknown user"], "password": "bad" })),
            "unknown user"
        );
    }

    #[test]
    fn generic_keys_come_after_fields() {
        assert_eq!(
            message(json!({ "detail": "d", "error": "e", "message": "m" })),
            "m"
        );
        assert_eq!(message(json!({ "detail": "d", "error": "e" })), "e");
        assert_eq!(
            message(json!({ "detail": "Authentication credentials were not provided." })),
            "Authentication credentials were not provided."
        );
    }

    #[test]
    fn falls_back_for_unknown_shapes() {
        assert_eq!(message(json!({ "unexpected": "x" })), "fallback");
        assert_eq!(message(json!({ "email": [] })), "fallback");
        assert_eq!(message(json!({ "email": [1, 2] })), "fallback");
        assert_eq!(message(json!(["a list"])), "fallback");
        assert_eq!(
            ApiError::from_body(502, "<html>Bad gateway</html>", "Server unavailable").error,
            "Server unavailable"
        );
    }

    #[test]
    fn empty_entries_are_skipped() {
        assert_eq!(message(json!({ "email": ["", "second"] })), "second");
        assert_eq!(message(json!({ "email": "  ", "error": "real" })), "real");
    }

    #[test]
    fn status_maps_to_code_and_details_are_kept() {
        let err = ApiError::from_body(401, r#"{"detail":"expired"}"#, "x");
        assert!(err.is_unauthorized());
        assert_eq!(err.details, Some(json!({ "detail": "expired" })));
        assert_eq!(ApiError::from_body(404, "", "x").code, "NOT_FOUND");
        assert_eq!(ApiError::from_body(500, "", "x").code, "SERVER_ERROR");
        assert!(ApiError::from_body(400, "{}", "x").is_validation());
    }

    #[test]
    fn constructors_set_codes() {
        assert_eq!(ApiError::validation("v").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("u").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("r").code, "REQUEST_FAILED");
        assert!(ApiError::unauthorized("a").is_unauthorized());
    }

    #[test]
    fn display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");
        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn converts_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }
}
