use crate::api::LoginRequest;

pub use crate::utils::validation::FILL_ALL_FIELDS;

/// The login id may be an email or an employee id; it is sent trimmed.
pub fn validate_credentials(login_id: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let login_id = login_id.trim();
    if login_id.is_empty() || password.is_empty() {
        return Err(FILL_ALL_FIELDS);
    }
    Ok(LoginRequest {
        login_id: login_id.to_string(),
        password: password.to_string(),
    })
}
