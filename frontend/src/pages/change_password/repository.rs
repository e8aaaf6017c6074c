use crate::{
    api::{ApiClient, ApiError, MessageResponse},
    pages::change_password::utils::PasswordChangeInput,
};

/// Validates locally, then submits. Invalid input never reaches the API.
pub async fn submit_password_change(
    api: &ApiClient,
    input: &PasswordChangeInput,
    first_login: bool,
) -> Result<MessageResponse, ApiError> {
    let request = input.validate(first_login).map_err(ApiError::validation)?;
    let response = api.change_password(&request).await?;
    api.session().mark_first_login_complete();
    log::info!("password changed");
    Ok(response)
}
