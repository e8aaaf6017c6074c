use crate::{
    api::ChangePasswordRequest,
    utils::validation::{check_new_password, FILL_ALL_FIELDS},
};

pub const SUCCESS_MESSAGE: &str = "Password changed successfully! Redirecting...";
pub const REDIRECT_DELAY_MS: u32 = 1500;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChangeInput {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeInput {
    /// The current password is neither asked for nor sent on first login.
    pub fn validate(&self, first_login: bool) -> Result<ChangePasswordRequest, &'static str> {
        let old_missing = !first_login && self.old_password.is_empty();
        if self.new_password.is_empty() || self.confirm_password.is_empty() || old_missing {
            return Err(FILL_ALL_FIELDS);
        }
        check_new_password(&self.new_password, &self.confirm_password)?;
        Ok(ChangePasswordRequest {
            old_password: (!first_login).then(|| self.old_password.clone()),
            new_password: self.new_password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }
}
