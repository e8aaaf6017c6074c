use crate::{
    api::CompanySignupRequest,
    utils::validation::{check_new_password, is_blank, FILL_ALL_FIELDS},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct SignupForm {
    pub company_name: RwSignal<String>,
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            company_name: create_rw_signal(String::new()),
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
        }
    }

    pub fn snapshot(&self) -> SignupInput {
        SignupInput {
            company_name: self.company_name.get_untracked(),
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupInput {
    pub company_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupInput {
    pub fn validate(&self) -> Result<CompanySignupRequest, &'static str> {
        let required = [
            &self.company_name,
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
        ];
        if required.iter().any(|value| is_blank(value)) || self.password.is_empty() {
            return Err(FILL_ALL_FIELDS);
        }
        check_new_password(&self.password, &self.confirm_password)?;
        Ok(CompanySignupRequest {
            company_name: self.company_name.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
        })
    }
}
