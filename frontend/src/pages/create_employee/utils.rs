use leptos::*;

use crate::{
    api::CreateEmployeeRequest,
    utils::{
        time::current_period,
        validation::{is_blank, FILL_REQUIRED_FIELDS},
    },
};

pub const CREATED: &str = "Employee created successfully!";
pub const INVALID_YEAR: &str = "Year of joining must be between 2000 and 2100";

/// Roles that can be assigned here. ADMIN is only granted at company signup.
pub const ASSIGNABLE_ROLES: &[(&str, &str)] = &[("EMPLOYEE", "Employee"), ("HR", "HR Officer")];

#[derive(Clone, Copy)]
pub struct EmployeeForm {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub role: RwSignal<String>,
    pub year_of_joining: RwSignal<String>,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            role: create_rw_signal("EMPLOYEE".to_string()),
            year_of_joining: create_rw_signal(current_period().year.to_string()),
        }
    }

    pub fn snapshot(&self) -> EmployeeInput {
        EmployeeInput {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            role: self.role.get_untracked(),
            year_of_joining: self.year_of_joining.get_untracked(),
        }
    }

    pub fn reset(&self) {
        let fresh = EmployeeInput::default();
        self.first_name.set(fresh.first_name);
        self.last_name.set(fresh.last_name);
        self.email.set(fresh.email);
        self.phone.set(fresh.phone);
        self.role.set(fresh.role);
        self.year_of_joining.set(fresh.year_of_joining);
    }
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub year_of_joining: String,
}

impl Default for EmployeeInput {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: "EMPLOYEE".to_string(),
            year_of_joining: current_period().year.to_string(),
        }
    }
}

impl EmployeeInput {
    pub fn validate(&self) -> Result<CreateEmployeeRequest, &'static str> {
        if is_blank(&self.first_name) || is_blank(&self.last_name) || is_blank(&self.email) {
            return Err(FILL_REQUIRED_FIELDS);
        }
        let year = self
            .year_of_joining
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|y| (2000..=2100).contains(y))
            .ok_or(INVALID_YEAR)?;
        Ok(CreateEmployeeRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role: self.role.clone(),
            year_of_joining: year,
        })
    }
}
