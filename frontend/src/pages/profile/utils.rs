use leptos::*;

use crate::{
    api::{Profile, ProfileUpdate},
    utils::format::{currency, or_dash, split_list},
};

pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const AVATAR_UPDATED: &str = "Profile photo updated successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Info,
    Job,
    Salary,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Info, ProfileTab::Job, ProfileTab::Salary];

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Info => "Personal Info",
            ProfileTab::Job => "Job Details",
            ProfileTab::Salary => "Salary Info",
        }
    }
}

/// Editable fields. Skills and certifications are edited as one
/// comma-separated line each.
#[derive(Clone, Copy)]
pub struct ProfileForm {
    pub phone: RwSignal<String>,
    pub residential_address: RwSignal<String>,
    pub about: RwSignal<String>,
    pub skills: RwSignal<String>,
    pub certifications: RwSignal<String>,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self {
            phone: create_rw_signal(String::new()),
            residential_address: create_rw_signal(String::new()),
            about: create_rw_signal(String::new()),
            skills: create_rw_signal(String::new()),
            certifications: create_rw_signal(String::new()),
        }
    }

    pub fn fill_from(&self, profile: &Profile) {
        self.phone.set(profile.phone.clone().unwrap_or_default());
        self.residential_address
            .set(profile.residential_address.clone().unwrap_or_default());
        self.about.set(profile.about.clone().unwrap_or_default());
        self.skills.set(profile.skills.join(", "));
        self.certifications.set(profile.certifications.join(", "));
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            phone: self.phone.get_untracked().trim().to_string(),
            residential_address: self.residential_address.get_untracked().trim().to_string(),
            about: self.about.get_untracked().trim().to_string(),
            skills: split_list(&self.skills.get_untracked()),
            certifications: split_list(&self.certifications.get_untracked()),
        }
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

pub fn job_rows(profile: &Profile) -> Vec<(String, String)> {
    vec![
        ("Department".into(), or_dash(profile.department.as_deref())),
        ("Job Title".into(), or_dash(profile.job_title.as_deref())),
        ("Location".into(), or_dash(profile.location.as_deref())),
        ("Role".into(), or_dash(profile.role.as_deref())),
    ]
}

pub fn salary_rows(profile: &Profile) -> Vec<(String, String)> {
    vec![
        ("Monthly Wage".into(), currency(profile.monthly_wage)),
        ("Bank Name".into(), or_dash(profile.bank_name.as_deref())),
        ("Account Number".into(), or_dash(profile.account_number.as_deref())),
        ("IFSC Code".into(), or_dash(profile.ifsc_code.as_deref())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_round_trips_lists_through_text() {
        let runtime = create_runtime();
        let form = ProfileForm::new();
        form.fill_from(&Profile {
            phone: Some("555-0100".into()),
            skills: vec!["Rust".into(), "SQL".into()],
            ..Profile::default()
        });
        assert_eq!(form.skills.get_untracked(), "Rust, SQL");

        form.certifications.set(" AWS ,, CKA ".into());
        let update = form.to_update();
        assert_eq!(update.phone, "555-0100");
        assert_eq!(update.skills, vec!["Rust".to_string(), "SQL".to_string()]);
        assert_eq!(update.certifications, vec!["AWS".to_string(), "CKA".to_string()]);
        runtime.dispose();
    }

    #[test]
    fn salary_rows_fall_back_to_dash() {
        let rows = salary_rows(&Profile {
            monthly_wage: Some(50000.0),
            ..Profile::default()
        });
        assert_eq!(rows[0].1, "₹ 50,000.00");
        assert_eq!(rows[1].1, "-");
    }
}
