pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const FILL_REQUIRED_FIELDS: &str = "Please fill all required fields";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const MIN_PASSWORD_LEN: usize = 8;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Confirmation first, then length. Emptiness is checked by the caller
/// together with the other fields.
pub fn check_new_password(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password != confirmation {
        return Err(PASSWORDS_DO_NOT_MATCH);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_is_reported_before_length() {
        assert_eq!(check_new_password("short", "other"), Err(PASSWORDS_DO_NOT_MATCH));
        assert_eq!(check_new_password("short", "short"), Err(PASSWORD_TOO_SHORT));
        assert_eq!(check_new_password("longenough", "longenough"), Ok(()));
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(check_new_password("pässwörd", "pässwörd"), Ok(()));
        assert_eq!(check_new_password("1234567", "1234567"), Err(PASSWORD_TOO_SHORT));
    }
}
