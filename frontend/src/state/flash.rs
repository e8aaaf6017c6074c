use leptos::*;

use crate::session::guard::LOGIN_PATH;

pub const COMPANY_CREATED: &str = "Company created successfully! Please sign in.";

/// One-shot notice carried from one page to the next.
#[derive(Debug, Clone, Copy)]
pub struct Flash(RwSignal<Option<String>>);

impl Flash {
    pub fn new() -> Self {
        Self(create_rw_signal(None))
    }

    pub fn set(&self, message: impl Into<String>) {
        self.0.set(Some(message.into()));
    }

    /// Returns the pending notice and forgets it.
    pub fn take(&self) -> Option<String> {
        let message = self.0.get_untracked();
        if message.is_some() {
            self.0.set(None);
        }
        message
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_flash() -> Flash {
    use_context::<Flash>().unwrap_or_else(|| {
        let flash = Flash::new();
        provide_context(flash);
        flash
    })
}

/// Notice for the login page after a signup that did not sign the owner in.
pub fn signup_notice(next: &str) -> Option<&'static str> {
    (next == LOGIN_PATH).then_some(COMPANY_CREATED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::guard::DASHBOARD_PATH;

    #[test]
    fn notice_only_when_signup_lands_on_login() {
        assert_eq!(signup_notice(LOGIN_PATH), Some(COMPANY_CREATED));
        assert_eq!(signup_notice(DASHBOARD_PATH), None);
    }

    #[test]
    fn flash_is_read_once() {
        let runtime = create_runtime();
        let flash = Flash::new();
        assert_eq!(flash.take(), None);
        flash.set(COMPANY_CREATED);
        assert_eq!(flash.take().as_deref(), Some(COMPANY_CREATED));
        assert_eq!(flash.take(), None);
        runtime.dispose();
    }
}
