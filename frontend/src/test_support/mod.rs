#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::{
        api::ApiClient,
        session::{Session, SessionUpdate},
    };
    use leptos::*;

    /// In-memory session for `role`, fully populated.
    pub fn session_with(role: &str, first_login: bool) -> Session {
        let session = Session::in_memory();
        session.set_partial(&SessionUpdate {
            token: Some("test-token".into()),
            refresh: Some("test-refresh".into()),
            role: Some(role.into()),
            email: Some("jane.doe@acme.com".into()),
            employee_id: Some("OIJADO20250001".into()),
            full_name: Some("Jane Doe".into()),
            is_first_login: Some(first_login),
        });
        session
    }

    pub fn admin_session() -> Session {
        session_with("ADMIN", false)
    }

    pub fn employee_session() -> Session {
        session_with("EMPLOYEE", false)
    }

    /// Puts `session` and a client bound to `base_url` into context.
    pub fn provide_api(session: Session, base_url: &str) -> ApiClient {
        provide_context(session.clone());
        let api = ApiClient::new_with_base_url(base_url, session);
        provide_context(api.clone());
        api
    }
}
