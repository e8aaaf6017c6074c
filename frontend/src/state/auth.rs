use leptos::*;

use crate::{
    api::{use_api, ApiClient, ApiError, CompanySignupRequest, LoginRequest},
    session::{
        guard::{CHANGE_PASSWORD_PATH, DASHBOARD_PATH, LOGIN_PATH},
        Session,
    },
    utils::navigation::Navigator,
};

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(Session::browser)
}

/// Logs in and stores the session. Returns where to go next.
pub async fn login_request(
    api: &ApiClient,
    request: &LoginRequest,
) -> Result<&'static str, ApiError> {
    let response = api.login(request).await?;
    if response.token.as_deref().map_or(true, str::is_empty) {
        return Err(ApiError::unknown("Invalid credentials. Please try again."));
    }

    let session = api.session();
    session.set_partial(&response.to_session_update(&request.login_id));
    log::info!("signed in as {}", request.login_id);

    Ok(if response.is_first_login.unwrap_or(false) {
        CHANGE_PASSWORD_PATH
    } else {
        DASHBOARD_PATH
    })
}

/// Creates the company. Signs the owner in when the backend returns the new
/// user, otherwise sends them to the login page.
pub async fn signup_request(
    api: &ApiClient,
    request: &CompanySignupRequest,
) -> Result<&'static str, ApiError> {
    let response = api.company_signup(request).await?;
    match response.to_session_update() {
        Some(update) => {
            api.session().set_partial(&update);
            Ok(DASHBOARD_PATH)
        }
        None => Ok(LOGIN_PATH),
    }
}

pub fn logout(session: &Session, navigator: &Navigator) {
    session.clear();
    log::info!("signed out");
    navigator.go(LOGIN_PATH);
}

pub fn use_login_action() -> Action<LoginRequest, Result<&'static str, ApiError>> {
    let api = use_api();
    create_action(move |request: &LoginRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { login_request(&api, &request).await }
    })
}

pub fn use_signup_action() -> Action<CompanySignupRequest, Result<&'static str, ApiError>> {
    let api = use_api();
    create_action(move |request: &CompanySignupRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { signup_request(&api, &request).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn use_session_prefers_context() {
        let runtime = create_runtime();
        let session = Session::in_memory();
        provide_context(session.clone());
        assert!(use_session().ptr_eq(&session));
        runtime.dispose();
    }

    #[test]
    fn logout_clears_and_navigates_to_login() {
        let session = Session::in_memory();
        session.set_partial(&crate::session::SessionUpdate {
            token: Some("t".into()),
            ..Default::default()
        });
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        let navigator = Navigator::from_fn(move |path| *sink.borrow_mut() = Some(path.to_string()));

        logout(&session, &navigator);
        assert!(!session.is_authenticated());
        assert_eq!(seen.borrow().as_deref(), Some(LOGIN_PATH));
    }
}
