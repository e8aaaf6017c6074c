use super::{Session, SessionSnapshot};

pub const LOGIN_PATH: &str = "/login";
pub const CHANGE_PASSWORD_PATH: &str = "/change-password";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Where a session stands with respect to navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    Unauthenticated,
    PendingPasswordChange,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    Protected,
    AdminOnly,
    PublicOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

impl GuardDecision {
    pub fn renders(self) -> bool {
        matches!(self, GuardDecision::Render)
    }

    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            GuardDecision::Redirect(path) => Some(path),
            GuardDecision::Render => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assessment {
    Settled(NavigationState),
    Corrupted,
}

fn assess(snapshot: &SessionSnapshot, target: &str) -> Assessment {
    if !snapshot.is_authenticated() {
        return Assessment::Settled(NavigationState::Unauthenticated);
    }
    if snapshot.is_first_login() && target != CHANGE_PASSWORD_PATH {
        return Assessment::Settled(NavigationState::PendingPasswordChange);
    }
    if !snapshot.validate_auth() {
        return Assessment::Corrupted;
    }
    Assessment::Settled(NavigationState::Active)
}

/// Resolves the navigation state for `target`, clearing a session that has a
/// token but lacks role or email.
pub fn navigation_state(session: &Session, target: &str) -> NavigationState {
    match assess(&session.get(), target) {
        Assessment::Settled(state) => state,
        Assessment::Corrupted => {
            log::warn!("incomplete session found while navigating to {}, clearing", target);
            session.clear();
            NavigationState::Unauthenticated
        }
    }
}

pub fn decide(kind: GuardKind, state: NavigationState, is_admin: bool) -> GuardDecision {
    match (kind, state) {
        (GuardKind::PublicOnly, NavigationState::Active) => GuardDecision::Redirect(DASHBOARD_PATH),
        (GuardKind::PublicOnly, _) => GuardDecision::Render,
        (_, NavigationState::Unauthenticated) => GuardDecision::Redirect(LOGIN_PATH),
        (_, NavigationState::PendingPasswordChange) => {
            GuardDecision::Redirect(CHANGE_PASSWORD_PATH)
        }
        (GuardKind::AdminOnly, NavigationState::Active) if !is_admin => {
            GuardDecision::Redirect(DASHBOARD_PATH)
        }
        _ => GuardDecision::Render,
    }
}

/// Full guard evaluation for one navigation. Reads the store every call.
pub fn evaluate(session: &Session, kind: GuardKind, target: &str) -> GuardDecision {
    let state = navigation_state(session, target);
    decide(kind, state, session.is_admin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionUpdate;

    fn session_with(update: SessionUpdate) -> Session {
        let session = Session::in_memory();
        session.set_partial(&update);
        session
    }

    fn active(role: &str) -> Session {
        session_with(SessionUpdate {
            token: Some("abc".into()),
            role: Some(role.into()),
            email: Some("u@x.com".into()),
            is_first_login: Some(false),
            ..SessionUpdate::default()
        })
    }

    #[test]
    fn missing_token_redirects_guarded_routes_to_login() {
        let session = Session::in_memory();
        for target in ["/dashboard", "/profile", "/change-password"] {
            assert_eq!(
                evaluate(&session, GuardKind::Protected, target),
                GuardDecision::Redirect(LOGIN_PATH)
            );
        }
        assert_eq!(
            evaluate(&session, GuardKind::AdminOnly, "/employees"),
            GuardDecision::Redirect(LOGIN_PATH)
        );
        assert_eq!(
            evaluate(&session, GuardKind::PublicOnly, "/login"),
            GuardDecision::Render
        );
    }

    #[test]
    fn first_login_forces_change_password() {
        let session = active("EMPLOYEE");
        session.set_partial(&SessionUpdate {
            is_first_login: Some(true),
            ..SessionUpdate::default()
        });

        assert_eq!(
            navigation_state(&session, "/dashboard"),
            NavigationState::PendingPasswordChange
        );
        assert_eq!(
            evaluate(&session, GuardKind::Protected, "/attendance"),
            GuardDecision::Redirect(CHANGE_PASSWORD_PATH)
        );
        assert_eq!(
            evaluate(&session, GuardKind::Protected, CHANGE_PASSWORD_PATH),
            GuardDecision::Render
        );
    }

    #[test]
    fn first_login_overrides_admin_only_routes() {
        let session = active("ADMIN");
        session.set_partial(&SessionUpdate {
            is_first_login: Some(true),
            ..SessionUpdate::default()
        });
        assert_eq!(
            evaluate(&session, GuardKind::AdminOnly, "/employees"),
            GuardDecision::Redirect(CHANGE_PASSWORD_PATH)
        );

        let employee = active("EMPLOYEE");
        employee.set_partial(&SessionUpdate {
            is_first_login: Some(true),
            ..SessionUpdate::default()
        });
        assert_eq!(
            evaluate(&employee, GuardKind::AdminOnly, "/reports"),
            GuardDecision::Redirect(CHANGE_PASSWORD_PATH)
        );
    }

    #[test]
    fn public_only_renders_for_pending_password_change() {
        let session = active("EMPLOYEE");
        session.set_partial(&SessionUpdate {
            is_first_login: Some(true),
            ..SessionUpdate::default()
        });
        assert_eq!(
            evaluate(&session, GuardKind::PublicOnly, "/login"),
            GuardDecision::Render
        );
    }

    #[test]
    fn public_only_redirects_active_sessions_to_dashboard() {
        let session = active("EMPLOYEE");
        assert_eq!(
            evaluate(&session, GuardKind::PublicOnly, "/company-signup"),
            GuardDecision::Redirect(DASHBOARD_PATH)
        );
    }

    #[test]
    fn corrupted_session_is_cleared_once_and_then_behaves_logged_out() {
        let session = session_with(SessionUpdate {
            token: Some("abc".into()),
            full_name: Some("Leftover".into()),
            ..SessionUpdate::default()
        });

        assert_eq!(
            evaluate(&session, GuardKind::Protected, "/dashboard"),
            GuardDecision::Redirect(LOGIN_PATH)
        );
        assert_eq!(session.get(), SessionSnapshot::default());

        let cold = Session::in_memory();
        for kind in [GuardKind::Protected, GuardKind::AdminOnly, GuardKind::PublicOnly] {
            assert_eq!(
                evaluate(&session, kind, "/dashboard"),
                evaluate(&cold, kind, "/dashboard")
            );
        }
    }

    #[test]
    fn corrupted_session_public_route_renders_after_clearing() {
        let session = session_with(SessionUpdate {
            token: Some("abc".into()),
            role: Some("ADMIN".into()),
            ..SessionUpdate::default()
        });
        assert_eq!(
            evaluate(&session, GuardKind::PublicOnly, "/login"),
            GuardDecision::Render
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn admin_only_redirects_non_privileged_roles() {
        for role in ["EMPLOYEE", "CONTRACTOR"] {
            assert_eq!(
                evaluate(&active(role), GuardKind::AdminOnly, "/employees"),
                GuardDecision::Redirect(DASHBOARD_PATH),
                "role {role}"
            );
        }
        for role in ["ADMIN", "HR"] {
            assert_eq!(
                evaluate(&active(role), GuardKind::AdminOnly, "/employees"),
                GuardDecision::Render,
                "role {role}"
            );
        }
    }

    #[test]
    fn active_session_renders_protected_routes() {
        let session = active("EMPLOYEE");
        assert_eq!(
            navigation_state(&session, "/leave"),
            NavigationState::Active
        );
        assert!(evaluate(&session, GuardKind::Protected, "/leave").renders());
    }

    #[test]
    fn decide_table() {
        use GuardKind::*;
        use NavigationState::*;
        assert_eq!(decide(Protected, Active, false), GuardDecision::Render);
        assert_eq!(decide(AdminOnly, Active, true), GuardDecision::Render);
        assert_eq!(
            decide(AdminOnly, Active, false).redirect_target(),
            Some(DASHBOARD_PATH)
        );
        assert_eq!(
            decide(AdminOnly, PendingPasswordChange, true).redirect_target(),
            Some(CHANGE_PASSWORD_PATH)
        );
        assert_eq!(decide(PublicOnly, Unauthenticated, false), GuardDecision::Render);
        assert_eq!(
            decide(Protected, Unauthenticated, true).redirect_target(),
            Some(LOGIN_PATH)
        );
    }
}
