//! Client-side session: persisted fields, derived predicates and the
//! navigation guard built on top of them.

pub mod guard;
pub mod store;

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

pub use guard::{evaluate, GuardDecision, GuardKind, NavigationState};
pub use store::{
    KeyValueBackend, KeyValueSessionStore, LocalStorageBackend, MemoryBackend, SessionStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Hr,
    Employee,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Role::Admin),
            "HR" => Some(Role::Hr),
            "EMPLOYEE" => Some(Role::Employee),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Hr => "HR",
            Role::Employee => "EMPLOYEE",
        }
    }

    /// ADMIN and HR share every admin-gated capability.
    pub fn is_privileged(self) -> bool {
        matches!(self, Role::Admin | Role::Hr)
    }
}

/// Everything the store holds, read in one go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub refresh: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub employee_id: Option<String>,
    pub full_name: Option<String>,
    pub is_first_login: bool,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        non_empty(&self.token)
    }

    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(Role::is_privileged)
    }

    pub fn is_employee(&self) -> bool {
        self.role() == Some(Role::Employee)
    }

    pub fn is_first_login(&self) -> bool {
        self.is_first_login
    }

    /// A usable session carries a token, a role and an email.
    pub fn validate_auth(&self) -> bool {
        non_empty(&self.token) && non_empty(&self.role) && non_empty(&self.email)
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Fields to write. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub token: Option<String>,
    pub refresh: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub employee_id: Option<String>,
    pub full_name: Option<String>,
    pub is_first_login: Option<bool>,
}

/// Display values for the shell, with placeholders for missing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub email: String,
    pub role: String,
    pub full_name: String,
    pub employee_id: String,
}

impl UserInfo {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        fn or(value: &Option<String>, fallback: &str) -> String {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
                .to_string()
        }
        Self {
            email: or(&snapshot.email, "Guest"),
            role: or(&snapshot.role, "N/A"),
            full_name: or(&snapshot.full_name, "User"),
            employee_id: or(&snapshot.employee_id, "N/A"),
        }
    }

    pub fn initials(&self) -> String {
        crate::utils::format::initials(&self.full_name)
    }
}

/// Shared handle to the session store. Cloning is cheap; all clones see the
/// same data.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
    on_clear: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
            on_clear: Rc::default(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(KeyValueSessionStore::new(MemoryBackend::new()))
    }

    /// `localStorage`-backed session, or an in-memory one for the lifetime
    /// of the page when storage is unavailable.
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        match LocalStorageBackend::open() {
            Ok(backend) => Self::new(KeyValueSessionStore::new(backend)),
            Err(err) => {
                log::warn!("localStorage unavailable ({}), session will not persist", err);
                Self::in_memory()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn browser() -> Self {
        Self::in_memory()
    }

    pub fn get(&self) -> SessionSnapshot {
        self.store.get()
    }

    pub fn set_partial(&self, update: &SessionUpdate) {
        self.store.set_partial(update);
    }

    /// Empties the store, then runs every listener registered with
    /// [`Session::on_clear`].
    pub fn clear(&self) {
        self.store.clear();
        let listeners = self.on_clear.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    /// Runs `listener` after every [`Session::clear`], whatever triggered it.
    pub fn on_clear(&self, listener: impl Fn() + 'static) {
        self.on_clear.borrow_mut().push(Rc::new(listener));
    }

    pub fn mark_first_login_complete(&self) {
        self.set_partial(&SessionUpdate {
            is_first_login: Some(false),
            ..SessionUpdate::default()
        });
    }

    pub fn user_info(&self) -> UserInfo {
        UserInfo::from_snapshot(&self.get())
    }

    pub fn token(&self) -> Option<String> {
        self.get().token.filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.get().is_admin()
    }

    pub fn is_employee(&self) -> bool {
        self.get().is_employee()
    }

    pub fn is_first_login(&self) -> bool {
        self.get().is_first_login()
    }

    pub fn validate_auth(&self) -> bool {
        self.get().validate_auth()
    }

    /// Same underlying store.
    pub fn ptr_eq(&self, other: &Session) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}
