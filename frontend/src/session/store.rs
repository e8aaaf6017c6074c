use std::{cell::RefCell, collections::HashMap};

use super::{SessionSnapshot, SessionUpdate};

/// Storage keys, in the order they are cleared.
pub const SESSION_KEYS: [&str; 7] = [
    KEY_TOKEN,
    KEY_REFRESH,
    KEY_ROLE,
    KEY_EMAIL,
    KEY_EMPLOYEE_ID,
    KEY_FULL_NAME,
    KEY_IS_FIRST_LOGIN,
];

pub const KEY_TOKEN: &str = "token";
pub const KEY_REFRESH: &str = "refresh";
pub const KEY_ROLE: &str = "role";
pub const KEY_EMAIL: &str = "email";
pub const KEY_EMPLOYEE_ID: &str = "employee_id";
pub const KEY_FULL_NAME: &str = "full_name";
pub const KEY_IS_FIRST_LOGIN: &str = "is_first_login";

/// Persistence contract for the client session.
///
/// Writes are synchronous: a `get` issued right after `set_partial` or `clear`
/// always observes the mutation.
pub trait SessionStore {
    fn get(&self) -> SessionSnapshot;
    fn set_partial(&self, update: &SessionUpdate);
    fn clear(&self);
}

/// Raw string storage underneath a [`KeyValueSessionStore`].
pub trait KeyValueBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`. Individual storage failures (quota, privacy mode)
/// are logged and otherwise ignored.
pub struct LocalStorageBackend {
    storage: web_sys::Storage,
}

impl LocalStorageBackend {
    pub fn open() -> Result<Self, String> {
        crate::utils::storage::local_storage().map(|storage| Self { storage })
    }
}

impl KeyValueBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        storage_outcome("persist", key, self.storage.set_item(key, value));
    }

    fn remove(&self, key: &str) {
        storage_outcome("remove", key, self.storage.remove_item(key));
    }
}

/// Logs a failed storage write. A failed remove can leave a live token
/// behind, so both directions are reported.
fn storage_outcome<E>(action: &str, key: &str, result: Result<(), E>) -> bool {
    if result.is_err() {
        log::warn!("failed to {} session key `{}`", action, key);
        return false;
    }
    true
}

/// Maps the session fields onto flat string keys.
pub struct KeyValueSessionStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> KeyValueSessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn read_non_empty(&self, key: &str) -> Option<String> {
        self.backend.read(key).filter(|value| !value.is_empty())
    }

    fn write_present(&self, key: &str, value: Option<&String>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.backend.write(key, value);
        }
    }
}

impl<B: KeyValueBackend> SessionStore for KeyValueSessionStore<B> {
    fn get(&self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.read_non_empty(KEY_TOKEN),
            refresh: self.read_non_empty(KEY_REFRESH),
            role: self.read_non_empty(KEY_ROLE),
            email: self.read_non_empty(KEY_EMAIL),
            employee_id: self.read_non_empty(KEY_EMPLOYEE_ID),
            full_name: self.read_non_empty(KEY_FULL_NAME),
            is_first_login: self.backend.read(KEY_IS_FIRST_LOGIN).as_deref() == Some("true"),
        }
    }

    fn set_partial(&self, update: &SessionUpdate) {
        self.write_present(KEY_TOKEN, update.token.as_ref());
        self.write_present(KEY_REFRESH, update.refresh.as_ref());
        self.write_present(KEY_ROLE, update.role.as_ref());
        self.write_present(KEY_EMAIL, update.email.as_ref());
        self.write_present(KEY_EMPLOYEE_ID, update.employee_id.as_ref());
        self.write_present(KEY_FULL_NAME, update.full_name.as_ref());
        if let Some(flag) = update.is_first_login {
            self.backend
                .write(KEY_IS_FIRST_LOGIN, if flag { "true" } else { "false" });
        }
    }

    fn clear(&self) {
        for key in SESSION_KEYS {
            self.backend.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_failures_are_reported_for_writes_and_removes() {
        assert!(storage_outcome::<()>("persist", "token", Ok(())));
        assert!(!storage_outcome("persist", "token", Err("quota")));
        assert!(!storage_outcome("remove", "token", Err("denied")));
    }

    fn store() -> KeyValueSessionStore<MemoryBackend> {
        KeyValueSessionStore::new(MemoryBackend::new())
    }

    #[test]
    fn empty_store_reads_as_logged_out() {
        let snapshot = store().get();
        assert_eq!(snapshot, SessionSnapshot::default());
        assert!(!snapshot.is_first_login);
    }

    #[test]
    fn partial_update_keeps_absent_fields() {
        let store = store();
        store.set_partial(&SessionUpdate {
            token: Some("t".into()),
            role: Some("ADMIN".into()),
            email: Some("a@b.com".into()),
            ..SessionUpdate::default()
        });
        store.set_partial(&SessionUpdate {
            is_first_login: Some(false),
            ..SessionUpdate::default()
        });

        let snapshot = store.get();
        assert_eq!(snapshot.token.as_deref(), Some("t"));
        assert_eq!(snapshot.role.as_deref(), Some("ADMIN"));
        assert_eq!(snapshot.email.as_deref(), Some("a@b.com"));
        assert!(!snapshot.is_first_login);
        assert_eq!(
            store.backend().read(KEY_IS_FIRST_LOGIN).as_deref(),
            Some("false")
        );
    }

    #[test]
    fn empty_strings_do_not_erase_stored_values() {
        let store = store();
        store.set_partial(&SessionUpdate {
            role: Some("HR".into()),
            ..SessionUpdate::default()
        });
        store.set_partial(&SessionUpdate {
            role: Some(String::new()),
            ..SessionUpdate::default()
        });
        assert_eq!(store.get().role.as_deref(), Some("HR"));
    }

    #[test]
    fn first_login_flag_round_trips_as_string() {
        let store = store();
        store.set_partial(&SessionUpdate {
            is_first_login: Some(true),
            ..SessionUpdate::default()
        });
        assert_eq!(
            store.backend().read(KEY_IS_FIRST_LOGIN).as_deref(),
            Some("true")
        );
        assert!(store.get().is_first_login);

        store.backend().write(KEY_IS_FIRST_LOGIN, "yes");
        assert!(!store.get().is_first_login);
    }

    #[test]
    fn clear_removes_every_key_and_is_idempotent() {
        let store = store();
        store.set_partial(&SessionUpdate {
            token: Some("t".into()),
            refresh: Some("r".into()),
            role: Some("EMPLOYEE".into()),
            email: Some("e@x.com".into()),
            employee_id: Some("OIJODO20250001".into()),
            full_name: Some("John Doe".into()),
            is_first_login: Some(true),
        });
        store.clear();
        assert_eq!(store.get(), SessionSnapshot::default());
        for key in SESSION_KEYS {
            assert!(store.backend().read(key).is_none(), "{key} still present");
        }
        store.clear();
        assert_eq!(store.get(), SessionSnapshot::default());
    }
}
