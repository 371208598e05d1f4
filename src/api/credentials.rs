//! Stored bearer credential.
//!
//! A single opaque token, written on login, read on every request, removed
//! on logout. There is no expiry tracking or refresh.

use std::cell::RefCell;

/// localStorage key holding the token
pub const TOKEN_KEY: &str = "token";

pub trait CredentialStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// In-process store, used for server-side rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: RefCell<Option<String>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for MemoryCredentials {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Whether a localStorage write took effect. Failures are logged, since the
/// caller has no way to surface them.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn storage_write<E: std::fmt::Debug>(result: Result<(), E>, action: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to {} in localStorage: {:?}", action, e);
            false
        }
    }
}

/// Browser localStorage under [`TOKEN_KEY`].
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageCredentials;

#[cfg(target_arch = "wasm32")]
impl LocalStorageCredentials {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialStore for LocalStorageCredentials {
    fn get(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                storage_write(storage.set_item(TOKEN_KEY, token), "persist credential");
            }
            None => tracing::warn!("localStorage unavailable, credential not persisted"),
        }
    }

    fn clear(&self) {
        match Self::storage() {
            Some(storage) => {
                storage_write(storage.remove_item(TOKEN_KEY), "remove credential");
            }
            None => tracing::warn!("localStorage unavailable, credential not removed"),
        }
    }
}

/// Credential store for the current build target.
pub fn default_credentials() -> std::rc::Rc<dyn CredentialStore> {
    #[cfg(target_arch = "wasm32")]
    {
        std::rc::Rc::new(LocalStorageCredentials)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::rc::Rc::new(MemoryCredentials::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_credentials_lifecycle() {
        let store = MemoryCredentials::new();
        assert_eq!(store.get(), None);

        store.set("abc");
        assert_eq!(store.get(), Some("abc".to_string()));

        store.set("def");
        assert_eq!(store.get(), Some("def".to_string()));

        store.clear();
        assert_eq!(store.get(), None);

        // Clearing twice is fine
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_storage_write_reports_failure() {
        assert!(storage_write(Ok::<(), &str>(()), "remove credential"));
        assert!(!storage_write(Err("QuotaExceededError"), "remove credential"));
    }
}
