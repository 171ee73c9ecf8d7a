//! Access-token cache backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login handler caches the bearer token the backend returns; requests
//! with a bearer credential policy read it back. The session cookie is
//! managed by the browser and never passes through here.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort. A missing window or a storage quota error
//! is logged and treated as "no token" rather than surfaced to callers.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed store. Native builds behave as an always-empty store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage.get_item(&self.key).ok().flatten().filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; access token not cached");
                return;
            };
            if storage.set_item(&self.key, token).is_err() {
                log::warn!("failed to cache access token under '{}'", self.key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; access token not cleared");
                return;
            };
            if storage.remove_item(&self.key).is_err() {
                log::warn!("failed to clear access token under '{}'", self.key);
            }
        }
    }
}

/// In-memory key/value store with the same contract, for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    key: String,
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), entries: RefCell::default() }
    }

    /// Raw item lookup by any key, mirroring `localStorage.getItem`.
    #[must_use]
    pub fn item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.item(&self.key).filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        self.entries.borrow_mut().insert(self.key.clone(), token.to_owned());
    }

    fn clear(&self) {
        self.entries.borrow_mut().remove(&self.key);
    }
}
