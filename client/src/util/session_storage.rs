//! `sessionStorage`-backed session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens live in per-tab session storage so closing the tab signs the user
//! out. Outside the browser (tests, non-`csr` builds) every read misses and
//! every write is a no-op.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use todo_api::SessionStore;

/// Session store over `window.sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "csr")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            session_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = session_storage() else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.clear();
            }
        }
    }
}
