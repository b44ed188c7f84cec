use playpen_core::session::SessionStore;

use crate::diag;

/// Calls the closure with browser sessionStorage, if available. No-op on non-WASM.
#[allow(unused_variables)]
pub fn with_session_storage(f: impl FnOnce(&web_sys::Storage)) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window()
            && let Ok(Some(storage)) = window.session_storage()
        {
            f(&storage);
        }
    }
}

/// [`SessionStore`] backed by the tab's sessionStorage. Entries survive a
/// reload but not closing the tab.
#[derive(Debug, Default, Clone, Copy)]
pub struct TabStorage;

impl SessionStore for TabStorage {
    fn get(&self, key: &str) -> Option<String> {
        let mut value = None;
        with_session_storage(|storage| {
            value = storage.get_item(key).ok().flatten();
        });
        value
    }

    fn set(&mut self, key: &str, value: &str) {
        with_session_storage(|storage| {
            if let Err(e) = storage.set_item(key, value) {
                diag::console_warn!("Failed to save {key}: {e:?}");
            }
        });
    }

    fn remove(&mut self, key: &str) {
        with_session_storage(|storage| {
            let _ = storage.remove_item(key);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_storage_is_empty_and_inert() {
        let mut store = TabStorage;
        store.set("activeGame", "{}");
        assert_eq!(store.get("activeGame"), None);
        store.remove("activeGame");
    }
}
