//! Durable token storage backed by `window.localStorage`.
//!
//! One fixed key holds the raw token string; an absent key means the
//! session starts anonymous after a reload. Writes are fire-and-forget.

use crate::core::TokenVault;

const TOKEN_KEY: &str = "ledgerly_token";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Raw token for the implicit auth header, if one is stored.
pub fn get_token() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok()?
}

/// [`TokenVault`] over localStorage.
#[derive(Clone, Copy, Default)]
pub struct BrowserVault;

impl TokenVault for BrowserVault {
    fn load(&self) -> Option<String> {
        get_token()
    }

    fn store(&self, token: &str) {
        let Some(storage) = storage() else { return };
        if storage.set_item(TOKEN_KEY, token).is_err() {
            leptos::logging::warn!("failed to persist auth token");
        }
    }

    fn clear(&self) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
