//! Browser Storage Backend
//!
//! `window.localStorage` behind the core `KeyValueBackend` port.

use feedback_core::{BoardConfig, DomainError, DomainResult, JsonRepository, KeyValueBackend};
use wasm_bindgen::JsValue;

/// Repository the app runs on
pub type BrowserRepository = JsonRepository<LocalStorageBackend>;

/// Stateless handle; the `Storage` object is looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> DomainResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window available".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("localStorage is disabled".to_string()))
    }
}

impl KeyValueBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

pub fn open_repository(config: &BoardConfig) -> BrowserRepository {
    JsonRepository::new(LocalStorageBackend, config.keys.clone())
}
