use shared::{KeyValueStore, MemoryStore, StoreError};
use web_sys::{window, Storage};

/// `localStorage` when the browser grants it, an in-memory map otherwise
/// (e.g. storage disabled in private browsing).
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                log::warn!("localStorage unavailable, wheels will not survive a reload");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStore::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            BrowserStore::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| StoreError::Write(format!("{:?}", e))),
            BrowserStore::Memory(store) => store.set_item(key, value),
        }
    }
}
