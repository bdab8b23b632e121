use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use validator::Validate;

use crate::constants::{STATE_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::error::StoreError;
use crate::model::{Wheel, WheelId};
use crate::validation::validate_segment_count;

/// String key-value storage, e.g. the browser's `localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Complete persisted engine state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub wheels: Vec<Wheel>,
    pub active_wheel_id: WheelId,
}

impl Snapshot {
    /// Rejects snapshots that would break the engine invariants.
    fn is_consistent(&self) -> bool {
        let mut ids = HashSet::new();
        !self.wheels.is_empty()
            && self.wheels.iter().all(|wheel| ids.insert(&wheel.id))
            && self.wheels.iter().all(|wheel| {
                validate_segment_count(wheel.segments.len()).is_ok()
                    && wheel.segments.iter().all(|s| s.validate().is_ok())
            })
    }
}

pub fn save_snapshot<S: KeyValueStore + ?Sized>(store: &mut S, snapshot: &Snapshot) -> Result<(), StoreError> {
    let json = serde_json::to_string(snapshot)?;
    store.set_item(STATE_STORAGE_KEY, &json)
}

/// Returns `None` when nothing is stored or the stored data is unusable.
pub fn load_snapshot<S: KeyValueStore + ?Sized>(store: &S) -> Option<Snapshot> {
    let json = store.get_item(STATE_STORAGE_KEY)?;
    match serde_json::from_str::<Snapshot>(&json) {
        Ok(snapshot) if snapshot.is_consistent() => Some(snapshot),
        Ok(_) => {
            log::warn!("Stored wheel state is inconsistent, starting fresh");
            None
        }
        Err(e) => {
            log::warn!("Stored wheel state is corrupt, starting fresh: {}", e);
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    store
        .get_item(THEME_STORAGE_KEY)
        .map_or(Theme::Light, |theme| if theme == "dark" { Theme::Dark } else { Theme::Light })
}

pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) -> Result<(), StoreError> {
    store.set_item(THEME_STORAGE_KEY, theme.as_str())
}
