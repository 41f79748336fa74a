//! Local Storage
//!
//! Key/value persistence for pet stats, theme and pet position.
//! `KeyValueStore` abstracts the backend so the load/save rules can be tested
//! without a browser.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::{POSITION_KEY, STATS_KEY, THEME_KEY};
use crate::models::{PetPosition, PetStats, Theme};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Minimal string key/value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}

/// Load a JSON blob, falling back to `T::default()` on any problem
pub fn load_json<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("[STORE] corrupt '{}' blob, using defaults: {}", key, e);
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("[STORE] reading '{}' failed: {}", key, e);
            T::default()
        }
    }
}

pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

pub fn load_stats<S: KeyValueStore + ?Sized>(store: &S) -> PetStats {
    load_json::<PetStats, S>(store, STATS_KEY).normalized()
}

pub fn save_stats<S: KeyValueStore + ?Sized>(store: &S, stats: &PetStats) -> StorageResult<()> {
    save_json(store, STATS_KEY, stats)
}

pub fn load_position<S: KeyValueStore + ?Sized>(store: &S) -> PetPosition {
    let pos = load_json::<PetPosition, S>(store, POSITION_KEY);
    PetPosition::new(pos.x, pos.y)
}

pub fn save_position<S: KeyValueStore + ?Sized>(store: &S, position: &PetPosition) -> StorageResult<()> {
    save_json(store, POSITION_KEY, position)
}

/// Theme is stored as a bare string, not JSON
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => Theme::from_str(raw.trim()),
        Ok(None) => Theme::default(),
        Err(e) => {
            log::warn!("[STORE] reading theme failed: {}", e);
            Theme::default()
        }
    }
}

pub fn save_theme<S: KeyValueStore + ?Sized>(store: &S, theme: Theme) -> StorageResult<()> {
    store.set(THEME_KEY, theme.as_str())
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
    pub fail_writes: bool,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::Backend("quota exceeded".to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::PetAction;

    #[test]
    fn test_missing_entries_give_defaults() {
        let store = MemoryStore::default();
        assert_eq!(load_stats(&store), PetStats::default());
        assert_eq!(load_theme(&store), Theme::System);
        assert_eq!(load_position(&store), PetPosition::default());
    }

    #[test]
    fn test_stats_persist_under_fixed_key() {
        let store = MemoryStore::default();
        let stats = PetStats::default().apply(PetAction::Feed);
        save_stats(&store, &stats).unwrap();

        let raw = store.get("petStats").unwrap().unwrap();
        assert!(raw.contains("\"ecoPoints\":125"));
        assert_eq!(load_stats(&store), stats);
    }

    #[test]
    fn test_corrupt_stats_fall_back_to_defaults() {
        let store = MemoryStore::default();
        store.set("petStats", "{not json").unwrap();
        assert_eq!(load_stats(&store), PetStats::default());

        store.set("petStats", r#"{"life": -3}"#).unwrap();
        assert_eq!(load_stats(&store), PetStats::default());
    }

    #[test]
    fn test_out_of_range_stats_are_clamped_on_load() {
        let store = MemoryStore::default();
        store.set("petStats", r#"{"life": 400, "energy": 12}"#).unwrap();
        let stats = load_stats(&store);
        assert_eq!(stats.life, 100);
        assert_eq!(stats.energy, 12);
    }

    #[test]
    fn test_theme_is_plain_string() {
        let store = MemoryStore::default();
        save_theme(&store, Theme::Dark).unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn test_position_is_clamped_on_load() {
        let store = MemoryStore::default();
        store.set("petPosition", r#"{"x": 140.0, "y": 20.5}"#).unwrap();
        assert_eq!(load_position(&store), PetPosition { x: 100.0, y: 20.5 });
    }

    #[test]
    fn test_write_failure_is_reported() {
        let store = MemoryStore { fail_writes: true, ..MemoryStore::default() };
        assert!(matches!(save_stats(&store, &PetStats::default()), Err(StorageError::Backend(_))));
    }
}
