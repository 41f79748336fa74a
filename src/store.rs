//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{PetPosition, PetStats, Theme};
use crate::pet::PetAction;
use crate::storage::{self, KeyValueStore};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Persisted under `petStats`
    pub pet_stats: PetStats,
    /// Persisted under `petPosition` (on drop only)
    pub pet_position: PetPosition,
    /// Text of the most recent successful scan
    pub last_scan: Option<String>,
    /// Persisted under `theme`
    pub theme: Theme,
}

impl AppState {
    /// Load persisted fields from storage, defaults on any failure
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            pet_stats: storage::load_stats(store),
            pet_position: storage::load_position(store),
            last_scan: None,
            theme: storage::load_theme(store),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a pet action to the stats in the store
pub fn store_apply_action(store: &AppStore, action: PetAction) {
    store.pet_stats().update(|stats| *stats = stats.apply(action));
    log::debug!("[PET] {:?} -> {:?}", action, store.pet_stats().get_untracked());
}

/// Record a decoded scan
pub fn store_set_scan(store: &AppStore, text: String) {
    store.last_scan().set(Some(text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_load_from_empty_storage() {
        let state = AppState::load(&MemoryStore::default());
        assert_eq!(state.pet_stats, PetStats::default());
        assert_eq!(state.pet_position, PetPosition::default());
        assert_eq!(state.theme, Theme::System);
        assert!(state.last_scan.is_none());
    }

    #[test]
    fn test_load_reads_persisted_fields() {
        let backing = MemoryStore::default();
        storage::save_theme(&backing, Theme::Light).unwrap();
        storage::save_position(&backing, &PetPosition::new(10.0, 90.0)).unwrap();

        let state = AppState::load(&backing);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.pet_position, PetPosition { x: 10.0, y: 90.0 });
    }
}
