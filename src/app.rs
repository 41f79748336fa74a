//! E-Waste Quest App
//!
//! Root component: header, tab bar and the active tab. Owns persistence of
//! pet stats and theme.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{GamesTab, LearningTab, PetTab, RecyclingInfoTab, ScanTab, TabBar, ThemeToggle};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::{Tab, Theme};
use crate::storage::{self, BrowserStorage};
use crate::store::{AppState, AppStateStoreFields};
use crate::theme::{self, SystemThemeWatcher};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::load(&BrowserStorage));
    let (active_tab, set_active_tab) = signal(Tab::default());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((active_tab, set_active_tab), config));

    // Persist stats on every change
    Effect::new(move |_| {
        let stats = store.pet_stats().get();
        if let Err(e) = storage::save_stats(&BrowserStorage, &stats) {
            log::warn!("[STORE] saving pet stats failed: {}", e);
        }
    });

    // Apply and persist theme
    Effect::new(move |_| {
        let selected = store.theme().get();
        theme::apply(selected);
        if let Err(e) = storage::save_theme(&BrowserStorage, selected) {
            log::warn!("[STORE] saving theme failed: {}", e);
        }
    });

    // Follow OS scheme changes while on System
    let watcher = SystemThemeWatcher::new(move || {
        if store.theme().get_untracked() == Theme::System {
            theme::apply(Theme::System);
        }
    });
    let watcher = StoredValue::new_local(watcher);
    on_cleanup(move || {
        let _ = watcher.try_update_value(|w| *w = None);
    });

    view! {
        <div class="app-shell">
            <header class="app-header">
                <div class="app-title">
                    <h1>"🌱 E-Waste Recycling Game"</h1>
                    <p>"Learn about e-waste recycling in Melbourne"</p>
                </div>
                <ThemeToggle />
            </header>

            <TabBar />

            <main class="tab-content">
                {move || match active_tab.get() {
                    Tab::Scan => view! { <ScanTab /> }.into_any(),
                    Tab::Pet => view! { <PetTab /> }.into_any(),
                    Tab::Games => view! { <GamesTab /> }.into_any(),
                    Tab::Learning => view! { <LearningTab /> }.into_any(),
                    Tab::Recycling => view! { <RecyclingInfoTab /> }.into_any(),
                }}
            </main>
        </div>
    }
}
