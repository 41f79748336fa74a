//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::Tab;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Visible tab - read
    pub active_tab: ReadSignal<Tab>,
    /// Visible tab - write
    set_active_tab: WriteSignal<Tab>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(active_tab: (ReadSignal<Tab>, WriteSignal<Tab>), config: AppConfig) -> Self {
        Self {
            active_tab: active_tab.0,
            set_active_tab: active_tab.1,
            config,
        }
    }

    /// Switch to another tab
    pub fn navigate(&self, tab: Tab) {
        log::debug!("[APP] navigate to {:?}", tab);
        self.set_active_tab.set(tab);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
