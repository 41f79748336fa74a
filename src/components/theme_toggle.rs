//! Theme Toggle Component
//!
//! Light / Dark / System segmented switch. Applying and persisting the theme
//! happens in the App effect.

use leptos::prelude::*;

use crate::models::Theme;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="theme-toggle">
            {Theme::ALL.into_iter().map(|theme| {
                let class = move || {
                    if store.theme().get() == theme { "theme-btn active" } else { "theme-btn" }
                };
                view! {
                    <button
                        class=class
                        title=format!("Switch to {} theme", theme.label())
                        on:click=move |_| store.theme().set(theme)
                    >
                        <span class="theme-icon">{theme.icon()}</span>
                        <span class="theme-label">{theme.label()}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
