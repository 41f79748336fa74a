//! Stat Bar Component
//!
//! Labelled progress bar for a bounded pet stat.

use leptos::prelude::*;

use crate::models::STAT_MAX;

#[component]
pub fn StatBar(
    label: &'static str,
    icon: &'static str,
    #[prop(into)] value: Signal<u32>,
    /// Extra class for the fill (color per stat)
    #[prop(optional)] fill_class: &'static str,
) -> impl IntoView {
    let width = move || format!("{}%", value.get().min(STAT_MAX));

    view! {
        <div class="stat-bar">
            <div class="stat-bar-header">
                <span class="stat-icon">{icon}</span>
                <span class="stat-label">{label}</span>
            </div>
            <div class="stat-track">
                <div class=format!("stat-fill {}", fill_class) style:width=width></div>
            </div>
            <div class="stat-value">{move || format!("{}/{}", value.get(), STAT_MAX)}</div>
        </div>
    }
}
