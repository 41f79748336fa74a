//! Tab Bar Component
//!
//! Top-level navigation between the app tabs.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Tab;

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="tab-bar">
            {Tab::ALL.into_iter().map(|tab| {
                let tab_class = move || {
                    if ctx.active_tab.get() == tab { "tab-btn active" } else { "tab-btn" }
                };
                view! {
                    <button class=tab_class on:click=move |_| ctx.navigate(tab)>
                        <span class="tab-icon">{tab.icon()}</span>
                        <span class="tab-label">{tab.label()}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
