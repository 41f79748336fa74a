//! Recycling Info Tab Component
//!
//! Product recycling sheet, with the last scanned code when there is one.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Tab;
use crate::recycling::{RecyclingInfo, IPHONE_17};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecyclingInfoTab() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let info: RecyclingInfo = IPHONE_17;

    view! {
        <div class="recycling-tab">
            {move || match store.last_scan().get() {
                Some(code) => view! {
                    <div class="scan-banner">
                        <span>"📷 Scanned: "</span>
                        <code>{code}</code>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="scan-banner muted">
                        <span>"Showing a sample product. "</span>
                        <button class="link-btn" on:click=move |_| ctx.navigate(Tab::Scan)>"Scan an item"</button>
                    </div>
                }.into_any(),
            }}

            <div class="product-header">
                <div>
                    <h2>{format!("{} {}", info.product_name, info.model)}</h2>
                    <p class="manufacturer">{info.manufacturer}</p>
                </div>
                <div class=info.band().class()>
                    <span class="score-value">{info.recyclability_score}</span>
                    <span class="score-label">"Recyclability"</span>
                </div>
            </div>

            <section class="info-section">
                <h3>{format!("🧪 Materials ({}% recyclable)", info.recyclable_share())}</h3>
                <ul class="material-list">
                    {info.materials.iter().map(|m| view! {
                        <li class:recyclable=m.recyclable>
                            <span class="material-name">{m.name}</span>
                            <span class="material-share">{format!("{}%", m.percentage)}</span>
                            <span class="material-flag">{if m.recyclable { "✅" } else { "⚠️" }}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="info-section">
                <h3>"🔩 Components"</h3>
                <ul class="component-list">
                    {info.components.iter().map(|c| view! {
                        <li class:recyclable=c.recyclable>
                            <span class="component-name">{c.name}</span>
                            {c.notes.map(|n| view! { <span class="component-notes">{n}</span> })}
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="info-section">
                <h3>"📋 How to Recycle"</h3>
                <ol class="guidance-list">
                    {info.guidance.iter().map(|g| view! { <li>{*g}</li> }).collect_view()}
                </ol>
            </section>

            <section class="info-section">
                <h3>{format!("⛏️ Estimated Recovery ({:.1} g)", info.total_recovery_grams())}</h3>
                <ul class="recovery-list">
                    {info.estimated_recovery.iter().map(|r| view! {
                        <li>
                            <span>{r.material}</span>
                            <span>{format!("{} g", r.grams)}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="info-section warning">
                <h3>"⚠️ Disposal Warnings"</h3>
                <ul>
                    {info.disposal_warnings.iter().map(|w| view! { <li>{*w}</li> }).collect_view()}
                </ul>
            </section>
        </div>
    }
}
