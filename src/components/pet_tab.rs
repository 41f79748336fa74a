//! Pet Tab Component
//!
//! The EcoFriend: stats, care actions, habitat and achievements.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::{PetHabitat, StatBar};
use crate::context::use_app_context;
use crate::models::Tab;
use crate::pet::{Achievement, PetAction, Reaction};
use crate::store::{store_apply_action, use_app_store, AppStateStoreFields};

const ACTIONS: [(PetAction, &str, &str); 4] = [
    (PetAction::Feed, "🍎", "Feed"),
    (PetAction::Play, "🎾", "Play"),
    (PetAction::Rest, "💤", "Rest"),
    (PetAction::Battle, "⚔️", "Train"),
];

#[component]
pub fn PetTab() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let reaction_ms = ctx.config.reaction_ms;

    let stats = move || store.pet_stats().get();
    let reaction = RwSignal::new(None::<Reaction>);
    // Replacing the timer cancels the previous one
    let reaction_timer = StoredValue::new_local(None::<Timeout>);

    let act = move |action: PetAction| {
        store_apply_action(&store, action);
        reaction.set(Some(action.reaction()));
        let timer = Timeout::new(reaction_ms, move || {
            let _ = reaction.try_set(None);
        });
        reaction_timer.set_value(Some(timer));
    };

    let avatar_class = Signal::derive(move || match reaction.get() {
        Some(r) => r.class().to_string(),
        None => format!("pet-avatar mood-{}", stats().mood().label().to_lowercase()),
    });
    let avatar_emoji = Signal::derive(move || match reaction.get() {
        Some(_) => "🦎",
        None => stats().mood().emoji(),
    });

    view! {
        <div class="pet-tab">
            <div class="pet-header">
                <h2>"EcoFriend"</h2>
                <p>"Train your pet through recycling and battles"</p>
            </div>

            <div class="pet-layout">
                <div class="pet-stats">
                    <StatBar label="Health" icon="❤️" value=Signal::derive(move || stats().life) fill_class="life" />
                    <StatBar label="Happiness" icon="😊" value=Signal::derive(move || stats().happiness) fill_class="happiness" />
                    <StatBar label="Energy" icon="⚡" value=Signal::derive(move || stats().energy) fill_class="energy" />

                    <div class="stat-card">
                        <h3>"♻️ Environmental Impact"</h3>
                        <div class="stat-row">
                            <span>"Eco Points"</span>
                            <strong>{move || stats().eco_points}</strong>
                        </div>
                        <div class="stat-row">
                            <span>"Items Recycled"</span>
                            <strong>{move || stats().items_recycled}</strong>
                        </div>
                    </div>
                </div>

                <div class="pet-profile">
                    <PetHabitat avatar_class=avatar_class emoji=avatar_emoji />
                    <div class="pet-level">{move || format!("Level {} EcoFriend", stats().level)}</div>
                    <div class="pet-mood">{move || stats().mood().label()}</div>

                    <div class="pet-combat">
                        <div class="stat-row">
                            <span>"⚔️ Attack"</span>
                            <strong>{move || stats().attack}</strong>
                        </div>
                        <div class="stat-row">
                            <span>"🛡️ Defense"</span>
                            <strong>{move || stats().defense}</strong>
                        </div>
                    </div>

                    <div class="pet-actions">
                        {ACTIONS.into_iter().map(|(action, icon, label)| view! {
                            <button class="pet-action-btn" on:click=move |_| act(action)>
                                <span class="pet-action-icon">{icon}</span>
                                {label}
                            </button>
                        }).collect_view()}
                    </div>
                    <button class="pet-battle-link" on:click=move |_| ctx.navigate(Tab::Games)>
                        "🎮 Battle e-waste bosses"
                    </button>
                </div>

                <div class="pet-achievements">
                    <h3>"🏆 Achievements"</h3>
                    {Achievement::ALL.into_iter().map(|a| {
                        let class = move || {
                            if a.unlocked(&stats()) { "achievement unlocked" } else { "achievement locked" }
                        };
                        view! {
                            <div class=class>
                                <span class="achievement-icon">{a.emoji()}</span>
                                <span class="achievement-title">{a.title()}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
