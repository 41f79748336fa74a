//! Games Tab Component
//!
//! Boss battle over a Melbourne map. Each district patrol is a short quiz;
//! correct answers level up the pet.

use leptos::prelude::*;

use super::AnswerOptions;
use crate::boss::{BossBattle, BossPhase, LOCATIONS};
use crate::context::use_app_context;
use crate::pet::PetAction;
use crate::quiz::AnswerOutcome;
use crate::store::{store_apply_action, use_app_store};

#[component]
pub fn GamesTab() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let battle = RwSignal::new(BossBattle::new(ctx.config.patrol_rounds));
    let picked = RwSignal::new(None::<usize>);

    // Screens rebuild only on a phase change
    let phase = Memo::new(move |_| battle.with(|b| b.phase()));
    let boss = move || battle.with(|b| b.patrol().and_then(|p| p.current_boss()));
    let options = Signal::derive(move || {
        battle.with(|b| {
            b.patrol()
                .and_then(|p| p.session.current())
                .map(|q| q.options.clone())
                .unwrap_or_default()
        })
    });
    let prompt = move || {
        battle.with(|b| {
            b.patrol()
                .and_then(|p| p.session.current())
                .map(|q| q.prompt.clone())
                .unwrap_or_default()
        })
    };
    let outcome = Signal::derive(move || battle.with(|b| b.patrol().and_then(|p| p.session.last_outcome())));
    let progress = move || {
        battle.with(|b| {
            b.patrol().map(|p| {
                format!(
                    "Boss {} of {} · Round {} of {} · Score {}",
                    p.session.index() + 1,
                    p.session.bank_len(),
                    p.session.round() + 1,
                    p.session.rounds(),
                    p.session.score()
                )
            })
        })
    };

    let on_pick = Callback::new(move |choice: usize| {
        let outcome = battle.try_update(|b| b.answer(choice)).flatten();
        if let Some(outcome) = outcome {
            picked.set(Some(choice));
            if outcome.is_correct() {
                store_apply_action(&store, PetAction::CorrectAnswer);
            }
        }
    });

    let next_boss = move |_| {
        picked.set(None);
        battle.update(|b| {
            b.next_boss();
        });
    };

    let open_map = move |_| {
        picked.set(None);
        battle.update(|b| b.open_map());
    };

    view! {
        <div class="games-tab">
            {move || match phase.get() {
                BossPhase::Intro => view! {
                    <div class="boss-intro">
                        <div class="boss-intro-emoji">"🗺️"</div>
                        <h2>"E-Waste Boss Battle"</h2>
                        <p>
                            "E-waste bosses are hiding around Melbourne. Pick a district, face its bosses, "
                            "and send each one to the right recycling stream."
                        </p>
                        <button class="boss-btn primary" on:click=open_map>"Open Map"</button>
                    </div>
                }.into_any(),

                BossPhase::Map => view! {
                    <div class="boss-map">
                        <h2>"Choose a District"</h2>
                        <div class="boss-map-grid">
                            {LOCATIONS.iter().map(|loc| {
                                let id = loc.id;
                                view! {
                                    <button
                                        class=format!("boss-location {}", id)
                                        on:click=move |_| {
                                            picked.set(None);
                                            battle.update(|b| {
                                                b.pick_location(id, &mut rand::thread_rng());
                                            });
                                        }
                                    >
                                        <span class="boss-location-emoji">{loc.emoji}</span>
                                        <span class="boss-location-name">{loc.name}</span>
                                        <span class="boss-location-count">{format!("{} bosses", loc.bosses.len())}</span>
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                        <button class="boss-btn secondary" on:click=move |_| battle.update(|b| b.back_to_intro())>
                            "Back"
                        </button>
                    </div>
                }.into_any(),

                BossPhase::Encounter | BossPhase::Result => {
                    let visual = boss().map(|b| b.visual());
                    view! {
                        <div class="boss-encounter">
                            <div class="boss-progress">{progress}</div>
                            {visual.map(|v| view! {
                                <div class="boss-card">
                                    <div class="boss-emoji">{v.emoji}</div>
                                    <h3>{v.title}</h3>
                                    <p>{v.description}</p>
                                </div>
                            })}
                            <p class="boss-question">{prompt}</p>
                            <AnswerOptions options=options picked=picked outcome=outcome on_pick=on_pick />

                            <Show when=move || phase.get() == BossPhase::Result>
                                <div class="boss-result">
                                    {move || match outcome.get() {
                                        Some(AnswerOutcome::Correct) => view! {
                                            <p class="result-correct">"🎉 Boss defeated! Your pet grows stronger."</p>
                                        }.into_any(),
                                        Some(AnswerOutcome::Incorrect { .. }) => view! {
                                            <p class="result-wrong">"💥 The boss got away this time."</p>
                                        }.into_any(),
                                        None => ().into_any(),
                                    }}
                                    {visual.map(|v| view! { <p class="boss-tip">{format!("💡 {}", v.tip)}</p> })}
                                    <button class="boss-btn primary" on:click=next_boss>"Continue"</button>
                                </div>
                            </Show>

                            <button class="boss-btn secondary" on:click=open_map>"Retreat to Map"</button>
                        </div>
                    }.into_any()
                }

                BossPhase::Summary => {
                    let (name, score, total) = battle.with_untracked(|b| {
                        b.patrol()
                            .map(|p| (p.location.name, p.session.score(), p.session.total_questions()))
                            .unwrap_or(("", 0, 0))
                    });
                    view! {
                        <div class="boss-summary">
                            <div class="boss-intro-emoji">"🏁"</div>
                            <h2>{format!("{} patrol complete", name)}</h2>
                            <p class="boss-score">{format!("You defeated {} of {} bosses", score, total)}</p>
                            <button class="boss-btn primary" on:click=open_map>"Patrol Another District"</button>
                            <button class="boss-btn secondary" on:click=move |_| battle.update(|b| b.back_to_intro())>
                                "Done"
                            </button>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
