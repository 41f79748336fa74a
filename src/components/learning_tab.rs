//! Learning Tab Component
//!
//! E-waste learning cards with category filter, quick-tip previews, a detail
//! dialog and the learning quiz.

use leptos::prelude::*;

use super::LearningQuiz;
use crate::learning::{card, categories, LearningCard, CARDS};
use crate::markdown::{parse_markdown, parse_markdown_inline};

#[component]
pub fn LearningTab() -> impl IntoView {
    let (category, set_category) = signal(None::<&'static str>);
    let (expanded, set_expanded) = signal(Vec::<&'static str>::new());
    let (selected, set_selected) = signal(None::<&'static str>);

    let visible_cards = move || {
        let filter = category.get();
        CARDS
            .iter()
            .filter(|c| filter.map_or(true, |cat| c.category == cat))
            .copied()
            .collect::<Vec<LearningCard>>()
    };

    let toggle_tips = move |id: &'static str| {
        set_expanded.update(|ids| {
            if let Some(pos) = ids.iter().position(|x| *x == id) {
                ids.remove(pos);
            } else {
                ids.push(id);
            }
        });
    };

    view! {
        <div class="learning-tab">
            <h2>"Learning Center"</h2>
            <p class="tab-intro">"Everything you need to know about e-waste in Melbourne."</p>

            <div class="category-chips">
                <h3>"Browse by Category"</h3>
                <button
                    class=move || if category.get().is_none() { "chip active" } else { "chip" }
                    on:click=move |_| set_category.set(None)
                >
                    "All"
                </button>
                {categories(CARDS).into_iter().map(|cat| view! {
                    <button
                        class=move || if category.get() == Some(cat) { "chip active" } else { "chip" }
                        on:click=move |_| set_category.set(Some(cat))
                    >
                        {cat}
                    </button>
                }).collect_view()}
            </div>

            <div class="learning-grid">
                <For
                    each=visible_cards
                    key=|c| c.id
                    children=move |c| {
                        let id = c.id;
                        let open = move || expanded.get().contains(&id);
                        view! {
                            <div class="learning-card">
                                <div class="learning-card-emoji">{c.emoji}</div>
                                <h3>{c.title}</h3>
                                <p>{c.description}</p>
                                <span class="chip small">{c.category}</span>
                                <div class="learning-card-actions">
                                    <button class="learn-btn primary" on:click=move |_| set_selected.set(Some(id))>
                                        "Learn More"
                                    </button>
                                    <button class="learn-btn secondary" on:click=move |_| toggle_tips(id)>
                                        {move || if open() { "Hide Tips" } else { "Quick Tips" }}
                                    </button>
                                </div>
                                <Show when=open>
                                    <div class="quick-tips">
                                        <h4>"Quick Tips:"</h4>
                                        <ul>
                                            {c.tip_preview().iter().map(|tip| view! {
                                                <li inner_html=parse_markdown_inline(tip)></li>
                                            }).collect_view()}
                                        </ul>
                                    </div>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>

            <LearningQuiz />

            {move || selected.get().and_then(card).map(|c| view! {
                <CardDialog card=*c on_close=Callback::new(move |_| set_selected.set(None)) />
            })}
        </div>
    }
}

/// Modal with the full card body
#[component]
fn CardDialog(card: LearningCard, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let body_html = parse_markdown(card.body);

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <div class="modal-emoji">{card.emoji}</div>
                    <div>
                        <h2>{card.title}</h2>
                        <span class="chip small">{card.category}</span>
                    </div>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-body">
                    <h3>"Overview"</h3>
                    <div class="markdown-body" inner_html=body_html></div>
                    <h3>"Key Tips"</h3>
                    <ul>
                        {card.tips.iter().map(|tip| view! {
                            <li inner_html=parse_markdown_inline(tip)></li>
                        }).collect_view()}
                    </ul>
                </div>
                <button class="learn-btn primary" on:click=move |_| on_close.run(())>"Got it!"</button>
            </div>
        </div>
    }
}
