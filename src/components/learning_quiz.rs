//! Learning Quiz Component
//!
//! One round over the fixed learning question bank. Correct answers feed the pet.

use leptos::prelude::*;

use super::AnswerOptions;
use crate::learning::quiz_bank;
use crate::pet::PetAction;
use crate::quiz::QuizSession;
use crate::store::{store_apply_action, use_app_store};

#[component]
pub fn LearningQuiz() -> impl IntoView {
    let store = use_app_store();
    let session = RwSignal::new(QuizSession::new(quiz_bank(), 1));
    let picked = RwSignal::new(None::<usize>);

    let options = Signal::derive(move || {
        session.with(|s| s.current().map(|q| q.options.clone()).unwrap_or_default())
    });
    let outcome = Signal::derive(move || session.with(|s| s.last_outcome()));

    let on_pick = Callback::new(move |choice: usize| {
        let outcome = session.try_update(|s| s.answer(choice)).flatten();
        if let Some(outcome) = outcome {
            picked.set(Some(choice));
            if outcome.is_correct() {
                store_apply_action(&store, PetAction::CorrectAnswer);
            }
        }
    });

    let next = move |_| {
        picked.set(None);
        session.update(|s| {
            s.advance();
        });
    };

    let restart = move |_| {
        picked.set(None);
        session.set(QuizSession::new(quiz_bank(), 1));
    };

    view! {
        <div class="learning-quiz">
            <h3>"🧠 Test Your Knowledge"</h3>
            {move || if session.with(|s| s.is_completed()) {
                let (score, total) = session.with_untracked(|s| (s.score(), s.total_questions()));
                view! {
                    <div class="quiz-summary">
                        <p class="quiz-score">{format!("You scored {} out of {}", score, total)}</p>
                        <button class="learn-btn primary" on:click=restart>"Try Again"</button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="quiz-question">
                        <div class="quiz-progress">
                            {move || session.with(|s| format!("Question {} of {}", s.index() + 1, s.bank_len()))}
                        </div>
                        <p class="quiz-prompt">
                            {move || session.with(|s| s.current().map(|q| q.prompt.clone()).unwrap_or_default())}
                        </p>
                        <AnswerOptions options=options picked=picked outcome=outcome on_pick=on_pick />
                        <Show when=move || outcome.get().is_some()>
                            <button class="learn-btn primary" on:click=next>"Next"</button>
                        </Show>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
