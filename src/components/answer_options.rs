//! Answer Options Component
//!
//! Multiple-choice buttons shared by the boss battle and the learning quiz.
//! After an answer the buttons lock and show which option was right.

use leptos::prelude::*;

use crate::quiz::AnswerOutcome;

/// CSS class for option `index` given the pick and its outcome
pub fn option_class(index: usize, picked: Option<usize>, outcome: Option<AnswerOutcome>) -> &'static str {
    let Some(outcome) = outcome else {
        return "answer-option";
    };
    let correct = match outcome {
        AnswerOutcome::Correct => picked,
        AnswerOutcome::Incorrect { correct } => Some(correct),
    };
    if Some(index) == correct {
        "answer-option correct"
    } else if Some(index) == picked {
        "answer-option wrong"
    } else {
        "answer-option dimmed"
    }
}

#[component]
pub fn AnswerOptions(
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] picked: Signal<Option<usize>>,
    #[prop(into)] outcome: Signal<Option<AnswerOutcome>>,
    #[prop(into)] on_pick: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="answer-options">
            {move || options.get().into_iter().enumerate().map(|(i, text)| {
                let class = move || option_class(i, picked.get(), outcome.get());
                view! {
                    <button
                        class=class
                        disabled=move || outcome.get().is_some()
                        on:click=move |_| on_pick.run(i)
                    >
                        {text}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unanswered_options_are_plain() {
        assert_eq!(option_class(2, None, None), "answer-option");
    }

    #[test]
    fn test_wrong_pick_reveals_correct() {
        let outcome = Some(AnswerOutcome::Incorrect { correct: 1 });
        assert_eq!(option_class(0, Some(0), outcome), "answer-option wrong");
        assert_eq!(option_class(1, Some(0), outcome), "answer-option correct");
        assert_eq!(option_class(2, Some(0), outcome), "answer-option dimmed");
    }

    #[test]
    fn test_right_pick_is_marked_correct() {
        assert_eq!(option_class(3, Some(3), Some(AnswerOutcome::Correct)), "answer-option correct");
    }
}
