//! Quiz Session
//!
//! Linear progression through a fixed question bank over a number of rounds.

/// Multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct: usize,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: &[&str], correct: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
        }
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct).map(String::as_str)
    }
}

/// Result of answering the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct: usize },
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// What `advance` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    NextQuestion,
    NextRound,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    bank: Vec<Question>,
    index: usize,
    round: usize,
    rounds: usize,
    score: usize,
    completed: bool,
    /// Outcome for the current question, if already answered
    answered: Option<AnswerOutcome>,
}

impl QuizSession {
    /// `rounds` below one is treated as one; an empty bank starts completed
    pub fn new(bank: Vec<Question>, rounds: usize) -> Self {
        let completed = bank.is_empty();
        Self {
            bank,
            index: 0,
            round: 0,
            rounds: rounds.max(1),
            score: 0,
            completed,
            answered: None,
        }
    }

    pub fn current(&self) -> Option<&Question> {
        if self.completed {
            return None;
        }
        self.bank.get(self.index)
    }

    /// Score the current question. Returns `None` when completed or already answered.
    pub fn answer(&mut self, choice: usize) -> Option<AnswerOutcome> {
        if self.answered.is_some() {
            return None;
        }
        let question = self.current()?;
        let outcome = if choice == question.correct {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect { correct: question.correct }
        };
        if outcome.is_correct() {
            self.score += 1;
        }
        self.answered = Some(outcome);
        Some(outcome)
    }

    /// Move to the next question, wrapping into the next round after the last one.
    pub fn advance(&mut self) -> Progress {
        if self.completed {
            return Progress::Completed;
        }
        self.answered = None;
        if self.index + 1 < self.bank.len() {
            self.index += 1;
            return Progress::NextQuestion;
        }
        self.index = 0;
        self.round += 1;
        if self.round >= self.rounds {
            self.completed = true;
            Progress::Completed
        } else {
            Progress::NextRound
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Zero-based round counter
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn last_outcome(&self) -> Option<AnswerOutcome> {
        self.answered
    }

    pub fn bank_len(&self) -> usize {
        self.bank.len()
    }

    /// Questions asked over all rounds
    pub fn total_questions(&self) -> usize {
        self.bank.len() * self.rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Vec<Question> {
        vec![
            Question::new("a?", &["x", "y", "z"], 0),
            Question::new("b?", &["x", "y", "z"], 2),
            Question::new("c?", &["x", "y"], 1),
        ]
    }

    #[test]
    fn test_scripted_answers_score_matches() {
        let rounds = 2;
        let mut session = QuizSession::new(bank(), rounds);
        let script = [0, 1, 1, 2, 2, 1];
        let expected = bank()
            .iter()
            .cycle()
            .zip(script.iter())
            .filter(|(q, choice)| q.correct == **choice)
            .count();

        for choice in script {
            assert!(session.answer(choice).is_some());
            session.advance();
        }

        assert!(session.is_completed());
        assert_eq!(session.score(), expected);
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn test_advance_moves_index_or_round() {
        let mut session = QuizSession::new(bank(), 3);
        while !session.is_completed() {
            let before = (session.index(), session.round());
            let progress = session.advance();
            let after = (session.index(), session.round());
            let index_moved = after.0 != before.0;
            let round_moved = after.1 != before.1;
            assert!(index_moved || round_moved);
            match progress {
                Progress::NextQuestion => assert_eq!(after, (before.0 + 1, before.1)),
                Progress::NextRound | Progress::Completed => assert_eq!(after, (0, before.1 + 1)),
            }
        }
        assert_eq!(session.round(), 3);
        assert_eq!(session.advance(), Progress::Completed);
    }

    #[test]
    fn test_answer_only_once_per_question() {
        let mut session = QuizSession::new(bank(), 1);
        assert_eq!(session.answer(0), Some(AnswerOutcome::Correct));
        assert_eq!(session.answer(0), None);
        assert_eq!(session.score(), 1);

        session.advance();
        assert_eq!(session.answer(0), Some(AnswerOutcome::Incorrect { correct: 2 }));
    }

    #[test]
    fn test_completed_session_ignores_answers() {
        let mut session = QuizSession::new(bank(), 1);
        for _ in 0..3 {
            session.advance();
        }
        assert!(session.is_completed());
        assert!(session.current().is_none());
        assert_eq!(session.answer(0), None);
    }

    #[test]
    fn test_empty_bank_and_zero_rounds() {
        let empty = QuizSession::new(Vec::new(), 2);
        assert!(empty.is_completed());
        assert_eq!(empty.total_questions(), 0);

        let single = QuizSession::new(bank(), 0);
        assert_eq!(single.rounds(), 1);
        assert_eq!(single.total_questions(), 3);
    }
}
