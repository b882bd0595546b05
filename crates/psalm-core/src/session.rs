use serde::{Deserialize, Serialize};

use crate::question::Question;

/// Caller-side state for one run through a deck: a cursor and a running score.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuizSession {
    questions: Vec<Question>,
    cursor: usize,
    correct: usize,
}

/// Outcome of a session, handed to whatever keeps progress records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
}

impl SessionSummary {
    /// Percentage of the whole deck answered correctly.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            cursor: 0,
            correct: 0,
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// Check and record an answer to the current question, then advance.
    /// Returns `None` once the deck is exhausted.
    pub fn submit(&mut self, answer: &str) -> Option<bool> {
        let question = self.questions.get_mut(self.cursor)?;
        let correct = question.check(answer);
        question.record(correct);
        if correct {
            self.correct += 1;
        }
        self.cursor += 1;
        Some(correct)
    }

    /// Move past the current question without answering it.
    pub fn skip(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn is_over(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    /// (1-based position of the current question, deck size).
    pub fn progress(&self) -> (usize, usize) {
        ((self.cursor + 1).min(self.questions.len()), self.questions.len())
    }

    pub fn correct_count(&self) -> usize {
        self.correct
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total: self.questions.len(),
            answered: self
                .questions
                .iter()
                .filter(|q| q.answered_correctly.is_some())
                .count(),
            correct: self.correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::QuestionKind;
    use approx::assert_relative_eq;

    fn question(answer: &str) -> Question {
        Question::new(
            QuestionKind::FillBlank,
            format!("blank for {answer}"),
            answer.to_string(),
            vec![answer.to_string(), "x".into(), "y".into(), "z".into()],
            1,
        )
    }

    #[test]
    fn test_submit_advances_and_scores() {
        let mut session = QuizSession::new(vec![question("law"), question("tree")]);
        assert_eq!(session.progress(), (1, 2));
        assert_eq!(session.submit(" LAW "), Some(true));
        assert_eq!(session.current().unwrap().correct_answer, "tree");
        assert_eq!(session.submit("river"), Some(false));
        assert!(session.is_over());
        assert_eq!(session.submit("again"), None);
        assert_eq!(session.correct_count(), 1);
        assert_eq!(session.questions()[0].answered_correctly, Some(true));
        assert_eq!(session.questions()[1].answered_correctly, Some(false));
    }

    #[test]
    fn test_skip_leaves_question_unanswered() {
        let mut session = QuizSession::new(vec![question("a"), question("b")]);
        assert!(session.skip());
        session.submit("b");
        assert!(!session.skip());
        let summary = session.summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.answered, 1);
        assert_eq!(summary.correct, 1);
        assert_relative_eq!(summary.percentage(), 50.0);
    }

    #[test]
    fn test_empty_session() {
        let session = QuizSession::new(Vec::new());
        assert!(session.is_over());
        assert!(session.current().is_none());
        assert_eq!(session.progress(), (0, 0));
        assert_relative_eq!(session.summary().percentage(), 0.0);
    }
}
