use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::check;

const FALLBACK_PROMPT: &str =
    "No verses are loaded for this quiz yet. Which book of the Bible holds the psalms?";

/// The shape of a single generated question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    FillBlank,
    MultipleChoice,
    WordOrder,
    VerseCompletion,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FillBlank => "fill-blank",
            Self::MultipleChoice => "multiple-choice",
            Self::WordOrder => "word-order",
            Self::VerseCompletion => "verse-completion",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the caller asks the generator for. `Mixed` blends every kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionStyle {
    FillBlank,
    MultipleChoice,
    WordOrder,
    VerseCompletion,
    Mixed,
}

impl QuestionStyle {
    pub const ALL: [QuestionStyle; 5] = [
        Self::FillBlank,
        Self::MultipleChoice,
        Self::WordOrder,
        Self::VerseCompletion,
        Self::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FillBlank => "fill-blank",
            Self::MultipleChoice => "multiple-choice",
            Self::WordOrder => "word-order",
            Self::VerseCompletion => "verse-completion",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for QuestionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "fill-blank" | "fill" => Ok(Self::FillBlank),
            "multiple-choice" | "mc" => Ok(Self::MultipleChoice),
            "word-order" | "order" => Ok(Self::WordOrder),
            "verse-completion" | "completion" => Ok(Self::VerseCompletion),
            "mixed" => Ok(Self::Mixed),
            other => Err(format!(
                "unknown question style '{other}' (expected fill-blank, multiple-choice, word-order, verse-completion or mixed)"
            )),
        }
    }
}

/// A self-contained quiz question.
///
/// For word-order questions `options` holds the shuffled word tokens the
/// player must rearrange; for every other kind it holds the answer options,
/// one of which equals `correct_answer`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub kind: QuestionKind,
    pub prompt: String,
    /// For word-order, the verse tokens joined by single spaces; runs of
    /// whitespace in the verse text are collapsed.
    pub correct_answer: String,
    pub options: Vec<String>,
    pub verse_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answered_correctly: Option<bool>,
}

impl Question {
    pub fn new(
        kind: QuestionKind,
        prompt: String,
        correct_answer: String,
        options: Vec<String>,
        verse_number: u32,
    ) -> Self {
        Self {
            kind,
            prompt,
            correct_answer,
            options,
            verse_number,
            explanation: None,
            answered_correctly: None,
        }
    }

    pub fn with_explanation(mut self, explanation: Option<String>) -> Self {
        self.explanation = explanation;
        self
    }

    /// The question handed out when there is nothing to quiz on.
    pub fn fallback() -> Self {
        Self::new(
            QuestionKind::MultipleChoice,
            FALLBACK_PROMPT.to_string(),
            "Psalms".to_string(),
            ["Psalms", "Proverbs", "Isaiah", "Genesis"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            0,
        )
        .with_explanation(Some(
            "The Book of Psalms collects 150 songs and prayers.".to_string(),
        ))
    }

    pub fn is_fallback(&self) -> bool {
        self.verse_number == 0 && self.prompt == FALLBACK_PROMPT
    }

    /// See [`check::check`].
    pub fn check(&self, submitted: &str) -> bool {
        check::check(self, submitted)
    }

    /// Record the outcome of the player's answer.
    pub fn record(&mut self, correct: bool) {
        self.answered_correctly = Some(correct);
    }
}
