//! Hand-authored quiz content kept as data.
//!
//! Meaning paraphrases, psalm-level theme rules and alternate verse endings
//! live in a [`ContentTable`] that is loaded from TOML or JSON, so adding a
//! psalm never requires touching the generator.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};
use crate::tokenizer::keywords;
use crate::verse::Verse;

const BUILTIN_TOML: &str = include_str!("../content/builtin.toml");

static BUILTIN: LazyLock<ContentTable> = LazyLock::new(|| {
    ContentTable::from_toml_str(BUILTIN_TOML).expect("bundled content table is valid")
});

/// Paraphrase of a phrase from one verse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeaningEntry {
    pub psalm: u32,
    pub verse: u32,
    pub phrase: String,
    pub paraphrase: String,
    #[serde(default)]
    pub distractors: Vec<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl MeaningEntry {
    /// Applies when the verse matches and actually contains the phrase,
    /// which keeps a table written for one translation out of another.
    pub fn applies_to(&self, verse: &Verse) -> bool {
        self.psalm == verse.psalm
            && self.verse == verse.number
            && verse
                .text
                .to_lowercase()
                .contains(&self.phrase.to_lowercase())
    }
}

/// Psalm-level question fired by keyword groups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeRule {
    pub prompt: String,
    /// Every group needs at least one of its words present.
    pub all_of: Vec<Vec<String>>,
    pub answer: String,
    #[serde(default)]
    pub distractors: Vec<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl ThemeRule {
    pub fn matches(&self, words: &HashSet<String>) -> bool {
        !self.all_of.is_empty()
            && self.all_of.iter().all(|group| {
                group
                    .iter()
                    .any(|keyword| words.contains(&keyword.to_lowercase()))
            })
    }
}

/// Wrong endings for verses containing `trigger`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompletionRule {
    pub trigger: String,
    pub alternates: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentTable {
    #[serde(default)]
    pub meanings: Vec<MeaningEntry>,
    #[serde(default)]
    pub themes: Vec<ThemeRule>,
    #[serde(default)]
    pub completions: Vec<CompletionRule>,
}

impl ContentTable {
    /// The table bundled with the crate (Psalm 1 plus generic themes).
    pub fn builtin() -> &'static ContentTable {
        &BUILTIN
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let table: ContentTable = toml::from_str(s)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let table: ContentTable = serde_json::from_str(s)?;
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<()> {
        for m in &self.meanings {
            if m.phrase.trim().is_empty() || m.paraphrase.trim().is_empty() {
                return Err(ContentError::Invalid(format!(
                    "meaning for psalm {}:{} has an empty phrase or paraphrase",
                    m.psalm, m.verse
                )));
            }
        }
        for (i, t) in self.themes.iter().enumerate() {
            if t.prompt.trim().is_empty() || t.answer.trim().is_empty() {
                return Err(ContentError::Invalid(format!(
                    "theme #{i} has an empty prompt or answer"
                )));
            }
            if t.all_of.is_empty() || t.all_of.iter().any(|g| g.is_empty()) {
                return Err(ContentError::Invalid(format!(
                    "theme #{i} ('{}') has an empty keyword group",
                    t.prompt
                )));
            }
        }
        for c in &self.completions {
            if c.trigger.trim().is_empty() {
                return Err(ContentError::Invalid(
                    "completion rule has an empty trigger".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Append another table's entries after this one's.
    pub fn merge(&mut self, other: ContentTable) {
        self.meanings.extend(other.meanings);
        self.themes.extend(other.themes);
        self.completions.extend(other.completions);
    }

    pub fn meanings_for<'a>(&'a self, verse: &'a Verse) -> impl Iterator<Item = &'a MeaningEntry> {
        self.meanings.iter().filter(move |m| m.applies_to(verse))
    }

    pub fn has_meanings_for_psalm(&self, psalm: u32) -> bool {
        self.meanings.iter().any(|m| m.psalm == psalm)
    }

    /// Theme rules satisfied by the concatenated text.
    pub fn matching_themes(&self, text: &str) -> Vec<&ThemeRule> {
        let words: HashSet<String> = keywords(text).into_iter().collect();
        self.themes.iter().filter(|t| t.matches(&words)).collect()
    }

    /// Alternate endings from every rule whose trigger occurs in `text`.
    pub fn completion_alternates(&self, text: &str) -> Vec<&str> {
        let lowered = text.to_lowercase();
        self.completions
            .iter()
            .filter(|c| lowered.contains(&c.trigger.to_lowercase()))
            .flat_map(|c| c.alternates.iter().map(String::as_str))
            .collect()
    }
}
