use serde::{Deserialize, Serialize};

use crate::tokenizer;

/// One numbered verse of a psalm in a given translation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub psalm: u32,
    pub translation: String,
    pub number: u32,
    pub text: String,
}

impl Verse {
    pub fn new(psalm: u32, translation: &str, number: u32, text: &str) -> Self {
        Self {
            psalm,
            translation: translation.to_string(),
            number,
            text: text.to_string(),
        }
    }

    /// Whitespace tokens with punctuation attached.
    pub fn words(&self) -> Vec<String> {
        tokenizer::words(&self.text)
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// `"Psalm 1:3"`
    pub fn reference(&self) -> String {
        format!("Psalm {}:{}", self.psalm, self.number)
    }
}

/// Build verses for one (psalm, translation) pair from ordered `(number, text)` pairs,
/// the shape a verse provider hands back.
pub fn verses_from_pairs<'a>(
    psalm: u32,
    translation: &str,
    pairs: impl IntoIterator<Item = (u32, &'a str)>,
) -> Vec<Verse> {
    pairs
        .into_iter()
        .map(|(number, text)| Verse::new(psalm, translation, number, text))
        .collect()
}
