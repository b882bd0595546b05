use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::constants::{DISTRACTOR_COUNT, OPTION_COUNT};

/// Collects a correct answer plus distinct distractors.
///
/// Uniqueness is case-insensitive and ignores surrounding whitespace, so
/// "LORD" and "Lord" never sit side by side. Offers beyond
/// `DISTRACTOR_COUNT` are ignored.
pub struct OptionSet {
    correct: String,
    distractors: Vec<String>,
    seen: HashSet<String>,
}

impl OptionSet {
    pub fn new(correct: &str) -> Self {
        let mut seen = HashSet::new();
        seen.insert(key(correct));
        Self {
            correct: correct.to_string(),
            distractors: Vec::new(),
            seen,
        }
    }

    /// Offer a distractor. Returns whether it was taken.
    pub fn offer(&mut self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        if self.is_full() || candidate.is_empty() {
            return false;
        }
        if !self.seen.insert(key(candidate)) {
            return false;
        }
        self.distractors.push(candidate.to_string());
        true
    }

    /// Offer candidates in order until full.
    pub fn offer_all<'a>(&mut self, candidates: impl IntoIterator<Item = &'a str>) {
        for candidate in candidates {
            if self.is_full() {
                break;
            }
            self.offer(candidate);
        }
    }

    pub fn is_full(&self) -> bool {
        self.distractors.len() >= DISTRACTOR_COUNT
    }

    /// Options including the correct answer.
    pub fn option_count(&self) -> usize {
        self.distractors.len() + 1
    }

    /// Shuffled options, or `None` when fewer than `OPTION_COUNT` are available.
    pub fn into_complete(self, rng: &mut impl Rng) -> Option<Vec<String>> {
        if self.option_count() < OPTION_COUNT {
            return None;
        }
        let mut options = self.distractors;
        options.push(self.correct);
        options.shuffle(rng);
        Some(options)
    }
}

fn key(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn test_rejects_answer_and_duplicates() {
        let mut set = OptionSet::new("LORD");
        assert!(!set.offer("Lord"));
        assert!(set.offer("law"));
        assert!(!set.offer(" LAW "));
        assert!(!set.offer("   "));
        assert_eq!(set.option_count(), 2);
    }

    #[test]
    fn test_caps_distractors() {
        let mut set = OptionSet::new("a");
        set.offer_all(["b", "c", "d", "e", "f"]);
        assert!(set.is_full());
        let options = set.into_complete(&mut rng()).unwrap();
        assert_eq!(options.len(), OPTION_COUNT);
        assert!(options.contains(&"a".to_string()));
        assert!(!options.contains(&"e".to_string()));
    }

    #[test]
    fn test_incomplete_returns_none() {
        let mut set = OptionSet::new("a");
        set.offer_all(["b", "B", "c"]);
        assert_eq!(set.option_count(), 3);
        assert!(set.into_complete(&mut rng()).is_none());
    }
}
