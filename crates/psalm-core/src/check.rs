//! Answer validation.
//!
//! Free-text kinds compare trimmed, lowercased strings. Word-order answers go
//! through a multiset check followed by a forward alignment scan that lets a
//! word jump ahead to a later occurrence of itself in the correct sequence.

use crate::question::{Question, QuestionKind};
use crate::tokenizer::{multiset, normalize_answer, normalized_tokens};

/// Is `submitted` a correct answer to `question`? Never panics.
pub fn check(question: &Question, submitted: &str) -> bool {
    match question.kind {
        QuestionKind::WordOrder => check_word_order(&question.correct_answer, submitted),
        QuestionKind::FillBlank | QuestionKind::MultipleChoice | QuestionKind::VerseCompletion => {
            check_text(&question.correct_answer, submitted)
        }
    }
}

/// Case-insensitive equality after trimming surrounding whitespace.
pub fn check_text(correct: &str, submitted: &str) -> bool {
    normalize_answer(correct) == normalize_answer(submitted)
}

/// Word-order comparison of two space-joined word sequences.
pub fn check_word_order(correct: &str, submitted: &str) -> bool {
    let expected = normalized_tokens(correct);
    let given = normalized_tokens(submitted);

    if multiset(&expected) != multiset(&given) {
        return false;
    }

    aligns(&expected, &given)
}

/// Forward scan of `given` against `expected`. A word that does not match the
/// cursor may skip ahead to its next occurrence; the skipped words are never
/// revisited. Succeeds only when both sequences are consumed together.
fn aligns(expected: &[String], given: &[String]) -> bool {
    let mut cursor = 0;
    for word in given {
        if cursor < expected.len() && expected[cursor] == *word {
            cursor += 1;
            continue;
        }
        match expected[cursor.min(expected.len())..]
            .iter()
            .position(|w| w == word)
        {
            Some(offset) => cursor += offset + 1,
            None => return false,
        }
    }
    cursor == expected.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_order(correct: &str) -> Question {
        Question::new(
            QuestionKind::WordOrder,
            "Put the words in order".to_string(),
            correct.to_string(),
            correct.split_whitespace().map(str::to_string).collect(),
            1,
        )
    }

    fn text(kind: QuestionKind, correct: &str) -> Question {
        Question::new(
            kind,
            "prompt".to_string(),
            correct.to_string(),
            vec![correct.to_string()],
            1,
        )
    }

    #[test]
    fn test_text_trims_and_ignores_case() {
        let q = text(QuestionKind::FillBlank, "Selah");
        assert!(check(&q, "  selah "));
        assert!(check(&q, "SELAH"));
        assert!(!check(&q, "sela"));
    }

    #[test]
    fn test_text_kinds_share_rule() {
        for kind in [QuestionKind::MultipleChoice, QuestionKind::VerseCompletion] {
            let q = text(kind, "nor sitteth in the seat of the scornful.");
            assert!(check(&q, "Nor sitteth in the seat of the scornful.\n"));
            assert!(!check(&q, "nor sitteth in the seat of the scornful"));
        }
    }

    #[test]
    fn test_word_order_exact_match() {
        let q = word_order("the Lord is my shepherd");
        assert!(check(&q, "the Lord is my shepherd"));
        assert!(check(&q, "The LORD is my Shepherd"));
        assert!(check(&q, "  the   Lord is my shepherd "));
    }

    #[test]
    fn test_word_order_rejects_genuine_reordering() {
        let q = word_order("the Lord is my shepherd");
        assert!(!check(&q, "my Lord is the shepherd"));
        assert!(!check(&q, "shepherd my is Lord the"));
    }

    #[test]
    fn test_word_order_rejects_different_multiset() {
        let q = word_order("the Lord is my shepherd");
        assert!(!check(&q, "the Lord is my"));
        assert!(!check(&q, "the Lord is my shepherd shepherd"));
        assert!(!check(&q, "the Lord is our shepherd"));
        assert!(!check(&q, ""));
    }

    #[test]
    fn test_word_order_duplicate_words_interchangeable() {
        // Swapping two occurrences of "the" yields the same sequence.
        let q = word_order("the way of the righteous");
        assert!(check(&q, "the way of the righteous"));
        assert!(!check(&q, "the the way of righteous"));
    }

    #[test]
    fn test_skip_ahead_fails_when_skipped_word_returns() {
        let expected = normalized_tokens("a b a c");
        let given = normalized_tokens("a a b c");
        assert!(!aligns(&expected, &given));
    }

    #[test]
    fn test_aligns_empty() {
        assert!(aligns(&[], &[]));
    }

    #[test]
    fn test_punctuation_is_part_of_the_token() {
        let q = word_order("LORD; and in his law");
        assert!(check(&q, "lord; and in his law"));
        assert!(!check(&q, "LORD and in his law;"));
    }
}
