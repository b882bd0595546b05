//! Property tests for deck invariants over arbitrary verse sets.

use std::collections::HashSet;

use proptest::prelude::*;
use psalm_core::{
    OPTION_COUNT, Question, QuestionKind, QuestionStyle, Verse, check, generate_seeded,
};

const VOCABULARY: &[&str] = &[
    "the", "LORD", "is", "my", "shepherd;", "I", "shall", "not", "want.", "blessed", "man,",
    "righteous", "ungodly", "way", "of", "and", "his", "law", "water,", "tree",
];

fn verse_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 1..16).prop_map(|w| w.join(" "))
}

fn verse_set() -> impl Strategy<Value = Vec<Verse>> {
    prop::collection::vec(verse_text(), 0..7).prop_map(|texts| {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Verse::new(1, "KJV", i as u32 + 1, text))
            .collect()
    })
}

fn style() -> impl Strategy<Value = QuestionStyle> {
    prop::sample::select(QuestionStyle::ALL.to_vec())
}

fn sorted_words(s: &str) -> Vec<String> {
    let mut words: Vec<String> = s.split_whitespace().map(str::to_string).collect();
    words.sort();
    words
}

fn assert_option_invariant(q: &Question) {
    match q.kind {
        QuestionKind::WordOrder => {
            assert_eq!(sorted_words(&q.options.join(" ")), sorted_words(&q.correct_answer));
        }
        _ => {
            let distinct: HashSet<String> =
                q.options.iter().map(|o| o.trim().to_lowercase()).collect();
            assert_eq!(distinct.len(), q.options.len(), "{:?}", q.options);
            assert!(q.options.len() >= OPTION_COUNT, "{:?}", q.options);
            assert_eq!(
                q.options.iter().filter(|o| **o == q.correct_answer).count(),
                1
            );
        }
    }
}

proptest! {
    #[test]
    fn deck_is_never_empty(verses in verse_set(), style in style(), seed in any::<u64>()) {
        let deck = generate_seeded(&verses, style, Some(seed));
        prop_assert!(!deck.is_empty());
        if verses.is_empty() {
            prop_assert_eq!(deck.len(), 1);
            prop_assert!(deck[0].is_fallback());
        }
    }

    #[test]
    fn options_hold_the_answer(verses in verse_set(), style in style(), seed in any::<u64>()) {
        for q in generate_seeded(&verses, style, Some(seed)) {
            assert_option_invariant(&q);
        }
    }

    #[test]
    fn correct_answer_always_checks(verses in verse_set(), style in style(), seed in any::<u64>()) {
        for q in generate_seeded(&verses, style, Some(seed)) {
            prop_assert!(check(&q, &q.correct_answer));
            let padded = format!("  {}  ", q.correct_answer.to_uppercase());
            prop_assert!(check(&q, &padded));
        }
    }

    #[test]
    fn fixed_seed_is_deterministic(verses in verse_set(), style in style(), seed in any::<u64>()) {
        prop_assert_eq!(
            generate_seeded(&verses, style, Some(seed)),
            generate_seeded(&verses, style, Some(seed))
        );
    }

    #[test]
    fn word_order_rejects_swapped_distinct_words(
        words in prop::collection::hash_set("[a-z]{2,6}", 3..8),
        i in 0usize..8,
        j in 0usize..8,
    ) {
        let words: Vec<String> = words.into_iter().collect();
        let (i, j) = (i % words.len(), j % words.len());
        prop_assume!(i != j);
        let question = Question::new(
            QuestionKind::WordOrder,
            "order".to_string(),
            words.join(" "),
            words.clone(),
            1,
        );
        let mut swapped = words.clone();
        swapped.swap(i, j);
        prop_assert!(!check(&question, &swapped.join(" ")));
    }
}
