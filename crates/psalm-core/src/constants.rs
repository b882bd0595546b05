/// Options shown for every fill-blank, multiple-choice and completion question.
pub const OPTION_COUNT: usize = 4;

/// Wrong options needed alongside the correct answer.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Placeholder substituted for a blanked word.
pub const BLANK: &str = "_____";

/// Fill-blank: verses must have more than this many words.
pub const FILL_BLANK_MIN_WORDS: usize = 3;

/// Fill-blank: maximum blanks (and questions) per verse.
pub const MAX_BLANKS_PER_VERSE: usize = 3;

/// Word-order: verses must have more than this many words.
pub const WORD_ORDER_MIN_WORDS: usize = 4;

/// Word-order: the pinned-ends variant needs more than this many words.
pub const PINNED_VARIANT_MIN_WORDS: usize = 6;

/// Word-order: reshuffle attempts before accepting an order equal to the original.
pub const SHUFFLE_ATTEMPTS: usize = 5;

/// Verse-completion: verses must have more than this many words.
pub const COMPLETION_MIN_WORDS: usize = 5;

/// Verse-completion split points as (numerator, denominator).
pub const SPLIT_FRACTIONS: [(usize, usize); 3] = [(1, 2), (1, 3), (2, 3)];

/// Snippet questions: minimum verse length and widest snippet.
pub const SNIPPET_MIN_WORDS: usize = 3;
pub const SNIPPET_MAX_WORDS: usize = 6;

/// Snippet questions: distractor verse numbers come from `n - SPREAD ..= n + SPREAD`.
pub const VERSE_NUMBER_SPREAD: u32 = 4;

/// Mixed decks: per-style prefix sizes, in deck order.
pub const MIXED_FILL_BLANK: usize = 5;
pub const MIXED_MULTIPLE_CHOICE: usize = 5;
pub const MIXED_WORD_ORDER: usize = 4;
pub const MIXED_COMPLETION: usize = 4;

/// Mixed decks are topped up from pool remainders until they reach this size.
pub const MIXED_MIN_QUESTIONS: usize = 8;

/// Second-tier fill-blank distractors, after words from other verses.
pub const FUNCTION_WORDS: &[&str] = &[
    "the", "and", "of", "in", "to", "his", "shall", "not", "is", "for", "but", "that", "he",
    "my", "thy",
];

/// Last-resort fill-blank distractors. Four entries always cover three slots
/// even when one collides with the answer.
pub const FILLER_WORDS: &[&str] = &["Lord", "heart", "way", "soul"];

/// Wrong endings used when the content table has too few alternates.
pub const GENERIC_COMPLETIONS: &[&str] = &[
    "and his mercy endureth for ever",
    "for the LORD is good",
    "in the land of the living",
    "all the days of my life",
    "and the earth shall be glad",
    "unto the end of the world",
    "as the morning light upon the hills",
];
