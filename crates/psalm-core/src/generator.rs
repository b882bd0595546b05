//! Quiz deck generation.
//!
//! Each style synthesizes questions from verse text with simple word
//! heuristics, then the deck is shuffled. All randomness comes from the
//! caller's `Rng`, so a seeded generator reproduces the same deck.

use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::constants::{
    BLANK, COMPLETION_MIN_WORDS, FILL_BLANK_MIN_WORDS, FILLER_WORDS, FUNCTION_WORDS,
    GENERIC_COMPLETIONS, MAX_BLANKS_PER_VERSE, MIXED_COMPLETION, MIXED_FILL_BLANK,
    MIXED_MIN_QUESTIONS, MIXED_MULTIPLE_CHOICE, MIXED_WORD_ORDER, PINNED_VARIANT_MIN_WORDS,
    SHUFFLE_ATTEMPTS, SNIPPET_MAX_WORDS, SNIPPET_MIN_WORDS, SPLIT_FRACTIONS,
    VERSE_NUMBER_SPREAD, WORD_ORDER_MIN_WORDS,
};
use crate::content::ContentTable;
use crate::options::OptionSet;
use crate::question::{Question, QuestionKind, QuestionStyle};
use crate::tokenizer::{clean_word, split_punctuation};
use crate::verse::Verse;

/// Snippet placements tried before giving up on an ambiguous snippet.
const SNIPPET_ATTEMPTS: usize = 3;

/// Builds question decks from verses, drawing hand-authored material from a
/// [`ContentTable`].
#[derive(Clone, Copy)]
pub struct QuizGenerator<'a> {
    content: &'a ContentTable,
}

impl Default for QuizGenerator<'static> {
    fn default() -> Self {
        Self::new(ContentTable::builtin())
    }
}

impl<'a> QuizGenerator<'a> {
    pub fn new(content: &'a ContentTable) -> Self {
        Self { content }
    }

    /// Generate a shuffled deck. Never empty: an empty verse set, or one that
    /// yields nothing for `style`, produces the single fallback question.
    pub fn generate(
        &self,
        verses: &[Verse],
        style: QuestionStyle,
        rng: &mut impl Rng,
    ) -> Vec<Question> {
        if verses.is_empty() {
            tracing::debug!("no verses supplied, using fallback question");
            return vec![Question::fallback()];
        }

        let mut deck = match style {
            QuestionStyle::FillBlank => self.fill_blank(verses, rng),
            QuestionStyle::MultipleChoice => self.multiple_choice(verses, rng),
            QuestionStyle::WordOrder => self.word_order(verses, rng),
            QuestionStyle::VerseCompletion => self.verse_completion(verses, rng),
            QuestionStyle::Mixed => self.mixed(verses, rng),
        };

        if deck.is_empty() {
            tracing::debug!(
                "{style} produced no questions for {} verse(s), using fallback question",
                verses.len()
            );
            return vec![Question::fallback()];
        }

        deck.shuffle(rng);
        tracing::info!(
            "generated {} {style} question(s) from {} verse(s) of psalm {}",
            deck.len(),
            verses.len(),
            verses[0].psalm
        );
        deck
    }

    // --- Fill-blank ---

    /// One question per blank; 1–3 blanks per verse with more than 3 words.
    pub fn fill_blank(&self, verses: &[Verse], rng: &mut impl Rng) -> Vec<Question> {
        let mut questions = Vec::new();

        for (idx, verse) in verses.iter().enumerate() {
            let tokens = verse.words();
            if tokens.len() <= FILL_BLANK_MIN_WORDS {
                continue;
            }
            let candidates: Vec<usize> = (0..tokens.len())
                .filter(|&i| !clean_word(&tokens[i]).is_empty())
                .collect();
            if candidates.is_empty() {
                continue;
            }

            let blanks = rng
                .random_range(1..=MAX_BLANKS_PER_VERSE)
                .min(candidates.len());
            let positions: Vec<usize> = candidates.choose_multiple(rng, blanks).copied().collect();

            let other_words: Vec<String> = verses
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != idx)
                .flat_map(|(_, v)| v.words())
                .map(|w| clean_word(&w))
                .filter(|w| !w.is_empty())
                .collect();

            for pos in positions {
                let answer = clean_word(&tokens[pos]);
                let mut options = OptionSet::new(&answer);

                let mut pool: Vec<&str> = other_words.iter().map(String::as_str).collect();
                pool.shuffle(rng);
                options.offer_all(pool);

                let mut function_words = FUNCTION_WORDS.to_vec();
                function_words.shuffle(rng);
                options.offer_all(function_words);
                // Unreachable with the current function-word pool; kept so a
                // smaller pool still yields four options.
                options.offer_all(FILLER_WORDS.iter().copied());

                let Some(options) = options.into_complete(rng) else {
                    tracing::debug!("fill-blank for {} ran out of distractors", verse.reference());
                    continue;
                };

                questions.push(Question::new(
                    QuestionKind::FillBlank,
                    format!(
                        "Fill in the blank ({}): {}",
                        verse.reference(),
                        blank_out(&tokens, pos)
                    ),
                    answer,
                    options,
                    verse.number,
                ));
            }
        }

        questions
    }

    // --- Multiple-choice ---

    /// Meaning, snippet-location and psalm-level theme questions.
    pub fn multiple_choice(&self, verses: &[Verse], rng: &mut impl Rng) -> Vec<Question> {
        let mut questions = Vec::new();
        let Some(first) = verses.first() else {
            return questions;
        };

        if !self.content.has_meanings_for_psalm(first.psalm) {
            tracing::debug!(
                "no meaning content for psalm {}, meaning questions skipped",
                first.psalm
            );
        }

        for verse in verses {
            for entry in self.content.meanings_for(verse) {
                let mut options = OptionSet::new(&entry.paraphrase);
                options.offer_all(entry.distractors.iter().map(String::as_str));
                match options.into_complete(rng) {
                    Some(options) => questions.push(
                        Question::new(
                            QuestionKind::MultipleChoice,
                            format!(
                                "In {}, what does \"{}\" mean?",
                                verse.reference(),
                                entry.phrase
                            ),
                            entry.paraphrase.clone(),
                            options,
                            verse.number,
                        )
                        .with_explanation(entry.explanation.clone()),
                    ),
                    None => tracing::debug!(
                        "meaning question for {} dropped: too few distinct options",
                        verse.reference()
                    ),
                }
            }

            if let Some(question) = self.snippet_question(verse, verses, rng) {
                questions.push(question);
            }
        }

        questions.extend(self.theme_questions(verses, rng));
        questions
    }

    /// "Which verse contains ...": a window of consecutive words, answered by
    /// verse number. Snippets that also occur in another verse are rejected.
    fn snippet_question(
        &self,
        verse: &Verse,
        verses: &[Verse],
        rng: &mut impl Rng,
    ) -> Option<Question> {
        let tokens = verse.words();
        if tokens.len() < SNIPPET_MIN_WORDS {
            return None;
        }
        let width = tokens.len().min(SNIPPET_MAX_WORDS);

        let snippet = (0..SNIPPET_ATTEMPTS)
            .map(|_| {
                let start = rng.random_range(0..=tokens.len() - width);
                tokens[start..start + width].join(" ")
            })
            .find(|snippet| {
                let needle = snippet.to_lowercase();
                !verses
                    .iter()
                    .filter(|v| v.number != verse.number)
                    .any(|v| v.text.to_lowercase().contains(&needle))
            });
        let Some(snippet) = snippet else {
            tracing::debug!("snippet for {} is ambiguous, skipped", verse.reference());
            return None;
        };

        let answer = format!("Verse {}", verse.number);
        let mut candidates = nearby_verse_numbers(verse.number);
        candidates.shuffle(rng);

        let mut options = OptionSet::new(&answer);
        for n in candidates {
            options.offer(&format!("Verse {n}"));
        }
        let options = options.into_complete(rng)?;

        Some(Question::new(
            QuestionKind::MultipleChoice,
            format!(
                "Which verse of Psalm {} contains \"{}\"?",
                verse.psalm, snippet
            ),
            answer,
            options,
            verse.number,
        ))
    }

    /// Psalm-level questions from theme rules matched over the whole text.
    fn theme_questions(&self, verses: &[Verse], rng: &mut impl Rng) -> Vec<Question> {
        let Some(first) = verses.first() else {
            return Vec::new();
        };
        let text = verses
            .iter()
            .map(|v| v.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let mut questions = Vec::new();
        for rule in self.content.matching_themes(&text) {
            let mut options = OptionSet::new(&rule.answer);
            options.offer_all(rule.distractors.iter().map(String::as_str));
            match options.into_complete(rng) {
                Some(options) => questions.push(
                    Question::new(
                        QuestionKind::MultipleChoice,
                        rule.prompt.clone(),
                        rule.answer.clone(),
                        options,
                        first.number,
                    )
                    .with_explanation(rule.explanation.clone()),
                ),
                None => tracing::debug!(
                    "theme question '{}' dropped: too few distinct options",
                    rule.prompt
                ),
            }
        }
        questions
    }

    // --- Word-order ---

    /// Up to three scrambles per verse with more than 4 words: shuffled,
    /// ends pinned, reversed.
    pub fn word_order(&self, verses: &[Verse], rng: &mut impl Rng) -> Vec<Question> {
        let mut questions = Vec::new();

        for verse in verses {
            let tokens = verse.words();
            if tokens.len() <= WORD_ORDER_MIN_WORDS {
                continue;
            }
            let correct = tokens.join(" ");
            let reference = verse.reference();

            let shuffled = shuffle_away(&tokens, rng);
            questions.push(word_order_question(
                verse,
                format!("Put the words of {reference} in order."),
                &correct,
                shuffled,
            ));

            if tokens.len() > PINNED_VARIANT_MIN_WORDS {
                let mut pinned = tokens.clone();
                let last = pinned.len() - 1;
                pinned[1..last].shuffle(rng);
                questions.push(word_order_question(
                    verse,
                    format!(
                        "Put the words of {reference} in order. The first and last words are already in place."
                    ),
                    &correct,
                    pinned,
                ));
            }

            let reversed: Vec<String> = tokens.iter().rev().cloned().collect();
            questions.push(word_order_question(
                verse,
                format!("The words of {reference} are reversed. Put them back in order."),
                &correct,
                reversed,
            ));
        }

        questions
    }

    // --- Verse-completion ---

    /// Split verses with more than 5 words at 1–3 of {1/2, 1/3, 2/3}; the
    /// hidden suffix is the answer.
    pub fn verse_completion(&self, verses: &[Verse], rng: &mut impl Rng) -> Vec<Question> {
        let mut questions = Vec::new();

        for verse in verses {
            let tokens = verse.words();
            let len = tokens.len();
            if len <= COMPLETION_MIN_WORDS {
                continue;
            }

            let count = rng.random_range(1..=SPLIT_FRACTIONS.len());
            let mut seen = HashSet::new();
            let splits: Vec<usize> = SPLIT_FRACTIONS
                .choose_multiple(rng, count)
                .map(|&(num, den)| (len * num / den).clamp(1, len - 1))
                .filter(|split| seen.insert(*split))
                .collect();

            let alternates = self.content.completion_alternates(&verse.text);

            for split in splits {
                let prefix = tokens[..split].join(" ");
                let answer = tokens[split..].join(" ");

                let mut options = OptionSet::new(&answer);
                let mut pool = alternates.clone();
                pool.shuffle(rng);
                options.offer_all(pool);
                let mut generic = GENERIC_COMPLETIONS.to_vec();
                generic.shuffle(rng);
                options.offer_all(generic);

                match options.into_complete(rng) {
                    Some(options) => questions.push(Question::new(
                        QuestionKind::VerseCompletion,
                        format!("Complete {}: \"{} ...\"", verse.reference(), prefix),
                        answer,
                        options,
                        verse.number,
                    )),
                    None => tracing::debug!(
                        "completion for {} dropped: too few distinct options",
                        verse.reference()
                    ),
                }
            }
        }

        questions
    }

    // --- Mixed ---

    /// Bounded prefixes of every shuffled pool, topped up to
    /// `MIXED_MIN_QUESTIONS` from the remainders when short.
    pub fn mixed(&self, verses: &[Verse], rng: &mut impl Rng) -> Vec<Question> {
        let pools = [
            (self.fill_blank(verses, rng), MIXED_FILL_BLANK),
            (self.multiple_choice(verses, rng), MIXED_MULTIPLE_CHOICE),
            (self.word_order(verses, rng), MIXED_WORD_ORDER),
            (self.verse_completion(verses, rng), MIXED_COMPLETION),
        ];

        let mut deck = Vec::new();
        let mut remainders = Vec::new();
        for (mut pool, cap) in pools {
            pool.shuffle(rng);
            let rest = pool.split_off(cap.min(pool.len()));
            deck.extend(pool);
            remainders.push(rest);
        }

        for rest in remainders {
            if deck.len() >= MIXED_MIN_QUESTIONS {
                break;
            }
            let needed = MIXED_MIN_QUESTIONS - deck.len();
            deck.extend(rest.into_iter().take(needed));
        }

        deck
    }
}

/// Generate a deck with the bundled content table.
pub fn generate(verses: &[Verse], style: QuestionStyle, rng: &mut impl Rng) -> Vec<Question> {
    QuizGenerator::default().generate(verses, style, rng)
}

/// Generate with a fixed seed, or OS entropy when `seed` is `None`.
pub fn generate_seeded(
    verses: &[Verse],
    style: QuestionStyle,
    seed: Option<u64>,
) -> Vec<Question> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    generate(verses, style, &mut rng)
}

/// Verse numbers within `VERSE_NUMBER_SPREAD` of `number`, excluding it.
/// The window stays inside `1..=u32::MAX`, so there are always at least
/// `VERSE_NUMBER_SPREAD` of them.
fn nearby_verse_numbers(number: u32) -> Vec<u32> {
    let low = number.saturating_sub(VERSE_NUMBER_SPREAD).max(1);
    let high = number.saturating_add(VERSE_NUMBER_SPREAD);
    (low..=high).filter(|&n| n != number).collect()
}

/// Verse text with token `pos` replaced by a blank, punctuation kept.
fn blank_out(tokens: &[String], pos: usize) -> String {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            if i == pos {
                let (lead, _, trail) = split_punctuation(token);
                format!("{lead}{BLANK}{trail}")
            } else {
                token.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shuffle, retrying a few times so the result differs from the original
/// order when the tokens allow it.
fn shuffle_away(tokens: &[String], rng: &mut impl Rng) -> Vec<String> {
    let mut shuffled = tokens.to_vec();
    for _ in 0..SHUFFLE_ATTEMPTS {
        shuffled.shuffle(rng);
        if shuffled != tokens {
            break;
        }
    }
    shuffled
}

fn word_order_question(
    verse: &Verse,
    prompt: String,
    correct: &str,
    tokens: Vec<String>,
) -> Question {
    Question::new(
        QuestionKind::WordOrder,
        prompt,
        correct.to_string(),
        tokens,
        verse.number,
    )
}
