//! Psalm memorization quiz engine.
//!
//! Turns an ordered set of verses into a shuffled deck of fill-blank,
//! multiple-choice, word-order and verse-completion questions, and checks
//! submitted answers against them. Hand-authored material (phrase meanings,
//! theme rules, alternate endings) lives in a [`ContentTable`] loaded from
//! TOML or JSON.
//!
//! Zero I/O: randomness is injected and nothing is persisted.

pub mod check;
pub mod constants;
pub mod content;
pub mod error;
pub mod generator;
pub mod options;
pub mod question;
pub mod session;
pub mod tokenizer;
pub mod verse;

pub use check::check;
pub use constants::OPTION_COUNT;
pub use content::{CompletionRule, ContentTable, MeaningEntry, ThemeRule};
pub use error::{ContentError, Result};
pub use generator::{QuizGenerator, generate, generate_seeded};
pub use question::{Question, QuestionKind, QuestionStyle};
pub use session::{QuizSession, SessionSummary};
pub use verse::{Verse, verses_from_pairs};
