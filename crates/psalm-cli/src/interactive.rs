use std::io::{BufRead, Write};

use anyhow::Result;
use psalm_core::{Question, QuestionKind, QuizSession, SessionSummary};

/// Run a session over line-oriented input. Stops early at end of input.
pub fn run_quiz<R: BufRead, W: Write>(
    session: &mut QuizSession,
    mut input: R,
    out: &mut W,
) -> Result<SessionSummary> {
    while let Some(question) = session.current() {
        let (position, total) = session.progress();
        write_question(out, question, position, total)?;
        let correct_answer = question.correct_answer.clone();
        let explanation = question.explanation.clone();
        let kind = question.kind;
        let options = question.options.clone();

        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            tracing::debug!("input closed at question {position}/{total}");
            break;
        }

        if line.trim().eq_ignore_ascii_case("skip") {
            session.skip();
            writeln!(out, "Skipped. The answer was: {correct_answer}\n")?;
            continue;
        }

        let answer = resolve_answer(kind, &options, &line);
        match session.submit(&answer) {
            Some(true) => writeln!(out, "Correct!")?,
            Some(false) => writeln!(out, "Not quite. The answer was: {correct_answer}")?,
            None => break,
        }
        if let Some(explanation) = explanation {
            writeln!(out, "{explanation}")?;
        }
        writeln!(out)?;
    }

    let summary = session.summary();
    writeln!(
        out,
        "score: {}/{} ({:.0}%), answered {}",
        summary.correct,
        summary.total,
        summary.percentage(),
        summary.answered
    )?;
    Ok(summary)
}

fn write_question<W: Write>(
    out: &mut W,
    question: &Question,
    position: usize,
    total: usize,
) -> Result<()> {
    writeln!(out, "[{position}/{total}] ({}) {}", question.kind, question.prompt)?;
    for (i, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}. {option}", i + 1)?;
    }
    if question.kind == QuestionKind::WordOrder {
        writeln!(out, "Type the verse, or the word numbers in order.")?;
    } else {
        writeln!(out, "Type the answer or its number. 'skip' to pass.")?;
    }
    Ok(())
}

/// Map numeric shortcuts onto options: a single number picks an option; for
/// word-order, a full list of numbers picks tokens in that order. Anything
/// else is taken literally.
pub fn resolve_answer(kind: QuestionKind, options: &[String], line: &str) -> String {
    let trimmed = line.trim();
    let pick = |s: &str| {
        s.parse::<usize>()
            .ok()
            .filter(|n| (1..=options.len()).contains(n))
            .map(|n| options[n - 1].clone())
    };

    match kind {
        QuestionKind::WordOrder => {
            let picked: Option<Vec<String>> = trimmed.split_whitespace().map(pick).collect();
            match picked {
                Some(words) if words.len() == options.len() => words.join(" "),
                _ => trimmed.to_string(),
            }
        }
        _ => pick(trimmed).unwrap_or_else(|| trimmed.to_string()),
    }
}
