use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static EDGE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\w']+|[^\w']+$").unwrap());
static APOSTROPHE_TRIM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^'+|'+$").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s']").unwrap());

/// Split verse text into display tokens on whitespace.
/// Punctuation stays attached ("ungodly," is one token).
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Strip leading/trailing punctuation from a token, keeping case.
/// `"LORD;"` → `"LORD"`, `"'tis"` → `"'tis"`.
pub fn clean_word(token: &str) -> String {
    let stripped = EDGE_PUNCTUATION.replace_all(token, "");
    stripped.to_string()
}

/// Split a token into (leading punctuation, core word, trailing punctuation).
pub fn split_punctuation(token: &str) -> (&str, &str, &str) {
    let start = token
        .char_indices()
        .find(|(_, c)| c.is_alphanumeric() || *c == '\'')
        .map(|(i, _)| i);
    let Some(start) = start else {
        return ("", token, "");
    };
    let end = token
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric() || *c == '\'')
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(token.len());
    (&token[..start], &token[start..end], &token[end..])
}

/// Lowercase word set for keyword matching. Punctuation is ignored.
pub fn keywords(text: &str) -> Vec<String> {
    let cleaned = NON_WORD.replace_all(text, " ");
    cleaned
        .to_lowercase()
        .split_whitespace()
        .map(|t| APOSTROPHE_TRIM.replace_all(t, "").to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Trimmed, lowercased form used for free-text answer comparison.
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Lowercased whitespace tokens used for word-order comparison.
pub fn normalized_tokens(answer: &str) -> Vec<String> {
    answer.split_whitespace().map(str::to_lowercase).collect()
}

/// Count occurrences of each token.
pub fn multiset(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_keep_punctuation() {
        let tokens = words("the LORD; and in  his law");
        assert_eq!(tokens, vec!["the", "LORD;", "and", "in", "his", "law"]);
    }

    #[test]
    fn test_words_empty() {
        assert!(words("   \t\n ").is_empty());
    }

    #[test]
    fn test_clean_word() {
        assert_eq!(clean_word("ungodly,"), "ungodly");
        assert_eq!(clean_word("(Selah)."), "Selah");
        assert_eq!(clean_word("LORD"), "LORD");
        assert_eq!(clean_word("..."), "");
    }

    #[test]
    fn test_split_punctuation() {
        assert_eq!(split_punctuation("LORD;"), ("", "LORD", ";"));
        assert_eq!(split_punctuation("\"Blessed"), ("\"", "Blessed", ""));
        assert_eq!(split_punctuation("man"), ("", "man", ""));
        assert_eq!(split_punctuation("--"), ("", "--", ""));
    }

    #[test]
    fn test_keywords_lowercase_no_punctuation() {
        let tokens = keywords("Blessed is the man, that walketh not!");
        assert_eq!(
            tokens,
            vec!["blessed", "is", "the", "man", "that", "walketh", "not"]
        );
    }

    #[test]
    fn test_normalize_answer() {
        assert_eq!(normalize_answer("  Selah \n"), "selah");
    }

    #[test]
    fn test_multiset_counts_duplicates() {
        let tokens = normalized_tokens("The lord the Shepherd");
        let counts = multiset(&tokens);
        assert_eq!(counts["the"], 2);
        assert_eq!(counts["lord"], 1);
        assert_eq!(counts["shepherd"], 1);
    }
}
