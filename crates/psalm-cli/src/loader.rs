use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use psalm_core::{ContentTable, Verse};
use serde::Deserialize;

/// On-disk verse file: one psalm in one translation.
#[derive(Debug, Deserialize)]
pub struct VerseFile {
    pub psalm: u32,
    pub translation: String,
    pub verses: Vec<VerseEntry>,
}

#[derive(Debug, Deserialize)]
pub struct VerseEntry {
    pub number: u32,
    pub text: String,
}

impl VerseFile {
    pub fn parse(content: &str) -> Result<Self> {
        let file: VerseFile = toml::from_str(content).context("failed to parse verse file")?;
        let mut seen = HashSet::new();
        for entry in &file.verses {
            if !seen.insert(entry.number) {
                bail!(
                    "duplicate verse {} in psalm {} ({})",
                    entry.number,
                    file.psalm,
                    file.translation
                );
            }
        }
        Ok(file)
    }

    /// Verses within `from..=to`, in file order.
    pub fn into_verses(self, from: Option<u32>, to: Option<u32>) -> Vec<Verse> {
        let from = from.unwrap_or(u32::MIN);
        let to = to.unwrap_or(u32::MAX);
        self.verses
            .into_iter()
            .filter(|v| (from..=to).contains(&v.number))
            .map(|v| Verse::new(self.psalm, &self.translation, v.number, &v.text))
            .collect()
    }
}

pub fn load_verses(path: &Path, from: Option<u32>, to: Option<u32>) -> Result<Vec<Verse>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file = VerseFile::parse(&content)
        .with_context(|| format!("invalid verse file {}", path.display()))?;
    let verses = file.into_verses(from, to);
    tracing::debug!("loaded {} verse(s) from {}", verses.len(), path.display());
    Ok(verses)
}

/// Resolve the content table: the built-in table, with an external TOML or
/// JSON table merged on top (or used alone with `no_builtin`).
pub fn load_content(path: Option<&Path>, no_builtin: bool) -> Result<ContentTable> {
    let mut table = if no_builtin {
        ContentTable::default()
    } else {
        ContentTable::builtin().clone()
    };

    if let Some(path) = path {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let external = if is_json {
            ContentTable::from_json_str(&content)
        } else {
            ContentTable::from_toml_str(&content)
        }
        .with_context(|| format!("invalid content table {}", path.display()))?;
        tracing::info!(
            "loaded content table {} ({} meanings, {} themes, {} completions)",
            path.display(),
            external.meanings.len(),
            external.themes.len(),
            external.completions.len()
        );
        table.merge(external);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = r#"
psalm = 23
translation = "KJV"

[[verses]]
number = 1
text = "The LORD is my shepherd; I shall not want."

[[verses]]
number = 2
text = "He maketh me to lie down in green pastures: he leadeth me beside the still waters."

[[verses]]
number = 3
text = "He restoreth my soul: he leadeth me in the paths of righteousness for his name's sake."
"#;

    #[test]
    fn test_parse_and_filter_range() {
        let file = VerseFile::parse(FILE).unwrap();
        let verses = file.into_verses(Some(2), None);
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].number, 2);
        assert_eq!(verses[0].psalm, 23);
        assert_eq!(verses[0].translation, "KJV");
    }

    #[test]
    fn test_duplicate_verse_rejected() {
        let doubled = format!("{FILE}\n[[verses]]\nnumber = 1\ntext = \"again\"\n");
        let err = VerseFile::parse(&doubled).unwrap_err();
        assert!(err.to_string().contains("duplicate verse 1"));
    }

    #[test]
    fn test_content_defaults_to_builtin() {
        let table = load_content(None, false).unwrap();
        assert_eq!(&table, ContentTable::builtin());
        assert_eq!(load_content(None, true).unwrap(), ContentTable::default());
    }
}
