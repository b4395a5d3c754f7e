//! Document tokenization and tag counting.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::stopwords::StopWordSet;

/// Frequency table keyed by lowercase alphabetic token.
///
/// Backed by an ordered map, so iteration is always ascending by token
/// rather than sorted after the fact.
pub type TagFrequency = BTreeMap<String, u64>;

/// Reduce one whitespace-delimited word to its tag form: strip every
/// character that is not an ASCII letter, lowercase the remainder.
#[must_use]
pub fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Count tag occurrences in already-loaded text.
///
/// Tokens that strip down to nothing (all digits or punctuation) are
/// dropped rather than counted under an empty key.
#[must_use]
pub fn count_tags(text: &str, stop_words: &StopWordSet) -> TagFrequency {
    let mut freq = TagFrequency::new();

    for raw in text.split_whitespace() {
        let token = normalize_token(raw);
        if token.is_empty() || stop_words.contains(&token) {
            continue;
        }
        *freq.entry(token).or_insert(0) += 1;
    }

    freq
}

/// Read a document and tally every token that survives stop-word filtering.
pub fn extract_tags(path: &Path, stop_words: &StopWordSet) -> Result<TagFrequency> {
    let text = fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let freq = count_tags(&text, stop_words);
    tracing::debug!(tags = freq.len(), path = %path.display(), "extracted tags");
    Ok(freq)
}
