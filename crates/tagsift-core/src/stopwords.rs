//! Stop-word list loading and membership.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// A set of words excluded from tagging. Entries are held lowercase, so
/// membership checks expect already-normalized tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from an in-memory word list.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for word in words {
            set.insert(word.as_ref());
        }
        set
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in ascending order, for display.
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Read a stop-word list, one word per line, any case.
///
/// Lines are lowercased on the way in; blank lines are skipped and
/// duplicates collapse.
pub fn load_stop_words(path: &Path) -> Result<StopWordSet> {
    let file = File::open(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut set = StopWordSet::new();
    for line in reader.lines() {
        let line = line.map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        set.insert(word);
    }

    tracing::debug!(count = set.len(), path = %path.display(), "loaded stop words");
    Ok(set)
}
